// src/search/coordinator.rs
use anyhow::Result;
use tracing::{info, warn};

use crate::core::RecommendationSource;
use crate::error::SearchError;
use crate::types::{FilterSet, JobPosting, RecommendationResponse};

/// Lifecycle of the most recent search attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(Vec<JobPosting>),
    Error(SearchError),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn results(&self) -> &[JobPosting] {
        match self {
            RequestStatus::Success(results) => results,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&SearchError> {
        match self {
            RequestStatus::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Identifies one search attempt. Only the newest ticket may settle the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SearchCoordinator {
    status: RequestStatus,
    latest: u64,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// The trigger control should be disabled while this is true
    pub fn is_busy(&self) -> bool {
        self.status.is_loading()
    }

    /// Enter Loading, dropping previous results or errors, and issue a fresh ticket
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.status = RequestStatus::Loading;
        RequestTicket(self.latest)
    }

    /// Settle a request. Returns `false` and leaves the status alone when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<RecommendationResponse>,
    ) -> bool {
        if ticket.0 != self.latest {
            warn!(
                "Discarding stale response for request #{} (latest is #{})",
                ticket.0, self.latest
            );
            return false;
        }

        self.status = match outcome {
            Ok(response) if response.success => {
                info!(
                    "Request #{} returned {} recommendations",
                    ticket.0,
                    response.results.len()
                );
                RequestStatus::Success(response.results)
            }
            Ok(response) => {
                warn!(
                    "Request #{} reported no success: {}",
                    ticket.0,
                    response.error.as_deref().unwrap_or("no reason given")
                );
                RequestStatus::Error(SearchError::NoRecommendations)
            }
            Err(e) => {
                warn!("Request #{} failed: {:#}", ticket.0, e);
                RequestStatus::Error(SearchError::transport(&e))
            }
        };
        true
    }

    /// Run one search to completion against `source`
    pub async fn search<S>(&mut self, source: &S, filters: &FilterSet) -> &RequestStatus
    where
        S: RecommendationSource,
    {
        let ticket = self.begin();
        let outcome = source.fetch_recommendations(filters).await;
        self.complete(ticket, outcome);
        &self.status
    }
}
