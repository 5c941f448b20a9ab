// src/render.rs
//! Projection of the coordinator state into something a user can look at

use std::fmt;

use crate::search::RequestStatus;
use crate::types::JobPosting;

pub const SEARCH_LABEL: &str = "Get Recommended Internships";
pub const BUSY_LABEL: &str = "🔍 Finding Best Matches...";
pub const RESULTS_HEADING: &str = "Top Recommendations for You";
pub const EMPTY_HINT: &str = "No matching internships found. Try changing filters.";

pub const UNKNOWN_COMPANY: &str = "Unknown";
pub const UNKNOWN_LOCATION: &str = "Location not available";
pub const NO_DESCRIPTION: &str = "No description available.";

pub const SNIPPET_CHARS: usize = 120;

/// Display form of one recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub snippet: String,
    pub detail_url: String,
}

impl From<&JobPosting> for JobCard {
    fn from(job: &JobPosting) -> Self {
        Self {
            title: job.title.clone().unwrap_or_default(),
            company: non_empty(job.company_name()).unwrap_or(UNKNOWN_COMPANY).to_string(),
            location: non_empty(job.location_name())
                .unwrap_or(UNKNOWN_LOCATION)
                .to_string(),
            snippet: non_empty(job.description.as_deref())
                .map(truncate_description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            detail_url: job.redirect_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Busy,
    Error(String),
    Results {
        heading: &'static str,
        cards: Vec<JobCard>,
    },
    Empty(&'static str),
}

impl ResultsView {
    pub fn from_status(status: &RequestStatus) -> Self {
        match status {
            RequestStatus::Loading => ResultsView::Busy,
            RequestStatus::Error(err) => ResultsView::Error(err.to_string()),
            RequestStatus::Success(results) if !results.is_empty() => ResultsView::Results {
                heading: RESULTS_HEADING,
                cards: results.iter().map(JobCard::from).collect(),
            },
            RequestStatus::Success(_) | RequestStatus::Idle => ResultsView::Empty(EMPTY_HINT),
        }
    }

    /// Label for the search trigger
    pub fn trigger_label(&self) -> &'static str {
        match self {
            ResultsView::Busy => BUSY_LABEL,
            _ => SEARCH_LABEL,
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            ResultsView::Results { cards, .. } => cards.len(),
            _ => 0,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultsView::Error(_))
    }
}

impl fmt::Display for JobCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  {}", self.company)?;
        writeln!(f, "  📍 {}", self.location)?;
        writeln!(f, "  {}", self.snippet)?;
        write!(f, "  View Details → {}", self.detail_url)
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsView::Busy => write!(f, "{}", BUSY_LABEL),
            ResultsView::Error(message) => write!(f, "{}", message),
            ResultsView::Empty(hint) => write!(f, "{}", hint),
            ResultsView::Results { heading, cards } => {
                writeln!(f, "{}", heading)?;
                writeln!(f, "{}", "=".repeat(heading.chars().count()))?;
                for (idx, card) in cards.iter().enumerate() {
                    writeln!(f)?;
                    write!(f, "{}. {}", idx + 1, card)?;
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

/// First `SNIPPET_CHARS` characters plus an ellipsis; shorter text is left alone
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
