// src/core/service_client.rs
//! HTTP client for the recommendation backend

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::core::config_manager::ServiceConfig;
use crate::types::{FilterSet, RecommendationResponse};

pub const RECOMMENDATIONS_ENDPOINT: &str = "/api/recommendations";
pub const COUNTRY_CODE: &str = "in";
pub const MAX_RESULTS: u32 = 300;

/// Anything that can answer a recommendation query.
/// `Err` means the backend could not be reached or answered with garbage.
#[allow(async_fn_in_trait)]
pub trait RecommendationSource {
    async fn fetch_recommendations(&self, filters: &FilterSet) -> Result<RecommendationResponse>;
}

pub struct RecommendationClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, RECOMMENDATIONS_ENDPOINT)
    }
}

impl RecommendationSource for RecommendationClient {
    async fn fetch_recommendations(&self, filters: &FilterSet) -> Result<RecommendationResponse> {
        let url = self.endpoint_url();
        let params = build_query(filters);

        info!("Calling recommendation service: {}", url);
        debug!("Query parameters: {:?}", params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return response
                .json::<RecommendationResponse>()
                .await
                .context("Failed to parse recommendation response");
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        // An error status still counts as an answer when it carries the success flag
        match parse_flagged(&body) {
            Some(parsed) => Ok(parsed),
            None => {
                error!("Recommendation service error response: {}", body);
                anyhow::bail!("Service returned error status {}: {}", status, body)
            }
        }
    }
}

/// Outgoing query parameters, in wire order. Every parameter is sent even when empty.
pub fn build_query(filters: &FilterSet) -> Vec<(&'static str, String)> {
    vec![
        ("q", filters.query.clone()),
        ("country", COUNTRY_CODE.to_string()),
        ("max_results", MAX_RESULTS.to_string()),
        ("location", filters.location.clone()),
        ("job_type", filters.mode.clone()),
        ("education", filters.education.clone()),
        ("skills", filters.skills.clone()),
        ("stipend", filters.stipend.clone()),
        ("mode", filters.mode.clone()),
        ("duration", filters.duration.clone()),
        ("sector", filters.sector.clone()),
    ]
}

fn parse_flagged(body: &str) -> Option<RecommendationResponse> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if !value.as_object()?.contains_key("success") {
        return None;
    }
    serde_json::from_value(value).ok()
}
