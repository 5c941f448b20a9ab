use thiserror::Error;

pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommended internships found.";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to fetch recommendations. Please check your backend.";

/// User-visible search failures.
/// The transport detail is kept for logs only; `Display` always yields the fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{}", NO_RECOMMENDATIONS_MESSAGE)]
    NoRecommendations,

    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport(String),
}

impl SearchError {
    pub fn transport(err: &anyhow::Error) -> Self {
        SearchError::Transport(format!("{:#}", err))
    }

    pub fn message(&self) -> &'static str {
        match self {
            SearchError::NoRecommendations => NO_RECOMMENDATIONS_MESSAGE,
            SearchError::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
        }
    }
}
