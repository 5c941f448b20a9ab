pub mod filters;
pub mod response;

pub use filters::{FilterField, FilterOption, FilterSet};
pub use response::{DisplayName, JobPosting, RecommendationResponse};
