//! Internship and job recommendation search client.
//!
//! Filters are held in a [`FilterSet`], sent to the recommendation backend by
//! [`SearchCoordinator`], and projected for display by [`ResultsView`].

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod search;
pub mod types;

pub use crate::core::{ConfigManager, RecommendationClient, RecommendationSource, ServiceConfig};
pub use error::SearchError;
pub use render::{JobCard, ResultsView};
pub use search::{RequestStatus, RequestTicket, SearchCoordinator};
pub use types::{FilterField, FilterSet, JobPosting, RecommendationResponse};

#[cfg(test)]
mod tests {
    use crate::core::service_client::build_query;
    use crate::{
        FilterSet, RecommendationResponse, RecommendationSource, ResultsView, SearchCoordinator,
    };

    struct FixedSource(RecommendationResponse);

    impl RecommendationSource for FixedSource {
        async fn fetch_recommendations(
            &self,
            _filters: &FilterSet,
        ) -> anyhow::Result<RecommendationResponse> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_single_sparse_result_end_to_end() {
        let filters = FilterSet::new()
            .with_query("software intern")
            .with_location("Chennai");

        let params = build_query(&filters);
        assert!(params.contains(&("q", "software intern".to_string())));
        assert!(params.contains(&("location", "Chennai".to_string())));
        assert!(params.contains(&("country", "in".to_string())));
        assert!(params.contains(&("max_results", "300".to_string())));
        assert!(params
            .iter()
            .filter(|(k, _)| !matches!(*k, "q" | "location" | "country" | "max_results"))
            .all(|(_, v)| v.is_empty()));

        let response: RecommendationResponse = serde_json::from_str(
            r#"{"success": true, "results": [{"title": "Intern A", "redirect_url": "http://x"}]}"#,
        )
        .unwrap();

        let mut coordinator = SearchCoordinator::new();
        let status = coordinator.search(&FixedSource(response), &filters).await;
        let view = ResultsView::from_status(status);

        let ResultsView::Results { cards, .. } = view else {
            panic!("expected results view");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].company, "Unknown");
        assert_eq!(cards[0].location, "Location not available");
        assert_eq!(cards[0].detail_url, "http://x");
    }

    #[tokio::test]
    async fn test_odd_items_still_render_as_cards() {
        let response: RecommendationResponse = serde_json::from_str(
            r#"{"success": true, "results": [
                {"title": "A", "redirect_url": "http://x"},
                {"title": "B", "company": "Acme"},
                {"title": "C", "salary_min": "10000", "description": 12}
            ]}"#,
        )
        .unwrap();

        let mut coordinator = SearchCoordinator::new();
        let status = coordinator
            .search(&FixedSource(response), &FilterSet::new())
            .await;
        let view = ResultsView::from_status(status);

        let ResultsView::Results { cards, .. } = view else {
            panic!("expected results view");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].title, "B");
        assert_eq!(cards[1].company, "Unknown");
        assert_eq!(cards[2].snippet, "No description available.");
    }

    #[tokio::test]
    async fn test_null_success_flag_reports_no_recommendations() {
        let response: RecommendationResponse =
            serde_json::from_str(r#"{"success": null, "results": null}"#).unwrap();

        let mut coordinator = SearchCoordinator::new();
        let status = coordinator
            .search(&FixedSource(response), &FilterSet::new())
            .await;
        assert_eq!(
            ResultsView::from_status(status),
            ResultsView::Error("No recommended internships found.".to_string())
        );
    }
}
