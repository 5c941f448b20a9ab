use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ===== Recommendation Service Response Types =====
//
// Backend items are forwarded verbatim, so nothing below may reject a body
// because one field has an unexpected shape: such fields read as absent.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "postings")]
    pub results: Vec<JobPosting>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayName {
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
}

/// One recommendation as forwarded by the backend. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<DisplayName>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<DisplayName>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub redirect_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub contract_time: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
}

/// Any value of the wrong type becomes `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Only a literal `true` counts as success; null, missing or odd values do not
fn success_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// A non-array reads as empty; an item that is not an object reads as an empty posting
fn postings<'de, D>(deserializer: D) -> Result<Vec<JobPosting>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

impl JobPosting {
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.display_name.as_deref())
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.display_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_success_is_false() {
        let response: RecommendationResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_sparse_posting_parses() {
        let response: RecommendationResponse = serde_json::from_str(
            r#"{"success": true, "results": [{"title": "Intern A", "redirect_url": "http://x"}]}"#,
        )
        .unwrap();

        assert!(response.success);
        let job = &response.results[0];
        assert_eq!(job.title.as_deref(), Some("Intern A"));
        assert_eq!(job.company_name(), None);
        assert_eq!(job.location_name(), None);
    }

    #[test]
    fn test_null_success_and_results() {
        let response: RecommendationResponse = serde_json::from_str(r#"{"success": null}"#).unwrap();
        assert!(!response.success);
        assert!(response.results.is_empty());

        let response: RecommendationResponse =
            serde_json::from_str(r#"{"success": false, "results": null}"#).unwrap();
        assert!(!response.success);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_odd_items_keep_their_place() {
        let json = r#"{
            "success": true,
            "results": [
                {"title": "A", "redirect_url": "http://x"},
                {"title": "B", "company": "Acme"},
                {"title": 42, "salary_min": "10000", "location": {"display_name": 7}},
                "not an object"
            ]
        }"#;
        let response: RecommendationResponse = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert_eq!(response.results.len(), 4);
        assert_eq!(response.results[0].redirect_url.as_deref(), Some("http://x"));
        assert_eq!(response.results[1].title.as_deref(), Some("B"));
        assert_eq!(response.results[1].company_name(), None);
        assert_eq!(response.results[2].title, None);
        assert_eq!(response.results[2].salary_min, None);
        assert_eq!(response.results[2].location_name(), None);
        assert_eq!(response.results[3], JobPosting::default());
    }

    #[test]
    fn test_nested_names_and_unknown_fields() {
        let json = r#"{
            "success": true,
            "results": [{
                "title": "Data Intern",
                "company": {"display_name": "Acme", "__CLASS__": "Adzuna::API::Response::Company"},
                "location": {"display_name": "Bangalore, Karnataka", "area": ["India"]},
                "contract_time": "full_time",
                "salary_min": 10000,
                "adref": "abc"
            }]
        }"#;
        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        let job = &response.results[0];

        assert_eq!(job.company_name(), Some("Acme"));
        assert_eq!(job.location_name(), Some("Bangalore, Karnataka"));
        assert_eq!(job.contract_time.as_deref(), Some("full_time"));
        assert_eq!(job.salary_min, Some(10000.0));
    }
}
