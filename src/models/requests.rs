use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Query;

/// Request to recommend courses
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub category: Option<String>,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub topic: Option<String>,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub keywords: String,
    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    #[serde(alias = "max_duration_hours", rename = "maxDurationHours")]
    pub max_duration_hours: Option<f64>,
    #[validate(length(max = 100))]
    #[serde(alias = "course_language", rename = "courseLanguage", default)]
    pub course_language: Option<String>,
}

impl RecommendRequest {
    /// Build the matcher query, falling back to `default_max_duration_hours`
    pub fn to_query(&self, default_max_duration_hours: f64) -> Query {
        let mut query = Query::new(
            self.keywords.clone(),
            self.max_duration_hours.unwrap_or(default_max_duration_hours),
        );
        if let Some(category) = &self.category {
            query = query.with_category(category.clone());
        }
        if let Some(topic) = &self.topic {
            query = query.with_topic(topic.clone());
        }
        if let Some(language) = &self.course_language {
            query = query.with_course_language(language.clone());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: RecommendRequest = serde_json::from_str(r#"{"keywords": "excel"}"#).unwrap();
        assert!(req.validate().is_ok());

        let query = req.to_query(8.0);
        assert_eq!(query.max_duration_hours, 8.0);
        assert_eq!(query.category, None);
    }

    #[test]
    fn test_request_camel_case_and_aliases() {
        let req: RecommendRequest = serde_json::from_str(
            r#"{"keywords": "", "topic": "", "maxDurationHours": 2.5, "course_language": "Français"}"#,
        )
        .unwrap();

        let query = req.to_query(8.0);
        assert_eq!(query.max_duration_hours, 2.5);
        assert_eq!(query.topic, None);
        assert_eq!(query.course_language.as_deref(), Some("Français"));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"keywords": "excel", "maxDurationHours": 0}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
