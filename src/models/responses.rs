use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchStrategy, ResultKind, ScoredCourse};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub kind: ResultKind,
    pub courses: Vec<ScoredCourse>,
    pub strategy: MatchStrategy,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// List of catalog facet values (categories, languages, topics)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetResponse {
    pub items: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub courses: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
