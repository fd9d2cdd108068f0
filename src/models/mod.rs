// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Course, Query, ScoredCourse, Recommendation, ResultKind, MatchStrategy, MatchPolicy};
pub use requests::RecommendRequest;
pub use responses::{RecommendResponse, FacetResponse, HealthResponse, ErrorResponse};
