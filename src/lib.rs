//! Course Matcher - keyword-based course recommendations
//!
//! This library ranks a catalog of courses against a user's filter criteria
//! (category, topic, keywords, maximum duration, course language) and returns
//! up to three courses, falling back to a relaxed result when nothing fits the
//! duration bound.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Matcher, similarity::similarity_ratio};
pub use self::models::{Course, Query, ScoredCourse, Recommendation, ResultKind, MatchPolicy, MatchStrategy};
pub use self::services::{Catalog, CatalogError};
