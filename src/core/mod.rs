// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use filters::{passes_hard_filters, matches_category, matches_topic, matches_language};
pub use matcher::{Matcher, MAX_RESULTS};
pub use scoring::{calculate_relevance_score, score_keywords};
pub use similarity::{similarity_ratio, closest_match};
