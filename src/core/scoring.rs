use std::collections::HashSet;

use crate::models::{Course, Query, MatchPolicy, MatchStrategy};
use crate::core::{filters::passes_hard_filters, similarity::closest_match};

/// Calculate the relevance score of a course for a query
///
/// Scoring:
/// - 0 if the course fails the hard filters of the policy's strategy
///   (language-scoped matching also excludes courses over the duration bound)
/// - per keyword token: `verbatim_weight` if the token is a substring of the
///   lowercased `title description category` text, else `near_match_weight`
///   if some word of that text has a similarity ratio of at least
///   `similarity_cutoff`, else nothing
///
/// Returns the score together with the tokens that contributed to it.
pub fn calculate_relevance_score(
    course: &Course,
    query: &Query,
    policy: &MatchPolicy,
) -> (u32, Vec<String>) {
    if !passes_hard_filters(course, query, policy.strategy) {
        return (0, Vec::new());
    }

    if policy.strategy == MatchStrategy::LanguageScoped
        && !course.fits_duration(query.max_duration_hours)
    {
        return (0, Vec::new());
    }

    score_keywords(&course.haystack(), &query.tokens(), policy)
}

/// Score keyword tokens against a lowercased haystack
pub fn score_keywords(
    haystack: &str,
    tokens: &[String],
    policy: &MatchPolicy,
) -> (u32, Vec<String>) {
    let mut words: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for word in haystack.split_whitespace() {
        if seen.insert(word) {
            words.push(word);
        }
    }

    let mut score = 0;
    let mut matched = Vec::new();

    for token in tokens {
        if haystack.contains(token.as_str()) {
            score += policy.verbatim_weight;
            matched.push(token.clone());
        } else if closest_match(token, words.iter().copied(), policy.similarity_cutoff).is_some() {
            score += policy.near_match_weight;
            matched.push(token.clone());
        }
    }

    (score, matched)
}
