use crate::models::{Course, Query, ScoredCourse, Recommendation, MatchPolicy};
use crate::core::{filters::passes_hard_filters, scoring::calculate_relevance_score};

/// Maximum number of courses in a recommendation
pub const MAX_RESULTS: usize = 3;

/// Ranking orchestrator - applies hard filters, scores, ranks and falls back
///
/// # Pipeline Stages
/// 1. Hard filters of the policy's strategy
/// 2. Keyword scoring
/// 3. Stable sort by score, descending
/// 4. Primary selection (relevant and within the duration bound)
/// 5. Relaxed fallback selection when the primary selection is empty
///
/// The matcher holds no state between calls; the same catalog and query always
/// produce the same recommendation.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: MatchPolicy::default(),
        }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Relevance score of a single course, 0 meaning excluded or irrelevant
    pub fn score(&self, course: &Course, query: &Query) -> u32 {
        calculate_relevance_score(course, query, &self.policy).0
    }

    /// Rank the catalog for a query
    ///
    /// Callers are expected to check [`Query::is_searchable`] first.
    ///
    /// # Returns
    /// `Primary` with up to three relevant courses within the duration bound,
    /// otherwise `Fallback` with up to three relevant courses ignoring the
    /// bound (unless the policy enforces it there too), otherwise `NoResults`
    pub fn rank(&self, catalog: &[Course], query: &Query) -> Recommendation {
        // Stage 1 & 2: Hard filters, then scores
        let mut candidates: Vec<ScoredCourse> = catalog
            .iter()
            .filter(|course| passes_hard_filters(course, query, self.policy.strategy))
            .map(|course| {
                let (score, matched_keywords) =
                    calculate_relevance_score(course, query, &self.policy);
                ScoredCourse {
                    course: course.clone(),
                    score,
                    matched_keywords,
                }
            })
            .collect();

        // Stage 3: sort_by is stable, ties keep catalog order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranking {} of {} courses with {:?}",
            candidates.len(),
            catalog.len(),
            self.policy.strategy
        );

        // Stage 4: Primary selection
        let primary: Vec<ScoredCourse> = candidates
            .iter()
            .filter(|c| c.score > 0 && c.course.fits_duration(query.max_duration_hours))
            .take(MAX_RESULTS)
            .cloned()
            .collect();

        if !primary.is_empty() {
            return Recommendation::Primary(primary);
        }

        // Stage 5: Relaxed selection
        let enforce_duration = self.policy.enforce_duration_in_fallback;
        let fallback: Vec<ScoredCourse> = candidates
            .into_iter()
            .filter(|c| c.score > 0)
            .filter(|c| !enforce_duration || c.course.fits_duration(query.max_duration_hours))
            .take(MAX_RESULTS)
            .collect();

        if fallback.is_empty() {
            tracing::debug!("No relevant course for query {:?}", query.keywords);
            Recommendation::NoResults
        } else {
            tracing::debug!("No course within {}h, relaxing duration", query.max_duration_hours);
            Recommendation::Fallback(fallback)
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
