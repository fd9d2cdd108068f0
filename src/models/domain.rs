use serde::{Deserialize, Serialize};

/// Course record as supplied by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Delivery language of the course, not the language of the UI
    pub language: String,
    pub duration_hours: f64,
    pub target_group: String,
}

impl Course {
    /// Lowercased `title description category`, the text keywords are matched against
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category).to_lowercase()
    }

    /// Helper to check the inclusive duration bound
    pub fn fits_duration(&self, max_duration_hours: f64) -> bool {
        self.duration_hours <= max_duration_hours
    }
}

/// Filter criteria for one recommendation request
///
/// Absent filters mean "unfiltered". Which filters are honoured depends on
/// the active [`MatchStrategy`].
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub category: Option<String>,
    pub topic: Option<String>,
    pub keywords: String,
    pub max_duration_hours: f64,
    pub course_language: Option<String>,
}

impl Query {
    pub fn new(keywords: impl Into<String>, max_duration_hours: f64) -> Self {
        Self {
            category: None,
            topic: None,
            keywords: keywords.into(),
            max_duration_hours,
            course_language: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = non_empty(topic.into());
        self
    }

    pub fn with_course_language(mut self, language: impl Into<String>) -> Self {
        self.course_language = non_empty(language.into());
        self
    }

    /// Lowercased whitespace-separated keyword tokens
    ///
    /// Punctuation is kept as part of the token.
    pub fn tokens(&self) -> Vec<String> {
        self.keywords
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// Whether the query carries enough input to be ranked at all
    ///
    /// Category-scoped matching accepts a topic on its own, language-scoped
    /// matching needs keywords.
    pub fn is_searchable(&self, strategy: MatchStrategy) -> bool {
        let has_keywords = !self.keywords.trim().is_empty();
        match strategy {
            MatchStrategy::CategoryScoped => has_keywords || self.topic.is_some(),
            MatchStrategy::LanguageScoped => has_keywords,
        }
    }
}

/// Treat blank selections as "no filter"
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Scored course result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCourse {
    #[serde(flatten)]
    pub course: Course,
    pub score: u32,
    /// Query tokens that contributed to the score, in query order
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
}

/// Outcome of a ranking call
///
/// `Fallback` means no course satisfied the duration bound and the list was
/// relaxed; `NoResults` means nothing relevant passed the hard filters.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Primary(Vec<ScoredCourse>),
    Fallback(Vec<ScoredCourse>),
    NoResults,
}

impl Recommendation {
    pub fn kind(&self) -> ResultKind {
        match self {
            Recommendation::Primary(_) => ResultKind::Primary,
            Recommendation::Fallback(_) => ResultKind::Fallback,
            Recommendation::NoResults => ResultKind::None,
        }
    }

    pub fn courses(&self) -> &[ScoredCourse] {
        match self {
            Recommendation::Primary(courses) | Recommendation::Fallback(courses) => courses,
            Recommendation::NoResults => &[],
        }
    }

    pub fn into_courses(self) -> Vec<ScoredCourse> {
        match self {
            Recommendation::Primary(courses) | Recommendation::Fallback(courses) => courses,
            Recommendation::NoResults => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Primary,
    Fallback,
    None,
}

/// Which set of hard filters and weights the matcher applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Filters by category and topic, verbatim hits weigh 3
    #[default]
    CategoryScoped,
    /// Filters by course language, duration is a hard filter, verbatim hits weigh 2
    LanguageScoped,
}

/// Scoring and fallback policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchPolicy {
    pub strategy: MatchStrategy,
    pub verbatim_weight: u32,
    pub near_match_weight: u32,
    pub similarity_cutoff: f64,
    pub enforce_duration_in_fallback: bool,
}

impl MatchPolicy {
    pub fn category_scoped() -> Self {
        Self {
            strategy: MatchStrategy::CategoryScoped,
            verbatim_weight: 3,
            near_match_weight: 1,
            similarity_cutoff: 0.8,
            enforce_duration_in_fallback: false,
        }
    }

    pub fn language_scoped() -> Self {
        Self {
            strategy: MatchStrategy::LanguageScoped,
            verbatim_weight: 2,
            near_match_weight: 1,
            similarity_cutoff: 0.8,
            enforce_duration_in_fallback: true,
        }
    }

    pub fn for_strategy(strategy: MatchStrategy) -> Self {
        match strategy {
            MatchStrategy::CategoryScoped => Self::category_scoped(),
            MatchStrategy::LanguageScoped => Self::language_scoped(),
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::category_scoped()
    }
}
