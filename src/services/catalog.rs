use crate::models::Course;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the course catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog must be a JSON array of course records")]
    NotAnArray,

    #[error("Invalid course record #{index}: field `{field}` {reason}")]
    InvalidCourseRecord {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Software names offered as topics when they appear in course titles
pub const DEFAULT_TOPIC_KEYWORDS: &[&str] = &[
    "Word",
    "Excel",
    "Teams",
    "PowerPoint",
    "Outlook",
    "Microsoft",
    "Windows",
    "OneNote",
];

/// Immutable, ordered course catalog
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Load the catalog from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let catalog = Self::from_json_str(&raw)?;

        tracing::info!(
            "Loaded {} courses from {}",
            catalog.len(),
            path.as_ref().display()
        );

        Ok(catalog)
    }

    /// Parse and validate a JSON array of course records
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(raw)?;
        let records = match value {
            Value::Array(records) => records,
            _ => return Err(CatalogError::NotAnArray),
        };

        let courses = records
            .iter()
            .enumerate()
            .map(|(index, record)| parse_course(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { courses })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sorted, distinct, non-empty categories
    pub fn categories(&self) -> Vec<String> {
        distinct(self.courses.iter().map(|c| c.category.as_str()))
    }

    /// Sorted, distinct, non-empty course languages
    pub fn languages(&self) -> Vec<String> {
        distinct(self.courses.iter().map(|c| c.language.as_str()))
    }

    /// Topic keywords that occur (case-insensitively) in at least one title
    pub fn topics<S: AsRef<str>>(&self, topic_keywords: &[S]) -> Vec<String> {
        let titles: Vec<String> = self.courses.iter().map(|c| c.title.to_lowercase()).collect();

        distinct(
            topic_keywords
                .iter()
                .map(AsRef::as_ref)
                .filter(|keyword| {
                    let needle = keyword.to_lowercase();
                    titles.iter().any(|title| title.contains(&needle))
                }),
        )
    }
}

fn distinct<'a, I: Iterator<Item = &'a str>>(values: I) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Convert one JSON record into a course, reporting the first invalid field
fn parse_course(index: usize, record: &Value) -> Result<Course, CatalogError> {
    let invalid = |field: &'static str, reason: &str| CatalogError::InvalidCourseRecord {
        index,
        field,
        reason: reason.to_string(),
    };

    let object = record
        .as_object()
        .ok_or_else(|| invalid("*", "record is not an object"))?;

    let text = |field: &'static str| match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(invalid(field, "is missing")),
        Some(_) => Err(invalid(field, "is not a string")),
    };

    let title = text("title")?;
    let description = text("description")?;
    let category = text("category")?;
    let language = text("language")?;
    let target_group = text("target_group")?;

    let duration_hours = match object.get("duration_hours") {
        None | Some(Value::Null) => return Err(invalid("duration_hours", "is missing")),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid("duration_hours", "is not a finite number"))?,
        Some(_) => return Err(invalid("duration_hours", "is not a number")),
    };

    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(invalid("duration_hours", "must be a positive number"));
    }

    Ok(Course {
        title,
        description,
        category,
        language,
        duration_hours,
        target_group,
    })
}
