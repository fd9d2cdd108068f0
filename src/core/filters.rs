use crate::models::{Course, Query, MatchStrategy};

/// Check if a course survives the hard filters of the given strategy
///
/// This is stage 1 of the ranking pipeline. A course that fails here is
/// excluded regardless of keyword relevance.
#[inline]
pub fn passes_hard_filters(
    course: &Course,
    query: &Query,
    strategy: MatchStrategy,
) -> bool {
    match strategy {
        MatchStrategy::CategoryScoped => {
            matches_category(course, query.category.as_deref())
                && matches_topic(course, query.topic.as_deref())
        }
        MatchStrategy::LanguageScoped => {
            matches_language(course, query.course_language.as_deref())
        }
    }
}

/// Exact category match, `None` accepts every course
#[inline]
pub fn matches_category(course: &Course, category: Option<&str>) -> bool {
    category.map_or(true, |category| course.category == category)
}

/// Case-insensitive substring match of the topic against the title
#[inline]
pub fn matches_topic(course: &Course, topic: Option<&str>) -> bool {
    topic.map_or(true, |topic| {
        course.title.to_lowercase().contains(&topic.to_lowercase())
    })
}

/// Exact course language match, `None` accepts every course
#[inline]
pub fn matches_language(course: &Course, language: Option<&str>) -> bool {
    language.map_or(true, |language| course.language == language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_course(title: &str, category: &str, language: &str) -> Course {
        Course {
            title: title.to_string(),
            description: "Test description".to_string(),
            category: category.to_string(),
            language: language.to_string(),
            duration_hours: 4.0,
            target_group: "Everyone".to_string(),
        }
    }

    #[test]
    fn test_category_scoped_filters() {
        let course = create_test_course("Excel Basics", "Office", "Deutsch");

        let query = Query::new("excel", 8.0).with_category("Office");
        assert!(passes_hard_filters(&course, &query, MatchStrategy::CategoryScoped));

        let query = Query::new("excel", 8.0).with_category("Finance");
        assert!(!passes_hard_filters(&course, &query, MatchStrategy::CategoryScoped));
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let course = create_test_course("Excel Basics", "Office", "Deutsch");
        assert!(!matches_category(&course, Some("office")));
    }

    #[test]
    fn test_topic_is_case_insensitive() {
        let course = create_test_course("Microsoft EXCEL für Einsteiger", "Office", "Deutsch");
        assert!(matches_topic(&course, Some("Excel")));
        assert!(!matches_topic(&course, Some("Word")));
        assert!(matches_topic(&course, None));
    }

    #[test]
    fn test_language_scoped_ignores_category() {
        let course = create_test_course("Excel Basics", "Office", "Deutsch");

        let query = Query::new("excel", 8.0)
            .with_category("Finance")
            .with_course_language("Deutsch");
        assert!(passes_hard_filters(&course, &query, MatchStrategy::LanguageScoped));

        let query = Query::new("excel", 8.0).with_course_language("Italiano");
        assert!(!passes_hard_filters(&course, &query, MatchStrategy::LanguageScoped));
    }

    #[test]
    fn test_category_scoped_ignores_language() {
        let course = create_test_course("Excel Basics", "Office", "Deutsch");
        let query = Query::new("excel", 8.0).with_course_language("Italiano");
        assert!(passes_hard_filters(&course, &query, MatchStrategy::CategoryScoped));
    }
}
