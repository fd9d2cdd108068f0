use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{RecommendRequest, RecommendResponse, FacetResponse, HealthResponse, ErrorResponse};
use crate::services::Catalog;
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub topic_keywords: Arc<Vec<String>>,
    pub default_max_duration_hours: f64,
}

/// Configure all course-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/catalog/categories", web::get().to(list_categories))
        .route("/catalog/languages", web::get().to(list_languages))
        .route("/catalog/topics", web::get().to(list_topics))
        .route("/courses/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        courses: state.catalog.len(),
    })
}

async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FacetResponse {
        items: state.catalog.categories(),
    })
}

async fn list_languages(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FacetResponse {
        items: state.catalog.languages(),
    })
}

/// Topics are the configured software names found in course titles
async fn list_topics(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FacetResponse {
        items: state.catalog.topics(state.topic_keywords.as_slice()),
    })
}

/// Recommend courses endpoint
///
/// POST /api/v1/courses/recommend
///
/// Request body:
/// ```json
/// {
///   "category": "Office",
///   "topic": "Excel",
///   "keywords": "pivot tabellen",
///   "maxDurationHours": 8.0,
///   "courseLanguage": "Deutsch"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for recommend request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = req.to_query(state.default_max_duration_hours);
    let strategy = state.matcher.policy().strategy;

    if !query.is_searchable(strategy) {
        tracing::warn!("Rejected recommend request without search terms ({:?})", strategy);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "empty_query".to_string(),
            message: "Enter keywords or select a topic".to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Recommending courses: keywords={:?}, category={:?}, topic={:?}, language={:?}, max {}h",
        query.keywords,
        query.category,
        query.topic,
        query.course_language,
        query.max_duration_hours
    );

    let result = state.matcher.rank(state.catalog.courses(), &query);
    let kind = result.kind();

    let response = RecommendResponse {
        kind,
        courses: result.into_courses(),
        strategy,
        total_candidates: state.catalog.len(),
    };

    tracing::info!("Returning {} courses ({:?})", response.courses.len(), kind);

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::models::{Course, MatchPolicy, ResultKind};

    fn create_state() -> AppState {
        let courses = vec![
            Course {
                title: "Excel Basics".to_string(),
                description: "Learn Excel".to_string(),
                category: "Office".to_string(),
                language: "Deutsch".to_string(),
                duration_hours: 4.0,
                target_group: "Beginners".to_string(),
            },
            Course {
                title: "Word Advanced".to_string(),
                description: "Advanced Word skills".to_string(),
                category: "Office".to_string(),
                language: "Deutsch".to_string(),
                duration_hours: 10.0,
                target_group: "Pros".to_string(),
            },
        ];

        AppState {
            catalog: Arc::new(Catalog::new(courses)),
            matcher: Matcher::new(MatchPolicy::category_scoped()),
            topic_keywords: Arc::new(vec!["Excel".to_string(), "Outlook".to_string()]),
            default_max_duration_hours: 8.0,
        }
    }

    #[actix_web::test]
    async fn test_recommend_primary() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/courses/recommend")
            .set_json(serde_json::json!({"category": "Office", "keywords": "excel"}))
            .to_request();
        let resp: RecommendResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.kind, ResultKind::Primary);
        assert_eq!(resp.courses.len(), 1);
        assert_eq!(resp.courses[0].score, 3);
        assert_eq!(resp.total_candidates, 2);
    }

    #[actix_web::test]
    async fn test_recommend_rejects_empty_query() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/courses/recommend")
            .set_json(serde_json::json!({"keywords": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_topics() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/catalog/topics").to_request();
        let resp: FacetResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.items, vec!["Excel"]);
    }

    #[actix_web::test]
    async fn test_recommend_fallback() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .app_data(crate::routes::json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/courses/recommend")
            .set_json(serde_json::json!({
                "category": "Office",
                "keywords": "excel",
                "maxDurationHours": 2
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["kind"], "fallback");
        assert_eq!(body["courses"][0]["title"], "Excel Basics");
    }

    #[actix_web::test]
    async fn test_recommend_rejects_out_of_range_duration() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .app_data(crate::routes::json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/courses/recommend")
            .set_json(serde_json::json!({"keywords": "excel", "maxDurationHours": 1001}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Validation failed");
        assert_eq!(body.status_code, 400);
    }

    #[actix_web::test]
    async fn test_recommend_rejects_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .app_data(crate::routes::json_config())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/courses/recommend")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"keywords\": \"excel\"")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_json");
        assert_eq!(body["status_code"], 400);
    }
}
