// Route exports
pub mod admin;
pub mod faculty;
pub mod feedback;
pub mod recommendations;

use actix_web::{error, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::error::MatchError;
use crate::models::{FacultyProfile, HealthResponse};
use crate::services::{
    FacultyCatalog, FeedbackAggregator, InMemoryFacultyCatalog, InMemoryFeedbackStore,
    InMemoryRecommendationStore, RecommendationService,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FacultyCatalog>,
    pub recommendations: RecommendationService,
    pub feedback: FeedbackAggregator,
}

impl AppState {
    /// Wire the services over in-memory repositories seeded with `faculty`
    pub fn in_memory(faculty: Vec<FacultyProfile>) -> Self {
        let catalog: Arc<dyn FacultyCatalog> = Arc::new(InMemoryFacultyCatalog::with_profiles(faculty));
        let feedback_store = Arc::new(InMemoryFeedbackStore::new());
        let recommendation_store = Arc::new(InMemoryRecommendationStore::new());

        Self {
            recommendations: RecommendationService::new(
                catalog.clone(),
                recommendation_store,
                feedback_store.clone(),
            ),
            feedback: FeedbackAggregator::new(catalog.clone(), feedback_store),
            catalog,
        }
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    MatchError::invalid("body", format!("Invalid JSON: {}", err)).into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    MatchError::invalid("path", format!("Invalid path parameter: {}", err)).into()
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health_check))
                .configure(recommendations::configure)
                .configure(feedback::configure)
                .configure(faculty::configure)
                .configure(admin::configure),
        );
}
