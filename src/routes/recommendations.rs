use actix_web::{web, HttpResponse};

use crate::error::MatchError;
use crate::models::SubmitRecommendationRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::post().to(submit_preferences))
        .route(
            "/recommendations/student/{student_id}",
            web::get().to(list_recommendations),
        );
}

/// Rank advisors for a student's preferences
///
/// POST /api/recommendations
///
/// Request body:
/// ```json
/// {
///   "studentId": 2,
///   "areaOfInterest": "AI",
///   "projectType": "Mini|Final|Research",
///   "academicLevel": "UG|PG"
/// }
/// ```
async fn submit_preferences(
    state: web::Data<AppState>,
    req: web::Json<SubmitRecommendationRequest>,
) -> Result<HttpResponse, MatchError> {
    match state.recommendations.submit(req.into_inner()).await {
        Ok(recommendation) => Ok(HttpResponse::Ok().json(recommendation)),
        Err(e) => {
            tracing::info!("Rejected recommendation request: {}", e);
            Err(e)
        }
    }
}

/// List a student's past recommendations, oldest first
///
/// GET /api/recommendations/student/{studentId}
async fn list_recommendations(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, MatchError> {
    let student_id = path.into_inner();
    let recommendations = state.recommendations.list_by_requester(student_id).await?;

    tracing::debug!(
        "Returning {} recommendations for student {}",
        recommendations.len(),
        student_id
    );

    Ok(HttpResponse::Ok().json(recommendations))
}
