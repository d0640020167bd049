use actix_web::{web, HttpResponse};

use crate::error::MatchError;
use crate::models::{SubmitFeedbackRequest, SubmitFeedbackResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(submit_feedback));
}

/// Record feedback and return the advisor's recomputed rating
///
/// POST /api/feedback
///
/// Request body:
/// ```json
/// {
///   "studentId": 2,
///   "facultyId": 1,
///   "rating": 5,
///   "comment": "optional"
/// }
/// ```
async fn submit_feedback(
    state: web::Data<AppState>,
    req: web::Json<SubmitFeedbackRequest>,
) -> Result<HttpResponse, MatchError> {
    let outcome = state.feedback.record(req.into_inner()).await.map_err(|e| {
        tracing::info!("Rejected feedback: {}", e);
        e
    })?;

    Ok(HttpResponse::Created().json(SubmitFeedbackResponse {
        message: "Feedback submitted successfully.".to_string(),
        feedback_id: outcome.entry.id,
        rating: outcome.rating,
    }))
}
