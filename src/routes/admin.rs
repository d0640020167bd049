use actix_web::{web, HttpResponse};

use crate::error::MatchError;
use crate::models::{AdminUpdateFacultyRequest, CreateFacultyRequest, OverrideRatingRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/faculty", web::get().to(list_faculty))
        .route("/admin/faculty", web::post().to(create_faculty))
        .route("/admin/faculty/{id}", web::put().to(update_faculty))
        .route("/admin/faculty/{id}/rating", web::put().to(override_rating))
        .route("/admin/stats", web::get().to(stats));
}

/// GET /api/admin/faculty
async fn list_faculty(state: web::Data<AppState>) -> Result<HttpResponse, MatchError> {
    Ok(HttpResponse::Ok().json(state.catalog.list_all().await?))
}

/// POST /api/admin/faculty
async fn create_faculty(
    state: web::Data<AppState>,
    req: web::Json<CreateFacultyRequest>,
) -> Result<HttpResponse, MatchError> {
    let new_faculty = req.into_inner().into_new_faculty()?;
    let profile = state.catalog.create(new_faculty).await?;

    tracing::info!("Admin created faculty {} ({})", profile.id, profile.name);
    Ok(HttpResponse::Created().json(profile))
}

/// PUT /api/admin/faculty/{id}
async fn update_faculty(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<AdminUpdateFacultyRequest>,
) -> Result<HttpResponse, MatchError> {
    let id = path.into_inner();
    let profile = state
        .catalog
        .update_fields(id, req.into_inner().into())
        .await?;

    tracing::info!("Admin updated faculty {}", id);
    Ok(HttpResponse::Ok().json(profile))
}

/// Administrative override of the derived rating
///
/// PUT /api/admin/faculty/{id}/rating
///
/// The next feedback for this advisor recomputes the rating from history
/// and replaces the override.
async fn override_rating(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<OverrideRatingRequest>,
) -> Result<HttpResponse, MatchError> {
    let id = path.into_inner();
    let rating = req.rating;
    if !rating.is_finite() {
        return Err(MatchError::invalid("rating", "rating must be a finite number"));
    }

    state.catalog.update_rating(id, rating).await?;
    tracing::info!("Admin set faculty {} rating to {}", id, rating);

    Ok(HttpResponse::Ok().json(state.catalog.get_by_id(id).await?))
}

/// GET /api/admin/stats
async fn stats(state: web::Data<AppState>) -> Result<HttpResponse, MatchError> {
    Ok(HttpResponse::Ok().json(state.recommendations.stats().await?))
}
