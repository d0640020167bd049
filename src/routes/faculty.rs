use actix_web::{web, HttpResponse};

use crate::error::MatchError;
use crate::models::UpdateFacultyRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/faculty/{id}", web::get().to(get_faculty))
        .route("/faculty/{id}", web::put().to(update_faculty))
        .route("/faculty/{id}/students", web::get().to(assigned_students));
}

/// GET /api/faculty/{id}
async fn get_faculty(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, MatchError> {
    let profile = state.catalog.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Advisor self-service: expertise and availability
///
/// PUT /api/faculty/{id}
async fn update_faculty(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<UpdateFacultyRequest>,
) -> Result<HttpResponse, MatchError> {
    let id = path.into_inner();
    let profile = state
        .catalog
        .update_fields(id, req.into_inner().into())
        .await?;

    tracing::info!("Faculty {} updated own profile", id);
    Ok(HttpResponse::Ok().json(profile))
}

/// Students whose recommendations included this advisor
///
/// GET /api/faculty/{id}/students
async fn assigned_students(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse, MatchError> {
    let students = state
        .recommendations
        .students_for_faculty(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(students))
}
