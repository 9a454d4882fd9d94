//! School API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::services::school::{CreateSchoolRequest, School, SchoolService, UpdateSchoolRequest};

/// List all schools.
///
/// GET /api/schools
pub async fn list(State(service): State<SchoolService>) -> Result<Json<Vec<School>>, AppError> {
    Ok(Json(service.list().await?))
}

/// Get a school by ID.
///
/// GET /api/schools/{id}
pub async fn get(
    State(service): State<SchoolService>,
    Path(id): Path<i64>,
) -> Result<Json<School>, AppError> {
    Ok(Json(service.get(id).await?))
}

/// Create a school.
///
/// POST /api/schools
pub async fn create(
    State(service): State<SchoolService>,
    Json(request): Json<CreateSchoolRequest>,
) -> Result<(StatusCode, Json<School>), AppError> {
    let school = service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(school)))
}

/// Update a school.
///
/// PUT /api/schools/{id}
pub async fn update(
    State(service): State<SchoolService>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateSchoolRequest>,
) -> Result<Json<School>, AppError> {
    Ok(Json(service.update(id, &request).await?))
}

/// Delete a school.
///
/// DELETE /api/schools/{id}
pub async fn delete(
    State(service): State<SchoolService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
