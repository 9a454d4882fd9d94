//! Enrollment API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::enrollment::{CreateEnrollmentRequest, Enrollment, EnrollmentService};

/// Filter for listing enrollments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEnrollmentsParams {
    pub class_id: Option<i64>,
}

/// List enrollments, optionally filtered by class.
///
/// GET /api/enrollments?class_id=1
pub async fn list(
    State(service): State<EnrollmentService>,
    Query(params): Query<ListEnrollmentsParams>,
) -> Result<Json<Vec<Enrollment>>, AppError> {
    Ok(Json(service.list(params.class_id).await?))
}

/// Get an enrollment by ID.
///
/// GET /api/enrollments/{id}
pub async fn get(
    State(service): State<EnrollmentService>,
    Path(id): Path<i64>,
) -> Result<Json<Enrollment>, AppError> {
    Ok(Json(service.get(id).await?))
}

/// Enroll a student in a class.
///
/// POST /api/enrollments
pub async fn create(
    State(service): State<EnrollmentService>,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Delete an enrollment.
///
/// DELETE /api/enrollments/{id}
pub async fn delete(
    State(service): State<EnrollmentService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
