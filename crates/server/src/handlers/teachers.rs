//! Teacher API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::teacher::{
    CreateTeacherRequest, Teacher, TeacherService, UpdateTeacherRequest,
};

/// Filter for listing teachers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTeachersParams {
    pub school_id: Option<i64>,
}

/// List teachers, optionally scoped to one school.
///
/// GET /api/teachers?school_id=1
pub async fn list(
    State(service): State<TeacherService>,
    Query(params): Query<ListTeachersParams>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    Ok(Json(service.list(params.school_id).await?))
}

/// Get a teacher by ID.
///
/// GET /api/teachers/{id}
pub async fn get(
    State(service): State<TeacherService>,
    Path(id): Path<i64>,
) -> Result<Json<Teacher>, AppError> {
    Ok(Json(service.get(id).await?))
}

/// Create a teacher.
///
/// POST /api/teachers
pub async fn create(
    State(service): State<TeacherService>,
    Json(request): Json<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// Update a teacher.
///
/// PUT /api/teachers/{id}
pub async fn update(
    State(service): State<TeacherService>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTeacherRequest>,
) -> Result<Json<Teacher>, AppError> {
    Ok(Json(service.update(id, &request).await?))
}

/// Delete a teacher.
///
/// DELETE /api/teachers/{id}
pub async fn delete(
    State(service): State<TeacherService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_default() {
        let params = ListTeachersParams::default();
        assert!(params.school_id.is_none());
    }
}
