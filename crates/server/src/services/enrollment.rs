//! Enrollment management service.
//!
//! An enrollment links one student to one class; the pair is unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};

/// Enrollment row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub status: String,
    pub enrolled_at: DateTime<Utc>,
}

/// Request to create an enrollment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub class_id: i64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

/// Enrollment management service.
#[derive(Clone)]
pub struct EnrollmentService {
    db: DbPool,
}

impl EnrollmentService {
    /// Create a new enrollment service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List enrollments, optionally filtered by class.
    pub async fn list(&self, class_id: Option<i64>) -> AppResult<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            "SELECT id, student_id, class_id, status, enrolled_at
             FROM enrollments
             WHERE $1::bigint IS NULL OR class_id = $1
             ORDER BY enrolled_at DESC",
        )
        .bind(class_id)
        .fetch_all(&self.db)
        .await?;

        Ok(enrollments)
    }

    /// Get an enrollment by ID.
    pub async fn get(&self, id: i64) -> AppResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT id, student_id, class_id, status, enrolled_at
             FROM enrollments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Enrollment not found: {}", id)))
    }

    /// Enroll a student in a class.
    ///
    /// A duplicate (student, class) pair surfaces as a conflict rather
    /// than a bare database error.
    pub async fn create(&self, request: &CreateEnrollmentRequest) -> AppResult<Enrollment> {
        let result = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, class_id, status)
             VALUES ($1, $2, $3)
             RETURNING id, student_id, class_id, status, enrolled_at",
        )
        .bind(request.student_id)
        .bind(request.class_id)
        .bind(&request.status)
        .fetch_one(&self.db)
        .await;

        match result {
            Ok(enrollment) => {
                tracing::info!(
                    enrollment_id = enrollment.id,
                    student_id = enrollment.student_id,
                    class_id = enrollment.class_id,
                    "Enrollment created"
                );
                Ok(enrollment)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict(format!(
                    "Student {} is already enrolled in class {}",
                    request.student_id, request.class_id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an enrollment.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Enrollment not found: {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_default_status() {
        let json = r#"{"student_id": 1, "class_id": 2}"#;
        let request: CreateEnrollmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, "active");
    }

    #[test]
    fn test_enrollment_serialization() {
        let enrollment = Enrollment {
            id: 1,
            student_id: 2,
            class_id: 3,
            status: "active".to_string(),
            enrolled_at: Utc::now(),
        };

        let json = serde_json::to_string(&enrollment).unwrap();
        assert!(json.contains("\"student_id\":2"));
        assert!(json.contains("\"status\":\"active\""));
    }
}
