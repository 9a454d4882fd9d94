//! Teacher management service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};

/// Teacher row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub school_id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a teacher.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub school_id: Option<i64>,
    pub email: Option<String>,
    pub subject: Option<String>,
}

/// Request to update a teacher. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub school_id: Option<i64>,
    pub email: Option<String>,
    pub subject: Option<String>,
}

/// Teacher management service.
#[derive(Clone)]
pub struct TeacherService {
    db: DbPool,
}

impl TeacherService {
    /// Create a new teacher service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List teachers, optionally scoped to one school.
    pub async fn list(&self, school_id: Option<i64>) -> AppResult<Vec<Teacher>> {
        let teachers = sqlx::query_as::<_, Teacher>(
            "SELECT id, school_id, name, email, subject, created_at, updated_at
             FROM teachers
             WHERE $1::bigint IS NULL OR school_id = $1
             ORDER BY name",
        )
        .bind(school_id)
        .fetch_all(&self.db)
        .await?;

        Ok(teachers)
    }

    /// Get a teacher by ID.
    pub async fn get(&self, id: i64) -> AppResult<Teacher> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, school_id, name, email, subject, created_at, updated_at
             FROM teachers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Teacher not found: {}", id)))
    }

    /// Create a new teacher.
    pub async fn create(&self, request: &CreateTeacherRequest) -> AppResult<Teacher> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (name, school_id, email, subject)
             VALUES ($1, $2, $3, $4)
             RETURNING id, school_id, name, email, subject, created_at, updated_at",
        )
        .bind(&request.name)
        .bind(request.school_id)
        .bind(&request.email)
        .bind(&request.subject)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(teacher_id = teacher.id, name = %teacher.name, "Teacher created");
        Ok(teacher)
    }

    /// Update a teacher. Absent fields keep their current value.
    pub async fn update(&self, id: i64, request: &UpdateTeacherRequest) -> AppResult<Teacher> {
        sqlx::query_as::<_, Teacher>(
            "UPDATE teachers SET
                name = COALESCE($2, name),
                school_id = COALESCE($3, school_id),
                email = COALESCE($4, email),
                subject = COALESCE($5, subject),
                updated_at = NOW()
             WHERE id = $1
             RETURNING id, school_id, name, email, subject, created_at, updated_at",
        )
        .bind(id)
        .bind(&request.name)
        .bind(request.school_id)
        .bind(&request.email)
        .bind(&request.subject)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Teacher not found: {}", id)))
    }

    /// Delete a teacher.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Teacher not found: {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{"name": "Ana Souza", "school_id": 1, "subject": "Matematica"}"#;
        let request: CreateTeacherRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Ana Souza");
        assert_eq!(request.school_id, Some(1));
    }
}
