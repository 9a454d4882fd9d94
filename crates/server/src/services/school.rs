//! School management service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};

/// School row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a school.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchoolRequest {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Request to update a school. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// School management service.
#[derive(Clone)]
pub struct SchoolService {
    db: DbPool,
}

impl SchoolService {
    /// Create a new school service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// List all schools, newest first.
    pub async fn list(&self) -> AppResult<Vec<School>> {
        let schools = sqlx::query_as::<_, School>(
            "SELECT id, name, address, phone, email, created_at, updated_at
             FROM schools ORDER BY created_at DESC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(schools)
    }

    /// Get a school by ID.
    pub async fn get(&self, id: i64) -> AppResult<School> {
        sqlx::query_as::<_, School>(
            "SELECT id, name, address, phone, email, created_at, updated_at
             FROM schools WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("School not found: {}", id)))
    }

    /// Create a new school.
    pub async fn create(&self, request: &CreateSchoolRequest) -> AppResult<School> {
        let school = sqlx::query_as::<_, School>(
            "INSERT INTO schools (name, address, phone, email)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, address, phone, email, created_at, updated_at",
        )
        .bind(&request.name)
        .bind(&request.address)
        .bind(&request.phone)
        .bind(&request.email)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(school_id = school.id, name = %school.name, "School created");
        Ok(school)
    }

    /// Update a school. Absent fields keep their current value.
    pub async fn update(&self, id: i64, request: &UpdateSchoolRequest) -> AppResult<School> {
        sqlx::query_as::<_, School>(
            "UPDATE schools SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email),
                updated_at = NOW()
             WHERE id = $1
             RETURNING id, name, address, phone, email, created_at, updated_at",
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.address)
        .bind(&request.phone)
        .bind(&request.email)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("School not found: {}", id)))
    }

    /// Delete a school.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("School not found: {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{"name": "Escola Nova"}"#;
        let request: CreateSchoolRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Escola Nova");
        assert!(request.address.is_none());
    }

    #[test]
    fn test_update_request_defaults_to_no_changes() {
        let request: UpdateSchoolRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }
}
