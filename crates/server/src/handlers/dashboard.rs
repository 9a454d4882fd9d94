//! Dashboard API handlers.
//!
//! Provides aggregate statistics for the secretary dashboard.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::error::AppError;

/// Dashboard statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Total number of schools.
    pub total_schools: i64,

    /// Total number of teachers.
    pub total_teachers: i64,

    /// Total number of classes.
    pub total_classes: i64,

    /// Total number of students.
    pub total_students: i64,

    /// Total number of enrollments.
    pub total_enrollments: i64,

    /// Number of active enrollments.
    pub active_enrollments: i64,
}

/// Response for dashboard statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatsResponse {
    /// Response status.
    pub status: String,

    /// Dashboard statistics.
    pub stats: DashboardStats,
}

/// Count rows of one table, defaulting to zero when the table is missing.
async fn count(db: &DbPool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(db).await.unwrap_or(0)
}

/// Get dashboard statistics.
///
/// GET /api/dashboard/stats
///
/// Returns aggregate counts for the secretary dashboard.
pub async fn get_stats(State(db): State<DbPool>) -> Result<Json<DashboardStatsResponse>, AppError> {
    let stats = DashboardStats {
        total_schools: count(&db, "SELECT COUNT(*) FROM schools").await,
        total_teachers: count(&db, "SELECT COUNT(*) FROM teachers").await,
        total_classes: count(&db, "SELECT COUNT(*) FROM classes").await,
        total_students: count(&db, "SELECT COUNT(*) FROM students").await,
        total_enrollments: count(&db, "SELECT COUNT(*) FROM enrollments").await,
        active_enrollments: count(
            &db,
            "SELECT COUNT(*) FROM enrollments WHERE status = 'active'",
        )
        .await,
    };

    Ok(Json(DashboardStatsResponse {
        status: "ok".to_string(),
        stats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_serialization() {
        let stats = DashboardStats {
            total_schools: 2,
            total_teachers: 12,
            total_classes: 8,
            total_students: 240,
            total_enrollments: 260,
            active_enrollments: 250,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total_schools\":2"));
        assert!(json.contains("\"active_enrollments\":250"));
    }

    #[test]
    fn test_dashboard_stats_response_serialization() {
        let response = DashboardStatsResponse {
            status: "ok".to_string(),
            stats: DashboardStats {
                total_schools: 1,
                total_teachers: 1,
                total_classes: 1,
                total_students: 1,
                total_enrollments: 1,
                active_enrollments: 1,
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"stats\""));
    }
}
