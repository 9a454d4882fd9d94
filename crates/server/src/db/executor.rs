//! Raw SQL execution against the configured pool.
//!
//! Every entry point in this module converts driver-level failures into a
//! value-typed [`ExecutionResult`] instead of propagating them, so callers
//! (the schema initializer, the seeder, the setup orchestrator) can sequence
//! heterogeneous statements with plain result inspection.

use serde::{Deserialize, Serialize};
use sqlx::{Column, Row};

use crate::db::DbPool;

/// Value-typed outcome of a single SQL execution.
///
/// Replaces thrown errors across the executor boundary. Never retained
/// beyond the call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the statement executed without a driver error.
    pub success: bool,

    /// Driver error message (if success is false).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Result rows (for statements that return rows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<serde_json::Value>>,
}

impl ExecutionResult {
    /// Successful execution with no result rows.
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            rows: None,
        }
    }

    /// Successful execution carrying result rows.
    ///
    /// Empty row sets are omitted from the serialized response.
    pub fn ok_with_rows(rows: Vec<serde_json::Value>) -> Self {
        Self {
            success: true,
            error: None,
            rows: if rows.is_empty() { None } else { Some(rows) },
        }
    }

    /// Failed execution carrying the driver error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            rows: None,
        }
    }
}

/// Execute a single SQL statement.
///
/// The statement is trusted as-is: it is not validated, sanitized, or
/// parsed. Any driver error (syntax, constraint, connectivity) is caught
/// and converted into a failed [`ExecutionResult`], never returned as `Err`.
pub async fn execute_statement(pool: &DbPool, sql: &str) -> ExecutionResult {
    match sqlx::query(sql).execute(pool).await {
        Ok(done) => {
            tracing::debug!(rows_affected = done.rows_affected(), "Statement executed");
            ExecutionResult::ok()
        }
        Err(e) => {
            tracing::error!(error = %e, "Statement execution failed");
            ExecutionResult::failed(e.to_string())
        }
    }
}

/// Execute a SQL statement and return its rows as JSON objects.
///
/// Statements that return no rows (INSERT, UPDATE, DDL) yield an empty
/// vector. Unlike [`execute_statement`], the driver error is propagated so
/// the HTTP layer can surface it with the right status code.
pub async fn run_query(pool: &DbPool, sql: &str) -> Result<Vec<serde_json::Value>, sqlx::Error> {
    let rows = sqlx::query(sql).fetch_all(pool).await?;

    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        let mut obj = serde_json::Map::new();
        for (idx, column) in row.columns().iter().enumerate() {
            obj.insert(column.name().to_string(), row_value_to_json(&row, idx));
        }
        results.push(serde_json::Value::Object(obj));
    }

    Ok(results)
}

/// Convert a row value to JSON based on its column type.
fn row_value_to_json(row: &sqlx::postgres::PgRow, idx: usize) -> serde_json::Value {
    use sqlx::TypeInfo;

    let column = &row.columns()[idx];
    let type_name = column.type_info().name();

    match type_name {
        "INT2" | "INT4" => row
            .try_get::<Option<i32>, _>(idx)
            .ok()
            .flatten()
            .map(|v| serde_json::json!(v))
            .unwrap_or(serde_json::Value::Null),
        "INT8" => row
            .try_get::<Option<i64>, _>(idx)
            .ok()
            .flatten()
            .map(|v| serde_json::json!(v))
            .unwrap_or(serde_json::Value::Null),
        "FLOAT4" | "FLOAT8" => row
            .try_get::<Option<f64>, _>(idx)
            .ok()
            .flatten()
            .map(|v| serde_json::json!(v))
            .unwrap_or(serde_json::Value::Null),
        "BOOL" => row
            .try_get::<Option<bool>, _>(idx)
            .ok()
            .flatten()
            .map(|v| serde_json::json!(v))
            .unwrap_or(serde_json::Value::Null),
        "JSON" | "JSONB" => row
            .try_get::<Option<serde_json::Value>, _>(idx)
            .ok()
            .flatten()
            .unwrap_or(serde_json::Value::Null),
        "TIMESTAMPTZ" | "TIMESTAMP" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx)
            .ok()
            .flatten()
            .map(|v| serde_json::json!(v.to_rfc3339()))
            .unwrap_or(serde_json::Value::Null),
        // Default to string for unknown types
        _ => row
            .try_get::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map(|v| serde_json::json!(v))
            .unwrap_or(serde_json::Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serialization_omits_error_and_rows() {
        let json = serde_json::to_string(&ExecutionResult::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_failed_serialization_carries_error() {
        let json = serde_json::to_string(&ExecutionResult::failed("syntax error")).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"syntax error\""));
    }

    #[test]
    fn test_empty_rows_are_omitted() {
        let json = serde_json::to_string(&ExecutionResult::ok_with_rows(vec![])).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_rows_are_serialized() {
        let result = ExecutionResult::ok_with_rows(vec![serde_json::json!({"id": 1})]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"rows\":[{\"id\":1}]"));
    }
}
