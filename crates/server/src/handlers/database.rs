//! Database API handlers.
//!
//! Endpoints for raw SQL execution, database setup actions, orchestrated
//! initialization, and schema validation.

use axum::{extract::State, http::StatusCode, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::db::{self, DbPool, ExecutionResult};
use crate::error::AppError;
use crate::services::setup::{initialize_database, SetupOutcome};
use crate::state::AppState;

/// Request for executing a raw SQL statement.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteSqlRequest {
    /// SQL statement to execute.
    pub sql: Option<String>,

    /// Base64-encoded SQL statement (alternative to `sql`).
    pub sql_base64: Option<String>,
}

/// Request for a database setup action.
#[derive(Debug, Clone, Deserialize)]
pub struct DbSetupRequest {
    /// Setup action tag: `createTables` or `seedDatabase`.
    pub action: Option<String>,
}

/// Setup action, validated at the boundary before dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetupAction {
    CreateTables,
    SeedDatabase,
}

impl SetupAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupAction::CreateTables => "createTables",
            SetupAction::SeedDatabase => "seedDatabase",
        }
    }
}

impl std::str::FromStr for SetupAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createTables" => Ok(SetupAction::CreateTables),
            "seedDatabase" => Ok(SetupAction::SeedDatabase),
            _ => Err(format!("Unknown setup action: {}", s)),
        }
    }
}

/// Response for schema validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    /// Whether every required table is present.
    pub valid: bool,

    /// Validation message.
    pub message: String,

    /// Tables found in the database.
    pub tables: Vec<String>,

    /// Required tables that are missing.
    pub missing: Vec<String>,
}

/// Resolve the SQL text of an execute request.
///
/// Rejects the request before any pool access if neither field is present
/// or the base64 payload does not decode.
fn resolve_sql(request: &ExecuteSqlRequest) -> Result<String, AppError> {
    if let Some(ref encoded) = request.sql_base64 {
        let decoded = BASE64
            .decode(encoded)
            .map_err(|e| AppError::BadRequest(format!("Invalid base64: {}", e)))?;
        let sql = String::from_utf8(decoded)
            .map_err(|e| AppError::BadRequest(format!("Invalid UTF-8 in sql: {}", e)))?;
        return Ok(sql.trim().to_string());
    }

    match request.sql {
        Some(ref sql) => Ok(sql.trim().to_string()),
        None => Err(AppError::BadRequest("'sql' is required".to_string())),
    }
}

/// Execute a raw SQL statement.
///
/// POST /execute-sql
///
/// The statement is trusted; it is not validated or sanitized. Statements
/// that return rows have them included in the response.
pub async fn execute_sql(
    State(db): State<DbPool>,
    Json(request): Json<ExecuteSqlRequest>,
) -> Result<Json<ExecutionResult>, AppError> {
    let sql = resolve_sql(&request)?;

    let rows = db::run_query(&db, &sql).await?;

    Ok(Json(ExecutionResult::ok_with_rows(rows)))
}

/// Run a single database setup action.
///
/// POST /db-setup
///
/// Dispatches on the request's action tag. Unknown or missing tags are
/// rejected with 400 before any database work.
pub async fn db_setup(
    State(db): State<DbPool>,
    Json(request): Json<DbSetupRequest>,
) -> Result<Json<ExecutionResult>, AppError> {
    let tag = request
        .action
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("'action' is required".to_string()))?;

    let action: SetupAction = tag.parse().map_err(AppError::BadRequest)?;

    let result = match action {
        SetupAction::CreateTables => db::create_tables(&db).await,
        SetupAction::SeedDatabase => db::seed_database(&db).await,
    };

    if !result.success {
        let error = result.error.unwrap_or_else(|| "unknown error".to_string());
        return Err(AppError::Internal(format!(
            "{} failed: {}",
            action.as_str(),
            error
        )));
    }

    Ok(Json(result))
}

/// Initialize the database: create tables, then optionally seed.
///
/// POST /db-init
///
/// Failure collapses to a generic outcome; the detailed error is logged,
/// not surfaced.
pub async fn db_init(State(state): State<AppState>) -> (StatusCode, Json<SetupOutcome>) {
    let outcome = initialize_database(&state.db, state.config.seed_on_init).await;

    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(outcome))
}

/// Validate the database schema.
///
/// GET /db-validate
///
/// Reports found and missing tables against the required table list.
pub async fn db_validate(State(db): State<DbPool>) -> Result<Json<ValidateResponse>, AppError> {
    let report = db::validate_schema(&db).await?;

    let message = if report.valid {
        "Database schema is valid".to_string()
    } else {
        format!("Missing tables: {}", report.missing.join(", "))
    };

    Ok(Json(ValidateResponse {
        valid: report.valid,
        message,
        tables: report.tables,
        missing: report.missing,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sql_missing_both_fields() {
        let request = ExecuteSqlRequest {
            sql: None,
            sql_base64: None,
        };
        let err = resolve_sql(&request).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_resolve_sql_plain() {
        let request = ExecuteSqlRequest {
            sql: Some("  SELECT 1  ".to_string()),
            sql_base64: None,
        };
        assert_eq!(resolve_sql(&request).unwrap(), "SELECT 1");
    }

    #[test]
    fn test_resolve_sql_base64() {
        let request = ExecuteSqlRequest {
            sql: None,
            sql_base64: Some(BASE64.encode("SELECT 1")),
        };
        assert_eq!(resolve_sql(&request).unwrap(), "SELECT 1");
    }

    #[test]
    fn test_resolve_sql_invalid_base64() {
        let request = ExecuteSqlRequest {
            sql: None,
            sql_base64: Some("not base64!!!".to_string()),
        };
        let err = resolve_sql(&request).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_setup_action_parsing() {
        assert_eq!(
            "createTables".parse::<SetupAction>().unwrap(),
            SetupAction::CreateTables
        );
        assert_eq!(
            "seedDatabase".parse::<SetupAction>().unwrap(),
            SetupAction::SeedDatabase
        );
        assert!("dropTables".parse::<SetupAction>().is_err());
        assert!("".parse::<SetupAction>().is_err());
    }

    #[test]
    fn test_setup_request_deserialization() {
        let request: DbSetupRequest = serde_json::from_str(r#"{"action": "createTables"}"#).unwrap();
        assert_eq!(request.action.as_deref(), Some("createTables"));

        let request: DbSetupRequest = serde_json::from_str("{}").unwrap();
        assert!(request.action.is_none());
    }

    #[test]
    fn test_validate_response_serialization() {
        let response = ValidateResponse {
            valid: false,
            message: "Missing tables: enrollments".to_string(),
            tables: vec!["schools".to_string()],
            missing: vec!["enrollments".to_string()],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"valid\":false"));
        assert!(json.contains("\"missing\":[\"enrollments\"]"));
    }
}
