//! Health check endpoints for the Educar backend API.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::pool::ping;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Health status ("ok")
    pub status: String,
}

/// Environment metadata reported with every connection check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDetails {
    /// Environment name (development, staging, production)
    pub environment: String,

    /// Server version
    pub version: String,

    /// Server name
    pub server_name: String,

    /// Check timestamp, ISO-8601
    pub timestamp: String,
}

/// Connection check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Whether the database is reachable
    pub connected: bool,

    /// Driver error (if not connected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Failure message (if not connected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Environment metadata, present regardless of outcome
    pub details: ConnectionDetails,
}

/// Basic liveness probe.
///
/// `GET /health`
///
/// Returns quickly without touching the database; suitable for load
/// balancer health checks.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Database connection check.
///
/// `GET /db-check`
///
/// Performs the cheapest possible round trip to the database and reports
/// the outcome together with environment metadata. A failed check is
/// informational, never fatal: the error is reported in the body.
///
/// # Returns
///
/// - `200 OK` with `{connected: true, details}` when the database answers
/// - `500 Internal Server Error` with `{connected: false, error, message, details}` otherwise
pub async fn db_check(State(state): State<AppState>) -> (StatusCode, Json<ConnectionStatus>) {
    let details = connection_details(&state);

    match ping(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ConnectionStatus {
                connected: true,
                error: None,
                message: None,
                details,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database connection check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConnectionStatus {
                    connected: false,
                    error: Some(e.to_string()),
                    message: Some("Database connection failed".to_string()),
                    details,
                }),
            )
        }
    }
}

/// Build the environment metadata for a connection check.
fn connection_details(state: &AppState) -> ConnectionDetails {
    ConnectionDetails {
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        server_name: state.config.server_name.clone(),
        timestamp: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let details = ConnectionDetails {
            environment: "development".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            server_name: "educar-server".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };

        assert!(DateTime::parse_from_rfc3339(&details.timestamp).is_ok());
    }

    #[test]
    fn test_connected_status_omits_error_fields() {
        let status = ConnectionStatus {
            connected: true,
            error: None,
            message: None,
            details: ConnectionDetails {
                environment: "development".to_string(),
                version: "0.4.2".to_string(),
                server_name: "educar-server".to_string(),
                timestamp: Utc::now().to_rfc3339(),
            },
        };

        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"connected\":true"));
        assert!(!json.contains("\"error\""));
        assert!(!json.contains("\"message\""));
        assert!(json.contains("\"timestamp\""));
    }
}
