//! Settings API handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::settings::SettingsService;

/// Offline-mode flag payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineModeBody {
    pub offline_mode: bool,
}

/// Read the offline-mode flag.
///
/// GET /api/settings/offline-mode
pub async fn get_offline_mode(
    State(service): State<SettingsService>,
) -> Result<Json<OfflineModeBody>, AppError> {
    let offline_mode = service.offline_mode().await?;
    Ok(Json(OfflineModeBody { offline_mode }))
}

/// Set the offline-mode flag.
///
/// POST /api/settings/offline-mode
pub async fn set_offline_mode(
    State(service): State<SettingsService>,
    Json(body): Json<OfflineModeBody>,
) -> Result<Json<OfflineModeBody>, AppError> {
    service.set_offline_mode(body.offline_mode).await?;
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_round_trip() {
        let body: OfflineModeBody = serde_json::from_str(r#"{"offline_mode": true}"#).unwrap();
        assert!(body.offline_mode);

        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"offline_mode":true}"#);
    }
}
