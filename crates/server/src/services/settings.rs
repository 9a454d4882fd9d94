//! Application settings service.
//!
//! Settings live in the `app_setting` table as key/JSONB pairs. The
//! offline-mode flag is read from there at startup and mutated only
//! through [`SettingsService::set_offline_mode`]; there is no module-level
//! mutable state.

use crate::db::DbPool;
use crate::error::AppResult;

/// Key of the offline-mode flag in `app_setting`.
pub const OFFLINE_MODE_KEY: &str = "offline_mode";

/// Application settings service.
#[derive(Clone)]
pub struct SettingsService {
    db: DbPool,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Read the offline-mode flag. Missing or non-boolean values read
    /// as `false`.
    pub async fn offline_mode(&self) -> AppResult<bool> {
        let value: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT value FROM app_setting WHERE key = $1")
                .bind(OFFLINE_MODE_KEY)
                .fetch_optional(&self.db)
                .await?;

        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }

    /// Set the offline-mode flag. The single mutation path for the flag.
    pub async fn set_offline_mode(&self, enabled: bool) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO app_setting (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(OFFLINE_MODE_KEY)
        .bind(serde_json::json!(enabled))
        .execute(&self.db)
        .await?;

        tracing::info!(offline_mode = enabled, "Offline mode updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_key_matches_seeded_row() {
        assert_eq!(OFFLINE_MODE_KEY, "offline_mode");
    }

    #[test]
    fn test_missing_value_reads_as_false() {
        let value: Option<serde_json::Value> = None;
        assert!(!value.and_then(|v| v.as_bool()).unwrap_or(false));
    }

    #[test]
    fn test_non_boolean_value_reads_as_false() {
        let value = Some(serde_json::json!("yes"));
        assert!(!value.and_then(|v| v.as_bool()).unwrap_or(false));
    }
}
