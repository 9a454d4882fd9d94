//! Database setup orchestration.
//!
//! Sequences schema creation and (optionally) seeding, and collapses any
//! failure into a single generic outcome. The detailed error goes to the
//! log for operators; external callers only ever see the generic message.

use serde::Serialize;

use crate::db::{create_tables, seed_database, DbPool, ExecutionResult};

/// Generic failure message returned to external callers. The underlying
/// error is logged, not surfaced.
pub const SETUP_FAILURE_MESSAGE: &str = "Failed to initialize database";

/// Outcome of a setup invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SetupOutcome {
    /// Whether setup completed.
    pub success: bool,

    /// Human-readable outcome message.
    pub message: String,
}

impl SetupOutcome {
    /// Generic failure outcome. Never embeds the underlying error text.
    pub fn failed() -> Self {
        Self {
            success: false,
            message: SETUP_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Successful outcome.
    pub fn done(seeded: bool) -> Self {
        Self {
            success: true,
            message: if seeded {
                "Database initialized and seeded".to_string()
            } else {
                "Database initialized".to_string()
            },
        }
    }
}

/// Initialize the database: create tables, then optionally seed.
///
/// Each invocation runs the full sequence from scratch; there is no retry
/// and no persisted state between invocations. Statements already applied
/// when a later one fails are not rolled back. Concurrent invocations may
/// interleave, which is acceptable because every statement is idempotent.
pub async fn initialize_database(pool: &DbPool, seed: bool) -> SetupOutcome {
    tracing::info!(seed, "Initializing database");

    let created = create_tables(pool).await;
    if let Some(outcome) = check(created, "schema creation") {
        return outcome;
    }

    if seed {
        let seeded = seed_database(pool).await;
        if let Some(outcome) = check(seeded, "seeding") {
            return outcome;
        }
    }

    tracing::info!("Database initialization complete");
    SetupOutcome::done(seed)
}

/// Map a failed execution to the generic outcome, logging the detail.
fn check(result: ExecutionResult, phase: &str) -> Option<SetupOutcome> {
    if result.success {
        return None;
    }
    tracing::error!(
        phase,
        error = %result.error.as_deref().unwrap_or("unknown error"),
        "Database setup failed"
    );
    Some(SetupOutcome::failed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_outcome_is_generic() {
        let outcome = check(
            ExecutionResult::failed("column \"nope\" does not exist"),
            "schema creation",
        )
        .expect("failed result maps to an outcome");

        assert!(!outcome.success);
        assert_eq!(outcome.message, SETUP_FAILURE_MESSAGE);
        assert!(!outcome.message.contains("nope"));
    }

    #[test]
    fn test_success_maps_to_no_outcome() {
        assert!(check(ExecutionResult::ok(), "seeding").is_none());
    }

    #[test]
    fn test_done_messages() {
        assert_eq!(SetupOutcome::done(true).message, "Database initialized and seeded");
        assert_eq!(SetupOutcome::done(false).message, "Database initialized");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&SetupOutcome::failed()).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("Failed to initialize database"));
    }
}
