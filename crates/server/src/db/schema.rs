//! Idempotent schema definition and creation.
//!
//! The schema is a static, versionless list of `CREATE TABLE IF NOT EXISTS`
//! statements known at build time, ordered so that every foreign-key target
//! precedes the tables referencing it. Applying the full sequence twice
//! produces the same schema.

use crate::db::executor::{execute_statement, ExecutionResult};
use crate::db::DbPool;
use serde::Serialize;

/// One table of the schema: its name and creation statement.
pub struct TableDefinition {
    pub name: &'static str,
    pub ddl: &'static str,
}

/// Ordered schema definition. Parent tables come before tables with
/// foreign keys referencing them.
pub const SCHEMA: &[TableDefinition] = &[
    TableDefinition {
        name: "schools",
        ddl: "CREATE TABLE IF NOT EXISTS schools (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT,
            phone TEXT,
            email TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    },
    TableDefinition {
        name: "teachers",
        ddl: "CREATE TABLE IF NOT EXISTS teachers (
            id BIGSERIAL PRIMARY KEY,
            school_id BIGINT REFERENCES schools(id),
            name TEXT NOT NULL,
            email TEXT,
            subject TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    },
    TableDefinition {
        name: "classes",
        ddl: "CREATE TABLE IF NOT EXISTS classes (
            id BIGSERIAL PRIMARY KEY,
            school_id BIGINT NOT NULL REFERENCES schools(id),
            teacher_id BIGINT REFERENCES teachers(id),
            name TEXT NOT NULL,
            school_year INTEGER,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    },
    TableDefinition {
        name: "students",
        ddl: "CREATE TABLE IF NOT EXISTS students (
            id BIGSERIAL PRIMARY KEY,
            school_id BIGINT REFERENCES schools(id),
            name TEXT NOT NULL,
            birth_date DATE,
            guardian_name TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    },
    TableDefinition {
        name: "enrollments",
        ddl: "CREATE TABLE IF NOT EXISTS enrollments (
            id BIGSERIAL PRIMARY KEY,
            student_id BIGINT NOT NULL REFERENCES students(id),
            class_id BIGINT NOT NULL REFERENCES classes(id),
            status TEXT NOT NULL DEFAULT 'active',
            enrolled_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE (student_id, class_id)
        )",
    },
    TableDefinition {
        name: "app_setting",
        ddl: "CREATE TABLE IF NOT EXISTS app_setting (
            key TEXT PRIMARY KEY,
            value JSONB NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    },
];

/// Create all required tables in dependency order.
///
/// Stops at the first failing statement and surfaces that failure with the
/// offending table named. Statements already applied are not rolled back.
/// Re-running the whole sequence over an existing schema is a no-op.
pub async fn create_tables(pool: &DbPool) -> ExecutionResult {
    for table in SCHEMA {
        let result = execute_statement(pool, table.ddl).await;
        if !result.success {
            let error = result.error.unwrap_or_else(|| "unknown error".to_string());
            return ExecutionResult::failed(format!(
                "creating table '{}': {}",
                table.name, error
            ));
        }
        tracing::debug!(table = table.name, "Table ensured");
    }

    tracing::info!(tables = SCHEMA.len(), "Schema creation complete");
    ExecutionResult::ok()
}

/// Report of a schema validation pass.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReport {
    /// Whether every required table is present.
    pub valid: bool,

    /// Tables found in the database.
    pub tables: Vec<String>,

    /// Required tables that are missing.
    pub missing: Vec<String>,
}

/// Validate the database schema against the required table list.
pub async fn validate_schema(pool: &DbPool) -> Result<SchemaReport, sqlx::Error> {
    let existing: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables WHERE table_schema = 'public'",
    )
    .fetch_all(pool)
    .await?;

    let missing: Vec<String> = SCHEMA
        .iter()
        .filter(|t| !existing.contains(&t.name.to_string()))
        .map(|t| t.name.to_string())
        .collect();

    Ok(SchemaReport {
        valid: missing.is_empty(),
        tables: existing,
        missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_statement_is_idempotent() {
        for table in SCHEMA {
            assert!(
                table.ddl.trim_start().starts_with("CREATE TABLE IF NOT EXISTS"),
                "table '{}' is not created with IF NOT EXISTS",
                table.name
            );
        }
    }

    #[test]
    fn test_table_names_match_ddl() {
        for table in SCHEMA {
            assert!(
                table.ddl.contains(table.name),
                "ddl for '{}' does not mention the table name",
                table.name
            );
        }
    }

    #[test]
    fn test_foreign_key_targets_precede_referents() {
        for (idx, table) in SCHEMA.iter().enumerate() {
            let earlier: Vec<&str> = SCHEMA[..idx].iter().map(|t| t.name).collect();
            for segment in table.ddl.split("REFERENCES ").skip(1) {
                let target = segment
                    .split('(')
                    .next()
                    .expect("REFERENCES clause has a target")
                    .trim();
                assert!(
                    earlier.contains(&target),
                    "table '{}' references '{}' before it is defined",
                    table.name,
                    target
                );
            }
        }
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<&str> = SCHEMA.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SCHEMA.len());
    }
}
