//! Database module for the Educar backend server.
//!
//! This module provides connectivity, the raw-SQL executor, the idempotent
//! schema definition, and the baseline seeder for PostgreSQL using SQLx.

pub mod executor;
pub mod pool;
pub mod schema;
pub mod seed;

pub use executor::{execute_statement, run_query, ExecutionResult};
pub use pool::{create_pool, ping, DbPool};
pub use schema::{create_tables, validate_schema, SchemaReport};
pub use seed::seed_database;
