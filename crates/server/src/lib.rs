//! Educar Backend Library
//!
//! This crate provides the backend server for Educar, a school
//! administration system, handling:
//!
//! - **Database Bootstrap**: Idempotent schema creation and baseline seeding
//! - **Raw SQL Execution**: Trusted SQL statements with value-typed results
//! - **School Administration**: CRUD for schools, teachers, and enrollments
//! - **Secretary Dashboard**: Aggregate statistics over the domain tables
//! - **Health Checks**: Liveness probe and database connection check
//!
//! ## Architecture
//!
//! All state lives in PostgreSQL; the server itself is stateless. Database
//! failures in the bootstrap pathway are converted into value-typed results
//! at the executor boundary and inspected, never thrown, so orchestration
//! code sequences heterogeneous statements uniformly.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Database connectivity, executor, schema, and seeder
//! - [`error`]: Custom error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`services`]: Business-logic services over the pool
//! - [`state`]: Shared application state
//!
//! ## Example
//!
//! ```ignore
//! use educar_server::{
//!     config::{AppConfig, DatabaseConfig},
//!     db::create_pool,
//!     state::AppState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app_config = AppConfig::from_env()?;
//!     let db_config = DatabaseConfig::from_env()?;
//!     let db_pool = create_pool(&db_config).await?;
//!     let state = AppState::new(db_pool, app_config);
//!     // ... build and run server
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod result_ext;
pub mod services;
pub mod state;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
