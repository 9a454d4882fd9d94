//! Configuration module for the Educar backend server.
//!
//! Configuration is loaded from environment variables (optionally via a
//! `.env` file) using `envy` with per-field serde defaults.

pub mod app;
pub mod database;

pub use app::AppConfig;
pub use database::DatabaseConfig;
