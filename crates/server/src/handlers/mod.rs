//! HTTP handlers for the Educar backend API.
//!
//! This module contains all route handlers organized by domain.

pub mod dashboard;
pub mod database;
pub mod enrollments;
pub mod health;
pub mod schools;
pub mod settings;
pub mod system;
pub mod teachers;

pub use health::{db_check, health_check};
