//! Business-logic services for the Educar backend.
//!
//! Each service owns a clone of the connection pool and exposes the
//! operations its handlers need.

pub mod enrollment;
pub mod school;
pub mod settings;
pub mod setup;
pub mod teacher;

pub use enrollment::EnrollmentService;
pub use school::SchoolService;
pub use settings::SettingsService;
pub use setup::{initialize_database, SetupOutcome};
pub use teacher::TeacherService;
