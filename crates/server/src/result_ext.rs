//! Result extension trait for logging errors with context.
//!
//! This module provides a `ResultExt` trait that adds a `log` method
//! to `Result` types for automatic error logging with context.

use std::fmt::Display;
use tracing::error;

/// Extension trait for logging errors with context.
///
/// This trait adds a `log` method to `Result` types that logs
/// errors with the provided context message and source location.
pub trait ResultExt<T, E> {
    /// Log the error with context if this is an `Err` variant.
    ///
    /// # Arguments
    ///
    /// * `context` - A context message to include in the log
    ///
    /// # Returns
    ///
    /// The original `Result` unchanged.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use educar_server::result_ext::ResultExt;
    ///
    /// let result: Result<i32, &str> = Err("something went wrong");
    /// let _ = result.log("processing request");
    /// // Logs: "processing request" with error details
    /// ```
    fn log<S: ToString>(self, context: S) -> Result<T, E>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log<S: ToString>(self, context: S) -> Result<T, E> {
        if let Err(ref e) = self {
            let caller_location = std::panic::Location::caller();
            error!(
                target: "educar_server",
                error = %e,
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                context = %context.to_string(),
                "Operation failed"
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ext_ok() {
        let result: Result<i32, &str> = Ok(42);
        let logged = result.log("test context");
        assert_eq!(logged.unwrap(), 42);
    }

    #[test]
    fn test_result_ext_err() {
        let result: Result<i32, &str> = Err("test error");
        let logged = result.log("test context");
        assert!(logged.is_err());
    }
}
