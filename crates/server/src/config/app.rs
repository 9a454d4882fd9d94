//! Application configuration for the Educar backend server.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `EDUCAR_`:
/// - `EDUCAR_HOST`: Server bind address (default: "0.0.0.0")
/// - `EDUCAR_PORT`: Server port (default: 8080)
/// - `EDUCAR_DEBUG`: Enable debug mode (default: false)
/// - `EDUCAR_ENVIRONMENT`: Environment name reported by `/db-check`
/// - `EDUCAR_SERVER_NAME`: Server name for identification
/// - `EDUCAR_SEED_ON_INIT`: Seed baseline rows during `/db-init` (default: true)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Environment name (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Server name for identification
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Whether database initialization also seeds baseline rows
    #[serde(default = "default_true")]
    pub seed_on_init: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_server_name() -> String {
    "educar-server".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `EDUCAR_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("EDUCAR_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            environment: default_environment(),
            server_name: default_server_name(),
            seed_on_init: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert!(config.seed_on_init);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
