//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::from_env()?;
//! config.validate()?;
//! println!("binding to {}", config.bind_address());
//! # Ok::<(), String>(())
//! ```

use lib_utils::{get_env_or, get_env_parse_or};

/// Log levels accepted in `LOG_LEVEL`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Interface to bind (`HOST`, default `0.0.0.0`)
    pub host: String,

    /// TCP port to listen on (`PORT`, default `3000`)
    pub port: u16,

    /// Log level for the tracing subscriber (`LOG_LEVEL`, default `info`)
    pub log_level: String,

    /// Origins allowed by CORS (`ALLOWED_ORIGINS`, comma separated)
    pub allowed_origins: Vec<String>,

    /// Free-form deployment label (`APP_ENV`, default `development`)
    pub app_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            app_env: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables take their [`Default`] value. A variable that is set but
    /// cannot be parsed is an error.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let host = get_env_or("HOST", &defaults.host);

        let port = get_env_parse_or("PORT", defaults.port)
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        let log_level = get_env_or("LOG_LEVEL", &defaults.log_level).to_lowercase();

        let allowed_origins = match lib_utils::get_env("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => defaults.allowed_origins,
        };

        let app_env = get_env_or("APP_ENV", &defaults.app_env);

        Ok(Self {
            host,
            port,
            log_level,
            allowed_origins,
            app_env,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("HOST cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be between 1 and 65535".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        Ok(())
    }

    /// Socket address string the server binds to, e.g. `0.0.0.0:3000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let config = Config { port: 0, ..Config::default() };
        assert!(config.validate().unwrap_err().contains("PORT"));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let config = Config { log_level: "loud".to_string(), ..Config::default() };
        assert!(config.validate().unwrap_err().contains("LOG_LEVEL"));
    }

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
// endregion: --- Tests
