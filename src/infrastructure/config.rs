//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables (and a
//! `.env` file when present). Every value has a default, so only malformed
//! values are errors.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `8080`)
//! - `SERVICE_NAME`: Service name reported by `/api/health`
//! - `APP_NAME`: Application name reported by `/api/info`
//! - `APP_DESCRIPTION`: Description reported by `/api/info`
//! - `APP_VERSION`: Version reported by both endpoints (default: crate version)
//! - `SEED_USERS`: Whether the store starts with demonstration users (default: `true`)

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SERVICE_NAME: &str = "user-registry";
const DEFAULT_APPLICATION_NAME: &str = "User Registry Sample App";
const DEFAULT_DESCRIPTION: &str = "Sample application for DevSecOps pipeline";
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// ConfigError
// =============================================================================

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// AppConfig
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Service name reported by the health endpoint.
    pub service_name: String,
    /// Application name reported by the info endpoint.
    pub application_name: String,
    /// Application description reported by the info endpoint.
    pub description: String,
    /// Version reported by the health and info endpoints.
    pub version: String,
    /// Whether the store starts with the demonstration users.
    pub seed_users: bool,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` or `SEED_USERS` is set
    /// to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<Lookup>(lookup: Lookup) -> Result<Self, ConfigError>
    where
        Lookup: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_optional(&lookup, "PORT", defaults.port)?,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            application_name: lookup("APP_NAME").unwrap_or(defaults.application_name),
            description: lookup("APP_DESCRIPTION").unwrap_or(defaults.description),
            version: lookup("APP_VERSION").unwrap_or(defaults.version),
            seed_users: parse_optional(&lookup, "SEED_USERS", defaults.seed_users)?,
        })
    }

    /// The `host:port` pair the server binds to.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: DEFAULT_VERSION.to_string(),
            seed_users: true,
        }
    }
}

fn parse_optional<Lookup, T>(lookup: &Lookup, key: &str, default: T) -> Result<T, ConfigError>
where
    Lookup: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}

// =============================================================================
// Tests
// =============================================================================
