//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `APP_BASE_URL` - Public URL for the application
//! - `CANTEEN_SERVICE_URL` - Base URL of the canteen data service
//! - `CANTEEN_SERVICE_KEY` - Service API key for the data service
//!
//! ## Optional
//! - `APP_HOST` - Bind address (default: 127.0.0.1)
//! - `APP_PORT` - Listen port (default: 3000)
//! - `CANTEEN_UTC_OFFSET` - Cafeteria wall-clock offset from UTC (default: +00:00)
//! - `ORDER_CUTOFF_HOUR` - Local hour the ordering window closes (default: 21)
//! - `REMINDER_START_HOUR` - Local hour the reminder band opens (default: 17)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//!
//! The cafeteria's timezone and cutoff are explicit configuration, never the
//! evaluating machine's local clock: every deadline comparison goes through
//! `CANTEEN_UTC_OFFSET`.

use std::net::{IpAddr, SocketAddr};

use chrono::FixedOffset;
use secrecy::SecretString;
use thiserror::Error;

use smart_canteen_core::reminder::DEFAULT_WINDOW_START_HOUR;
use smart_canteen_core::schedule::DEFAULT_CUTOFF_HOUR;

/// Blocklist of common placeholder patterns (case-insensitive).
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct CanteenConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the application
    pub base_url: String,
    /// Canteen data service configuration
    pub service: CanteenServiceConfig,
    /// Cafeteria wall-clock offset from UTC
    pub utc_offset: FixedOffset,
    /// Local hour the ordering window closes
    pub cutoff_hour: u32,
    /// Local hour the reminder band opens
    pub reminder_start_hour: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Canteen data service configuration.
///
/// Implements `Debug` manually to redact the service key.
#[derive(Clone)]
pub struct CanteenServiceConfig {
    /// Base URL of the data service (e.g. <https://canteen.example.supabase.co>)
    pub url: String,
    /// Service API key (server-side only)
    pub service_key: SecretString,
}

impl std::fmt::Debug for CanteenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanteenServiceConfig")
            .field("url", &self.url)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}

impl CanteenConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("APP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("APP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("APP_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("APP_BASE_URL")?;

        let service = CanteenServiceConfig::from_env()?;
        let utc_offset = get_utc_offset()?;
        let cutoff_hour = get_hour_or_default("ORDER_CUTOFF_HOUR", DEFAULT_CUTOFF_HOUR)?;
        let reminder_start_hour =
            get_hour_or_default("REMINDER_START_HOUR", DEFAULT_WINDOW_START_HOUR)?;
        if reminder_start_hour >= cutoff_hour {
            return Err(ConfigError::InvalidEnvVar(
                "REMINDER_START_HOUR".to_string(),
                format!("must be before ORDER_CUTOFF_HOUR ({cutoff_hour})"),
            ));
        }

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            service,
            utc_offset,
            cutoff_hour,
            reminder_start_hour,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CanteenServiceConfig {
    /// Load just the data-service settings from the environment.
    ///
    /// Also used by the CLI, which needs the client but not the web stack.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CANTEEN_SERVICE_URL` or
    /// `CANTEEN_SERVICE_KEY` are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let url = get_required_env("CANTEEN_SERVICE_URL")?;
        let url = url.trim_end_matches('/').to_string();
        let service_key = get_validated_secret("CANTEEN_SERVICE_KEY")?;

        Ok(Self { url, service_key })
    }
}

/// Read the cafeteria's UTC offset from `CANTEEN_UTC_OFFSET`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if the value is not a `+HH:MM` /
/// `-HH:MM` offset.
pub fn get_utc_offset() -> Result<FixedOffset, ConfigError> {
    get_env_or_default("CANTEEN_UTC_OFFSET", "+00:00")
        .parse::<FixedOffset>()
        .map_err(|e| ConfigError::InvalidEnvVar("CANTEEN_UTC_OFFSET".to_string(), e.to_string()))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an hour-of-day variable (0-23) with a default.
fn get_hour_or_default(key: &str, default: u32) -> Result<u32, ConfigError> {
    let value = get_env_or_default(key, &default.to_string())
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value > 23 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("hour must be 0-23 (got {value})"),
        ));
    }
    Ok(value)
}

/// Validate that a secret is not an obvious placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }
    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InsecureSecret(_, _)
        ));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        assert!(validate_secret_strength("changeme123", "TEST_VAR").is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = CanteenConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            service: CanteenServiceConfig {
                url: "https://canteen.example.supabase.co".to_string(),
                service_key: SecretString::from("service-key"),
            },
            utc_offset: "+00:00".parse().unwrap(),
            cutoff_hour: 21,
            reminder_start_hour: 17,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_service_config_debug_redacts_key() {
        let config = CanteenServiceConfig {
            url: "https://canteen.example.supabase.co".to_string(),
            service_key: SecretString::from("super-secret-service-key"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("canteen.example.supabase.co"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-service-key"));
    }

    #[test]
    fn test_utc_offset_parses_half_hour() {
        let offset = "+05:30".parse::<FixedOffset>().unwrap();
        assert_eq!(offset.local_minus_utc(), (5 * 60 + 30) * 60);
    }
}
