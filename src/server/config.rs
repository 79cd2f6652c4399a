use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub error_policy: ErrorPolicy,
}

/// Controls how failed requests are logged and what clients are told about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    /// Send the internal cause of 500 responses to the client instead of the generic message.
    pub display_errors: bool,
    /// Log every error response.
    pub log_errors: bool,
    /// Include the internal cause of the error in the log line.
    pub log_error_details: bool,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            display_errors: false,
            log_errors: true,
            log_error_details: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = ErrorPolicy::default();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            error_policy: ErrorPolicy {
                display_errors: env_flag("DISPLAY_ERRORS", defaults.display_errors)?,
                log_errors: env_flag("LOG_ERRORS", defaults.log_errors)?,
                log_error_details: env_flag("LOG_ERROR_DETAILS", defaults.log_error_details)?,
            },
        })
    }
}

/// Reads a boolean flag from the environment, falling back to `default` when unset.
fn env_flag(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
