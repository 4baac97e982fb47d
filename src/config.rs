use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Database settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset or unparsable optional
    /// values fall back to their defaults.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            url,
            max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 10),
            min_connections: parse_or(&var, "DB_MIN_CONNECTIONS", 1),
            connect_timeout: Duration::from_secs(parse_or(&var, "DB_CONNECT_TIMEOUT_SECS", 8)),
            sqlx_logging: parse_or(&var, "DB_SQLX_LOGGING", false),
        })
    }
}

fn parse_or<F, T>(var: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{name}={raw} is not valid, using the default");
            default
        }),
        None => default,
    }
}
