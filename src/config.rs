//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL,
    DEFAULT_SEED_ATHLETE_COUNT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_EXPIRY_HOURS, DEFAULT_USER_PASSWORD,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Login session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub expiry_hours: i64,
    /// Mark the session cookie `Secure` (only sent over HTTPS)
    pub cookie_secure: bool,
}

/// Initial data written to an empty database
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Generate sample athletes, events and results
    pub sample_data: bool,
    pub athlete_count: usize,
    pub admin_password: String,
    pub user_password: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            session: SessionConfig::from_env()?,
            seed: SeedConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        if !url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue("DATABASE_URL".to_string()));
        }

        Ok(Self {
            url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let expiry_hours = parse_var("SESSION_EXPIRY_HOURS", DEFAULT_SESSION_EXPIRY_HOURS)?;
        if expiry_hours <= 0 {
            return Err(ConfigError::InvalidValue("SESSION_EXPIRY_HOURS".to_string()));
        }

        Ok(Self {
            expiry_hours,
            cookie_secure: parse_var("SESSION_COOKIE_SECURE", false)?,
        })
    }
}

impl SeedConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sample_data: parse_var("SEED_SAMPLE_DATA", true)?,
            athlete_count: parse_var("SEED_ATHLETE_COUNT", DEFAULT_SEED_ATHLETE_COUNT)?,
            admin_password: env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            user_password: env::var("SEED_USER_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_USER_PASSWORD.to_string()),
        })
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
