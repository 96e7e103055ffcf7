//! Verifier configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CREDCHECK_DB_NAME` - Database holding the user table
//! - `CREDCHECK_DB_USER` - Database role to connect as
//! - `CREDCHECK_DB_PASSWORD` - Password for that role
//!
//! ## Optional
//! - `CREDCHECK_DB_HOST` - Database host (default: 127.0.0.1)
//! - `CREDCHECK_DB_PORT` - Database port (default: 5432)
//! - `CREDCHECK_DB_TIMEOUT_SECS` - Connection acquire and lookup timeout (default: 10)
//! - `CREDCHECK_DB_MAX_CONNECTIONS` - Pool size (default: 10)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "5432";
const DEFAULT_TIMEOUT_SECS: &str = "10";
const DEFAULT_MAX_CONNECTIONS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the credential store.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Database host name or IP address
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database name
    pub database: String,
    /// Database role
    pub user: String,
    /// Database role password
    pub password: SecretString,
    /// Time limit for obtaining a pooled connection, and separately for the lookup
    pub timeout: Duration,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl VerifierConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host = env.or_default("CREDCHECK_DB_HOST", DEFAULT_HOST);
        let port = env
            .or_default("CREDCHECK_DB_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CREDCHECK_DB_PORT".to_owned(), e.to_string()))?;
        let database = env.required("CREDCHECK_DB_NAME")?;
        let user = env.required("CREDCHECK_DB_USER")?;
        let password = SecretString::from(env.required("CREDCHECK_DB_PASSWORD")?);

        let timeout_secs = parse_positive::<u64>(
            "CREDCHECK_DB_TIMEOUT_SECS",
            &env.or_default("CREDCHECK_DB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        )?;
        let max_connections = parse_positive::<u32>(
            "CREDCHECK_DB_MAX_CONNECTIONS",
            &env.or_default("CREDCHECK_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
        )?;

        Ok(Self {
            host,
            port,
            database,
            user,
            password,
            timeout: Duration::from_secs(timeout_secs),
            max_connections,
        })
    }

    /// Build driver connect options from the individual fields.
    ///
    /// Each field is set through its own builder method; no connection URL
    /// is assembled. The server-side `statement_timeout` is set to
    /// [`timeout`](Self::timeout) so a stalled statement is cancelled on the
    /// server as well.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(self.password.expose_secret())
            .application_name("credcheck")
            .options([("statement_timeout", self.timeout.as_millis())])
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the required/default helpers.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get a required variable.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        (self.0)(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_owned()))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        (self.0)(key).unwrap_or_else(|| default.to_owned())
    }
}

/// Parse a numeric variable that must be greater than zero.
fn parse_positive<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let parsed = value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))?;
    if parsed == T::default() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "must be greater than zero".to_owned(),
        ));
    }
    Ok(parsed)
}
