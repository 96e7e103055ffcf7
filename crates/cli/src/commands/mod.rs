//! CLI subcommands.
//!
//! Every command loads [`VerifierConfig`] from the environment and opens
//! its own lazily connecting pool.

pub mod migrate;
pub mod ping;
pub mod user;
pub mod verify;

use credcheck_verifier::{ConfigError, PgStore, RepositoryError, VerifierConfig, VerifyError};
use secrecy::SecretString;
use thiserror::Error;

/// Environment variable holding the user secret for `user add` and `verify`.
///
/// Read from the environment so it never shows up in shell history or `ps`.
pub const USER_SECRET_VAR: &str = "CREDCHECK_USER_SECRET";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Verification or connectivity failure.
    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// User record write failure.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Output serialization failure.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load configuration from the environment.
fn load_config() -> Result<VerifierConfig, CommandError> {
    let config = VerifierConfig::from_env()?;
    tracing::info!(
        "Using credential store {}@{}:{}/{}",
        config.user,
        config.host,
        config.port,
        config.database
    );
    Ok(config)
}

/// Load configuration and build a store from it.
fn open_store() -> Result<PgStore, CommandError> {
    Ok(PgStore::connect_lazy(&load_config()?))
}

/// Read the user secret from the environment or `.env`.
fn user_secret() -> Result<SecretString, CommandError> {
    dotenvy::var(USER_SECRET_VAR)
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar(USER_SECRET_VAR))
}
