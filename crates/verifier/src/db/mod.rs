//! Database operations for the credential store `PostgreSQL`.
//!
//! ## Tables
//!
//! - `credcheck.user_account` - Login, secret and display name per user
//!
//! # Migrations
//!
//! Migrations are stored in `crates/verifier/migrations/`, embedded as
//! [`MIGRATOR`], and run via:
//! ```bash
//! cargo run -p credcheck-cli -- migrate
//! ```

pub mod user_accounts;

use sqlx::migrate::Migrator;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use thiserror::Error;
use tracing::instrument;

pub use user_accounts::UserAccountRepository;

use crate::config::VerifierConfig;
use crate::error::VerifyError;
use crate::store::{CredentialStore, StoreConnection};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Credential lookup. Both values are bound, never spliced into the text.
///
/// No `ORDER BY`: duplicates come back in the table's natural order and the
/// caller takes the first. `LIMIT 2` is enough to notice a duplicate.
const LOOKUP_DISPLAY_NAMES: &str = r"
    SELECT display_name
    FROM credcheck.user_account
    WHERE login = $1 AND secret = $2
    LIMIT 2
";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// `PostgreSQL`-backed credential store.
///
/// Cloning is cheap and shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store whose pool connects on first use.
    ///
    /// Nothing is dialled here, so an unreachable database surfaces as
    /// [`VerifyError::StoreUnavailable`] on the first verification rather
    /// than at construction.
    #[must_use]
    pub fn connect_lazy(config: &VerifierConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(config.timeout)
            .connect_lazy_with(config.connect_options());

        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            max_connections = config.max_connections,
            "Credential store pool configured"
        );

        Self { pool }
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check that the store answers a trivial query.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::StoreUnavailable` if no connection can be
    /// obtained and `VerifyError::QueryFailed` if the query itself fails.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), VerifyError> {
        let mut conn = self.acquire().await.map_err(VerifyError::StoreUnavailable)?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(VerifyError::QueryFailed)?;
        Ok(())
    }

    /// Apply embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::migrate::MigrateError` if a migration fails.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(&self.pool).await
    }
}

impl CredentialStore for PgStore {
    type Connection = PoolConnection<Postgres>;

    async fn acquire(&self) -> Result<Self::Connection, sqlx::Error> {
        self.pool.acquire().await
    }
}

impl StoreConnection for PoolConnection<Postgres> {
    async fn fetch_display_names(
        &mut self,
        login: &str,
        secret: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(LOOKUP_DISPLAY_NAMES)
            .bind(login)
            .bind(secret)
            .fetch_all(&mut **self)
            .await
    }
}
