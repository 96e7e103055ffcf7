//! User account repository.
//!
//! Write side of the user table, used by operator tooling and tests. All
//! statements use bound parameters.

use sqlx::PgPool;

use super::RepositoryError;

/// Repository for user account database operations.
pub struct UserAccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserAccountRepository<'a> {
    /// Create a new user account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user account and return its ID.
    ///
    /// Logins are not unique; inserting an existing login adds a second row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        login: &str,
        secret: &str,
        display_name: &str,
    ) -> Result<i32, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO credcheck.user_account (login, secret, display_name)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(login)
        .bind(secret)
        .bind(display_name)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Count accounts registered under a login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the count is negative.
    pub async fn count_by_login(&self, login: &str) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM credcheck.user_account
            WHERE login = $1
            ",
        )
        .bind(login)
        .fetch_one(self.pool)
        .await?;

        u64::try_from(count)
            .map_err(|_| RepositoryError::DataCorruption(format!("negative row count: {count}")))
    }
}
