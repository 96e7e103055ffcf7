//! Credential verification.

use std::future::Future;
use std::time::Duration;

use credcheck_core::{Credentials, VerificationResult};
use tracing::{debug, instrument, warn};

use crate::config::VerifierConfig;
use crate::db::PgStore;
use crate::error::VerifyError;
use crate::store::{CredentialStore, StoreConnection};

/// Lookup time limit used unless one is configured.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Checks login/secret pairs against the user table.
///
/// Holds no per-call state, so one verifier can serve any number of
/// concurrent callers. Each call acquires its own connection from the store
/// and drops it before returning. The lookup on that connection is bounded
/// by a query timeout, so a stalled store surfaces as an error.
#[derive(Debug, Clone)]
pub struct CredentialVerifier<S> {
    store: S,
    query_timeout: Duration,
}

impl CredentialVerifier<PgStore> {
    /// Create a `PostgreSQL` verifier whose pool acquisition and lookup are
    /// both bounded by `config.timeout`.
    #[must_use]
    pub fn connect_lazy(config: &VerifierConfig) -> Self {
        Self::new(PgStore::connect_lazy(config)).with_query_timeout(config.timeout)
    }
}

impl<S: CredentialStore> CredentialVerifier<S> {
    /// Create a verifier over a credential store with
    /// [`DEFAULT_QUERY_TIMEOUT`].
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Replace the lookup time limit.
    #[must_use]
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// The lookup time limit.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Verify credentials against the store.
    ///
    /// Returns [`VerificationResult::Matched`] with the record's display name
    /// when a record has exactly this login and secret, and
    /// [`VerificationResult::NotMatched`] otherwise. If several records match,
    /// the first in the store's natural order wins and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::StoreUnavailable` if no connection can be obtained.
    /// Returns `VerifyError::QueryFailed` if the lookup fails or does not
    /// finish within the query timeout.
    #[instrument(skip(self, credentials), fields(login = %credentials.login()))]
    pub async fn verify(&self, credentials: &Credentials) -> Result<VerificationResult, VerifyError> {
        let mut conn = self.store.acquire().await.map_err(|e| {
            warn!(error = %e, "Could not acquire credential store connection");
            VerifyError::StoreUnavailable(e)
        })?;

        let lookup = conn.fetch_display_names(credentials.login(), credentials.expose_secret());
        let names = tokio::time::timeout(self.query_timeout, lookup)
            .await
            .unwrap_or_else(|_| Err(lookup_timed_out(self.query_timeout)))
            .map_err(|e| {
                warn!(error = %e, "Credential lookup failed");
                VerifyError::QueryFailed(e)
            })?;

        drop(conn);

        if names.len() > 1 {
            warn!("Multiple user records share this login and secret, using the first");
        }

        let result = VerificationResult::from(names.into_iter().next());
        debug!(matched = result.is_matched(), "Verification complete");

        Ok(result)
    }

    /// Verify credentials, giving up as soon as `cancel` completes.
    ///
    /// Cancellation drops the in-flight lookup, which releases its
    /// connection. A `cancel` future that is already complete wins without
    /// touching the store.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Cancelled` if `cancel` completes first, or any
    /// error [`verify`](Self::verify) returns.
    pub async fn verify_until<F>(
        &self,
        credentials: &Credentials,
        cancel: F,
    ) -> Result<VerificationResult, VerifyError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                warn!(login = %credentials.login(), "Verification cancelled by caller");
                Err(VerifyError::Cancelled)
            }
            result = self.verify(credentials) => result,
        }
    }

    /// Verify credentials with a deadline.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Cancelled` if the deadline passes first, or any
    /// error [`verify`](Self::verify) returns.
    pub async fn verify_within(
        &self,
        credentials: &Credentials,
        deadline: Duration,
    ) -> Result<VerificationResult, VerifyError> {
        self.verify_until(credentials, tokio::time::sleep(deadline))
            .await
    }
}

/// Driver-shaped error for a lookup that ran past its time limit.
fn lookup_timed_out(limit: Duration) -> sqlx::Error {
    sqlx::Error::Io(std::io::Error::new(
        std::io::ErrorKind::TimedOut,
        format!("credential lookup timed out after {limit:?}"),
    ))
}
