//! Credential store connector seam.
//!
//! The verifier only needs two things from a backing store: a scoped
//! connection, and a parameterized lookup on that connection. Production
//! code uses [`PgStore`](crate::db::PgStore); tests plug in an in-memory
//! store.

use std::future::Future;

/// Source of scoped connections to the user table.
///
/// A connection returned by [`acquire`](Self::acquire) is released when it is
/// dropped. Implementations backed by a pool hand it back to the pool; the
/// verifier never keeps one beyond a single call.
pub trait CredentialStore: Send + Sync {
    /// Connection type handed out per verification.
    type Connection: StoreConnection + Send;

    /// Obtain a connection for the duration of one verification.
    fn acquire(&self) -> impl Future<Output = Result<Self::Connection, sqlx::Error>> + Send;
}

/// A connection able to run the credential lookup.
pub trait StoreConnection {
    /// Fetch display names of records whose login and secret equal the
    /// given values exactly.
    ///
    /// `login` and `secret` must be bound as query parameters. At most two
    /// names are returned, in the store's natural row order; a second name
    /// only signals that the login is not unique.
    fn fetch_display_names(
        &mut self,
        login: &str,
        secret: &str,
    ) -> impl Future<Output = Result<Vec<String>, sqlx::Error>> + Send;
}
