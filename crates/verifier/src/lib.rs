//! credcheck Verifier - Checks login/secret pairs against a user table.
//!
//! # Overview
//!
//! [`CredentialVerifier`] answers one question: do these credentials match a
//! stored record, and if so, what is the display name. Each call acquires a
//! connection from a [`CredentialStore`], runs a single parameterized lookup
//! and drops the connection before returning.
//!
//! ```rust,no_run
//! use credcheck_core::Credentials;
//! use credcheck_verifier::{CredentialVerifier, PgStore, VerifierConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VerifierConfig::from_env()?;
//! let verifier = CredentialVerifier::new(PgStore::connect_lazy(&config));
//!
//! let result = verifier.verify(&Credentials::new("alice", "s3cr3t")).await?;
//! if let Some(name) = result.display_name() {
//!     println!("welcome, {name}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Failure handling
//!
//! Store and query failures are returned as [`VerifyError`], never folded
//! into a "not matched" result. Callers should deny access and log the error.
//!
//! # Modules
//!
//! - [`config`] - Connection settings from the environment
//! - [`db`] - `PostgreSQL` store, migrations and user account repository
//! - [`error`] - Verification error taxonomy
//! - [`store`] - Connector traits the verifier is generic over
//! - [`verifier`] - The verifier itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod store;
pub mod verifier;

pub use config::{ConfigError, VerifierConfig};
pub use db::{MIGRATOR, PgStore, RepositoryError, UserAccountRepository};
pub use error::VerifyError;
pub use store::{CredentialStore, StoreConnection};
pub use verifier::CredentialVerifier;
