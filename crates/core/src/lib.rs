//! credcheck Core - Shared types library.
//!
//! This crate provides the types exchanged with the credential verifier:
//! - `verifier` - Looks credentials up in the backing store
//! - `cli` - Operator tooling for migrations, user records and ad-hoc checks
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. This
//! keeps it lightweight so callers embedding the verifier can depend on it
//! without pulling in a database driver.
//!
//! # Modules
//!
//! - [`types`] - Credentials input and the verification outcome

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
