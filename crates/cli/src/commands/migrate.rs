//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! credcheck migrate
//! ```
//!
//! # Migration Files
//!
//! Stored in `crates/verifier/migrations/` and embedded in the binary.

use super::{CommandError, open_store};

/// Apply all pending migrations.
pub async fn run() -> Result<(), CommandError> {
    let store = open_store()?;

    tracing::info!("Running credential store migrations...");
    store.migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
