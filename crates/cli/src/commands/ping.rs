//! Connectivity check.

use super::{CommandError, open_store};

/// Run `SELECT 1` against the credential store.
pub async fn run() -> Result<(), CommandError> {
    let store = open_store()?;
    store.ping().await?;

    tracing::info!("Credential store is reachable");
    Ok(())
}
