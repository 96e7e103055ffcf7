//! User record commands.
//!
//! # Usage
//!
//! ```bash
//! CREDCHECK_USER_SECRET=s3cr3t credcheck user add -l alice -n "Alice A."
//! ```

use credcheck_verifier::UserAccountRepository;
use secrecy::ExposeSecret;

use super::{CommandError, open_store, user_secret};

/// Add a user record.
///
/// # Returns
///
/// The ID of the created row.
pub async fn add(login: &str, display_name: &str) -> Result<i32, CommandError> {
    let store = open_store()?;
    let secret = user_secret()?;
    let users = UserAccountRepository::new(store.pool());

    let existing = users.count_by_login(login).await?;
    if existing > 0 {
        tracing::warn!(
            "{existing} record(s) already use login {login:?}; verification will pick the first match"
        );
    }

    let id = users
        .create(login, secret.expose_secret(), display_name)
        .await?;

    tracing::info!("User created successfully! ID: {id}, Login: {login}");
    Ok(id)
}
