//! Login/secret pair presented for verification.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};

/// A login identifier and its secret, as supplied by the caller.
///
/// Both values are kept byte-for-byte as given: no trimming, no case
/// folding, no validation. Empty strings and strings containing quotes or
/// control characters are legal and are only ever bound as query parameters.
///
/// Implements `Debug` manually to redact the secret.
#[derive(Clone)]
pub struct Credentials {
    login: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from a login and a secret.
    #[must_use]
    pub fn new(login: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Create credentials from a login and an already-wrapped secret.
    #[must_use]
    pub fn from_secret(login: impl Into<String>, secret: SecretString) -> Self {
        Self {
            login: login.into(),
            secret,
        }
    }

    /// The login identifier.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The secret, wrapped so it must be exposed explicitly.
    #[must_use]
    pub const fn secret(&self) -> &SecretString {
        &self.secret
    }

    /// Shorthand for `self.secret().expose_secret()`.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("alice", "s3cr3t-value");
        let debug_output = format!("{credentials:?}");

        assert!(debug_output.contains("alice"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("s3cr3t-value"));
    }

    #[test]
    fn test_values_preserved_exactly() {
        let credentials = Credentials::new("  Alice ", " S3CR3T\t");
        assert_eq!(credentials.login(), "  Alice ");
        assert_eq!(credentials.expose_secret(), " S3CR3T\t");
    }

    #[test]
    fn test_empty_values_allowed() {
        let credentials = Credentials::new("", "");
        assert_eq!(credentials.login(), "");
        assert_eq!(credentials.expose_secret(), "");
    }

    #[test]
    fn test_from_secret() {
        let credentials =
            Credentials::from_secret("bob", SecretString::from("hunter2".to_owned()));
        assert_eq!(credentials.login(), "bob");
        assert_eq!(credentials.secret().expose_secret(), "hunter2");
    }
}
