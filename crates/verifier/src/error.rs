//! Verification error types.

use thiserror::Error;

/// Errors that can occur while verifying credentials.
///
/// None of these mean "credentials rejected". Callers must treat the outcome
/// as indeterminate and deny access. The `Display` output includes driver
/// detail and is meant for logs; show end users [`VerifyError::public_message`].
#[derive(Debug, Error)]
pub enum VerifyError {
    /// No connection to the credential store could be obtained
    /// (network, authentication, configuration, or pool timeout).
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    /// A connection was obtained but the lookup could not be executed or
    /// its rows could not be read.
    #[error("credential lookup failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// The caller aborted the verification before it completed.
    #[error("verification cancelled")]
    Cancelled,
}

impl VerifyError {
    /// A fixed message that is safe to show to an end user.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) | Self::QueryFailed(_) => {
                "Sign-in is temporarily unavailable. Please try again later."
            }
            Self::Cancelled => "Sign-in was interrupted. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_source_detail() {
        let err = VerifyError::StoreUnavailable(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("credential store unavailable: "));

        let err = VerifyError::QueryFailed(sqlx::Error::Protocol("unexpected eof".to_owned()));
        assert!(err.to_string().contains("unexpected eof"));
    }

    #[test]
    fn test_public_message_hides_detail() {
        let err = VerifyError::QueryFailed(sqlx::Error::Protocol(
            "relation \"credcheck.user_account\" does not exist".to_owned(),
        ));
        let message = err.public_message();
        assert!(!message.contains("credcheck"));
        assert!(!message.contains("relation"));
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error as _;

        let err = VerifyError::StoreUnavailable(sqlx::Error::PoolTimedOut);
        assert!(err.source().is_some());
        assert!(VerifyError::Cancelled.source().is_none());
    }
}
