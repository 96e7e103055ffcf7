//! Ad-hoc verification command.
//!
//! # Usage
//!
//! ```bash
//! CREDCHECK_USER_SECRET=s3cr3t credcheck verify -l alice
//! CREDCHECK_USER_SECRET=s3cr3t credcheck verify -l alice --timeout-secs 2 --json
//! ```

use std::time::Duration;

use credcheck_core::{Credentials, VerificationResult};
use credcheck_verifier::CredentialVerifier;

use super::{CommandError, load_config, user_secret};

/// Verify `login` with the secret from the environment and print the result.
///
/// The lookup is always bounded by the configured timeout; `timeout_secs`
/// adds an overall deadline on top.
pub async fn run(
    login: &str,
    timeout_secs: Option<u64>,
    json: bool,
) -> Result<VerificationResult, CommandError> {
    let verifier = CredentialVerifier::connect_lazy(&load_config()?);
    let credentials = Credentials::from_secret(login, user_secret()?);

    let result = match timeout_secs {
        Some(secs) => {
            verifier
                .verify_within(&credentials, Duration::from_secs(secs))
                .await?
        }
        None => verifier.verify(&credentials).await?,
    };

    print_result(&result, json)?;
    Ok(result)
}

#[allow(clippy::print_stdout)]
fn print_result(result: &VerificationResult, json: bool) -> Result<(), CommandError> {
    println!("{}", render_result(result, json)?);
    Ok(())
}

/// Format a result as the single line `verify` prints.
fn render_result(result: &VerificationResult, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(result);
    }

    Ok(match result.display_name() {
        Some(name) => format!("matched: {name}"),
        None => "not matched".to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matched_text() {
        let line = render_result(&VerificationResult::matched("Alice A."), false).unwrap();
        assert_eq!(line, "matched: Alice A.");
    }

    #[test]
    fn test_render_not_matched_text() {
        let line = render_result(&VerificationResult::NotMatched, false).unwrap();
        assert_eq!(line, "not matched");
    }

    #[test]
    fn test_render_matched_json() {
        let line = render_result(&VerificationResult::matched("Alice A."), true).unwrap();
        assert_eq!(line, r#"{"matched":true,"display_name":"Alice A."}"#);
    }

    #[test]
    fn test_render_not_matched_json() {
        let line = render_result(&VerificationResult::NotMatched, true).unwrap();
        assert_eq!(line, r#"{"matched":false,"display_name":null}"#);
    }
}
