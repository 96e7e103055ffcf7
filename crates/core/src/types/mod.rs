//! Core types for credcheck.

pub mod credentials;
pub mod verification;

pub use credentials::Credentials;
pub use verification::VerificationResult;
