//! Verification outcome.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Outcome of a credential verification.
///
/// A display name exists if and only if the credentials matched, so there is
/// no way to build a "matched without a name" or "rejected with a name"
/// value.
///
/// Serializes as a flat `{"matched": bool, "display_name": string | null}`
/// record so consumers that expect the two-field shape can read it directly.
///
/// ## Examples
///
/// ```
/// use credcheck_core::VerificationResult;
///
/// let matched = VerificationResult::matched("Alice A.");
/// assert!(matched.is_matched());
/// assert_eq!(matched.display_name(), Some("Alice A."));
///
/// let rejected = VerificationResult::NotMatched;
/// assert!(!rejected.is_matched());
/// assert_eq!(rejected.display_name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VerificationResult {
    /// The credentials matched a stored record.
    Matched {
        /// Display name from the matching record.
        display_name: String,
    },
    /// No stored record matched.
    #[default]
    NotMatched,
}

impl VerificationResult {
    /// Create a matched result carrying the record's display name.
    #[must_use]
    pub fn matched(display_name: impl Into<String>) -> Self {
        Self::Matched {
            display_name: display_name.into(),
        }
    }

    /// Whether the credentials matched.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// The display name, present only for a match.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Matched { display_name } => Some(display_name),
            Self::NotMatched => None,
        }
    }

    /// Consume the result and return the display name, if matched.
    #[must_use]
    pub fn into_display_name(self) -> Option<String> {
        match self {
            Self::Matched { display_name } => Some(display_name),
            Self::NotMatched => None,
        }
    }
}

impl From<Option<String>> for VerificationResult {
    fn from(display_name: Option<String>) -> Self {
        display_name.map_or(Self::NotMatched, |display_name| Self::Matched { display_name })
    }
}

impl Serialize for VerificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VerificationResult", 2)?;
        state.serialize_field("matched", &self.is_matched())?;
        state.serialize_field("display_name", &self.display_name())?;
        state.end()
    }
}
