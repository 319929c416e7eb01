use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Challenge (e.g. `auth`, `least-privilege`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChallengeId(String);

impl ChallengeId {
    /// Creates a new `ChallengeId`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the identifier is empty or contains whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseIdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ParseIdError { raw });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChallengeId({})", self.0)
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ChallengeId> for String {
    fn from(id: ChallengeId) -> Self {
        id.0
    }
}

impl TryFrom<String> for ChallengeId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing a `ChallengeId` from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid challenge id: {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ChallengeId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_id_display() {
        let id = ChallengeId::new("rbac").unwrap();
        assert_eq!(id.to_string(), "rbac");
        assert_eq!(format!("{id:?}"), "ChallengeId(rbac)");
    }

    #[test]
    fn challenge_id_trims_input() {
        let id: ChallengeId = "  least-privilege ".parse().unwrap();
        assert_eq!(id.as_str(), "least-privilege");
    }

    #[test]
    fn challenge_id_rejects_empty_and_inner_whitespace() {
        assert!("".parse::<ChallengeId>().is_err());
        assert!("   ".parse::<ChallengeId>().is_err());
        assert!("access control".parse::<ChallengeId>().is_err());
    }

    #[test]
    fn challenge_id_deserializes_through_validation() {
        let id: ChallengeId = serde_json::from_str("\"authz\"").unwrap();
        assert_eq!(id.as_str(), "authz");
        assert!(serde_json::from_str::<ChallengeId>("\"\"").is_err());
    }
}
