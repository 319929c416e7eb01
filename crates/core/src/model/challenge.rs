use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::content::ChallengeContent;
use crate::model::ids::ChallengeId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge title cannot be empty")]
    EmptyTitle,

    #[error("challenge {id} has an interactive runner but no content")]
    MissingContent { id: ChallengeId },
}

//
// ─── RUNNER KIND ───────────────────────────────────────────────────────────────
//

/// Which simulation drives a challenge.
///
/// Static challenges have no runner: they only render their intro and lessons
/// and never report success on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeKind {
    Login,
    Authorization,
    Permissions,
    Rbac,
    LeastPrivilege,
    FederatedIdentity,
    #[default]
    StaticContent,
}

impl ChallengeKind {
    #[must_use]
    pub fn is_interactive(self) -> bool {
        !matches!(self, ChallengeKind::StaticContent)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeKind::Login => "login",
            ChallengeKind::Authorization => "authorization",
            ChallengeKind::Permissions => "permissions",
            ChallengeKind::Rbac => "rbac",
            ChallengeKind::LeastPrivilege => "least-privilege",
            ChallengeKind::FederatedIdentity => "federated-identity",
            ChallengeKind::StaticContent => "static-content",
        }
    }
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// One IAM lesson unit.
///
/// Every field is fixed at start-up except the completion flag, which only the
/// session flips (see [`crate::model::Session::complete_selected`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    description: String,
    principle: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    content: Option<ChallengeContent>,
    #[serde(default)]
    runner: ChallengeKind,
}

impl Challenge {
    /// Creates a new, incomplete challenge.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyTitle` if the trimmed title is empty.
    pub fn new(
        id: ChallengeId,
        title: impl Into<String>,
        description: impl Into<String>,
        principle: impl Into<String>,
        content: Option<ChallengeContent>,
        runner: ChallengeKind,
    ) -> Result<Self, ChallengeError> {
        let challenge = Self {
            id,
            title: title.into().trim().to_string(),
            description: description.into().trim().to_string(),
            principle: principle.into().trim().to_string(),
            completed: false,
            content,
            runner,
        };
        challenge.validate()?;
        Ok(challenge)
    }

    /// Checks invariants for a challenge that was deserialized rather than built.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError` when the title is blank or a static challenge
    /// has nothing to show.
    pub fn validate(&self) -> Result<(), ChallengeError> {
        if self.title.trim().is_empty() {
            return Err(ChallengeError::EmptyTitle);
        }
        if !self.runner.is_interactive() && self.content.is_none() {
            return Err(ChallengeError::MissingContent {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn principle(&self) -> &str {
        &self.principle
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn content(&self) -> Option<&ChallengeContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> ChallengeKind {
        self.runner
    }

    /// Flip the completion flag. Repeated calls are harmless.
    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Catalog entries always start incomplete, whatever the source says.
    pub(crate) fn reset_progress(&mut self) {
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ChallengeId {
        ChallengeId::new(raw).unwrap()
    }

    #[test]
    fn challenge_new_trims_text() {
        let challenge = Challenge::new(
            id("auth"),
            "  Authentication ",
            " desc ",
            " principle ",
            None,
            ChallengeKind::Login,
        )
        .unwrap();

        assert_eq!(challenge.title(), "Authentication");
        assert_eq!(challenge.description(), "desc");
        assert_eq!(challenge.principle(), "principle");
        assert!(!challenge.is_completed());
    }

    #[test]
    fn challenge_rejects_blank_title() {
        let err = Challenge::new(id("auth"), "   ", "", "", None, ChallengeKind::Login)
            .unwrap_err();
        assert_eq!(err, ChallengeError::EmptyTitle);
    }

    #[test]
    fn static_challenge_requires_content() {
        let err = Challenge::new(
            id("access-control"),
            "Access",
            "",
            "",
            None,
            ChallengeKind::StaticContent,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChallengeError::MissingContent {
                id: id("access-control")
            }
        );
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut challenge =
            Challenge::new(id("rbac"), "RBAC", "", "", None, ChallengeKind::Rbac).unwrap();
        challenge.mark_completed();
        challenge.mark_completed();
        assert!(challenge.is_completed());
    }

    #[test]
    fn kind_round_trips_through_kebab_case() {
        let kind: ChallengeKind = serde_json::from_str("\"least-privilege\"").unwrap();
        assert_eq!(kind, ChallengeKind::LeastPrivilege);
        assert_eq!(kind.as_str(), "least-privilege");
        assert!(!ChallengeKind::StaticContent.is_interactive());
    }
}
