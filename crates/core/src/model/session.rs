use thiserror::Error;

use crate::model::{Challenge, ChallengeId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown challenge: {0}")]
    UnknownChallenge(ChallengeId),
}

/// What happened when the active runner reported success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing was selected; the event was ignored.
    NoSelection,
    /// The selected challenge is now completed and the selection was cleared.
    Completed {
        id: ChallengeId,
        /// `false` when the challenge had already been completed before.
        newly_completed: bool,
    },
}

/// In-memory learner session: the ordered challenges and the one on screen.
///
/// The selection is stored as an index so it can never point outside the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    challenges: Vec<Challenge>,
    selected: Option<usize>,
}

impl Session {
    /// Start a session with every challenge marked incomplete.
    #[must_use]
    pub fn new(challenges: Vec<Challenge>) -> Self {
        let mut challenges = challenges;
        for challenge in &mut challenges {
            challenge.reset_progress();
        }
        Self {
            challenges,
            selected: None,
        }
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    #[must_use]
    pub fn get(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| challenge.id() == id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Challenge> {
        self.selected.and_then(|index| self.challenges.get(index))
    }

    /// Make `id` the active challenge, replacing any previous selection.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownChallenge` if `id` is not in the session.
    pub fn select(&mut self, id: &ChallengeId) -> Result<&Challenge, SessionError> {
        let index = self
            .challenges
            .iter()
            .position(|challenge| challenge.id() == id)
            .ok_or_else(|| SessionError::UnknownChallenge(id.clone()))?;
        self.selected = Some(index);
        Ok(&self.challenges[index])
    }

    /// Return to the grid without completing anything.
    pub fn clear_selection(&mut self) -> Option<ChallengeId> {
        self.selected
            .take()
            .and_then(|index| self.challenges.get(index))
            .map(|challenge| challenge.id().clone())
    }

    /// Mark the selected challenge completed, then clear the selection.
    pub fn complete_selected(&mut self) -> Completion {
        let Some(index) = self.selected.take() else {
            return Completion::NoSelection;
        };
        let Some(challenge) = self.challenges.get_mut(index) else {
            return Completion::NoSelection;
        };
        let newly_completed = !challenge.is_completed();
        challenge.mark_completed();
        Completion::Completed {
            id: challenge.id().clone(),
            newly_completed,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.challenges
            .iter()
            .filter(|challenge| challenge.is_completed())
            .count()
    }

    /// Percentage of completed challenges in `[0, 100]`; `0` for an empty session.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.completed_count() as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChallengeKind;

    fn challenge(raw: &str) -> Challenge {
        Challenge::new(
            ChallengeId::new(raw).unwrap(),
            raw.to_uppercase(),
            "",
            "",
            None,
            ChallengeKind::Login,
        )
        .unwrap()
    }

    fn id(raw: &str) -> ChallengeId {
        ChallengeId::new(raw).unwrap()
    }

    fn session() -> Session {
        Session::new(vec![challenge("auth"), challenge("authz"), challenge("rbac"), challenge("iam")])
    }

    #[test]
    fn progress_is_zero_for_fresh_and_empty_sessions() {
        assert_eq!(session().progress_percent(), 0.0);
        assert_eq!(Session::new(Vec::new()).progress_percent(), 0.0);
    }

    #[test]
    fn select_unknown_challenge_keeps_state() {
        let mut session = session();
        session.select(&id("auth")).unwrap();
        let err = session.select(&id("nope")).unwrap_err();
        assert_eq!(err, SessionError::UnknownChallenge(id("nope")));
        assert_eq!(session.selected().map(Challenge::id), Some(&id("auth")));
    }

    #[test]
    fn complete_without_selection_is_noop() {
        let mut session = session();
        assert_eq!(session.complete_selected(), Completion::NoSelection);
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn complete_marks_and_clears_selection() {
        let mut session = session();
        session.select(&id("authz")).unwrap();
        let outcome = session.complete_selected();
        assert_eq!(
            outcome,
            Completion::Completed {
                id: id("authz"),
                newly_completed: true
            }
        );
        assert!(session.selected().is_none());
        assert!(session.get(&id("authz")).unwrap().is_completed());
        assert_eq!(session.progress_percent(), 25.0);
    }

    #[test]
    fn completing_twice_does_not_double_count() {
        let mut session = session();
        session.select(&id("rbac")).unwrap();
        session.complete_selected();
        session.select(&id("rbac")).unwrap();
        let outcome = session.complete_selected();

        assert_eq!(
            outcome,
            Completion::Completed {
                id: id("rbac"),
                newly_completed: false
            }
        );
        assert_eq!(session.completed_count(), 1);
        assert_eq!(session.progress_percent(), 25.0);
    }

    #[test]
    fn progress_reaches_hundred_when_all_completed() {
        let mut session = session();
        let ids: Vec<ChallengeId> = session.challenges().iter().map(|c| c.id().clone()).collect();
        for id in &ids {
            session.select(id).unwrap();
            session.complete_selected();
        }
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn clear_selection_returns_previous_id() {
        let mut session = session();
        assert_eq!(session.clear_selection(), None);
        session.select(&id("iam")).unwrap();
        assert_eq!(session.clear_selection(), Some(id("iam")));
        assert!(session.selected().is_none());
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn new_session_resets_completion_flags() {
        let mut done = challenge("auth");
        done.mark_completed();
        let session = Session::new(vec![done]);
        assert_eq!(session.completed_count(), 0);
    }
}
