use tracing::{debug, info, warn};

use iam_core::model::{Challenge, ChallengeId, Completion, Session, SessionError};

use crate::sessions::SessionProgress;

/// Session controller: selection and completion routing over a [`Session`].
///
/// Every transition is logged; the state itself lives in the wrapped session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionService {
    session: Session,
}

impl SessionService {
    #[must_use]
    pub fn new(challenges: Vec<Challenge>) -> Self {
        Self::from_session(Session::new(challenges))
    }

    #[must_use]
    pub fn from_session(session: Session) -> Self {
        debug!(total = session.total(), "session started");
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        self.session.challenges()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Challenge> {
        self.session.selected()
    }

    /// Open a challenge.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownChallenge` if `id` is not part of the
    /// session; the previous selection is kept.
    pub fn select(&mut self, id: &ChallengeId) -> Result<&Challenge, SessionError> {
        match self.session.select(id) {
            Ok(challenge) => {
                info!(challenge = %id, kind = challenge.kind().as_str(), "challenge selected");
                Ok(challenge)
            }
            Err(err) => {
                warn!(challenge = %id, error = %err, "selection rejected");
                Err(err)
            }
        }
    }

    /// "Retour": back to the grid without completing.
    pub fn clear_selection(&mut self) -> Option<ChallengeId> {
        let cleared = self.session.clear_selection();
        if let Some(id) = &cleared {
            info!(challenge = %id, "selection cleared");
        }
        cleared
    }

    /// Success callback of the mounted runner.
    pub fn complete_selected(&mut self) -> Completion {
        let completion = self.session.complete_selected();
        match &completion {
            Completion::NoSelection => debug!("completion ignored: nothing selected"),
            Completion::Completed {
                id,
                newly_completed,
            } => {
                let progress = self.progress();
                info!(
                    challenge = %id,
                    newly_completed,
                    completed = progress.completed,
                    total = progress.total,
                    percent = progress.percent,
                    "challenge completed"
                );
            }
        }
        completion
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::of(&self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iam_core::catalog::Catalog;

    fn service() -> SessionService {
        SessionService::new(Catalog::builtin().unwrap().into_challenges())
    }

    fn id(raw: &str) -> ChallengeId {
        ChallengeId::new(raw).unwrap()
    }

    #[test]
    fn progress_labels() {
        let mut service = service();
        assert_eq!(service.progress().label(), "0/7");
        assert_eq!(service.progress().percent_label(), "0%");

        service.select(&id("rbac")).unwrap();
        service.complete_selected();
        let progress = service.progress();
        assert_eq!(progress.label(), "1/7");
        assert_eq!(progress.percent_label(), "14%");
        assert!(!progress.is_complete());
    }

    #[test]
    fn unknown_selection_keeps_previous_one() {
        let mut service = service();
        service.select(&id("auth")).unwrap();
        assert!(service.select(&id("missing")).is_err());
        assert_eq!(service.selected().map(|c| c.id().as_str()), Some("auth"));
    }

    #[test]
    fn clear_selection_does_not_complete() {
        let mut service = service();
        service.select(&id("identity")).unwrap();
        assert_eq!(service.clear_selection(), Some(id("identity")));
        assert_eq!(service.progress().completed, 0);
        assert_eq!(service.complete_selected(), Completion::NoSelection);
    }
}
