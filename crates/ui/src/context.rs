use std::sync::Arc;

use iam_core::runners::authorization::Jitter;
use iam_core::time::TimerScale;
use services::{AppServicesError, SessionService};
use tracing::error;

use crate::views::ViewError;

pub trait UiApp: Send + Sync {
    /// A fresh session, with the configured start challenge already selected.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` when the configured start challenge does not
    /// exist.
    fn start_session(&self) -> Result<SessionService, AppServicesError>;

    fn timer_scale(&self) -> TimerScale;

    /// Random source for the ghost on the not-found page.
    fn ghost_jitter(&self) -> Jitter;
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: Result<SessionService, ViewError>,
    timer_scale: TimerScale,
    ghost_jitter: Jitter,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_session = app.start_session().map_err(|err| {
            error!(error = %err, "could not start the learner session");
            ViewError::SessionUnavailable
        });

        Self {
            initial_session,
            timer_scale: app.timer_scale(),
            ghost_jitter: app.ghost_jitter(),
        }
    }

    /// The session the home view starts from. Each call hands out a copy;
    /// the view owns its state from then on.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SessionUnavailable` if start-up failed.
    pub fn initial_session(&self) -> Result<SessionService, ViewError> {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn timer_scale(&self) -> TimerScale {
        self.timer_scale
    }

    #[must_use]
    pub fn ghost_jitter(&self) -> Jitter {
        self.ghost_jitter
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
