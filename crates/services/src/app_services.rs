use std::sync::Arc;

use tracing::info;

use iam_core::catalog::Catalog;
use iam_core::model::{AppSettings, Session};
use iam_core::time::TimerScale;

use crate::error::AppServicesError;
use crate::sessions::SessionService;

/// Assembles app-facing services from validated settings.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    settings: AppSettings,
}

impl AppServices {
    /// Load the built-in catalog and check the settings against it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog cannot be parsed or the
    /// requested start challenge does not exist.
    pub fn bootstrap(settings: AppSettings) -> Result<Self, AppServicesError> {
        let catalog = Catalog::builtin()?;
        Self::with_catalog(catalog, settings)
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Session` if the start challenge is unknown.
    pub fn with_catalog(catalog: Catalog, settings: AppSettings) -> Result<Self, AppServicesError> {
        let services = Self {
            catalog: Arc::new(catalog),
            settings,
        };
        // Fail at start-up rather than on the first render.
        services.start_session()?;
        info!(
            challenges = services.catalog.len(),
            timer_scale = services.settings.timer_scale().factor(),
            start = ?services.settings.start_challenge().map(|id| id.as_str()),
            "app services ready"
        );
        Ok(services)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn timer_scale(&self) -> TimerScale {
        self.settings.timer_scale()
    }

    /// Fresh session with every challenge incomplete, preselecting the
    /// configured start challenge.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Session` if the start challenge is unknown.
    pub fn start_session(&self) -> Result<SessionService, AppServicesError> {
        let mut service =
            SessionService::from_session(Session::new(self.catalog.challenges().to_vec()));
        if let Some(id) = self.settings.start_challenge() {
            service.select(id)?;
        }
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iam_core::model::{AppSettingsDraft, SessionError};

    #[test]
    fn bootstrap_with_defaults() {
        let services = AppServices::bootstrap(AppSettings::default()).unwrap();
        assert_eq!(services.catalog().len(), 7);
        assert_eq!(services.timer_scale(), TimerScale::REAL_TIME);
        let session = services.start_session().unwrap();
        assert!(session.selected().is_none());
    }

    #[test]
    fn start_challenge_is_preselected() {
        let settings = AppSettingsDraft {
            start_challenge: Some("least-privilege".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap();
        let services = AppServices::bootstrap(settings).unwrap();
        let session = services.start_session().unwrap();
        assert_eq!(
            session.selected().map(|c| c.id().as_str()),
            Some("least-privilege")
        );
    }

    #[test]
    fn unknown_start_challenge_fails_bootstrap() {
        let settings = AppSettingsDraft {
            start_challenge: Some("kerberos".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap();
        let err = AppServices::bootstrap(settings).err().unwrap();
        assert!(matches!(
            err,
            AppServicesError::Session(SessionError::UnknownChallenge(_))
        ));
    }
}
