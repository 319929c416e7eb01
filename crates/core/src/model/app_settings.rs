use thiserror::Error;

use crate::model::{ChallengeId, ParseIdError};
use crate::time::{TimerScale, TimerScaleError};

/// Validated start-up settings.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    start_challenge: Option<ChallengeId>,
    timer_scale: TimerScale,
    log_filter: Option<String>,
}

/// Raw settings as they arrive from flags or the environment.
#[derive(Clone, Debug, Default)]
pub struct AppSettingsDraft {
    pub start_challenge: Option<String>,
    pub timer_scale: Option<String>,
    pub log_filter: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error(transparent)]
    InvalidChallenge(#[from] ParseIdError),
    #[error(transparent)]
    InvalidTimerScale(#[from] TimerScaleError),
}

impl AppSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every unset field from `fallback`.
    #[must_use]
    pub fn or(self, fallback: AppSettingsDraft) -> Self {
        Self {
            start_challenge: self.start_challenge.or(fallback.start_challenge),
            timer_scale: self.timer_scale.or(fallback.timer_scale),
            log_filter: self.log_filter.or(fallback.log_filter),
        }
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError` if the challenge id or the timer scale is
    /// present but invalid.
    pub fn validate(self) -> Result<AppSettings, AppSettingsError> {
        let start_challenge = normalize_optional(self.start_challenge)
            .map(ChallengeId::new)
            .transpose()?;
        let timer_scale = normalize_optional(self.timer_scale)
            .map(|raw| raw.parse::<TimerScale>())
            .transpose()?
            .unwrap_or_default();
        let log_filter = normalize_optional(self.log_filter);

        Ok(AppSettings {
            start_challenge,
            timer_scale,
            log_filter,
        })
    }
}

impl AppSettings {
    #[must_use]
    pub fn start_challenge(&self) -> Option<&ChallengeId> {
        self.start_challenge.as_ref()
    }

    #[must_use]
    pub fn timer_scale(&self) -> TimerScale {
        self.timer_scale
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            start_challenge: None,
            timer_scale: TimerScale::default(),
            log_filter: None,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_uses_defaults() {
        let settings = AppSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.timer_scale(), TimerScale::REAL_TIME);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let settings = AppSettingsDraft {
            start_challenge: Some("  ".into()),
            timer_scale: Some(String::new()),
            log_filter: Some(" ".into()),
        }
        .validate()
        .unwrap();
        assert!(settings.start_challenge().is_none());
        assert!(settings.log_filter().is_none());
    }

    #[test]
    fn flags_take_precedence_over_fallback() {
        let flags = AppSettingsDraft {
            timer_scale: Some("0.25".into()),
            ..AppSettingsDraft::default()
        };
        let env = AppSettingsDraft {
            start_challenge: Some("rbac".into()),
            timer_scale: Some("2".into()),
            log_filter: None,
        };
        let settings = flags.or(env).validate().unwrap();
        assert_eq!(settings.start_challenge().map(ChallengeId::as_str), Some("rbac"));
        assert_eq!(settings.timer_scale().factor(), 0.25);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppSettingsDraft {
            timer_scale: Some("11".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppSettingsError::InvalidTimerScale(_)));

        let err = AppSettingsDraft {
            start_challenge: Some("least privilege".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppSettingsError::InvalidChallenge(_)));
    }
}
