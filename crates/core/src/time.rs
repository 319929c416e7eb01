use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Largest accepted timer multiplier.
pub const MAX_TIMER_SCALE: f64 = 10.0;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimerScaleError {
    #[error("timer scale must be a number, got {0:?}")]
    NotANumber(String),

    #[error("timer scale must be between 0 and 10, got {0}")]
    OutOfRange(f64),
}

/// Multiplier applied to every runner delay.
///
/// `1.0` keeps the scripted pacing, `0.0` fires every timer on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimerScale(f64);

impl TimerScale {
    pub const REAL_TIME: Self = Self(1.0);
    pub const INSTANT: Self = Self(0.0);

    /// # Errors
    ///
    /// Returns `TimerScaleError::OutOfRange` when `factor` is not finite or
    /// falls outside `0..=MAX_TIMER_SCALE`.
    pub fn new(factor: f64) -> Result<Self, TimerScaleError> {
        if !factor.is_finite() || !(0.0..=MAX_TIMER_SCALE).contains(&factor) {
            return Err(TimerScaleError::OutOfRange(factor));
        }
        Ok(Self(factor))
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Scale a scripted delay.
    #[must_use]
    pub fn apply(self, delay: Duration) -> Duration {
        delay.mul_f64(self.0)
    }
}

impl Default for TimerScale {
    fn default() -> Self {
        Self::REAL_TIME
    }
}

impl fmt::Display for TimerScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimerScale {
    type Err = TimerScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let factor = trimmed
            .parse::<f64>()
            .map_err(|_| TimerScaleError::NotANumber(trimmed.to_string()))?;
        Self::new(factor)
    }
}
