mod app_settings;
mod challenge;
pub mod content;
mod ids;
mod session;

pub use app_settings::{AppSettings, AppSettingsDraft, AppSettingsError};
pub use challenge::{Challenge, ChallengeError, ChallengeKind};
pub use content::{ChallengeContent, Simulation};
pub use ids::{ChallengeId, ParseIdError};
pub use session::{Completion, Session, SessionError};
