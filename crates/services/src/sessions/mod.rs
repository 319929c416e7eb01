mod progress;
mod service;

// Public API of the session subsystem.
pub use iam_core::model::SessionError;
pub use progress::SessionProgress;
pub use service::SessionService;
