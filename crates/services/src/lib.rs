#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod ghost;
pub mod sessions;

pub use sessions as session;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use sessions::{SessionProgress, SessionService};
