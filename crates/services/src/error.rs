//! Shared error types for the services crate.

use thiserror::Error;

use iam_core::catalog::CatalogError;
use iam_core::model::SessionError;

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
