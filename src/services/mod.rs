//! Providers a list screen is built on: query state, fetch orchestration and
//! row selection, each behind a consumer-facing trait with a no-op variant.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::FetchError;

pub mod list_view;
pub mod request;
pub mod response;
pub mod selection;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The proposed state breaks pagination invariants; the prior state is kept.
    #[error("invalid state update: {0}")]
    InvalidStateUpdate(#[from] TypeConstraintError),

    /// The backend could not serve the page; the last good response is kept.
    #[error("failed to fetch list: {0}")]
    FetchFailure(#[from] FetchError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
