//! Use-case services bridging routes with the customer store.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod customers;
pub mod policies;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An action was attempted before the customer store finished loading.
    #[error("customer data is still loading, try again in a moment")]
    NotReady,
    /// The store rejected an update or delete.
    #[error("the customer store rejected the change: {0}")]
    PersistenceFailure(String),
    #[error("customer not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error("invalid value: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::PersistenceFailure(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
