//! Form definitions backing the admin routes.

use thiserror::Error;

pub mod customers;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid customer id")]
    InvalidCustomerId,

    #[error("the file has no recognised customer columns")]
    MissingColumns,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read the uploaded file: {0}")]
    Io(#[from] std::io::Error),
}
