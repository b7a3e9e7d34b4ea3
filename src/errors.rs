//! Crate-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Errors surfaced by the crate's public entry points.
#[derive(Error, Debug)]
pub enum BintreeError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for crate-level operations.
pub type BintreeResult<T> = Result<T, BintreeError>;
