//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// Malformed registration or configuration input
    #[error("INVALID/{0}")]
    InvalidArgument(String),

    /// Unknown example name
    #[error("NOT_FOUND/{0}")]
    NotFound(String),

    /// An example's action failed while running
    #[error("EXAMPLE/{name}: {reason}")]
    ExampleFailure { name: String, reason: String },
}

pub type HarnessResult<T> = Result<T, HarnessError>;
