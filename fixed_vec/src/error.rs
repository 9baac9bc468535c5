use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for vector construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Expected at least {expected} values, got {actual}")]
    TooFewValues { expected: usize, actual: usize },
}
