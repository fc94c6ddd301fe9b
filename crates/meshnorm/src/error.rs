//! Error types for normal computation.

use thiserror::Error;

/// Errors that can occur when computing normals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalsError {
    /// Buffer shapes or settings do not satisfy the kernel's preconditions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for normal computation.
pub type Result<T> = std::result::Result<T, NormalsError>;
