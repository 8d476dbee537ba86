// src/error.rs

use thiserror::Error;

/// Errors surfaced by frame construction, indexing and mutation.
///
/// Reads use a softer convention: an absent name or an empty resolved axis
/// yields a null result, not an error.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("duplicate name: {0}")]
    DuplicateId(String),

    #[error("incompatible dimensions: {0}")]
    IncompatibleDimension(String),

    #[error("bad right-hand side: {0}")]
    BadRightHandSide(String),

    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("position {0} out of range")]
    OutOfRange(i64),
}
