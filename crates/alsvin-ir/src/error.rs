//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when interpreting circuit inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Input payload is not a recognized circuit representation.
    #[error("Unrecognized circuit input: {0}")]
    UnrecognizedInput(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
