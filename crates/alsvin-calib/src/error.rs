//! Calibration error types.

use thiserror::Error;

/// Result type for calibration operations.
pub type CalibResult<T> = Result<T, CalibError>;

/// Errors that can occur during calibration analysis.
///
/// All of these are input-contract violations surfaced immediately to the
/// caller; the computations are pure, so there is nothing to roll back and
/// no partial result is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CalibError {
    /// Parallel input sequences disagree in length.
    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        /// What was being measured against what.
        what: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        got: usize,
    },

    /// The coherence-limit formula is only defined for 1 or 2 qubits.
    #[error("Unsupported qubit count: {0} (coherence limit is defined for 1 or 2 qubits)")]
    UnsupportedQubitCount(u32),

    /// A circuit input could not be interpreted.
    #[error("Unrecognized circuit input: {0}")]
    UnrecognizedInput(String),
}

impl From<alsvin_ir::IrError> for CalibError {
    fn from(e: alsvin_ir::IrError) -> Self {
        CalibError::UnrecognizedInput(e.to_string())
    }
}
