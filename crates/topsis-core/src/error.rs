use thiserror::Error;

/// Error taxonomy for the TOPSIS pipeline.
///
/// Every error is terminal for the run: this is a one-shot batch
/// computation, so there is no retry or partial-failure recovery.
#[derive(Debug, Error)]
pub enum TopsisError {
    /// Input shape violation (too few rows/columns, ragged rows,
    /// a non-numeric or non-finite criterion value).
    #[error("Schema error: {0}")]
    Schema(String),

    /// Weight or impact parameters inconsistent with the matrix
    /// (count mismatch, non-positive weight, invalid impact token).
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// Degenerate numeric input (zero-norm column, zero total distance)
    /// that would otherwise propagate NaN or Inf into the output.
    #[error("Computation error: {0}")]
    Computation(String),
}
