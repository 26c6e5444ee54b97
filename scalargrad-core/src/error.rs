use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Every variant describes a programmer error detected synchronously at the offending call.
/// Operations that fail create no node and leave every gradient untouched.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid exponent {exponent}: power requires a finite real exponent")]
    InvalidExponent { exponent: f64 },

    #[error("Invalid initializer: {0}")]
    InvalidInitializer(String),

    #[error("Cannot set data on a non-leaf value; only leaves (parameters, constants) are mutable")]
    NonLeafMutation,
}
