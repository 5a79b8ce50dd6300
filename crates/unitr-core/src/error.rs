//! Error types for unitr-core

use thiserror::Error;

/// Result type for unitr-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by unit lookups, conversions and quantity arithmetic
#[derive(Error, Debug)]
pub enum Error {
    /// Symbol missing from the classification table
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Prefix missing from the prefix table
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Operands or conversion endpoints carry different dimensions
    #[error("Inconsistent units: {left} vs {right}")]
    DimensionMismatch { left: String, right: String },

    /// Scalar extraction on a quantity that still carries units
    #[error("Quantity is not dimensionless: {0}")]
    NotDimensionless(String),

    /// Integer extraction on a non-integral scalar
    #[error("Value is not an integer: {0}")]
    NotIntegral(f64),

    /// Operation not defined for the given operands
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Division by zero")]
    DivisionByZero,

    /// Malformed unit expression
    #[error("Invalid unit expression: {0}")]
    InvalidExpression(String),

    /// Rejected registry entry
    #[error("Invalid unit definition: {0}")]
    InvalidUnitDefinition(String),

    /// I/O error (unit file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (unit file contents)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn mismatch(left: impl ToString, right: impl ToString) -> Self {
        Error::DimensionMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}
