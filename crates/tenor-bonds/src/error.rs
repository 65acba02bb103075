//! Error types for instrument construction and pricing.

use thiserror::Error;

/// A specialized Result type for instrument operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while building or pricing instruments.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A curve evaluation failed.
    #[error(transparent)]
    Curve(#[from] tenor_curves::CurveError),

    /// A numerical solve failed.
    #[error(transparent)]
    Solver(#[from] tenor_math::MathError),
}

impl BondError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_input("face value must be positive");
        assert!(err.to_string().contains("positive"));
    }
}
