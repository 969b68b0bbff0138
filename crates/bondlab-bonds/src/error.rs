//! Error types for bond and annuity pricing.

use thiserror::Error;

use bondlab_core::CoreError;
use bondlab_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond and annuity pricing.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Invalid instrument specification or pricing configuration.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required builder field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Date, convention or frequency error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Root finder failure while solving for a yield.
    #[error("Solver error: {0}")]
    Math(#[from] MathError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
