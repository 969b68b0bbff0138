//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// The iteration produced a non-finite value.
    #[error("No root found starting from [{lower}, {upper}]: iterate is not finite")]
    RootNotFound {
        /// First seed.
        lower: f64,
        /// Second seed.
        upper: f64,
    },

    /// The iteration cap was hit before the residual met the tolerance.
    #[error(
        "No convergence after {iterations} iterations from [{lower}, {upper}] (residual: {residual:.2e})"
    )]
    MaxIterationsExceeded {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
        /// First seed.
        lower: f64,
        /// Second seed.
        upper: f64,
    },

    /// Interpolation point is outside the valid range.
    #[error("Extrapolation not allowed: {x} is outside [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// The query point.
        x: f64,
        /// Minimum valid value.
        min: f64,
        /// Maximum valid value.
        max: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a root not found error.
    #[must_use]
    pub fn root_not_found(lower: f64, upper: f64) -> Self {
        Self::RootNotFound { lower, upper }
    }

    /// Creates a max iterations exceeded error.
    #[must_use]
    pub fn max_iterations_exceeded(iterations: u32, residual: f64, lower: f64, upper: f64) -> Self {
        Self::MaxIterationsExceeded {
            iterations,
            residual,
            lower,
            upper,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
