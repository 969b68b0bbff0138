//! Error types for curve operations.

use thiserror::Error;

use bondlab_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Two series that must line up node by node do not.
    #[error("No common basis: {reason}")]
    NoCommonBasis {
        /// Description of the mismatch.
        reason: String,
    },

    /// Not enough nodes to build a curve.
    #[error("Insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required.
        required: usize,
        /// Actually provided.
        actual: usize,
    },

    /// The requested bootstrap direction does not match the quotes held.
    #[error("Incompatible quotes: expected {expected} yields, got {got} yields")]
    IncompatibleQuotes {
        /// Quote type the operation needs.
        expected: String,
        /// Quote type the curve holds.
        got: String,
    },

    /// A quote cannot be bootstrapped.
    #[error("Invalid quote at tenor {tenor}: {reason}")]
    InvalidQuote {
        /// Node index (years).
        tenor: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Derived values were requested before bootstrapping.
    #[error("Curve has not been bootstrapped")]
    NotBootstrapped,

    /// Requested tenor is outside the curve's valid range.
    #[error("Tenor {requested:.4} out of range [{min:.4}, {max:.4}]")]
    TenorOutOfRange {
        /// The requested tenor in years.
        requested: f64,
        /// Minimum valid tenor.
        min: f64,
        /// Maximum valid tenor.
        max: f64,
    },

    /// Interpolation error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates a no common basis error.
    #[must_use]
    pub fn no_common_basis(reason: impl Into<String>) -> Self {
        Self::NoCommonBasis {
            reason: reason.into(),
        }
    }

    /// Creates an invalid quote error.
    #[must_use]
    pub fn invalid_quote(tenor: usize, reason: impl Into<String>) -> Self {
        Self::InvalidQuote {
            tenor,
            reason: reason.into(),
        }
    }

    /// Creates an incompatible quotes error.
    #[must_use]
    pub fn incompatible_quotes(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::IncompatibleQuotes {
            expected: expected.into(),
            got: got.into(),
        }
    }
}
