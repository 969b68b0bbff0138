//! Error types for the Bondlab core crate.
//!
//! Date ordering, day count and frequency failures all surface here so that
//! the pricing crates can wrap them with `#[from]`.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Two dates that must be ordered are not.
    #[error("Invalid date order: {context} ({earlier} must not be after {later})")]
    InvalidDateOrder {
        /// Date that must come first.
        earlier: Date,
        /// Date that must come second.
        later: Date,
        /// Which rule was violated.
        context: String,
    },

    /// Unrecognized day count convention.
    #[error("Invalid day count convention: '{name}'")]
    InvalidConvention {
        /// The label that could not be recognized.
        name: String,
    },

    /// Coupon frequency that does not divide a year into whole months.
    #[error("Invalid frequency: {periods_per_year} periods per year")]
    InvalidFrequency {
        /// The rejected number of periods per year.
        periods_per_year: u32,
    },

    /// Invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid date order error.
    #[must_use]
    pub fn invalid_date_order(earlier: Date, later: Date, context: impl Into<String>) -> Self {
        Self::InvalidDateOrder {
            earlier,
            later,
            context: context.into(),
        }
    }

    /// Creates an invalid convention error.
    #[must_use]
    pub fn invalid_convention(name: impl Into<String>) -> Self {
        Self::InvalidConvention { name: name.into() }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
