//! Day count conventions for fixed income calculations.
//!
//! A day count convention turns a pair of dates into a fraction of one
//! compounding period. Accrued interest is that fraction times the coupon
//! paid per period, and the same fraction positions each cash flow on the
//! discounting grid.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - actual days over a 360-day year
//! - [`Act365`]: Actual/365 - actual days over a 365-day year
//! - [`ActAct`]: Actual/Actual - actual days over the actual days in the period
//! - [`Thirty360`]: 30/360 - 30-day months over a 360-day year
//!
//! # Usage
//!
//! ```rust
//! use bondlab_core::daycounts::{DayCount, Thirty360};
//! use bondlab_core::types::{Date, Frequency};
//!
//! let dc = Thirty360;
//! let start = Date::from_ymd(2000, 1, 1).unwrap();
//! let end = Date::from_ymd(2000, 4, 1).unwrap();
//!
//! let accrual = dc.accrued_fraction(start, end, Frequency::SemiAnnual).unwrap();
//! assert_eq!(accrual.total_days, 90);
//! assert_eq!(accrual.fraction, 0.5);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use actact::ActAct;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Frequency};

/// Elapsed time between two dates measured in compounding periods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualFraction {
    /// Fraction of one compounding period.
    pub fraction: f64,
    /// Day count between the dates under the convention.
    pub total_days: i64,
}

/// Trait for day count conventions.
///
/// Implementations provide the day count between two dates and the number
/// of days in one compounding period; the period fraction is their ratio.
///
/// # Implementation Notes
///
/// - `day_count` returns the number of days according to the convention
/// - `period_days` may depend on the start date (Actual/Actual)
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days. For 30/360 it uses
    /// the 30-day month assumption and can be negative for unusual day deltas.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Number of days in one compounding period anchored at `start`.
    fn period_days(&self, start: Date, frequency: Frequency) -> CoreResult<f64>;

    /// Calculates the elapsed fraction of a compounding period.
    ///
    /// # Arguments
    ///
    /// * `start` - Start date (usually the previous coupon date)
    /// * `end` - End date (usually settlement)
    /// * `frequency` - Compounding frequency
    fn accrued_fraction(
        &self,
        start: Date,
        end: Date,
        frequency: Frequency,
    ) -> CoreResult<AccrualFraction> {
        let total_days = self.day_count(start, end);
        let period_days = self.period_days(start, frequency)?;

        Ok(AccrualFraction {
            fraction: total_days as f64 / period_days,
            total_days,
        })
    }
}

/// Enumeration of all supported day count conventions.
///
/// This enum is what instruments store; it dispatches to the
/// per-convention implementations.
///
/// # Example
///
/// ```rust
/// use bondlab_core::daycounts::DayCountConvention;
///
/// let convention: DayCountConvention = "30/360".parse().unwrap();
/// assert_eq!(convention, DayCountConvention::Thirty360);
/// assert!("ACT/999".parse::<DayCountConvention>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360
    Actual360,
    /// Actual/365
    Actual365,
    /// Actual/Actual, period length taken from the calendar
    ActualActual,
    /// 30/360
    #[default]
    Thirty360,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Actual360 => Box::new(Act360),
            DayCountConvention::Actual365 => Box::new(Act365),
            DayCountConvention::ActualActual => Box::new(ActAct),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual360 => "ACT/360",
            DayCountConvention::Actual365 => "ACT/365",
            DayCountConvention::ActualActual => "ACT/ACT",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Actual360,
            DayCountConvention::Actual365,
            DayCountConvention::ActualActual,
            DayCountConvention::Thirty360,
        ]
    }

    /// Calculates the elapsed fraction of a compounding period between two dates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the period window runs off the calendar.
    pub fn accrued_fraction(
        &self,
        start: Date,
        end: Date,
        frequency: Frequency,
    ) -> CoreResult<AccrualFraction> {
        self.to_day_count().accrued_fraction(start, end, frequency)
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a day count convention from a market label.
    ///
    /// Matching is case-insensitive and accepts the enum spelling too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" | "ACTUAL360" => Ok(DayCountConvention::Actual360),
            "ACT/365" | "ACTUAL/365" | "ACT/365F" | "ACT365" | "ACTUAL365" => {
                Ok(DayCountConvention::Actual365)
            }
            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" | "ACTUALACTUAL" => {
                Ok(DayCountConvention::ActualActual)
            }
            "30/360" | "30U/360" | "BOND" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(CoreError::invalid_convention(s)),
        }
    }
}

/// Converts a bond-equivalent yield to a money market (ACT/360) yield.
#[must_use]
pub fn bond_to_money_market_yield(bond_equivalent_yield: f64) -> f64 {
    (360.0 / 365.0) * bond_equivalent_yield
}

/// Converts a money market (ACT/360) yield to a bond-equivalent yield.
#[must_use]
pub fn money_market_to_bond_yield(money_market_yield: f64) -> f64 {
    (365.0 / 360.0) * money_market_yield
}
