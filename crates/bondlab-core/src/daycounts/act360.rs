//! Actual/360 day count convention.
//!
//! Used primarily for money market instruments.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::{Date, Frequency};

/// Actual/360 day count convention.
///
/// The day count is the actual number of days between dates and each
/// period is an equal share of a 360-day year.
///
/// # Formula
///
/// $$\text{Fraction} = \frac{\text{Actual Days}}{360 / p}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn period_days(&self, _start: Date, frequency: Frequency) -> CoreResult<f64> {
        Ok(360.0 / frequency.periods_per_year() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_basic() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 4, 1).unwrap();

        // Jan has 31, Feb has 28, Mar has 31 = 90 days
        assert_eq!(dc.day_count(start, end), 90);
        let accrual = dc.accrued_fraction(start, end, Frequency::Annual).unwrap();
        assert_relative_eq!(accrual.fraction, 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_act360_full_year() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        // Non-leap year: 365 days / 360 > 1
        let accrual = dc.accrued_fraction(start, end, Frequency::Annual).unwrap();
        assert_eq!(accrual.total_days, 365);
        assert!(accrual.fraction > 1.0);
    }

    #[test]
    fn test_act360_semi_annual_period() {
        let dc = Act360;
        let start = Date::from_ymd(2000, 1, 1).unwrap();
        let end = Date::from_ymd(2000, 6, 29).unwrap();

        // 180 days is exactly one semi-annual period
        let accrual = dc.accrued_fraction(start, end, Frequency::SemiAnnual).unwrap();
        assert_eq!(accrual.total_days, 180);
        assert_relative_eq!(accrual.fraction, 1.0, epsilon = 1e-15);
    }
}
