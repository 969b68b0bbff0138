//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::{Date, Frequency};

/// Actual/365 Fixed day count convention.
///
/// Actual days over a 365-day year split into equal periods. Leap days are
/// counted in the numerator but never change the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn period_days(&self, _start: Date, frequency: Frequency) -> CoreResult<f64> {
        Ok(365.0 / frequency.periods_per_year() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365_full_year() {
        let dc = Act365;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        let accrual = dc.accrued_fraction(start, end, Frequency::Annual).unwrap();
        assert_eq!(accrual.total_days, 365);
        assert_relative_eq!(accrual.fraction, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act365_leap_year() {
        let dc = Act365;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        let accrual = dc.accrued_fraction(start, end, Frequency::Annual).unwrap();
        assert_eq!(accrual.total_days, 366);
        assert_relative_eq!(accrual.fraction, 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act365_monthly() {
        let dc = Act365;
        let start = Date::from_ymd(2000, 3, 1).unwrap();
        let end = Date::from_ymd(2000, 3, 16).unwrap();

        let accrual = dc.accrued_fraction(start, end, Frequency::Monthly).unwrap();
        assert_relative_eq!(accrual.fraction, 15.0 / (365.0 / 12.0), epsilon = 1e-15);
    }
}
