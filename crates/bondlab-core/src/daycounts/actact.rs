//! Actual/Actual day count convention.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::{Date, Frequency};

/// Actual/Actual day count convention.
///
/// The denominator is the actual length of the coupon period that starts at
/// `start`, found by stepping forward one period with month-end clamping.
/// A fraction measured from a coupon date is therefore exactly 1 on the
/// next coupon date.
///
/// # Formula
///
/// $$\text{Fraction} = \frac{\text{Actual Days}}{\text{start} + 12/p \text{ months} - \text{start}}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn period_days(&self, start: Date, frequency: Frequency) -> CoreResult<f64> {
        let period_end = start.add_months(frequency.months_per_period() as i32)?;
        Ok(start.days_between(&period_end) as f64)
    }
}
