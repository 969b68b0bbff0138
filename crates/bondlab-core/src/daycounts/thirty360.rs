//! 30/360 day count convention.

use super::DayCount;
use crate::error::CoreResult;
use crate::types::{Date, Frequency};

/// 30/360 day count convention.
///
/// Every month counts as 30 days. The day delta is capped at 30 but is not
/// floored, so no month-end adjustment is made to either date.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + \min(D_2 - D_1, 30)$$
///
/// The period fraction is `Days / (360 / p)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let years = end.year() as i64 - start.year() as i64;
        let months = end.month() as i64 - start.month() as i64;
        let days = (end.day() as i64 - start.day() as i64).min(30);

        360 * years + 30 * months + days
    }

    fn period_days(&self, _start: Date, frequency: Frequency) -> CoreResult<f64> {
        Ok(360.0 / frequency.periods_per_year() as f64)
    }
}
