//! Previous/next coupon dates and remaining payment counts.
//!
//! # Example
//!
//! ```rust
//! use bondlab_bonds::cashflows::{payment_count, previous_next_coupons};
//! use bondlab_core::types::{Date, Frequency};
//!
//! let settlement = Date::from_ymd(2000, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2010, 8, 15).unwrap();
//!
//! let period = previous_next_coupons(settlement, maturity, Frequency::Quarterly).unwrap();
//! assert_eq!(period.previous, Date::from_ymd(1999, 11, 15).unwrap());
//! assert_eq!(period.next, Date::from_ymd(2000, 2, 15).unwrap());
//!
//! let payments = payment_count(maturity, period.next, Frequency::Quarterly).unwrap();
//! assert_eq!(payments, 43);
//! ```

use serde::{Deserialize, Serialize};

use bondlab_core::error::{CoreError, CoreResult};
use bondlab_core::types::{Date, Frequency};

/// The coupon period containing a settlement date.
///
/// `previous <= settlement <= next` and `previous < next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponPeriod {
    /// Last coupon date on or before settlement.
    pub previous: Date,
    /// First coupon date after settlement, or maturity when settling on it.
    pub next: Date,
}

/// Finds the coupon dates on either side of `settlement`.
///
/// Steps backward from `maturity` one period at a time until the earlier
/// date is on or before `settlement`. Month-end clamping is applied at each
/// step, so a maturity on the 31st produces earlier coupons on the 30th or
/// 28th/29th once a short month has been crossed.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateOrder` if `settlement` is after `maturity`.
pub fn previous_next_coupons(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
) -> CoreResult<CouponPeriod> {
    if settlement > maturity {
        return Err(CoreError::invalid_date_order(
            settlement,
            maturity,
            "settlement must not be after maturity",
        ));
    }

    let step = -(frequency.months_per_period() as i32);
    let mut next = maturity;
    let mut previous = maturity.add_months(step)?;

    while previous > settlement {
        next = previous;
        previous = next.add_months(step)?;
    }

    Ok(CouponPeriod { previous, next })
}

/// Counts the coupon dates from `next_coupon` up to and including `maturity`.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateOrder` if `next_coupon` is after `maturity`.
pub fn payment_count(maturity: Date, next_coupon: Date, frequency: Frequency) -> CoreResult<u32> {
    if next_coupon > maturity {
        return Err(CoreError::invalid_date_order(
            next_coupon,
            maturity,
            "next coupon must not be after maturity",
        ));
    }

    let step = frequency.months_per_period() as i32;
    let mut current = next_coupon;
    let mut count = 0;

    while current <= maturity {
        current = current.add_months(step)?;
        count += 1;
    }

    Ok(count)
}

/// Lists the remaining coupon dates after `settlement`, ending at maturity.
///
/// The dates are the ones visited by [`previous_next_coupons`], in
/// ascending order. Settling on maturity returns just the maturity date.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateOrder` if `settlement` is after `maturity`.
pub fn coupon_dates(settlement: Date, maturity: Date, frequency: Frequency) -> CoreResult<Vec<Date>> {
    let period = previous_next_coupons(settlement, maturity, frequency)?;
    let step = -(frequency.months_per_period() as i32);

    let mut dates = Vec::new();
    let mut current = maturity;
    while current >= period.next {
        dates.push(current);
        current = current.add_months(step)?;
    }
    dates.reverse();

    Ok(dates)
}
