//! Coupon calendar for fixed coupon instruments.
//!
//! Coupon dates are anchored on maturity and generated by stepping backward
//! in whole coupon periods, so the calendar is fixed by maturity alone even
//! when settlement falls between coupon dates.

mod schedule;

pub use schedule::{coupon_dates, payment_count, previous_next_coupons, CouponPeriod};
