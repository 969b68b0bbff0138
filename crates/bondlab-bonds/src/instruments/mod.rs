//! Priceable instruments.
//!
//! - [`FixedCouponBond`]: bullet bond with fixed periodic coupons
//! - [`LevelAnnuity`]: stream of equal coupons without principal redemption
//!
//! Both keep their terms and last computed analytics together; a failed
//! calculation leaves the previous analytics in place.

mod annuity;
mod fixed;

use bondlab_core::types::Date;

pub use annuity::{AnnuityAnalytics, AnnuityMode, LevelAnnuity};
pub use fixed::{BondAnalytics, FixedCouponBond, FixedCouponBondBuilder};

/// Builds one of the calendar dates used by the `Default` instruments.
fn default_date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).expect("default instrument dates are valid calendar days")
}
