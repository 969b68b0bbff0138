//! # Bondlab Bonds
//!
//! Bond and annuity pricing for the Bondlab fixed income library.
//!
//! This crate provides:
//!
//! - **Cash flows**: Coupon date stepping and payment counts
//! - **Pricing**: Price from yield, yield from clean price, yield to horizon
//! - **Instruments**: [`FixedCouponBond`] and [`LevelAnnuity`] with stored analytics
//! - **Configuration**: Solver tolerance, iteration cap and yield bracket
//!
//! ## Quick Start
//!
//! ```rust
//! use bondlab_bonds::prelude::*;
//! use bondlab_core::prelude::*;
//!
//! let mut bond = FixedCouponBond::default();
//! let analytics = bond.calculate().unwrap();
//! assert!(analytics.yield_to_maturity > 0.08);
//!
//! println!("{}", bond.render());
//! ```
//!
//! [`FixedCouponBond`]: instruments::FixedCouponBond
//! [`LevelAnnuity`]: instruments::LevelAnnuity

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{coupon_dates, payment_count, previous_next_coupons, CouponPeriod};
    pub use crate::config::PricingConfig;
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{
        AnnuityAnalytics, AnnuityMode, BondAnalytics, FixedCouponBond, FixedCouponBondBuilder,
        LevelAnnuity,
    };
    pub use crate::pricing::{
        adjusted_current_yield, current_yield, price_from_yield, yield_from_clean_price,
        yield_to_horizon, BondTerms, HorizonResult, HorizonTerms, PriceResult, PricingMode,
    };
}

pub use error::{BondError, BondResult};
