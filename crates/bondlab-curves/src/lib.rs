//! # Bondlab Curves
//!
//! Annual yield curve construction for the Bondlab fixed income library.
//!
//! This crate provides:
//!
//! - **Bootstrap**: Par to spot stripping and spot to par pricing on whole-year nodes
//! - **Curves**: [`YieldCurve`] with credit spread and Z-spread variants
//! - **Discounting**: Discount factors at fractional tenors by linear spot interpolation
//!
//! ## Quick Start
//!
//! ```rust
//! use bondlab_curves::prelude::*;
//!
//! let mut curve = YieldCurve::default();
//! let nodes = curve.bootstrap_spot_yields().unwrap();
//! assert_eq!(nodes.len(), 4);
//!
//! let df = curve.discount_factor_at(1.5).unwrap();
//! assert!(df < 1.0);
//! ```
//!
//! [`YieldCurve`]: curve::YieldCurve

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

pub mod bootstrap;
pub mod curve;
pub mod error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{par_to_spot, spot_to_par, BootstrapOutput};
    pub use crate::curve::{CurveNodes, CurveQuotes, SpreadAdjustment, YieldCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use bondlab_core::report::Report;
}

pub use error::{CurveError, CurveResult};
