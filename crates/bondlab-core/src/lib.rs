//! # Bondlab Core
//!
//! Core types, traits, and abstractions for the Bondlab fixed income library.
//!
//! This crate provides the foundational building blocks used throughout Bondlab:
//!
//! - **Types**: Domain-specific types like [`Date`] and [`Frequency`]
//! - **Day Count Conventions**: Period fractions under ACT/360, ACT/365, ACT/ACT and 30/360
//! - **Traits**: Mark-to-market over any instrument that can reprice itself
//! - **Reporting**: Ordered, labelled input/output fields for instruments and curves
//!
//! ## Example
//!
//! ```rust
//! use bondlab_core::prelude::*;
//!
//! let start = Date::from_ymd(2000, 1, 1).unwrap();
//! let end = Date::from_ymd(2000, 4, 1).unwrap();
//!
//! let accrual = DayCountConvention::Actual360
//!     .accrued_fraction(start, end, Frequency::Quarterly)
//!     .unwrap();
//! assert_eq!(accrual.total_days, 91);
//! ```

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

pub mod daycounts;
pub mod error;
pub mod report;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{AccrualFraction, DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::report::{FieldKind, FieldValue, Report, ReportField};
    pub use crate::traits::{mark_to_market, Position, PricesAt};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
