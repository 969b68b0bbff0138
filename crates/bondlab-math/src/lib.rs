//! # Bondlab Math
//!
//! Numerical utilities for the Bondlab fixed income library.
//!
//! This crate provides:
//!
//! - **Solvers**: Derivative-free root finding (secant method) behind the
//!   [`RootFinder`](solvers::RootFinder) trait
//! - **Interpolation**: Linear interpolation between curve nodes
//!
//! All routines work on `f64` and report failures through [`MathError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{secant, RootFinder, SecantSolver, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
