//! Curve bootstrap algorithms.
//!
//! Nodes sit at whole years `0, 1, ..., N-1` with annual compounding.
//! Node 0 is the immediate tenor and is carried through unchanged.
//!
//! - [`par_to_spot`]: strips spot (zero) yields from par yields, solving
//!   each node from the discount factors already found
//! - [`spot_to_par`]: prices the par coupon at each node from spot yields
//!
//! # Example
//!
//! ```rust
//! use bondlab_curves::bootstrap::{par_to_spot, spot_to_par};
//!
//! let par = [0.0, 0.08, 0.09, 0.10, 0.11];
//! let spot = par_to_spot(&par).unwrap();
//! assert!((spot.yields[2] - 0.09045445071809799).abs() < 1e-12);
//!
//! let back = spot_to_par(&spot.yields).unwrap();
//! assert!((back.yields[4] - 0.11).abs() < 1e-12);
//! ```

mod sequential;

pub use sequential::{par_to_spot, spot_to_par};

use serde::{Deserialize, Serialize};

/// Yields and discount factors produced by a bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapOutput {
    /// Derived yields, one per node.
    pub yields: Vec<f64>,
    /// Discount factors, one per node.
    pub discount_factors: Vec<f64>,
}

impl BootstrapOutput {
    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.yields.len()
    }

    /// True if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yields.is_empty()
    }
}
