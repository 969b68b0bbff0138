//! Root-finding algorithms.
//!
//! Yields are recovered from prices by solving `price(y) - target = 0`.
//! The pricing engines take any [`RootFinder`]; [`SecantSolver`] is the
//! default and needs no derivative.
//!
//! # Example: Yield from Price
//!
//! ```rust
//! use bondlab_math::solvers::{secant, SolverConfig};
//!
//! // 5% annual coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = secant(price_fn, 0.0, 0.5, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```

mod secant;

pub use secant::secant;

use crate::error::MathResult;

/// Default tolerance on the absolute residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence is reached once `|f(x)| <= tolerance`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Trait for root-finding algorithms seeded with two points.
///
/// # Example
///
/// ```rust
/// use bondlab_math::solvers::{RootFinder, SecantSolver, SolverConfig};
///
/// let solver = SecantSolver;
/// let result = solver
///     .find_root(|x| x * x - 2.0, 1.0, 2.0, &SolverConfig::default())
///     .unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub trait RootFinder: Send + Sync {
    /// Finds a root of `f` starting from the seeds `lower` and `upper`.
    ///
    /// The seeds need not bracket the root, but a bracketing pair makes
    /// the search reliable.
    fn find_root<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Secant method solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecantSolver;

impl RootFinder for SecantSolver {
    fn find_root<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        secant(f, lower, upper, config)
    }

    fn name(&self) -> &'static str {
        "Secant"
    }
}
