//! Pricing configuration.
//!
//! Controls how yields are solved from prices. The defaults reproduce the
//! classic setup: secant iteration seeded at 0% and 50%, converged once the
//! price residual is within 1e-12.
//!
//! ```rust
//! use bondlab_bonds::config::PricingConfig;
//!
//! let config = PricingConfig::from_json(r#"{ "max_iterations": 50 }"#).unwrap();
//! assert_eq!(config.max_iterations, 50);
//! assert_eq!(config.tolerance, 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use bondlab_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{BondError, BondResult};

/// Settings for yield solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Absolute tolerance on the price residual.
    pub tolerance: f64,
    /// Maximum secant iterations.
    pub max_iterations: u32,
    /// First seed for the yield search.
    pub lower_bound: f64,
    /// Second seed for the yield search.
    pub upper_bound: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            lower_bound: 0.0,
            upper_bound: 0.5,
        }
    }
}

impl PricingConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> BondResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BondError::invalid_spec(format!("invalid pricing config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings can drive a solver.
    pub fn validate(&self) -> BondResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(BondError::invalid_spec("max_iterations must be positive"));
        }
        if !(self.lower_bound.is_finite() && self.upper_bound.is_finite())
            || self.lower_bound >= self.upper_bound
        {
            return Err(BondError::invalid_spec(format!(
                "yield bracket [{}, {}] is not an increasing pair of finite numbers",
                self.lower_bound, self.upper_bound
            )));
        }
        Ok(())
    }

    /// Sets the yield bracket.
    #[must_use]
    pub fn with_bracket(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Solver settings derived from this configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}
