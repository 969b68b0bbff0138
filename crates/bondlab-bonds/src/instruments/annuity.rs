//! Level-coupon annuity.
//!
//! A stream of `years * periods_per_year` equal coupons of
//! `principal * coupon_rate / periods_per_year`, with no principal
//! repayment. Priced either from a discount rate or by solving the internal
//! rate of return that reproduces a present value.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use bondlab_core::report::{Report, ReportField};
use bondlab_core::traits::PricesAt;
use bondlab_core::types::{Date, Frequency};
use bondlab_math::solvers::{RootFinder, SecantSolver};

use crate::config::PricingConfig;
use crate::error::{BondError, BondResult};
use crate::instruments::default_date;

/// How an annuity is priced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnnuityMode {
    /// Discount at this annual rate.
    ByRate(f64),
    /// Solve the rate that reproduces this present value.
    ByPresentValue(f64),
}

/// Outputs of an annuity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityAnalytics {
    /// Present value of the coupon stream.
    pub present_value: f64,
    /// Annual discount rate (the IRR when solved from a present value).
    pub discount_rate: f64,
    /// Undiscounted sum of all coupons.
    pub total_coupons: f64,
}

/// An annuity paying a level coupon for a whole number of years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelAnnuity {
    settlement: Date,
    years: u32,
    frequency: Frequency,
    coupon_rate: f64,
    principal: f64,
    mode: AnnuityMode,
    config: PricingConfig,
    analytics: Option<AnnuityAnalytics>,
}

impl LevelAnnuity {
    /// Creates an annuity.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSpec` for a zero term, a negative or
    /// non-finite coupon or principal.
    pub fn new(
        settlement: Date,
        years: u32,
        frequency: Frequency,
        coupon_rate: f64,
        principal: f64,
        mode: AnnuityMode,
    ) -> BondResult<Self> {
        if years == 0 {
            return Err(BondError::invalid_spec("annuity term must be at least one year"));
        }
        if !(coupon_rate.is_finite() && coupon_rate >= 0.0) {
            return Err(BondError::invalid_spec(format!(
                "coupon rate must be non-negative, got {coupon_rate}"
            )));
        }
        if !(principal.is_finite() && principal >= 0.0) {
            return Err(BondError::invalid_spec(format!(
                "principal must be non-negative, got {principal}"
            )));
        }

        Ok(Self {
            settlement,
            years,
            frequency,
            coupon_rate,
            principal,
            mode,
            config: PricingConfig::default(),
            analytics: None,
        })
    }

    /// Sets the pricing configuration.
    #[must_use]
    pub fn with_config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Returns the term in years.
    #[must_use]
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the annual coupon rate.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the principal.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns the pricing mode.
    #[must_use]
    pub fn mode(&self) -> AnnuityMode {
        self.mode
    }

    /// Replaces the pricing mode.
    pub fn set_mode(&mut self, mode: AnnuityMode) {
        self.mode = mode;
    }

    /// Returns the analytics of the last successful calculation.
    #[must_use]
    pub fn analytics(&self) -> Option<&AnnuityAnalytics> {
        self.analytics.as_ref()
    }

    /// Number of coupon payments.
    #[must_use]
    pub fn payments(&self) -> u32 {
        self.years * self.frequency.periods_per_year()
    }

    /// Coupon paid each period.
    #[must_use]
    pub fn coupon_per_period(&self) -> f64 {
        self.principal * self.coupon_rate / f64::from(self.frequency.periods_per_year())
    }

    /// Undiscounted sum of all coupons.
    #[must_use]
    pub fn total_coupons(&self) -> f64 {
        f64::from(self.years) * self.coupon_rate * self.principal
    }

    /// Present value of the coupons discounted at annual `rate`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSpec` unless `rate / periods_per_year > -1`.
    pub fn present_value_at_rate(&self, rate: f64) -> BondResult<f64> {
        let periods_per_year = f64::from(self.frequency.periods_per_year());
        if !(rate.is_finite() && rate / periods_per_year > -1.0) {
            return Err(BondError::invalid_spec(format!(
                "discount rate must be finite and above -{periods_per_year}, got {rate}"
            )));
        }
        Ok(self.level_sum(rate))
    }

    /// Solves the annual rate that reproduces `present_value`.
    pub fn internal_rate_of_return<R: RootFinder>(
        &self,
        present_value: f64,
        solver: &R,
    ) -> BondResult<f64> {
        self.config.validate()?;
        if !present_value.is_finite() {
            return Err(BondError::invalid_spec(format!(
                "present value must be finite, got {present_value}"
            )));
        }

        let solution = solver.find_root(
            |r| self.level_sum(r) - present_value,
            self.config.lower_bound,
            self.config.upper_bound,
            &self.config.solver_config(),
        )?;
        debug!(
            "{} solved annuity rate {} in {} iterations",
            solver.name(),
            solution.root,
            solution.iterations
        );

        Ok(solution.root)
    }

    /// Prices the annuity with the default secant solver and stores the result.
    pub fn calculate(&mut self) -> BondResult<&AnnuityAnalytics> {
        self.calculate_with(&SecantSolver)
    }

    /// Prices the annuity with the given root finder and stores the result.
    ///
    /// On error the previous analytics are left untouched.
    pub fn calculate_with<R: RootFinder>(&mut self, solver: &R) -> BondResult<&AnnuityAnalytics> {
        let analytics = match self.evaluate(solver) {
            Ok(analytics) => analytics,
            Err(e) => {
                warn!("annuity calculation rejected: {e}");
                return Err(e);
            }
        };

        Ok(self.analytics.insert(analytics))
    }

    fn evaluate<R: RootFinder>(&self, solver: &R) -> BondResult<AnnuityAnalytics> {
        let (present_value, discount_rate) = match self.mode {
            AnnuityMode::ByRate(rate) => (self.present_value_at_rate(rate)?, rate),
            AnnuityMode::ByPresentValue(pv) => (pv, self.internal_rate_of_return(pv, solver)?),
        };

        Ok(AnnuityAnalytics {
            present_value,
            discount_rate,
            total_coupons: self.total_coupons(),
        })
    }

    /// Geometric sum of the discounted coupons.
    fn level_sum(&self, rate: f64) -> f64 {
        let periods_per_year = f64::from(self.frequency.periods_per_year());
        let coupon = self.coupon_per_period();
        let n = f64::from(self.payments());

        if rate == 0.0 {
            return coupon * n;
        }

        let d = 1.0 / (1.0 + rate / periods_per_year);
        coupon * (d - d.powf(n + 1.0)) / (1.0 - d)
    }
}

impl Default for LevelAnnuity {
    /// Three-year annual annuity worth 100 at a 10% discount rate.
    fn default() -> Self {
        Self {
            settlement: default_date(2000, 1, 1),
            years: 3,
            frequency: Frequency::Annual,
            coupon_rate: 0.402_114_803_625_377_4,
            principal: 100.0,
            mode: AnnuityMode::ByPresentValue(100.0),
            config: PricingConfig::default(),
            analytics: None,
        }
    }
}

impl Report for LevelAnnuity {
    fn title(&self) -> String {
        "Cashflow".to_string()
    }

    fn fields(&self) -> Vec<ReportField> {
        let mut fields = vec![
            ReportField::input("Principal", self.principal),
            ReportField::input("Settlement", self.settlement),
            ReportField::input("Years", self.years),
            ReportField::input("Frequency", self.frequency.to_string()),
            ReportField::input("Coupon", self.coupon_rate),
        ];
        match self.mode {
            AnnuityMode::ByRate(rate) => fields.push(ReportField::input("Rate", rate)),
            AnnuityMode::ByPresentValue(pv) => fields.push(ReportField::input("PV", pv)),
        }

        if let Some(analytics) = &self.analytics {
            fields.push(ReportField::output("PV", analytics.present_value));
            fields.push(ReportField::output("Rate", analytics.discount_rate));
            fields.push(ReportField::output("FV", analytics.total_coupons));
        }

        fields
    }
}

impl PricesAt for LevelAnnuity {
    type Error = BondError;

    fn present_value(&self) -> BondResult<f64> {
        match self.mode {
            AnnuityMode::ByRate(rate) => self.present_value_at_rate(rate),
            AnnuityMode::ByPresentValue(pv) => Ok(pv),
        }
    }

    /// Discounts at `rate`. Coupons are counted from settlement, so the
    /// value does not depend on `settlement`.
    fn present_value_at(&self, _settlement: Date, rate: f64) -> BondResult<f64> {
        self.present_value_at_rate(rate)
    }
}
