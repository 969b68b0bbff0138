//! Fixed coupon bond.

use log::warn;
use serde::{Deserialize, Serialize};

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::report::{Report, ReportField};
use bondlab_core::traits::PricesAt;
use bondlab_core::types::{Date, Frequency};
use bondlab_math::solvers::{RootFinder, SecantSolver};

use crate::cashflows::coupon_dates;
use crate::config::PricingConfig;
use crate::error::{BondError, BondResult};
use crate::instruments::default_date;
use crate::pricing::{
    adjusted_current_yield, current_yield, price_from_yield, yield_from_clean_price,
    yield_to_horizon, BondTerms, HorizonResult, HorizonTerms, PriceResult, PricingMode,
};

/// Outputs of a bond calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondAnalytics {
    /// Clean price per unit principal.
    pub clean_price: f64,
    /// Accrued interest in currency units.
    pub accrued_interest: f64,
    /// Yield to maturity.
    pub yield_to_maturity: f64,
    /// Present (dirty) value in currency units.
    pub present_value: f64,
    /// Horizon analytics, when horizon terms are set.
    pub horizon: Option<HorizonResult>,
}

/// A fixed coupon bond priced either from a yield or from a clean price.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::prelude::*;
/// use bondlab_core::prelude::*;
///
/// let mut bond = FixedCouponBondBuilder::new()
///     .settlement(Date::from_ymd(2000, 1, 1).unwrap())
///     .maturity(Date::from_ymd(2010, 8, 15).unwrap())
///     .day_count(DayCountConvention::ActualActual)
///     .frequency(Frequency::Quarterly)
///     .coupon_rate(0.08)
///     .principal(1.0)
///     .clean_price(0.97)
///     .build()
///     .unwrap();
///
/// let analytics = bond.calculate().unwrap();
/// assert!((analytics.yield_to_maturity - 0.084295197233745636).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCouponBond {
    terms: BondTerms,
    mode: PricingMode,
    horizon: Option<HorizonTerms>,
    config: PricingConfig,
    analytics: Option<BondAnalytics>,
}

impl FixedCouponBond {
    /// Returns the contractual terms.
    #[must_use]
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.terms.settlement
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.terms.maturity
    }

    /// Returns the coupon rate as a decimal.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.terms.coupon_rate
    }

    /// Returns the principal.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.terms.principal
    }

    /// Returns the pricing mode.
    #[must_use]
    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    /// Replaces the pricing mode. Existing analytics are kept until the next calculation.
    pub fn set_mode(&mut self, mode: PricingMode) {
        self.mode = mode;
    }

    /// Returns the horizon assumptions.
    #[must_use]
    pub fn horizon(&self) -> Option<&HorizonTerms> {
        self.horizon.as_ref()
    }

    /// Replaces the horizon assumptions.
    pub fn set_horizon(&mut self, horizon: Option<HorizonTerms>) {
        self.horizon = horizon;
    }

    /// Returns the pricing configuration.
    #[must_use]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Sets the pricing configuration.
    #[must_use]
    pub fn with_config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the analytics of the last successful calculation.
    #[must_use]
    pub fn analytics(&self) -> Option<&BondAnalytics> {
        self.analytics.as_ref()
    }

    /// Prices the bond with the default secant solver and stores the result.
    pub fn calculate(&mut self) -> BondResult<&BondAnalytics> {
        self.calculate_with(&SecantSolver)
    }

    /// Prices the bond with the given root finder and stores the result.
    ///
    /// On error the previous analytics are left untouched.
    pub fn calculate_with<R: RootFinder>(&mut self, solver: &R) -> BondResult<&BondAnalytics> {
        let analytics = match self.evaluate(solver) {
            Ok(analytics) => analytics,
            Err(e) => {
                warn!("bond calculation rejected: {e}");
                return Err(e);
            }
        };

        Ok(self.analytics.insert(analytics))
    }

    /// Prices the bond under its current mode without storing anything.
    pub fn price<R: RootFinder>(&self, solver: &R) -> BondResult<PriceResult> {
        match self.mode {
            PricingMode::ByYield(yield_to_maturity) => {
                price_from_yield(&self.terms, yield_to_maturity)
            }
            PricingMode::ByCleanPrice(clean) => {
                yield_from_clean_price(&self.terms, clean, solver, &self.config)
            }
        }
    }

    /// Current yield in percent.
    pub fn current_yield(&self) -> BondResult<f64> {
        let price = self.price(&SecantSolver)?;
        Ok(current_yield(self.terms.coupon_rate, price.clean_price))
    }

    /// Current yield adjusted for the pull to par.
    pub fn adjusted_current_yield(&self) -> BondResult<f64> {
        let price = self.price(&SecantSolver)?;
        adjusted_current_yield(&self.terms, price.clean_price)
    }

    /// Remaining coupon dates after settlement.
    pub fn coupon_dates(&self) -> BondResult<Vec<Date>> {
        Ok(coupon_dates(
            self.terms.settlement,
            self.terms.maturity,
            self.terms.frequency,
        )?)
    }

    fn evaluate<R: RootFinder>(&self, solver: &R) -> BondResult<BondAnalytics> {
        let price = self.price(solver)?;
        let horizon = self
            .horizon
            .as_ref()
            .map(|horizon| yield_to_horizon(&self.terms, &price, horizon))
            .transpose()?;

        Ok(BondAnalytics {
            clean_price: price.clean_price,
            accrued_interest: price.accrued_interest,
            yield_to_maturity: price.yield_to_maturity,
            present_value: price.present_value,
            horizon,
        })
    }
}

impl Default for FixedCouponBond {
    /// Seven-year 8% semi-annual 30/360 bond at 97, held to maturity.
    fn default() -> Self {
        Self {
            terms: BondTerms {
                settlement: default_date(2000, 1, 1),
                maturity: default_date(2007, 1, 1),
                day_count: DayCountConvention::Thirty360,
                frequency: Frequency::SemiAnnual,
                coupon_rate: 0.08,
                principal: 1000.0,
            },
            mode: PricingMode::ByCleanPrice(0.97),
            horizon: Some(HorizonTerms {
                date: default_date(2007, 1, 1),
                price: 1.0,
                reinvestment_rate: 0.05,
            }),
            config: PricingConfig::default(),
            analytics: None,
        }
    }
}

impl Report for FixedCouponBond {
    fn title(&self) -> String {
        "Bond".to_string()
    }

    fn fields(&self) -> Vec<ReportField> {
        let terms = &self.terms;
        let mut fields = vec![
            ReportField::input("Principal", terms.principal),
            ReportField::input("Settlement", terms.settlement),
            ReportField::input("Maturity", terms.maturity),
            ReportField::input("Coupon", terms.coupon_rate),
            ReportField::input("Day Count", terms.day_count.name()),
            ReportField::input("Frequency", terms.frequency.to_string()),
        ];

        match self.mode {
            PricingMode::ByYield(y) => fields.push(ReportField::input("Yield To Maturity", y)),
            PricingMode::ByCleanPrice(clean) => fields.push(ReportField::input("Clean", clean)),
        }

        if let Some(horizon) = &self.horizon {
            fields.push(ReportField::input("Horizon Date", horizon.date));
            fields.push(ReportField::input("Horizon Price", horizon.price));
            fields.push(ReportField::input(
                "Horizon Reinvestment",
                horizon.reinvestment_rate,
            ));
        }

        if let Some(analytics) = &self.analytics {
            fields.push(ReportField::output("Clean", analytics.clean_price));
            fields.push(ReportField::output("Accrued", analytics.accrued_interest));
            fields.push(ReportField::output(
                "Yield To Maturity",
                analytics.yield_to_maturity,
            ));
            fields.push(ReportField::output("PV", analytics.present_value));

            if let Some(horizon) = &analytics.horizon {
                fields.push(ReportField::output("Horizon PV", horizon.present_value));
                fields.push(ReportField::output("Horizon Yield", horizon.horizon_yield));
                fields.push(ReportField::output("Horizon Gross", horizon.gross_return));
            }
        }

        fields
    }
}

impl PricesAt for FixedCouponBond {
    type Error = BondError;

    fn present_value(&self) -> BondResult<f64> {
        Ok(self.price(&SecantSolver)?.present_value)
    }

    /// Reprices at `settlement` with `rate` as the yield to maturity.
    fn present_value_at(&self, settlement: Date, rate: f64) -> BondResult<f64> {
        let terms = self.terms.with_settlement(settlement);
        Ok(price_from_yield(&terms, rate)?.present_value)
    }
}

/// Builder for fixed coupon bonds.
#[derive(Debug, Clone, Default)]
pub struct FixedCouponBondBuilder {
    settlement: Option<Date>,
    maturity: Option<Date>,
    day_count: DayCountConvention,
    frequency: Frequency,
    coupon_rate: f64,
    principal: f64,
    mode: Option<PricingMode>,
    horizon: Option<HorizonTerms>,
    config: PricingConfig,
}

impl FixedCouponBondBuilder {
    /// Creates a new builder: 30/360, semi-annual, zero coupon, principal 100.
    #[must_use]
    pub fn new() -> Self {
        Self {
            principal: 100.0,
            ..Default::default()
        }
    }

    /// Sets the settlement date.
    #[must_use]
    pub fn settlement(mut self, date: Date) -> Self {
        self.settlement = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the annual coupon rate (as decimal, 0.08 = 8%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = rate;
        self
    }

    /// Sets the principal.
    #[must_use]
    pub fn principal(mut self, principal: f64) -> Self {
        self.principal = principal;
        self
    }

    /// Prices from this yield to maturity.
    #[must_use]
    pub fn yield_to_maturity(mut self, yield_to_maturity: f64) -> Self {
        self.mode = Some(PricingMode::ByYield(yield_to_maturity));
        self
    }

    /// Solves the yield from this clean price (per unit principal).
    #[must_use]
    pub fn clean_price(mut self, clean: f64) -> Self {
        self.mode = Some(PricingMode::ByCleanPrice(clean));
        self
    }

    /// Sets horizon assumptions.
    #[must_use]
    pub fn horizon(mut self, date: Date, price: f64, reinvestment_rate: f64) -> Self {
        self.horizon = Some(HorizonTerms {
            date,
            price,
            reinvestment_rate,
        });
        self
    }

    /// Sets the pricing configuration.
    #[must_use]
    pub fn config(mut self, config: PricingConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns an error if dates or the pricing mode are missing, or if the
    /// terms are inconsistent.
    pub fn build(self) -> BondResult<FixedCouponBond> {
        let settlement = self
            .settlement
            .ok_or_else(|| BondError::missing_field("settlement"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;
        let mode = self.mode.ok_or_else(|| BondError::missing_field("mode"))?;

        let terms = BondTerms {
            settlement,
            maturity,
            day_count: self.day_count,
            frequency: self.frequency,
            coupon_rate: self.coupon_rate,
            principal: self.principal,
        };
        terms.validate()?;
        self.config.validate()?;

        Ok(FixedCouponBond {
            terms,
            mode,
            horizon: self.horizon,
            config: self.config,
            analytics: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondlab_core::traits::{mark_to_market, Position};

    fn reference_builder() -> FixedCouponBondBuilder {
        FixedCouponBondBuilder::new()
            .settlement(Date::from_ymd(2000, 1, 1).unwrap())
            .maturity(Date::from_ymd(2010, 8, 15).unwrap())
            .day_count(DayCountConvention::ActualActual)
            .frequency(Frequency::Quarterly)
            .coupon_rate(0.08)
            .principal(1.0)
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            FixedCouponBondBuilder::new().build(),
            Err(BondError::MissingField { .. })
        ));
        assert!(matches!(
            reference_builder().build(),
            Err(BondError::MissingField { field }) if field == "mode"
        ));
    }

    #[test]
    fn test_builder_rejects_negative_coupon() {
        let result = reference_builder().coupon_rate(-0.01).clean_price(0.97).build();
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }

    #[test]
    fn test_default_bond_calculates() {
        let mut bond = FixedCouponBond::default();
        let analytics = *bond.calculate().unwrap();

        // Settles on a coupon date, so nothing has accrued
        assert_eq!(analytics.accrued_interest, 0.0);
        assert_relative_eq!(analytics.present_value, 970.0, epsilon = 1e-9);
        assert!(analytics.yield_to_maturity > 0.08);

        let horizon = analytics.horizon.unwrap();
        assert!(horizon.present_value > 1000.0);
        assert!(horizon.horizon_yield > 0.0);
        assert_relative_eq!(horizon.gross_return, horizon.present_value - 970.0, epsilon = 1e-9);
    }

    #[test]
    fn test_failed_calculation_keeps_previous_outputs() {
        let mut bond = reference_builder().clean_price(0.97).build().unwrap();
        let before = *bond.calculate().unwrap();

        // Non-finite prices are rejected before the solver runs
        bond.set_mode(PricingMode::ByCleanPrice(f64::NAN));
        assert!(bond.calculate().is_err());
        assert_eq!(bond.analytics(), Some(&before));
    }

    #[test]
    fn test_current_yields() {
        let bond = reference_builder().clean_price(0.97).build().unwrap();
        assert_relative_eq!(bond.current_yield().unwrap(), 8.0 / 0.97, epsilon = 1e-12);
        assert!(bond.adjusted_current_yield().unwrap() > 0.08 / 0.97);
    }

    #[test]
    fn test_mark_to_market() {
        let bond = reference_builder().yield_to_maturity(0.08).build().unwrap();
        let as_of = Date::from_ymd(2001, 1, 1).unwrap();

        let long = mark_to_market(&bond, as_of, 0.07, Position::Long).unwrap();
        let short = mark_to_market(&bond, as_of, 0.07, Position::Short).unwrap();
        assert!(long > 0.0);
        assert_relative_eq!(long, -short, epsilon = 1e-15);

        let flat = mark_to_market(&bond, bond.settlement(), 0.08, Position::Long).unwrap();
        assert_relative_eq!(flat, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_report() {
        let mut bond = FixedCouponBond::default();
        let before = bond.render();
        assert!(before.contains("##### Bond #####"));
        assert!(!before.contains("PV:"));

        bond.calculate().unwrap();
        let after = bond.render();
        assert!(after.contains("  | PV:"));
        assert!(after.contains("  | Horizon Yield:"));
        assert!(after.contains("30/360"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let bond = FixedCouponBond::default();
        let json = serde_json::to_string(&bond).unwrap();
        let back: FixedCouponBond = serde_json::from_str(&json).unwrap();
        assert_eq!(back.terms(), bond.terms());
        assert_eq!(back.mode(), bond.mode());
    }
}
