//! Bond pricing calculations.
//!
//! This module provides:
//! - [`price_from_yield`]: clean price, accrued interest and PV from a yield
//! - [`yield_from_clean_price`]: yield to maturity from a clean price
//! - [`yield_to_horizon`]: total-return yield to a horizon date
//! - [`current_yield`] and [`adjusted_current_yield`]
//!
//! Prices are quoted per unit of principal; accrued interest and present
//! value are in currency units (scaled by principal).

mod horizon;

pub use horizon::{yield_to_horizon, HorizonResult, HorizonTerms};

use log::debug;
use serde::{Deserialize, Serialize};

use bondlab_core::daycounts::DayCountConvention;
use bondlab_core::types::{Date, Frequency};
use bondlab_core::CoreError;
use bondlab_math::solvers::RootFinder;

use crate::cashflows::{payment_count, previous_next_coupons, CouponPeriod};
use crate::config::PricingConfig;
use crate::error::{BondError, BondResult};

/// Which price input is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PricingMode {
    /// Price the bond from this yield to maturity.
    ByYield(f64),
    /// Solve for the yield that reproduces this clean price (per unit principal).
    ByCleanPrice(f64),
}

/// Contractual terms of a fixed coupon bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Settlement date.
    pub settlement: Date,
    /// Maturity date; the final coupon and principal are paid here.
    pub maturity: Date,
    /// Day count convention for accrual.
    pub day_count: DayCountConvention,
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Annual coupon rate as a decimal (0.08 = 8%).
    pub coupon_rate: f64,
    /// Principal (face) amount.
    pub principal: f64,
}

impl BondTerms {
    /// Returns a copy settling on another date.
    #[must_use]
    pub fn with_settlement(mut self, settlement: Date) -> Self {
        self.settlement = settlement;
        self
    }

    /// Coupon rate per period.
    #[must_use]
    pub fn coupon_per_period(&self) -> f64 {
        self.coupon_rate / self.frequency.periods_per_year() as f64
    }

    /// Checks the terms for values no bond can have.
    pub fn validate(&self) -> BondResult<()> {
        if self.settlement > self.maturity {
            return Err(CoreError::invalid_date_order(
                self.settlement,
                self.maturity,
                "settlement must not be after maturity",
            )
            .into());
        }
        if !(self.coupon_rate.is_finite() && self.coupon_rate >= 0.0) {
            return Err(BondError::invalid_spec(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate
            )));
        }
        if !(self.principal.is_finite() && self.principal >= 0.0) {
            return Err(BondError::invalid_spec(format!(
                "principal must be non-negative, got {}",
                self.principal
            )));
        }
        Ok(())
    }

    /// Locates settlement within the coupon calendar.
    pub fn position(&self) -> BondResult<SettlementPosition> {
        let period = previous_next_coupons(self.settlement, self.maturity, self.frequency)?;
        let accrual = self
            .day_count
            .accrued_fraction(period.previous, self.settlement, self.frequency)?;
        let payments = payment_count(self.maturity, period.next, self.frequency)?;

        Ok(SettlementPosition {
            period,
            accrued_fraction: accrual.fraction,
            payments,
        })
    }
}

/// Where settlement falls in the coupon calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementPosition {
    /// Coupon period containing settlement.
    pub period: CouponPeriod,
    /// Elapsed fraction of that period at settlement.
    pub accrued_fraction: f64,
    /// Coupons still to be paid, including the one at maturity.
    pub payments: u32,
}

impl SettlementPosition {
    /// Dirty price per unit principal at the given yield.
    ///
    /// Cash flow `i` is discounted over `i + 1 - accrued_fraction` periods and
    /// the final one carries the principal.
    #[must_use]
    pub fn dirty_price(&self, coupon_per_period: f64, frequency: Frequency, yield_rate: f64) -> f64 {
        let base = 1.0 + yield_rate / frequency.periods_per_year() as f64;

        (0..self.payments)
            .map(|i| {
                let cash_flow = if i + 1 == self.payments {
                    coupon_per_period + 1.0
                } else {
                    coupon_per_period
                };
                cash_flow * base.powf(-(f64::from(i) + 1.0 - self.accrued_fraction))
            })
            .sum()
    }

    /// Accrued interest per unit principal.
    #[must_use]
    pub fn accrued(&self, coupon_per_period: f64) -> f64 {
        self.accrued_fraction * coupon_per_period
    }
}

/// Result of a bond pricing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Clean price per unit principal.
    pub clean_price: f64,
    /// Dirty price per unit principal.
    pub dirty_price: f64,
    /// Accrued interest in currency units.
    pub accrued_interest: f64,
    /// Present value (dirty price times principal).
    pub present_value: f64,
    /// Yield to maturity.
    pub yield_to_maturity: f64,
    /// Elapsed fraction of the current coupon period at settlement.
    pub accrued_fraction: f64,
}

/// Prices a bond from its yield to maturity.
///
/// # Example
///
/// ```rust
/// use bondlab_bonds::pricing::{price_from_yield, BondTerms};
/// use bondlab_core::prelude::*;
///
/// let terms = BondTerms {
///     settlement: Date::from_ymd(2000, 1, 1).unwrap(),
///     maturity: Date::from_ymd(2010, 8, 15).unwrap(),
///     day_count: DayCountConvention::ActualActual,
///     frequency: Frequency::Quarterly,
///     coupon_rate: 0.08,
///     principal: 1.0,
/// };
///
/// let price = price_from_yield(&terms, 0.084295197233745636).unwrap();
/// assert!((price.clean_price - 0.97).abs() < 1e-9);
/// ```
pub fn price_from_yield(terms: &BondTerms, yield_to_maturity: f64) -> BondResult<PriceResult> {
    terms.validate()?;
    if !yield_to_maturity.is_finite() {
        return Err(BondError::invalid_spec(format!(
            "yield must be finite, got {yield_to_maturity}"
        )));
    }

    let position = terms.position()?;
    let coupon = terms.coupon_per_period();
    let dirty_price = position.dirty_price(coupon, terms.frequency, yield_to_maturity);
    let accrued = position.accrued(coupon);

    Ok(PriceResult {
        clean_price: dirty_price - accrued,
        dirty_price,
        accrued_interest: accrued * terms.principal,
        present_value: dirty_price * terms.principal,
        yield_to_maturity,
        accrued_fraction: position.accrued_fraction,
    })
}

/// Solves for the yield to maturity that reproduces a clean price.
///
/// The solver is seeded with the configured bracket. The returned PV is
/// `clean * principal + accrued`.
pub fn yield_from_clean_price<R: RootFinder>(
    terms: &BondTerms,
    clean_price: f64,
    solver: &R,
    config: &PricingConfig,
) -> BondResult<PriceResult> {
    terms.validate()?;
    config.validate()?;
    if !clean_price.is_finite() {
        return Err(BondError::invalid_spec(format!(
            "clean price must be finite, got {clean_price}"
        )));
    }

    let position = terms.position()?;
    let coupon = terms.coupon_per_period();
    let accrued = position.accrued(coupon);

    let residual = |y: f64| position.dirty_price(coupon, terms.frequency, y) - accrued - clean_price;
    let solution = solver.find_root(
        residual,
        config.lower_bound,
        config.upper_bound,
        &config.solver_config(),
    )?;

    debug!(
        "{} solved yield {} for clean {} in {} iterations",
        solver.name(),
        solution.root,
        clean_price,
        solution.iterations
    );

    let dirty_price = clean_price + accrued;
    Ok(PriceResult {
        clean_price,
        dirty_price,
        accrued_interest: accrued * terms.principal,
        present_value: dirty_price * terms.principal,
        yield_to_maturity: solution.root,
        accrued_fraction: position.accrued_fraction,
    })
}

/// Current yield in percent: annual coupon over clean price.
#[must_use]
pub fn current_yield(coupon_rate: f64, clean_price: f64) -> f64 {
    coupon_rate / clean_price * 100.0
}

/// Current yield adjusted for the pull to par over the remaining life.
///
/// `(coupon + (1 - clean) / years) / clean`, where `years` is the remaining
/// whole coupons plus the fraction of the current period still to run,
/// both expressed in years.
pub fn adjusted_current_yield(terms: &BondTerms, clean_price: f64) -> BondResult<f64> {
    terms.validate()?;

    let period = previous_next_coupons(terms.settlement, terms.maturity, terms.frequency)?;
    let to_next = terms
        .day_count
        .accrued_fraction(terms.settlement, period.next, terms.frequency)?;
    let payments = payment_count(terms.maturity, period.next, terms.frequency)?;

    let periods_per_year = terms.frequency.periods_per_year() as f64;
    let years = f64::from(payments) / periods_per_year + to_next.fraction / periods_per_year;

    Ok((terms.coupon_rate + (1.0 - clean_price) / years) / clean_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondlab_math::solvers::SecantSolver;

    const YTM: f64 = 0.084295197233745636;

    fn terms() -> BondTerms {
        BondTerms {
            settlement: Date::from_ymd(2000, 1, 1).unwrap(),
            maturity: Date::from_ymd(2010, 8, 15).unwrap(),
            day_count: DayCountConvention::ActualActual,
            frequency: Frequency::Quarterly,
            coupon_rate: 0.08,
            principal: 1.0,
        }
    }

    #[test]
    fn test_position() {
        let position = terms().position().unwrap();
        assert_eq!(position.payments, 43);
        assert_relative_eq!(position.accrued_fraction, 47.0 / 92.0, epsilon = 1e-15);
    }

    #[test]
    fn test_price_from_yield() {
        let price = price_from_yield(&terms(), YTM).unwrap();

        assert_relative_eq!(price.clean_price, 0.97, epsilon = 1e-9);
        assert_relative_eq!(price.present_value, 0.9802173913043378, epsilon = 1e-9);
        assert_relative_eq!(price.accrued_interest, 47.0 / 92.0 * 0.02, epsilon = 1e-15);
    }

    #[test]
    fn test_yield_from_clean_price() {
        let price =
            yield_from_clean_price(&terms(), 0.97, &SecantSolver, &PricingConfig::default())
                .unwrap();

        assert_relative_eq!(price.yield_to_maturity, YTM, epsilon = 1e-9);
        assert_relative_eq!(price.present_value, 0.9802173913043378, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_scales_money_amounts() {
        let mut large = terms();
        large.principal = 1000.0;

        let unit = price_from_yield(&terms(), YTM).unwrap();
        let scaled = price_from_yield(&large, YTM).unwrap();

        assert_relative_eq!(scaled.clean_price, unit.clean_price, epsilon = 1e-15);
        assert_relative_eq!(scaled.present_value, unit.present_value * 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_settlement_on_maturity() {
        let mut at_maturity = terms();
        at_maturity.settlement = at_maturity.maturity;

        // Final coupon fully accrued, principal due now
        let price = price_from_yield(&at_maturity, 0.05).unwrap();
        assert_relative_eq!(price.dirty_price, 1.02, epsilon = 1e-12);
        assert_relative_eq!(price.clean_price, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_principal_is_finite() {
        let mut empty = terms();
        empty.principal = 0.0;

        let price = price_from_yield(&empty, YTM).unwrap();
        assert_relative_eq!(price.clean_price, 0.97, epsilon = 1e-9);
        assert_eq!(price.present_value, 0.0);
    }

    #[test]
    fn test_invalid_terms() {
        let mut bad = terms();
        bad.settlement = Date::from_ymd(2011, 1, 1).unwrap();
        assert!(matches!(
            price_from_yield(&bad, YTM),
            Err(BondError::Core(CoreError::InvalidDateOrder { .. }))
        ));

        let mut negative = terms();
        negative.principal = -1.0;
        assert!(matches!(
            price_from_yield(&negative, YTM),
            Err(BondError::InvalidSpec { .. })
        ));
    }

    #[test]
    fn test_current_yield() {
        assert_relative_eq!(current_yield(0.08, 0.97), 8.247422680412371, epsilon = 1e-12);
    }

    #[test]
    fn test_adjusted_current_yield() {
        // 43 payments plus 45 days of the 91-day window starting at settlement
        let years = 43.0 / 4.0 + (45.0 / 91.0) / 4.0;
        let expected = (0.08 + 0.03 / years) / 0.97;

        let acy = adjusted_current_yield(&terms(), 0.97).unwrap();
        assert_relative_eq!(acy, expected, epsilon = 1e-15);
    }
}
