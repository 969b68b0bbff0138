//! Yield to a horizon date.
//!
//! The holder buys at settlement, reinvests every coupon received before the
//! horizon at a fixed rate, and sells at the horizon price plus accrued
//! interest. The horizon yield is the periodic growth rate of that total,
//! annualized by compounding, and is found in closed form.

use log::debug;
use serde::{Deserialize, Serialize};

use bondlab_core::types::Date;
use bondlab_core::CoreError;

use super::{BondTerms, PriceResult};
use crate::cashflows::{payment_count, previous_next_coupons};
use crate::error::{BondError, BondResult};

/// Assumptions for a horizon analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonTerms {
    /// Date the bond is assumed sold.
    pub date: Date,
    /// Clean sale price per unit principal.
    pub price: f64,
    /// Annual rate at which coupons are reinvested until the horizon.
    pub reinvestment_rate: f64,
}

/// Horizon analytics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonResult {
    /// Value at the horizon: sale proceeds, accrued and reinvested coupons.
    pub present_value: f64,
    /// Annualized holding-period yield.
    pub horizon_yield: f64,
    /// Horizon value less the settlement present value.
    pub gross_return: f64,
}

/// Computes horizon value and yield for a bond bought at `price`.
///
/// Coupons paid between settlement and the last coupon date on or before
/// the horizon are compounded to the horizon at the reinvestment rate. The
/// holding period in coupon periods is the number of those coupons plus the
/// horizon accrual fraction less the settlement accrual fraction. A zero
/// holding period gives a horizon yield of 0.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateOrder` if the horizon is before settlement
/// or after maturity.
pub fn yield_to_horizon(
    terms: &BondTerms,
    price: &PriceResult,
    horizon: &HorizonTerms,
) -> BondResult<HorizonResult> {
    terms.validate()?;
    if horizon.date < terms.settlement {
        return Err(CoreError::invalid_date_order(
            terms.settlement,
            horizon.date,
            "horizon must not be before settlement",
        )
        .into());
    }
    if horizon.date > terms.maturity {
        return Err(CoreError::invalid_date_order(
            horizon.date,
            terms.maturity,
            "horizon must not be after maturity",
        )
        .into());
    }
    if !(horizon.price.is_finite() && horizon.reinvestment_rate.is_finite()) {
        return Err(BondError::invalid_spec(
            "horizon price and reinvestment rate must be finite",
        ));
    }

    let at_horizon = previous_next_coupons(horizon.date, terms.maturity, terms.frequency)?;
    let horizon_fraction = terms
        .day_count
        .accrued_fraction(at_horizon.previous, horizon.date, terms.frequency)?
        .fraction;

    // A coupon falling on settlement belongs to the seller
    let last_coupon = at_horizon.previous;
    let coupons_received = if last_coupon <= terms.settlement {
        0
    } else {
        let first = previous_next_coupons(terms.settlement, last_coupon, terms.frequency)?;
        payment_count(last_coupon, first.next, terms.frequency)?
    };

    let periods_per_year = terms.frequency.periods_per_year() as f64;
    let coupon = terms.coupon_per_period();
    let growth = 1.0 + horizon.reinvestment_rate / periods_per_year;

    let reinvested: f64 = (0..coupons_received)
        .map(|i| coupon * growth.powf(f64::from(i) + horizon_fraction))
        .sum();
    let horizon_value = horizon.price + horizon_fraction * coupon + reinvested;

    let periods_held = f64::from(coupons_received) + horizon_fraction - price.accrued_fraction;
    let horizon_yield = if horizon.date == terms.settlement || periods_held <= 0.0 {
        0.0
    } else {
        (horizon_value / price.dirty_price)
            .powf(1.0 / periods_held)
            .powf(periods_per_year)
            - 1.0
    };

    let present_value = horizon_value * terms.principal;
    debug!(
        "horizon {}: {} coupons reinvested over {:.4} periods, yield {}",
        horizon.date, coupons_received, periods_held, horizon_yield
    );

    Ok(HorizonResult {
        present_value,
        horizon_yield,
        gross_return: present_value - price.present_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price_from_yield;
    use approx::assert_relative_eq;
    use bondlab_core::daycounts::DayCountConvention;
    use bondlab_core::types::Frequency;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn terms() -> BondTerms {
        BondTerms {
            settlement: date(2000, 1, 1),
            maturity: date(2010, 8, 15),
            day_count: DayCountConvention::ActualActual,
            frequency: Frequency::Quarterly,
            coupon_rate: 0.08,
            principal: 1.0,
        }
    }

    #[test]
    fn test_horizon_reference() {
        let terms = terms();
        let price = price_from_yield(&terms, 0.084295197233745636).unwrap();
        let horizon = HorizonTerms {
            date: date(2005, 6, 30),
            price: 1.0,
            reinvestment_rate: 0.06,
        };

        let result = yield_to_horizon(&terms, &price, &horizon).unwrap();

        assert_relative_eq!(result.present_value, 1.5306128101742258, epsilon = 1e-9);
        assert_relative_eq!(result.horizon_yield, 0.084443725360003441, epsilon = 1e-9);
        assert_relative_eq!(
            result.gross_return,
            result.present_value - price.present_value,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_horizon_on_settlement_is_flat() {
        let terms = terms();
        let price = price_from_yield(&terms, 0.08).unwrap();
        let horizon = HorizonTerms {
            date: terms.settlement,
            price: 1.0,
            reinvestment_rate: 0.06,
        };

        let result = yield_to_horizon(&terms, &price, &horizon).unwrap();
        assert_eq!(result.horizon_yield, 0.0);
        assert!(result.present_value.is_finite());
    }

    #[test]
    fn test_horizon_before_first_coupon() {
        // No coupon is received between settlement and a horizon in the same period
        let terms = terms();
        let price = price_from_yield(&terms, 0.08).unwrap();
        let horizon = HorizonTerms {
            date: date(2000, 2, 1),
            price: 0.98,
            reinvestment_rate: 0.05,
        };

        let result = yield_to_horizon(&terms, &price, &horizon).unwrap();
        let fraction = 78.0 / 92.0;
        assert_relative_eq!(result.present_value, 0.98 + fraction * 0.02, epsilon = 1e-12);
        assert!(result.horizon_yield.is_finite());
    }

    #[test]
    fn test_coupon_on_settlement_not_received() {
        let terms = BondTerms {
            settlement: date(2000, 1, 1),
            maturity: date(2007, 1, 1),
            day_count: DayCountConvention::Thirty360,
            frequency: Frequency::SemiAnnual,
            coupon_rate: 0.08,
            principal: 1.0,
        };
        let price = price_from_yield(&terms, 0.08).unwrap();

        // Only the 2000-07-01 coupon falls in the holding period
        let horizon = HorizonTerms {
            date: date(2000, 7, 1),
            price: 1.0,
            reinvestment_rate: 0.05,
        };
        let result = yield_to_horizon(&terms, &price, &horizon).unwrap();
        assert_relative_eq!(result.present_value, 1.04, epsilon = 1e-15);
    }

    #[test]
    fn test_horizon_out_of_range() {
        let terms = terms();
        let price = price_from_yield(&terms, 0.08).unwrap();

        for bad in [date(1999, 12, 31), date(2010, 8, 16)] {
            let horizon = HorizonTerms {
                date: bad,
                price: 1.0,
                reinvestment_rate: 0.05,
            };
            assert!(matches!(
                yield_to_horizon(&terms, &price, &horizon),
                Err(BondError::Core(CoreError::InvalidDateOrder { .. }))
            ));
        }
    }
}
