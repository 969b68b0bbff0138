//! Traits shared by priced instruments.
//!
//! - [`PricesAt`]: instruments that can reprice themselves at another
//!   settlement date and rate
//! - [`mark_to_market`]: profit or loss of a position under a new market

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Direction of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    /// Owns the instrument and gains when its value rises.
    #[default]
    Long,
    /// Owes the instrument and gains when its value falls.
    Short,
}

impl Position {
    /// Sign applied to a change in value: +1 for long, -1 for short.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            Position::Long => 1.0,
            Position::Short => -1.0,
        }
    }
}

/// Instruments that can compute a present value under their own terms and
/// under an alternative settlement date and rate.
///
/// The meaning of `rate` is the instrument's own: yield to maturity for a
/// bond, discount rate for an annuity.
pub trait PricesAt {
    /// Error raised when pricing fails.
    type Error;

    /// Present value under the instrument's current terms.
    fn present_value(&self) -> Result<f64, Self::Error>;

    /// Present value with the settlement date and rate replaced.
    ///
    /// The instrument itself is left unchanged.
    fn present_value_at(&self, settlement: Date, rate: f64) -> Result<f64, Self::Error>;
}

/// Marks a position to a new settlement date and rate.
///
/// Returns `pv_at(as_of, rate) - pv` for a long position and the negation
/// for a short one.
pub fn mark_to_market<P>(
    instrument: &P,
    as_of: Date,
    rate: f64,
    position: Position,
) -> Result<f64, P::Error>
where
    P: PricesAt + ?Sized,
{
    let marked = instrument.present_value_at(as_of, rate)?;
    let current = instrument.present_value()?;

    log::debug!(
        "mark to market at {as_of}: {marked} vs {current} ({position:?})"
    );

    Ok(position.sign() * (marked - current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Single payment of 100 at maturity, annual compounding on ACT/365 years.
    struct ZeroCoupon {
        settlement: Date,
        maturity: Date,
        rate: f64,
    }

    impl PricesAt for ZeroCoupon {
        type Error = std::convert::Infallible;

        fn present_value(&self) -> Result<f64, Self::Error> {
            self.present_value_at(self.settlement, self.rate)
        }

        fn present_value_at(&self, settlement: Date, rate: f64) -> Result<f64, Self::Error> {
            let years = settlement.days_between(&self.maturity) as f64 / 365.0;
            Ok(100.0 / (1.0 + rate).powf(years))
        }
    }

    fn instrument() -> ZeroCoupon {
        ZeroCoupon {
            settlement: Date::from_ymd(2001, 1, 1).unwrap(),
            maturity: Date::from_ymd(2002, 1, 1).unwrap(),
            rate: 0.05,
        }
    }

    #[test]
    fn test_long_is_negated_short() {
        let zc = instrument();
        let as_of = Date::from_ymd(2001, 7, 1).unwrap();

        let long = mark_to_market(&zc, as_of, 0.04, Position::Long).unwrap();
        let short = mark_to_market(&zc, as_of, 0.04, Position::Short).unwrap();

        assert!(long > 0.0);
        assert_relative_eq!(long, -short, epsilon = 1e-12);
    }

    #[test]
    fn test_unchanged_market_is_flat() {
        let zc = instrument();
        let mtm = mark_to_market(&zc, zc.settlement, zc.rate, Position::Long).unwrap();
        assert_relative_eq!(mtm, 0.0, epsilon = 1e-12);
    }
}
