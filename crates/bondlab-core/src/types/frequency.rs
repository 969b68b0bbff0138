//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Payment frequency for coupon bonds and annuities.
///
/// Only frequencies that split a year into a whole number of months are
/// supported, since coupon dates are generated by month arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
    /// Payments every four months (3 per year)
    EveryFourMonths,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Payments every two months (6 per year)
    BiMonthly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl Frequency {
    /// Builds a frequency from the number of periods per year.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFrequency` for a count that does not divide
    /// twelve, i.e. anything other than 1, 2, 3, 4, 6 or 12.
    pub fn from_periods_per_year(periods_per_year: u32) -> CoreResult<Self> {
        match periods_per_year {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            3 => Ok(Frequency::EveryFourMonths),
            4 => Ok(Frequency::Quarterly),
            6 => Ok(Frequency::BiMonthly),
            12 => Ok(Frequency::Monthly),
            _ => Err(CoreError::InvalidFrequency { periods_per_year }),
        }
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::EveryFourMonths => 3,
            Frequency::Quarterly => 4,
            Frequency::BiMonthly => 6,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::EveryFourMonths => "Every-Four-Months",
            Frequency::Quarterly => "Quarterly",
            Frequency::BiMonthly => "Bi-Monthly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CoreError;

    fn try_from(periods_per_year: u32) -> Result<Self, Self::Error> {
        Self::from_periods_per_year(periods_per_year)
    }
}
