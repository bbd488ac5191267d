//! Coupon payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Payment frequency for coupon bonds.
///
/// The discriminant is the number of coupons per year, so the coupon
/// period is `12 / frequency` months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "FrequencyRepr", into = "i64")]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual = 1,
    /// Semi-annual payments (2 per year) - most common for US bonds
    #[default]
    SemiAnnual = 2,
    /// Quarterly payments (4 per year)
    Quarterly = 4,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub const fn periods_per_year(&self) -> u32 {
        *self as u32
    }

    /// Returns the number of months per period.
    #[must_use]
    pub const fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns all supported frequencies.
    #[must_use]
    pub fn all() -> &'static [Frequency] {
        &[Frequency::Annual, Frequency::SemiAnnual, Frequency::Quarterly]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<i64> for Frequency {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            _ => Err(CoreError::invalid_frequency(value)),
        }
    }
}

impl From<Frequency> for i64 {
    fn from(frequency: Frequency) -> Self {
        i64::from(frequency.periods_per_year())
    }
}

impl std::str::FromStr for Frequency {
    type Err = CoreError;

    /// Parses a frequency from its coupon count or name.
    ///
    /// Accepts "1", "2", "4", "Annual", "Semi-Annual", "SemiAnnual",
    /// "Quarterly" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "1" | "ANNUAL" => Ok(Frequency::Annual),
            "2" | "SEMI-ANNUAL" | "SEMIANNUAL" | "SEMI ANNUAL" => Ok(Frequency::SemiAnnual),
            "4" | "QUARTERLY" => Ok(Frequency::Quarterly),
            _ => Err(CoreError::invalid_frequency(s)),
        }
    }
}

/// Wire form accepted when deserializing a [`Frequency`].
#[derive(Deserialize)]
#[serde(untagged)]
enum FrequencyRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<FrequencyRepr> for Frequency {
    type Error = CoreError;

    fn try_from(repr: FrequencyRepr) -> Result<Self, Self::Error> {
        match repr {
            FrequencyRepr::Code(code) => Frequency::try_from(code),
            FrequencyRepr::Name(name) => name.parse(),
        }
    }
}
