//! Day count basis codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::daycounts::{Act360, Act365Fixed, ActActIsda, DayCount, Thirty360E, Thirty360US};
use crate::error::CoreError;
use crate::types::Date;

/// Day count basis, numbered the way spreadsheet bond functions number it.
///
/// The basis selects both the rule for counting days between two dates
/// and the nominal number of days in a year.
///
/// | Code | Basis | Days | Year |
/// |------|-------|------|------|
/// | 0 | US (NASD) 30/360 | 30/360 US | 360 |
/// | 1 | Actual/actual | actual | 365 or 366 |
/// | 2 | Actual/360 | actual | 360 |
/// | 3 | Actual/365 | actual | 365 |
/// | 4 | European 30/360 | 30E/360 | 360 |
///
/// The default is [`Basis::UsNasd30360`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "BasisRepr", into = "i64")]
pub enum Basis {
    /// US (NASD) 30/360
    #[default]
    UsNasd30360 = 0,
    /// Actual/actual
    ActualActual = 1,
    /// Actual/360
    Actual360 = 2,
    /// Actual/365
    Actual365 = 3,
    /// European 30/360
    Eur30360 = 4,
}

impl Basis {
    /// Returns the integer code of the basis.
    #[must_use]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the day count convention implementing this basis.
    #[must_use]
    pub fn convention(&self) -> &'static dyn DayCount {
        match self {
            Basis::UsNasd30360 => &Thirty360US,
            Basis::ActualActual => &ActActIsda,
            Basis::Actual360 => &Act360,
            Basis::Actual365 => &Act365Fixed,
            Basis::Eur30360 => &Thirty360E,
        }
    }

    /// Signed day count from `start` to `end` under this basis.
    ///
    /// Positive when `end` is later.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        self.convention().day_count(start, end)
    }

    /// Nominal number of days in a year under this basis.
    ///
    /// Fixed at 360 or 365 for every basis except actual/actual, which
    /// takes the actual length of the year containing `reference`.
    #[must_use]
    pub fn nominal_days_in_year(&self, reference: Date) -> u32 {
        match self {
            Basis::UsNasd30360 | Basis::Actual360 | Basis::Eur30360 => 360,
            Basis::Actual365 => 365,
            Basis::ActualActual => reference.days_in_year(),
        }
    }

    /// Returns the name of the basis.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Basis::UsNasd30360 => "30/360 US",
            Basis::ActualActual => "ACT/ACT",
            Basis::Actual360 => "ACT/360",
            Basis::Actual365 => "ACT/365",
            Basis::Eur30360 => "30E/360",
        }
    }

    /// Returns all five bases in code order.
    #[must_use]
    pub fn all() -> &'static [Basis] {
        &[
            Basis::UsNasd30360,
            Basis::ActualActual,
            Basis::Actual360,
            Basis::Actual365,
            Basis::Eur30360,
        ]
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i64> for Basis {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Basis::UsNasd30360),
            1 => Ok(Basis::ActualActual),
            2 => Ok(Basis::Actual360),
            3 => Ok(Basis::Actual365),
            4 => Ok(Basis::Eur30360),
            _ => Err(CoreError::invalid_basis(value)),
        }
    }
}

impl From<Basis> for i64 {
    fn from(basis: Basis) -> Self {
        i64::from(basis.code())
    }
}

impl std::str::FromStr for Basis {
    type Err = CoreError;

    /// Parses a basis from its code or a convention name.
    ///
    /// Supports multiple formats:
    /// - Codes: "0" through "4"
    /// - Names: "30/360 US", "ACT/ACT", "ACT/360", "ACT/365", "30E/360"
    /// - Common aliases: "NASD", "BOND", "ACTUAL/ACTUAL", "EUROBOND"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "0" | "30/360" | "30/360 US" | "30U/360" | "NASD" | "BOND" | "US 30/360" => {
                Ok(Basis::UsNasd30360)
            }
            "1" | "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(Basis::ActualActual),
            "2" | "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(Basis::Actual360),
            "3" | "ACT/365" | "ACTUAL/365" | "ACT365" | "ACT/365F" => Ok(Basis::Actual365),
            "4" | "30E/360" | "EUROBOND" | "30/360 EU" | "EUR 30/360" => Ok(Basis::Eur30360),
            _ => Err(CoreError::invalid_basis(s)),
        }
    }
}

/// Wire form accepted when deserializing a [`Basis`].
#[derive(Deserialize)]
#[serde(untagged)]
enum BasisRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<BasisRepr> for Basis {
    type Error = CoreError;

    fn try_from(repr: BasisRepr) -> Result<Self, Self::Error> {
        match repr {
            BasisRepr::Code(code) => Basis::try_from(code),
            BasisRepr::Name(name) => name.parse(),
        }
    }
}
