//! Loosely-typed coupon function arguments.
//!
//! [`CouponArgs`] models a call whose arguments may be absent or out of
//! range, e.g. values read from a spreadsheet cell or a JSON request. It is
//! turned into validated [`CouponTerms`](crate::CouponTerms) by
//! [`validate`](crate::validate).

use cadence_core::{Basis, Date, Frequency};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::function::CouponFunction;

/// A date argument as supplied by a caller.
///
/// Deserializes from an ISO 8601 string or from year/month/day parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateArg {
    /// ISO 8601 text, `YYYY-MM-DD`.
    Text(String),
    /// Separate calendar parts.
    Parts {
        /// Year.
        year: i32,
        /// Month, 1-12.
        month: u32,
        /// Day of month.
        day: u32,
    },
}

impl DateArg {
    /// Resolves the argument to a calendar date, if it is well formed.
    #[must_use]
    pub fn to_date(&self) -> Option<Date> {
        match self {
            DateArg::Text(text) => Date::parse(text).ok(),
            DateArg::Parts { year, month, day } => Date::from_ymd(*year, *month, *day).ok(),
        }
    }
}

impl fmt::Display for DateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateArg::Text(text) => f.write_str(text),
            DateArg::Parts { year, month, day } => write!(f, "{year}-{month:02}-{day:02}"),
        }
    }
}

impl From<Date> for DateArg {
    fn from(date: Date) -> Self {
        let (year, month, day) = date.split();
        DateArg::Parts { year, month, day }
    }
}

impl From<&str> for DateArg {
    fn from(text: &str) -> Self {
        DateArg::Text(text.to_string())
    }
}

/// Arguments to a coupon function before validation.
///
/// Any field may be absent. An absent `basis` takes the configured default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponArgs {
    /// Settlement date.
    #[serde(default)]
    pub settlement: Option<DateArg>,
    /// Maturity date.
    #[serde(default)]
    pub maturity: Option<DateArg>,
    /// Coupons per year.
    #[serde(default)]
    pub frequency: Option<i64>,
    /// Day count basis code.
    #[serde(default)]
    pub basis: Option<i64>,
}

impl CouponArgs {
    /// Creates arguments from typed values with no basis.
    #[must_use]
    pub fn new(settlement: impl Into<DateArg>, maturity: impl Into<DateArg>, frequency: i64) -> Self {
        Self {
            settlement: Some(settlement.into()),
            maturity: Some(maturity.into()),
            frequency: Some(frequency),
            basis: None,
        }
    }

    /// Creates arguments from already-typed values.
    #[must_use]
    pub fn typed(settlement: Date, maturity: Date, frequency: Frequency, basis: Basis) -> Self {
        Self::new(settlement, maturity, frequency.into()).with_basis(basis.into())
    }

    /// Sets the basis code.
    #[must_use]
    pub fn with_basis(mut self, basis: i64) -> Self {
        self.basis = Some(basis);
        self
    }
}

/// A named coupon function call, e.g. one JSON request.
///
/// The function is given by its spreadsheet name; the arguments sit
/// alongside it:
///
/// ```json
/// {"function": "COUPPCD", "settlement": "2011-01-25", "maturity": "2011-11-15", "frequency": 2}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponRequest {
    /// Function to evaluate.
    pub function: CouponFunction,
    /// Its arguments.
    #[serde(flatten)]
    pub args: CouponArgs,
}
