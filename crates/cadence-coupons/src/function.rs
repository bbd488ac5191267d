//! Names of the coupon functions and their arguments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six coupon schedule functions.
///
/// Each function has a canonical spreadsheet name ([`CouponFunction::name`])
/// which prefixes every error it raises. It serializes as that name and
/// deserializes from it case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CouponFunction {
    /// Days from the start of the coupon period to settlement (`COUPDAYBS`).
    DaysFromPeriodStart,
    /// Days in the coupon period containing settlement (`COUPDAYS`).
    DaysInPeriod,
    /// Days from settlement to the next coupon date (`COUPDAYSNC`).
    DaysToNextCoupon,
    /// Next coupon date after settlement (`COUPNCD`).
    NextCouponDate,
    /// Number of coupons payable between settlement and maturity (`COUPNUM`).
    CouponsRemaining,
    /// Previous coupon date on or before settlement (`COUPPCD`).
    PreviousCouponDate,
}

impl CouponFunction {
    /// Returns the canonical spreadsheet name of the function.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            CouponFunction::DaysFromPeriodStart => "COUPDAYBS",
            CouponFunction::DaysInPeriod => "COUPDAYS",
            CouponFunction::DaysToNextCoupon => "COUPDAYSNC",
            CouponFunction::NextCouponDate => "COUPNCD",
            CouponFunction::CouponsRemaining => "COUPNUM",
            CouponFunction::PreviousCouponDate => "COUPPCD",
        }
    }

    /// Returns all six functions.
    #[must_use]
    pub fn all() -> &'static [CouponFunction] {
        &[
            CouponFunction::DaysFromPeriodStart,
            CouponFunction::DaysInPeriod,
            CouponFunction::DaysToNextCoupon,
            CouponFunction::NextCouponDate,
            CouponFunction::CouponsRemaining,
            CouponFunction::PreviousCouponDate,
        ]
    }
}

impl fmt::Display for CouponFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CouponFunction {
    type Err = UnknownFunction;

    /// Parses a function from its spreadsheet name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        CouponFunction::all()
            .iter()
            .copied()
            .find(|function| function.name() == normalized)
            .ok_or_else(|| UnknownFunction(s.to_string()))
    }
}

impl TryFrom<String> for CouponFunction {
    type Error = UnknownFunction;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CouponFunction> for &'static str {
    fn from(function: CouponFunction) -> Self {
        function.name()
    }
}

/// Error type for parsing coupon function names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFunction(pub String);

impl fmt::Display for UnknownFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown coupon function: '{}'", self.0)
    }
}

impl std::error::Error for UnknownFunction {}

/// Arguments shared by every coupon function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Settlement date.
    Settlement,
    /// Maturity date.
    Maturity,
    /// Coupon frequency.
    Frequency,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Argument::Settlement => "settlement",
            Argument::Maturity => "maturity",
            Argument::Frequency => "frequency",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for function in CouponFunction::all() {
            let parsed: CouponFunction = function.name().parse().unwrap();
            assert_eq!(*function, parsed);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            "couppcd".parse::<CouponFunction>().unwrap(),
            CouponFunction::PreviousCouponDate
        );
        assert_eq!(
            " CoupDaysNc ".parse::<CouponFunction>().unwrap(),
            CouponFunction::DaysToNextCoupon
        );
    }

    #[test]
    fn test_serde_uses_spreadsheet_name() {
        let json = serde_json::to_string(&CouponFunction::NextCouponDate).unwrap();
        assert_eq!(json, "\"COUPNCD\"");

        let parsed: CouponFunction = serde_json::from_str("\"coupdays\"").unwrap();
        assert_eq!(parsed, CouponFunction::DaysInPeriod);

        assert!(serde_json::from_str::<CouponFunction>("\"YIELD\"").is_err());
    }

    #[test]
    fn test_argument_names() {
        assert_eq!(Argument::Settlement.to_string(), "settlement");
        assert_eq!(Argument::Maturity.to_string(), "maturity");
        assert_eq!(Argument::Frequency.to_string(), "frequency");
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "PRICE".parse::<CouponFunction>().unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }
}
