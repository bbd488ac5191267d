//! Request dispatcher for loosely-typed coupon function calls.

use std::fmt;

use cadence_core::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::args::{CouponArgs, CouponRequest};
use crate::config::CouponConfig;
use crate::error::CouponResult;
use crate::function::CouponFunction;
use crate::validation::validate;

/// Result of a coupon function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CouponValue {
    /// A day count (COUPDAYBS, COUPDAYS, COUPDAYSNC).
    Days(i64),
    /// A coupon date (COUPNCD, COUPPCD).
    Date(Date),
    /// A coupon count (COUPNUM).
    Count(Decimal),
}

impl CouponValue {
    /// Returns the day count, if this is one.
    #[must_use]
    pub fn as_days(&self) -> Option<i64> {
        match self {
            CouponValue::Days(days) => Some(*days),
            _ => None,
        }
    }

    /// Returns the date, if this is one.
    #[must_use]
    pub fn as_date(&self) -> Option<Date> {
        match self {
            CouponValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Returns the coupon count, if this is one.
    #[must_use]
    pub fn as_count(&self) -> Option<Decimal> {
        match self {
            CouponValue::Count(count) => Some(*count),
            _ => None,
        }
    }
}

impl fmt::Display for CouponValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CouponValue::Days(days) => write!(f, "{days}"),
            CouponValue::Date(date) => write!(f, "{date}"),
            CouponValue::Count(count) => write!(f, "{}", count.normalize()),
        }
    }
}

/// Evaluates coupon functions from loose arguments.
///
/// Arguments are validated in the documented order; an absent basis takes
/// the configured default.
///
/// # Example
///
/// ```rust
/// use cadence_coupons::{CouponArgs, CouponCalculator, CouponFunction, CouponValue};
///
/// let calc = CouponCalculator::new();
/// let args = CouponArgs::new("2011-01-25", "2011-11-15", 2).with_basis(1);
///
/// let days = calc.evaluate(CouponFunction::DaysInPeriod, &args).unwrap();
/// assert_eq!(days, CouponValue::Days(181));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CouponCalculator {
    config: CouponConfig,
}

impl CouponCalculator {
    /// Creates a calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn with_config(config: CouponConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CouponConfig {
        &self.config
    }

    /// Validates `args` and evaluates `function`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or a date arithmetic error
    /// raised while stepping through coupon dates.
    pub fn evaluate(&self, function: CouponFunction, args: &CouponArgs) -> CouponResult<CouponValue> {
        let terms = validate(function, args, self.config.default_basis)?;

        let value = match function {
            CouponFunction::DaysFromPeriodStart => CouponValue::Days(terms.days_from_period_start()?),
            CouponFunction::DaysInPeriod => CouponValue::Days(terms.days_in_period()?),
            CouponFunction::DaysToNextCoupon => CouponValue::Days(terms.days_to_next_coupon()?),
            CouponFunction::NextCouponDate => CouponValue::Date(terms.next_coupon_date()?),
            CouponFunction::CouponsRemaining => CouponValue::Count(terms.coupons_remaining()?),
            CouponFunction::PreviousCouponDate => CouponValue::Date(terms.previous_coupon_date()?),
        };

        log::debug!(
            "{function}({}, {}, {}, {}) = {value}",
            terms.settlement(),
            terms.maturity(),
            terms.frequency(),
            terms.basis()
        );
        Ok(value)
    }

    /// Evaluates a named request.
    ///
    /// # Errors
    ///
    /// As for [`CouponCalculator::evaluate`].
    pub fn evaluate_request(&self, request: &CouponRequest) -> CouponResult<CouponValue> {
        self.evaluate(request.function, &request.args)
    }
}
