//! Argument validation for the coupon functions.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. settlement, maturity and frequency are present
//! 2. settlement is a well-formed date
//! 3. maturity is a well-formed date
//! 4. frequency is 1, 2 or 4
//! 5. basis is 0 through 4
//! 6. settlement is strictly before maturity, measured with the 30/360 US
//!    day count whatever basis was requested

use cadence_core::{Basis, Date, Frequency};

use crate::args::{CouponArgs, DateArg};
use crate::error::{CouponError, CouponResult};
use crate::function::{Argument, CouponFunction};

/// Validated arguments of a coupon function call.
///
/// A `CouponTerms` value always satisfies `settlement < maturity` under the
/// 30/360 US day count. It remembers the function it was validated for so
/// later failures are reported against that function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponTerms {
    function: CouponFunction,
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
}

impl CouponTerms {
    /// Validates typed arguments for `function`.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::InvalidDateRange` unless settlement is strictly
    /// before maturity.
    pub fn new(
        function: CouponFunction,
        settlement: Date,
        maturity: Date,
        frequency: Frequency,
        basis: Basis,
    ) -> CouponResult<Self> {
        if Basis::UsNasd30360.day_count(settlement, maturity) <= 0 {
            return Err(CouponError::InvalidDateRange {
                function,
                settlement,
                maturity,
            });
        }

        Ok(Self {
            function,
            settlement,
            maturity,
            frequency,
            basis,
        })
    }

    /// Returns the function these terms were validated for.
    #[must_use]
    pub fn function(&self) -> CouponFunction {
        self.function
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the coupon frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the day count basis.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Returns the same terms re-labelled for another function.
    #[must_use]
    pub fn for_function(self, function: CouponFunction) -> Self {
        Self { function, ..self }
    }
}

/// Validates loose arguments for `function`.
///
/// An absent basis resolves to `default_basis`.
///
/// # Errors
///
/// Returns the first applicable of `MissingArgument`, `InvalidDate`,
/// `InvalidFrequency`, `InvalidBasis` and `InvalidDateRange`.
pub fn validate(
    function: CouponFunction,
    args: &CouponArgs,
    default_basis: Basis,
) -> CouponResult<CouponTerms> {
    let missing = |argument| CouponError::MissingArgument { function, argument };

    let settlement = args.settlement.as_ref().ok_or_else(|| missing(Argument::Settlement))?;
    let maturity = args.maturity.as_ref().ok_or_else(|| missing(Argument::Maturity))?;
    let frequency = args.frequency.ok_or_else(|| missing(Argument::Frequency))?;

    let settlement = resolve_date(function, Argument::Settlement, settlement)?;
    let maturity = resolve_date(function, Argument::Maturity, maturity)?;

    let frequency = Frequency::try_from(frequency).map_err(|_| CouponError::InvalidFrequency {
        function,
        value: frequency,
    })?;

    let basis = match args.basis {
        Some(code) => Basis::try_from(code).map_err(|_| CouponError::InvalidBasis {
            function,
            value: code,
        })?,
        None => default_basis,
    };

    CouponTerms::new(function, settlement, maturity, frequency, basis)
}

fn resolve_date(function: CouponFunction, argument: Argument, arg: &DateArg) -> CouponResult<Date> {
    arg.to_date().ok_or_else(|| CouponError::InvalidDate {
        function,
        argument,
        value: arg.to_string(),
    })
}
