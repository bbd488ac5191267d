//! Standalone coupon schedule functions.
//!
//! Each function validates its typed arguments and evaluates one coupon
//! function. The basis is always explicit; use
//! [`CouponCalculator`](crate::CouponCalculator) to fall back on a configured
//! default when it is absent.
//!
//! # Example
//!
//! ```rust
//! use cadence_coupons::functions::*;
//! use cadence_core::{Basis, Date, Frequency};
//!
//! let settlement = Date::from_ymd(2011, 1, 25).unwrap();
//! let maturity = Date::from_ymd(2011, 11, 15).unwrap();
//!
//! let pcd = previous_coupon_date(settlement, maturity, Frequency::SemiAnnual, Basis::ActualActual).unwrap();
//! assert_eq!(pcd, Date::from_ymd(2010, 11, 15).unwrap());
//!
//! let accrued = days_from_period_start_to_settlement(settlement, maturity, Frequency::SemiAnnual, Basis::ActualActual).unwrap();
//! assert_eq!(accrued, 71);
//! ```

use cadence_core::{Basis, Date, Frequency};
use rust_decimal::Decimal;

use crate::error::CouponResult;
use crate::function::CouponFunction;
use crate::validation::CouponTerms;

// ============================================================================
// COUPON DATES
// ============================================================================

/// Returns the coupon date on or before settlement (`COUPPCD`).
///
/// # Arguments
///
/// * `settlement` - Settlement date
/// * `maturity` - Maturity date, strictly after settlement
/// * `frequency` - Coupon payments per year
/// * `basis` - Day count basis
pub fn previous_coupon_date(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
) -> CouponResult<Date> {
    CouponTerms::new(CouponFunction::PreviousCouponDate, settlement, maturity, frequency, basis)?
        .previous_coupon_date()
}

/// Returns the first coupon date strictly after settlement (`COUPNCD`).
pub fn next_coupon_date(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
) -> CouponResult<Date> {
    CouponTerms::new(CouponFunction::NextCouponDate, settlement, maturity, frequency, basis)?
        .next_coupon_date()
}

// ============================================================================
// DAY COUNTS
// ============================================================================

/// Days from the start of the coupon period to settlement (`COUPDAYBS`).
pub fn days_from_period_start_to_settlement(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
) -> CouponResult<i64> {
    CouponTerms::new(CouponFunction::DaysFromPeriodStart, settlement, maturity, frequency, basis)?
        .days_from_period_start()
}

/// Days in the coupon period containing settlement (`COUPDAYS`).
///
/// Nominal for every basis except actual/actual; see
/// [`CouponTerms::days_in_period`].
pub fn days_in_period(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
) -> CouponResult<i64> {
    CouponTerms::new(CouponFunction::DaysInPeriod, settlement, maturity, frequency, basis)?
        .days_in_period()
}

/// Days from settlement to the next coupon date (`COUPDAYSNC`).
pub fn days_from_settlement_to_next_coupon(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
) -> CouponResult<i64> {
    CouponTerms::new(CouponFunction::DaysToNextCoupon, settlement, maturity, frequency, basis)?
        .days_to_next_coupon()
}

// ============================================================================
// COUPON COUNT
// ============================================================================

/// Number of coupons payable between settlement and maturity (`COUPNUM`).
///
/// The ratio is returned as computed, without rounding.
pub fn coupons_remaining(
    settlement: Date,
    maturity: Date,
    frequency: Frequency,
    basis: Basis,
) -> CouponResult<Decimal> {
    CouponTerms::new(CouponFunction::CouponsRemaining, settlement, maturity, frequency, basis)?
        .coupons_remaining()
}
