//! # Cadence Coupons
//!
//! Coupon schedule calculations for fixed-coupon bonds.
//!
//! Given a settlement date, a maturity date, a coupon frequency and a day
//! count basis, this crate locates the coupon period containing settlement
//! and measures it:
//!
//! - **Coupon dates**: previous coupon date on or before settlement, next
//!   coupon date after it, and every remaining coupon date
//! - **Day counts**: days accrued, days in the period and days to the next
//!   coupon, under any of the five spreadsheet bases
//! - **Coupon count**: coupons payable between settlement and maturity
//!
//! Typed callers use [`functions`] or [`CouponTerms`] directly. Loosely-typed
//! callers build [`CouponArgs`] and evaluate them with a [`CouponCalculator`],
//! which validates in a fixed order and reports errors against the
//! function's spreadsheet name.
//!
//! ## Example
//!
//! ```rust
//! use cadence_coupons::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let settlement = Date::from_ymd(2023, 1, 15).unwrap();
//! let maturity = Date::from_ymd(2025, 7, 31).unwrap();
//!
//! let terms = CouponTerms::new(
//!     CouponFunction::DaysToNextCoupon,
//!     settlement,
//!     maturity,
//!     Frequency::SemiAnnual,
//!     Basis::UsNasd30360,
//! )
//! .unwrap();
//!
//! assert_eq!(terms.previous_coupon_date().unwrap(), Date::from_ymd(2022, 7, 31).unwrap());
//! assert_eq!(terms.next_coupon_date().unwrap(), Date::from_ymd(2023, 1, 31).unwrap());
//! assert_eq!(terms.days_to_next_coupon().unwrap(), 15);
//! assert_eq!(terms.coupons_remaining().unwrap(), Decimal::from(6));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]

pub mod args;
pub mod calculator;
pub mod config;
mod days;
pub mod error;
pub mod function;
pub mod functions;
pub mod periods;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::args::{CouponArgs, CouponRequest, DateArg};
    pub use crate::calculator::{CouponCalculator, CouponValue};
    pub use crate::config::CouponConfig;
    pub use crate::error::{CouponError, CouponResult};
    pub use crate::function::{Argument, CouponFunction};
    pub use crate::periods::CouponPeriod;
    pub use crate::validation::{validate, CouponTerms};
    pub use cadence_core::{Basis, Date, Frequency};
}

// Re-export commonly used types at crate root
pub use args::{CouponArgs, CouponRequest, DateArg};
pub use calculator::{CouponCalculator, CouponValue};
pub use config::CouponConfig;
pub use error::{ConfigError, CouponError, CouponResult};
pub use function::{Argument, CouponFunction};
pub use periods::CouponPeriod;
pub use validation::{validate, CouponTerms};
