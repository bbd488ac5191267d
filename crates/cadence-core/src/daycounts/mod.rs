//! Day count conventions behind the five day count bases.
//!
//! A day count convention specifies how to count days between two dates
//! and how many days make up a year.
//!
//! # Supported Conventions
//!
//! - [`Thirty360US`]: 30/360 US (NASD), basis 0
//! - [`ActActIsda`]: Actual/Actual, basis 1
//! - [`Act360`]: Actual/360, basis 2
//! - [`Act365Fixed`]: Actual/365 Fixed, basis 3
//! - [`Thirty360E`]: 30E/360 (European), basis 4
//!
//! # Usage
//!
//! ```rust
//! use cadence_core::daycounts::{DayCount, Thirty360US};
//! use cadence_core::types::Date;
//!
//! let dc = Thirty360US;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! ```

mod actact;
mod actual;
mod thirty360;

pub use actact::ActActIsda;
pub use actual::{Act360, Act365Fixed};
pub use thirty360::{Thirty360E, Thirty360US};

use crate::types::Date;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`); all of them are
/// stateless unit structs.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the signed day count between two dates.
    ///
    /// For ACT conventions, this is actual calendar days.
    /// For 30/360 conventions, this uses the 30-day month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
