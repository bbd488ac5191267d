//! Actual-day conventions over a fixed year (bases 2 and 3).

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual days over a fixed year length.
fn fixed_year_fraction(start: Date, end: Date, year_days: u32) -> Decimal {
    Decimal::from(end - start) / Decimal::from(year_days)
}

/// Actual/360. Basis code 2.
///
/// Counts calendar days; a year is 360 days, so a full calendar year
/// accrues slightly more than 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        fixed_year_fraction(start, end, 360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        end - start
    }
}

/// Actual/365 Fixed. Basis code 3.
///
/// Counts calendar days over a 365-day year, leap years included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        fixed_year_fraction(start, end, 365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        end - start
    }
}
