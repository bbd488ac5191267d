//! 30/360 day count conventions (bases 0 and 4).
//!
//! Both count every month as 30 days and a year as 360:
//!
//! $$\text{Days} = 360 (Y_2 - Y_1) + 30 (M_2 - M_1) + (D_2 - D_1)$$
//!
//! They differ only in how the day-of-month values are adjusted first.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// 30/360 day count from adjusted day-of-month values.
fn thirty360_days(start: Date, end: Date, d1: u32, d2: u32) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    360 * years + 30 * months + i64::from(d2) - i64::from(d1)
}

fn thirty360_fraction(days: i64) -> Decimal {
    Decimal::from(days) / Decimal::from(360)
}

fn is_february_end(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 US (NASD). Basis code 0.
///
/// Day adjustments, in order:
///
/// - a start on the last day of February, or on the 31st, becomes 30
/// - an end on the last day of February becomes 30 when the start was
///   also the last day of February
/// - otherwise an end on the 31st becomes 30 when the adjusted start is 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        thirty360_fraction(self.day_count(start, end))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let start_on_february_end = is_february_end(start);

        let d1 = if start_on_february_end || start.day() == 31 {
            30
        } else {
            start.day()
        };

        let d2 = match end.day() {
            _ if start_on_february_end && is_february_end(end) => 30,
            31 if d1 >= 30 => 30,
            day => day,
        };

        thirty360_days(start, end, d1, d2)
    }
}

/// 30E/360 (Eurobond). Basis code 4.
///
/// A 31st at either end becomes 30. February gets no special treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        thirty360_fraction(self.day_count(start, end))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        thirty360_days(start, end, start.day().min(30), end.day().min(30))
    }
}
