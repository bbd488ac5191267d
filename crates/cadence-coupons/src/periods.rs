//! Coupon period boundaries.
//!
//! Coupon dates sit on a lattice of whole coupon periods anchored on
//! maturity. When maturity is the last day of its month every coupon date
//! is the last day of its month too; otherwise each coupon date takes
//! maturity's day of month, clamped to the length of its month.
//!
//! Boundaries are always computed as `anchor + k periods` from a fixed
//! anchor, never by chaining single steps, so a clamp in a short month
//! cannot drift the day of month of later boundaries.

use cadence_core::{Date, Frequency};
use serde::{Deserialize, Serialize};

use crate::error::{CouponError, CouponResult};
use crate::validation::CouponTerms;

/// The coupon period containing settlement: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponPeriod {
    /// Previous coupon date, on or before settlement.
    pub start: Date,
    /// Next coupon date, strictly after settlement.
    pub end: Date,
}

impl CouponPeriod {
    /// Returns true if `date` falls within the half-open period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

/// Coupon date `periods` whole periods away from `anchor`.
fn coupon_date(anchor: Date, periods: i32, frequency: Frequency, eom: bool) -> cadence_core::CoreResult<Date> {
    let months = periods.saturating_mul(frequency.months_per_period() as i32);
    anchor.add_offset(0, months, 0, eom)
}

impl CouponTerms {
    /// Returns the coupon date on or before settlement.
    ///
    /// Steps back from maturity one period at a time while settlement is
    /// still before the candidate. A settlement that falls exactly on a
    /// coupon date returns that date.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::DateArithmetic` if a coupon date falls outside
    /// the supported calendar range.
    pub fn previous_coupon_date(&self) -> CouponResult<Date> {
        let on_error = CouponError::date_arithmetic(self.function());
        let settlement = self.settlement();
        let maturity = self.maturity();
        let eom = maturity.is_end_of_month();

        let mut periods = 0;
        let mut date = maturity;
        while settlement < date {
            periods -= 1;
            date = coupon_date(maturity, periods, self.frequency(), eom).map_err(on_error)?;
        }

        log::trace!(
            "previous coupon for {settlement} (maturity {maturity}, eom {eom}): {date} after {} periods",
            -periods
        );
        Ok(date)
    }

    /// Returns the first coupon date strictly after settlement.
    ///
    /// 1. Place a candidate in settlement's year on maturity's month and
    ///    day, clamped to the month's length (the month's last day when
    ///    maturity is end-of-month).
    /// 2. Step back whole periods while settlement is before the candidate,
    ///    then forward while settlement is on or after it.
    /// 3. Re-anchor the day of month on maturity's day, clamped to the
    ///    candidate's month.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::DateArithmetic` if a coupon date falls outside
    /// the supported calendar range.
    pub fn next_coupon_date(&self) -> CouponResult<Date> {
        let on_error = CouponError::date_arithmetic(self.function());
        let settlement = self.settlement();
        let maturity = self.maturity();
        let frequency = self.frequency();
        let eom = maturity.is_end_of_month();

        let (_, month, day) = maturity.split();
        let mut anchor = Date::from_ymd_clamped(settlement.year(), month, day).map_err(on_error)?;
        if eom {
            anchor = anchor.end_of_month();
        }

        let mut periods = 0;
        let mut date = anchor;
        while settlement < date {
            periods -= 1;
            date = coupon_date(anchor, periods, frequency, eom).map_err(on_error)?;
        }
        while settlement >= date {
            periods += 1;
            date = coupon_date(anchor, periods, frequency, eom).map_err(on_error)?;
        }

        let corrected = date.with_day_clamped(date.day().max(day)).map_err(on_error)?;

        log::trace!(
            "next coupon for {settlement} (maturity {maturity}, eom {eom}): anchor {anchor}, {periods} periods, {corrected}"
        );
        Ok(corrected)
    }

    /// Returns the coupon period containing settlement.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::DateArithmetic` if a coupon date falls outside
    /// the supported calendar range.
    pub fn coupon_period(&self) -> CouponResult<CouponPeriod> {
        Ok(CouponPeriod {
            start: self.previous_coupon_date()?,
            end: self.next_coupon_date()?,
        })
    }

    /// Returns every coupon date after settlement, ending with maturity.
    ///
    /// # Errors
    ///
    /// Returns `CouponError::DateArithmetic` if a coupon date falls outside
    /// the supported calendar range.
    pub fn remaining_coupon_dates(&self) -> CouponResult<Vec<Date>> {
        let on_error = CouponError::date_arithmetic(self.function());
        let settlement = self.settlement();
        let maturity = self.maturity();
        let eom = maturity.is_end_of_month();

        let mut dates = vec![maturity];
        let mut periods = 0;
        loop {
            periods -= 1;
            let date = coupon_date(maturity, periods, self.frequency(), eom).map_err(on_error)?;
            if date <= settlement {
                break;
            }
            dates.push(date);
        }

        dates.reverse();
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::CouponFunction;
    use cadence_core::Basis;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn terms(settlement: Date, maturity: Date, frequency: Frequency) -> CouponTerms {
        CouponTerms::new(
            CouponFunction::PreviousCouponDate,
            settlement,
            maturity,
            frequency,
            Basis::UsNasd30360,
        )
        .unwrap()
    }

    #[test]
    fn test_semiannual_eom_maturity() {
        let t = terms(date(2023, 1, 15), date(2025, 7, 31), Frequency::SemiAnnual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2022, 7, 31));
        assert_eq!(t.next_coupon_date().unwrap(), date(2023, 1, 31));
    }

    #[test]
    fn test_leap_day_maturity() {
        let t = terms(date(2023, 2, 28), date(2024, 2, 29), Frequency::SemiAnnual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2023, 2, 28));
        assert_eq!(t.next_coupon_date().unwrap(), date(2023, 8, 31));
    }

    #[test]
    fn test_settlement_on_coupon_date() {
        let t = terms(date(2010, 11, 15), date(2011, 11, 15), Frequency::SemiAnnual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2010, 11, 15));
        assert_eq!(t.next_coupon_date().unwrap(), date(2011, 5, 15));
    }

    #[test]
    fn test_quarterly_needs_several_backward_steps() {
        // Candidate 2024-12-15 is three periods ahead of the window
        let t = terms(date(2024, 2, 10), date(2026, 12, 15), Frequency::Quarterly);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2023, 12, 15));
        assert_eq!(t.next_coupon_date().unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn test_annual() {
        let t = terms(date(2024, 3, 1), date(2030, 5, 31), Frequency::Annual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2023, 5, 31));
        assert_eq!(t.next_coupon_date().unwrap(), date(2024, 5, 31));
    }

    #[test]
    fn test_clamped_day_does_not_drift() {
        // Maturity day 30 is clamped to Feb 29 but August keeps day 30
        let t = terms(date(2024, 8, 29), date(2025, 8, 30), Frequency::SemiAnnual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2024, 2, 29));
        assert_eq!(t.next_coupon_date().unwrap(), date(2024, 8, 30));
    }

    #[test]
    fn test_eom_february_maturity_in_common_year() {
        // Feb 28 2025 is end-of-month, so the 2024 coupon is Feb 29
        let t = terms(date(2024, 2, 28), date(2025, 2, 28), Frequency::SemiAnnual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2023, 8, 31));
        assert_eq!(t.next_coupon_date().unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_quarterly_eom_30th_maturity() {
        let t = terms(date(2019, 10, 31), date(2029, 2, 28), Frequency::Quarterly);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2019, 8, 31));
        assert_eq!(t.next_coupon_date().unwrap(), date(2019, 11, 30));
    }

    #[test]
    fn test_final_period() {
        let t = terms(date(2025, 6, 1), date(2025, 7, 31), Frequency::SemiAnnual);
        assert_eq!(t.previous_coupon_date().unwrap(), date(2025, 1, 31));
        assert_eq!(t.next_coupon_date().unwrap(), date(2025, 7, 31));
    }

    #[test]
    fn test_coupon_period_contains_settlement() {
        let settlement = date(2011, 1, 25);
        let t = terms(settlement, date(2011, 11, 15), Frequency::SemiAnnual);
        let period = t.coupon_period().unwrap();

        assert_eq!(period.start, date(2010, 11, 15));
        assert_eq!(period.end, date(2011, 5, 15));
        assert!(period.contains(settlement));
        assert!(period.contains(period.start));
        assert!(!period.contains(period.end));
    }

    #[test]
    fn test_remaining_coupon_dates() {
        let t = terms(date(2011, 1, 25), date(2012, 11, 15), Frequency::SemiAnnual);
        assert_eq!(
            t.remaining_coupon_dates().unwrap(),
            vec![
                date(2011, 5, 15),
                date(2011, 11, 15),
                date(2012, 5, 15),
                date(2012, 11, 15),
            ]
        );
    }

    #[test]
    fn test_remaining_coupon_dates_eom() {
        let t = terms(date(2023, 9, 1), date(2024, 8, 31), Frequency::Quarterly);
        assert_eq!(
            t.remaining_coupon_dates().unwrap(),
            vec![
                date(2023, 11, 30),
                date(2024, 2, 29),
                date(2024, 5, 31),
                date(2024, 8, 31),
            ]
        );
    }

    #[test]
    fn test_remaining_excludes_settlement_on_coupon_date() {
        let t = terms(date(2024, 5, 15), date(2025, 5, 15), Frequency::SemiAnnual);
        assert_eq!(
            t.remaining_coupon_dates().unwrap(),
            vec![date(2024, 11, 15), date(2025, 5, 15)]
        );
    }
}
