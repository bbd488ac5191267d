//! Property tests for calendar arithmetic and day counts.

use cadence_core::daycounts::{ActActIsda, DayCount};
use cadence_core::{Basis, Date};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn date_strategy() -> impl Strategy<Value = Date> {
    (1950i32..2100i32, 1u32..13u32, 1u32..32u32)
        .prop_filter_map("valid date", |(year, month, day)| Date::from_ymd(year, month, day).ok())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_month_offset_keeps_day_or_clamps(date in date_strategy(), months in -600i32..600i32) {
        let shifted = date.add_offset(0, months, 0, false).unwrap();

        let expected_months = i64::from(date.year()) * 12 + i64::from(date.month()) + i64::from(months);
        prop_assert_eq!(i64::from(shifted.year()) * 12 + i64::from(shifted.month()), expected_months);
        prop_assert_eq!(shifted.day(), date.day().min(shifted.days_in_month()));
    }

    #[test]
    fn test_end_of_month_offset_stays_end_of_month(
        year in 1950i32..2100i32,
        month in 1u32..13u32,
        months in -600i32..600i32,
    ) {
        let date = Date::from_ymd(year, month, 1).unwrap().end_of_month();
        let shifted = date.add_offset(0, months, 0, true).unwrap();
        prop_assert!(shifted.is_end_of_month());
    }

    #[test]
    fn test_offset_from_fixed_anchor_matches_years_and_months(
        date in date_strategy(),
        years in -20i32..20i32,
        months in -11i32..12i32,
    ) {
        let split = date.add_offset(years, months, 0, true).unwrap();
        let combined = date.add_offset(0, years * 12 + months, 0, true).unwrap();
        prop_assert_eq!(split, combined);
    }

    #[test]
    fn test_actual_bases_count_calendar_days(start in date_strategy(), end in date_strategy()) {
        let days = end - start;
        for basis in [Basis::ActualActual, Basis::Actual360, Basis::Actual365] {
            prop_assert_eq!(basis.day_count(start, end), days);
        }
    }

    #[test]
    fn test_day_counts_are_antisymmetric(start in date_strategy(), end in date_strategy()) {
        for basis in Basis::all() {
            if *basis == Basis::UsNasd30360 {
                continue;
            }
            prop_assert_eq!(basis.day_count(start, end), -basis.day_count(end, start));
        }
    }

    #[test]
    fn test_actual_actual_fraction_of_whole_year(year in 1950i32..2099i32, month in 1u32..13u32, day in 1u32..29u32) {
        let start = Date::from_ymd(year, month, day).unwrap();
        let end = Date::from_ymd(year + 1, month, day).unwrap();
        let fraction = ActActIsda.year_fraction(start, end);
        prop_assert!((fraction - Decimal::ONE).abs() < Decimal::new(1, 2));
    }
}
