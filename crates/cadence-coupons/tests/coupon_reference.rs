//! Integration tests against reference coupon schedules.
//!
//! Every scenario is evaluated for all five bases, once through the typed
//! functions and once through the loose-argument calculator.

use approx::assert_relative_eq;
use cadence_core::{Basis, Date, Frequency};
use cadence_coupons::functions::*;
use cadence_coupons::{
    CouponArgs, CouponCalculator, CouponFunction, CouponRequest, CouponTerms, CouponValue,
};
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use std::fs;

/// Path to reference scenarios, relative to the crate manifest
const REFERENCE_FILE: &str = "tests/fixtures/coupon_reference.json";

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
struct ReferenceSuite {
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    description: String,
    settlement: String,
    maturity: String,
    frequency: i64,
    previous_coupon_date: String,
    next_coupon_date: String,
    coupons_remaining: f64,
    bases: Vec<BasisExpected>,
}

#[derive(Debug, Deserialize)]
struct BasisExpected {
    basis: i64,
    days_from_period_start: i64,
    days_in_period: i64,
    days_to_next_coupon: i64,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn load_suite() -> ReferenceSuite {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let path = std::path::Path::new(&manifest_dir).join(REFERENCE_FILE);

    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test fixture file at {:?}: {}", path, e));

    serde_json::from_str(&data).unwrap_or_else(|e| panic!("Failed to parse test fixture JSON: {}", e))
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_typed_functions_match_reference() {
    let suite = load_suite();
    assert!(!suite.scenarios.is_empty());

    for scenario in &suite.scenarios {
        let s = parse_date(&scenario.settlement);
        let m = parse_date(&scenario.maturity);
        let f = Frequency::try_from(scenario.frequency).unwrap();
        let name = &scenario.description;

        for expected in &scenario.bases {
            let b = Basis::try_from(expected.basis).unwrap();

            assert_eq!(
                previous_coupon_date(s, m, f, b).unwrap(),
                parse_date(&scenario.previous_coupon_date),
                "COUPPCD {name} basis {b}"
            );
            assert_eq!(
                next_coupon_date(s, m, f, b).unwrap(),
                parse_date(&scenario.next_coupon_date),
                "COUPNCD {name} basis {b}"
            );
            assert_eq!(
                days_from_period_start_to_settlement(s, m, f, b).unwrap(),
                expected.days_from_period_start,
                "COUPDAYBS {name} basis {b}"
            );
            assert_eq!(
                days_in_period(s, m, f, b).unwrap(),
                expected.days_in_period,
                "COUPDAYS {name} basis {b}"
            );
            assert_eq!(
                days_from_settlement_to_next_coupon(s, m, f, b).unwrap(),
                expected.days_to_next_coupon,
                "COUPDAYSNC {name} basis {b}"
            );

            let count = coupons_remaining(s, m, f, b).unwrap().to_f64().unwrap();
            assert_relative_eq!(count, scenario.coupons_remaining, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_calculator_matches_reference() {
    let suite = load_suite();
    let calc = CouponCalculator::new();

    for scenario in &suite.scenarios {
        for expected in &scenario.bases {
            let args = CouponArgs::new(
                scenario.settlement.as_str(),
                scenario.maturity.as_str(),
                scenario.frequency,
            )
            .with_basis(expected.basis);

            let days = |function| {
                calc.evaluate(function, &args)
                    .unwrap()
                    .as_days()
                    .unwrap_or_else(|| panic!("{function} did not return days"))
            };

            assert_eq!(days(CouponFunction::DaysFromPeriodStart), expected.days_from_period_start);
            assert_eq!(days(CouponFunction::DaysInPeriod), expected.days_in_period);
            assert_eq!(days(CouponFunction::DaysToNextCoupon), expected.days_to_next_coupon);

            assert_eq!(
                calc.evaluate(CouponFunction::PreviousCouponDate, &args).unwrap(),
                CouponValue::Date(parse_date(&scenario.previous_coupon_date))
            );
        }
    }
}

#[test]
fn test_remaining_dates_agree_with_coupon_count() {
    let suite = load_suite();

    for scenario in &suite.scenarios {
        let terms = CouponTerms::new(
            CouponFunction::CouponsRemaining,
            parse_date(&scenario.settlement),
            parse_date(&scenario.maturity),
            Frequency::try_from(scenario.frequency).unwrap(),
            Basis::default(),
        )
        .unwrap();

        let dates = terms.remaining_coupon_dates().unwrap();
        assert_eq!(dates.first().copied(), Some(parse_date(&scenario.next_coupon_date)));
        assert_eq!(dates.last().copied(), Some(terms.maturity()));
        assert_relative_eq!(dates.len() as f64, scenario.coupons_remaining);
    }
}

// ============================================================================
// INDIVIDUAL SCENARIOS
// ============================================================================

#[test]
fn test_basis_zero_subtraction_differs_from_direct_count() {
    // Next coupon on the 31st: the subtraction gives 89, a direct 30/360 count 90
    let s = Date::from_ymd(2024, 3, 1).unwrap();
    let m = Date::from_ymd(2030, 5, 31).unwrap();
    let f = Frequency::Annual;

    let ncd = next_coupon_date(s, m, f, Basis::UsNasd30360).unwrap();
    assert_eq!(Basis::UsNasd30360.day_count(s, ncd), 90);
    assert_eq!(days_from_settlement_to_next_coupon(s, m, f, Basis::UsNasd30360).unwrap(), 89);
}

#[test]
fn test_json_request_round_trip() {
    let request: CouponRequest = serde_json::from_str(
        r#"{"function": "CoupDayBs",
            "settlement": {"year": 2011, "month": 1, "day": 25},
            "maturity": "2011-11-15",
            "frequency": 2,
            "basis": 1}"#,
    )
    .unwrap();
    assert_eq!(request.function, CouponFunction::DaysFromPeriodStart);

    let calc = CouponCalculator::new();
    assert_eq!(calc.evaluate_request(&request).unwrap(), CouponValue::Days(71));

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["function"], "COUPDAYBS");
    let reparsed: CouponRequest = serde_json::from_value(json).unwrap();
    assert_eq!(reparsed, request);
}
