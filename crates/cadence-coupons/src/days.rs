//! Day counts within the coupon period and coupons remaining.

use cadence_core::Basis;
use rust_decimal::Decimal;

use crate::error::CouponResult;
use crate::validation::CouponTerms;

impl CouponTerms {
    /// Days from the previous coupon date to settlement, under the basis.
    ///
    /// # Errors
    ///
    /// Propagates coupon date errors from [`CouponTerms::previous_coupon_date`].
    pub fn days_from_period_start(&self) -> CouponResult<i64> {
        let previous = self.previous_coupon_date()?;
        Ok(self.basis().day_count(previous, self.settlement()))
    }

    /// Days in the coupon period containing settlement.
    ///
    /// Actual/actual counts the real period between the previous and next
    /// coupon dates. Every other basis returns the nominal period length,
    /// `days_in_year / frequency` rounded half away from zero, whatever
    /// the calendar period looks like.
    ///
    /// # Errors
    ///
    /// Propagates coupon date errors for the actual/actual basis.
    pub fn days_in_period(&self) -> CouponResult<i64> {
        let basis = self.basis();

        if basis == Basis::ActualActual {
            let period = self.coupon_period()?;
            return Ok(basis.day_count(period.start, period.end));
        }

        let year = i64::from(basis.nominal_days_in_year(self.settlement()));
        let frequency = i64::from(self.frequency().periods_per_year());
        Ok((2 * year + frequency) / (2 * frequency))
    }

    /// Days from settlement to the next coupon date.
    ///
    /// For 30/360 US this is `days_in_period - days_from_period_start`
    /// rather than a direct 30/360 count to the next coupon date, which is
    /// one day off the spreadsheet reference when the next coupon falls on
    /// the 31st. Every other basis counts directly.
    ///
    /// # Errors
    ///
    /// Propagates coupon date errors.
    pub fn days_to_next_coupon(&self) -> CouponResult<i64> {
        let basis = self.basis();

        if basis == Basis::UsNasd30360 {
            return Ok(self.days_in_period()? - self.days_from_period_start()?);
        }

        let next = self.next_coupon_date()?;
        Ok(basis.day_count(self.settlement(), next))
    }

    /// Number of coupons payable between settlement and maturity.
    ///
    /// Computed as the month distance from the previous coupon date to
    /// maturity times `frequency / 12`. The raw ratio is returned without
    /// rounding.
    ///
    /// # Errors
    ///
    /// Propagates coupon date errors.
    pub fn coupons_remaining(&self) -> CouponResult<Decimal> {
        let (py, pm, _) = self.previous_coupon_date()?.split();
        let (my, mm, _) = self.maturity().split();

        let months = i64::from(my - py) * 12 + (i64::from(mm) - i64::from(pm));
        let frequency = i64::from(self.frequency().periods_per_year());

        Ok(Decimal::from(months * frequency) / Decimal::from(12))
    }
}
