//! Fixed-coupon bullet bond.

use serde::{Deserialize, Serialize};
use tenor_analytics::sensitivity;
use tenor_core::{CashFlow, Compounding};
use tenor_curves::DiscountCurve;
use tenor_math::{implied_yield, SolverResult};

use crate::error::BondResult;
use crate::schedule::bullet_schedule;

/// Flat yield assumed when a curve's discount factor degenerates.
const FALLBACK_YIELD: f64 = 0.05;

/// A fixed-coupon bullet bond, represented by its cash-flow schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    face: f64,
    coupon_rate: f64,
    coupons_per_year: u32,
    maturity_years: f64,
    cash_flows: Vec<CashFlow>,
}

impl Bond {
    /// Builds a bullet bond and its schedule.
    ///
    /// Fails if the face value or maturity is non-positive or any input
    /// is non-finite. Negative coupon rates are permitted.
    pub fn new(
        face: f64,
        coupon_rate: f64,
        coupons_per_year: u32,
        maturity_years: f64,
    ) -> BondResult<Self> {
        let cash_flows = bullet_schedule(face, coupon_rate, coupons_per_year, maturity_years)?;
        Ok(Self {
            face,
            coupon_rate,
            coupons_per_year,
            maturity_years,
            cash_flows,
        })
    }

    /// The bond's cash flows, in time order.
    #[must_use]
    pub fn cash_flows(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Face value.
    #[must_use]
    pub fn face(&self) -> f64 {
        self.face
    }

    /// Annual coupon rate.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupon payments per year.
    #[must_use]
    pub fn coupons_per_year(&self) -> u32 {
        self.coupons_per_year
    }

    /// Years to maturity.
    #[must_use]
    pub fn maturity_years(&self) -> f64 {
        self.maturity_years
    }

    /// Dirty price under a discount curve: the sum of each cash flow
    /// discounted at its payment time.
    pub fn price(&self, curve: &DiscountCurve) -> BondResult<f64> {
        let mut price = 0.0;
        for cf in &self.cash_flows {
            price += cf.amount * curve.df(cf.time)?;
        }
        Ok(price)
    }

    /// Solves for the flat yield that reprices the bond to `clean_price`
    /// under the given compounding convention.
    ///
    /// The returned [`SolverResult`] carries the yield as `root` along
    /// with the residual of the final iterate; callers that only need
    /// the number can take `.root` directly.
    pub fn yield_from_price(
        &self,
        clean_price: f64,
        compounding: Compounding,
    ) -> BondResult<SolverResult> {
        let price_fn = |y: f64| sensitivity::price(&self.cash_flows, y, compounding);
        Ok(implied_yield(price_fn, clean_price)?)
    }

    /// DV01 at the flat yield implied by the curve.
    pub fn dv01(&self, curve: &DiscountCurve, compounding: Compounding) -> BondResult<f64> {
        let y = self.extract_yield(curve, compounding)?;
        Ok(sensitivity::dv01(&self.cash_flows, y, compounding))
    }

    /// Modified duration at the flat yield implied by the curve.
    pub fn modified_duration(
        &self,
        curve: &DiscountCurve,
        compounding: Compounding,
    ) -> BondResult<f64> {
        let y = self.extract_yield(curve, compounding)?;
        Ok(sensitivity::modified_duration(&self.cash_flows, y, compounding))
    }

    /// Convexity at the flat yield implied by the curve.
    pub fn convexity(&self, curve: &DiscountCurve, compounding: Compounding) -> BondResult<f64> {
        let y = self.extract_yield(curve, compounding)?;
        Ok(sensitivity::convexity(&self.cash_flows, y, compounding))
    }

    /// Flat yield proxy backed out from the curve's discount factor at
    /// the last cash-flow time.
    ///
    /// Continuous: `y = -ln(df) / T`. Discrete with `m` periods per
    /// year: `y = m ((1/df)^(1/(mT)) - 1)`. Falls back to 5% when the
    /// discount factor is non-positive.
    fn extract_yield(
        &self,
        curve: &DiscountCurve,
        compounding: Compounding,
    ) -> BondResult<f64> {
        let Some(last) = self.cash_flows.last() else {
            return Ok(FALLBACK_YIELD);
        };

        let maturity_time = last.time;
        let df = curve.df(maturity_time)?;
        if df <= 0.0 {
            return Ok(FALLBACK_YIELD);
        }

        let y = match compounding.periods_per_year_opt() {
            None => -df.ln() / maturity_time,
            Some(m) => {
                let m = f64::from(m);
                let yield_factor = (1.0 / df).powf(1.0 / (m * maturity_time));
                m * (yield_factor - 1.0)
            }
        };
        Ok(y)
    }
}
