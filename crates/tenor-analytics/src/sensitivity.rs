//! Analytic price and yield sensitivities from a cash-flow list.
//!
//! These functions operate directly on a `&[CashFlow]` plus a flat yield
//! and compounding convention; they do not consult a discount curve. The
//! compounding math itself (discount factor and its first two yield
//! derivatives) lives on [`Compounding`] in `tenor-core`, shared with the
//! curve crate so the formulas cannot diverge.
//!
//! ## Formulas
//!
//! ```text
//! P       = sum_i CF_i * df(t_i, y)
//! dP/dy   = sum_i CF_i * d(df)/dy      (continuous: -t*e^(-yt))
//! d2P/dy2 = sum_i CF_i * d2(df)/dy2    (continuous: t^2*e^(-yt))
//!
//! modified duration = -(dP/dy) / P
//! DV01              = -(dP/dy) * 1e-4
//! convexity         = (d2P/dy2) / P
//! ```
//!
//! When the price is exactly zero, duration and convexity return 0.0 as a
//! defensive default rather than dividing by zero.

use tenor_core::{CashFlow, Compounding};

/// One basis point.
const BASIS_POINT: f64 = 1e-4;

/// Present value of the cash flows at a flat yield.
#[must_use]
pub fn price(cash_flows: &[CashFlow], y: f64, compounding: Compounding) -> f64 {
    cash_flows
        .iter()
        .map(|cf| cf.amount * compounding.discount_factor(y, cf.time))
        .sum()
}

/// First derivative of price with respect to yield, `dP/dy`.
#[must_use]
pub fn price_delta(cash_flows: &[CashFlow], y: f64, compounding: Compounding) -> f64 {
    cash_flows
        .iter()
        .map(|cf| cf.amount * compounding.discount_factor_dy(y, cf.time))
        .sum()
}

/// Second derivative of price with respect to yield, `d2P/dy2`.
#[must_use]
pub fn price_gamma(cash_flows: &[CashFlow], y: f64, compounding: Compounding) -> f64 {
    cash_flows
        .iter()
        .map(|cf| cf.amount * compounding.discount_factor_d2y(y, cf.time))
        .sum()
}

/// Modified duration, `-(dP/dy) / P`.
///
/// Returns 0.0 when the price is zero.
#[must_use]
pub fn modified_duration(cash_flows: &[CashFlow], y: f64, compounding: Compounding) -> f64 {
    let p = price(cash_flows, y, compounding);
    if p == 0.0 {
        return 0.0;
    }
    -price_delta(cash_flows, y, compounding) / p
}

/// DV01, the price change for a one basis point parallel yield shift.
#[must_use]
pub fn dv01(cash_flows: &[CashFlow], y: f64, compounding: Compounding) -> f64 {
    -price_delta(cash_flows, y, compounding) * BASIS_POINT
}

/// Convexity, `(d2P/dy2) / P`.
///
/// Returns 0.0 when the price is zero.
#[must_use]
pub fn convexity(cash_flows: &[CashFlow], y: f64, compounding: Compounding) -> f64 {
    let p = price(cash_flows, y, compounding);
    if p == 0.0 {
        return 0.0;
    }
    price_gamma(cash_flows, y, compounding) / p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// 2-year 5% semi-annual bullet, face 100.
    fn two_year_bullet() -> Vec<CashFlow> {
        vec![
            CashFlow::new(0.5, 2.5),
            CashFlow::new(1.0, 2.5),
            CashFlow::new(1.5, 2.5),
            CashFlow::new(2.0, 102.5),
        ]
    }

    #[test]
    fn test_par_bond_prices_at_par() {
        let cfs = two_year_bullet();
        assert_relative_eq!(
            price(&cfs, 0.05, Compounding::SemiAnnual),
            100.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_price_delta_matches_finite_difference() {
        let cfs = two_year_bullet();
        let h = 1e-7;
        for compounding in [Compounding::Continuous, Compounding::SemiAnnual] {
            let numeric =
                (price(&cfs, 0.05 + h, compounding) - price(&cfs, 0.05 - h, compounding))
                    / (2.0 * h);
            assert_relative_eq!(
                price_delta(&cfs, 0.05, compounding),
                numeric,
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_price_gamma_matches_finite_difference() {
        let cfs = two_year_bullet();
        let h = 1e-5;
        for compounding in [Compounding::Continuous, Compounding::SemiAnnual] {
            let numeric = (price(&cfs, 0.05 + h, compounding)
                - 2.0 * price(&cfs, 0.05, compounding)
                + price(&cfs, 0.05 - h, compounding))
                / (h * h);
            assert_relative_eq!(
                price_gamma(&cfs, 0.05, compounding),
                numeric,
                epsilon = 1e-2
            );
        }
    }

    #[test]
    fn test_modified_duration_two_year_par() {
        let cfs = two_year_bullet();
        let dur = modified_duration(&cfs, 0.05, Compounding::SemiAnnual);
        // A 2y par bond's modified duration is a shade under 1.9 years
        assert_relative_eq!(dur, 1.88, epsilon = 0.01);
    }

    #[test]
    fn test_dv01_identity() {
        let cfs = two_year_bullet();
        for y in [0.01, 0.05, 0.12] {
            let p = price(&cfs, y, Compounding::SemiAnnual);
            let dur = modified_duration(&cfs, y, Compounding::SemiAnnual);
            assert_relative_eq!(
                dv01(&cfs, y, Compounding::SemiAnnual),
                dur * p * 1e-4,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_convexity_positive_for_plain_bond() {
        let cfs = two_year_bullet();
        assert!(convexity(&cfs, 0.05, Compounding::SemiAnnual) > 0.0);
    }

    #[test]
    fn test_zero_price_defensive_defaults() {
        // Offsetting flows at the same time: price is exactly zero
        let cfs = vec![CashFlow::new(1.0, 100.0), CashFlow::new(1.0, -100.0)];
        assert_eq!(price(&cfs, 0.05, Compounding::Annual), 0.0);
        assert_eq!(modified_duration(&cfs, 0.05, Compounding::Annual), 0.0);
        assert_eq!(convexity(&cfs, 0.05, Compounding::Annual), 0.0);
    }

    #[test]
    fn test_empty_cash_flows() {
        assert_eq!(price(&[], 0.05, Compounding::Annual), 0.0);
        assert_eq!(dv01(&[], 0.05, Compounding::Annual), 0.0);
        assert_eq!(modified_duration(&[], 0.05, Compounding::Annual), 0.0);
    }

    proptest! {
        #[test]
        fn prop_dv01_identity(
            y in 0.001..0.30_f64,
            coupon in 0.0..0.12_f64,
            years in 1..30_i32,
        ) {
            let freq = 2;
            let mut cfs = Vec::new();
            for i in 1..=(years * freq) {
                let t = f64::from(i) / f64::from(freq);
                let mut amount = coupon * 100.0 / f64::from(freq);
                if i == years * freq {
                    amount += 100.0;
                }
                cfs.push(CashFlow::new(t, amount));
            }

            let p = price(&cfs, y, Compounding::SemiAnnual);
            let dur = modified_duration(&cfs, y, Compounding::SemiAnnual);
            let d = dv01(&cfs, y, Compounding::SemiAnnual);

            prop_assert!((d - dur * p * 1e-4).abs() < 1e-6);
        }
    }
}
