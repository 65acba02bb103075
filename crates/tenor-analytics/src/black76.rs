//! Black-76 closed-form pricing for European options on forwards/futures.
//!
//! The model prices an option on a forward price `F` with strike `K`,
//! time to expiry `T`, lognormal volatility `sigma`, and a discount factor
//! `D` to expiry supplied by the caller (typically from a
//! `tenor_curves::DiscountCurve`):
//!
//! ```text
//! d1 = [ln(F/K) + 0.5*sigma^2*T] / (sigma*sqrt(T))
//! d2 = d1 - sigma*sqrt(T)
//! call = D * (F*N(d1) - K*N(d2))
//! put  = D * (K*N(-d2) - F*N(-d1))
//! ```
//!
//! These are pure functions with **no input validation**: a non-positive
//! forward or strike yields NaN by design, and guarding the domain is the
//! caller's responsibility. Expired or zero-volatility options fall back to
//! discounted intrinsic value.

use statrs::function::erf::erf;
use std::f64::consts::PI;

use tenor_core::OptionType;

/// Standard normal CDF via the error function.
#[inline]
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal density.
#[inline]
fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[inline]
fn d1(f: f64, k: f64, t: f64, sigma: f64) -> f64 {
    ((f / k).ln() + 0.5 * sigma * sigma * t) / (sigma * t.sqrt())
}

/// Option price.
///
/// Falls back to `discount_factor * intrinsic` when `time_to_expiry <= 0`
/// or `volatility <= 0`.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::black76;
/// use tenor_core::OptionType;
///
/// let call = black76::price(100.0, 100.0, 1.0, 0.20, 1.0, OptionType::Call);
/// let put = black76::price(100.0, 100.0, 1.0, 0.20, 1.0, OptionType::Put);
///
/// // At-the-money forward: call and put are worth the same
/// assert!((call - put).abs() < 1e-12);
/// ```
#[must_use]
pub fn price(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    discount_factor: f64,
    option_type: OptionType,
) -> f64 {
    if time_to_expiry <= 0.0 || volatility <= 0.0 {
        return discount_factor * option_type.payoff(forward, strike);
    }

    let d1_val = d1(forward, strike, time_to_expiry, volatility);
    let d2_val = d1_val - volatility * time_to_expiry.sqrt();

    match option_type {
        OptionType::Call => {
            discount_factor * (forward * norm_cdf(d1_val) - strike * norm_cdf(d2_val))
        }
        OptionType::Put => {
            discount_factor * (strike * norm_cdf(-d2_val) - forward * norm_cdf(-d1_val))
        }
    }
}

/// Vega, the price sensitivity to volatility: `D * F * phi(d1) * sqrt(T)`.
///
/// Zero at the expired/zero-volatility boundary.
#[must_use]
pub fn vega(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    discount_factor: f64,
) -> f64 {
    if time_to_expiry <= 0.0 || volatility <= 0.0 {
        return 0.0;
    }

    let d1_val = d1(forward, strike, time_to_expiry, volatility);
    discount_factor * forward * norm_pdf(d1_val) * time_to_expiry.sqrt()
}

/// Delta, the price sensitivity to the forward: call `D*N(d1)`, put
/// `-D*N(-d1)`.
///
/// At the expired/zero-volatility boundary delta degenerates to the
/// discounted step function of moneyness.
#[must_use]
pub fn delta(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    volatility: f64,
    discount_factor: f64,
    option_type: OptionType,
) -> f64 {
    if time_to_expiry <= 0.0 || volatility <= 0.0 {
        return match option_type {
            OptionType::Call => {
                if forward > strike {
                    discount_factor
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if forward < strike {
                    -discount_factor
                } else {
                    0.0
                }
            }
        };
    }

    let d1_val = d1(forward, strike, time_to_expiry, volatility);

    match option_type {
        OptionType::Call => discount_factor * norm_cdf(d1_val),
        OptionType::Put => -discount_factor * norm_cdf(-d1_val),
    }
}
