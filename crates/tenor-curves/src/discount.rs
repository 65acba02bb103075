//! Discount factor curves.

use serde::{Deserialize, Serialize};

use tenor_core::daycounts::DayCount;
use tenor_core::Compounding;

use crate::error::{CurveError, CurveResult};

/// A market calibration point: the observed discount factor at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZeroQuote {
    /// Time in years. Strictly positive.
    pub time: f64,
    /// Discount factor. Strictly positive.
    pub df: f64,
}

impl ZeroQuote {
    /// Creates a quote, rejecting non-finite or non-positive fields.
    pub fn new(time: f64, df: f64) -> CurveResult<Self> {
        if !time.is_finite() || time <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "quote time must be positive and finite, got {time}"
            )));
        }
        if !df.is_finite() || df <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "discount factor must be positive and finite, got {df}"
            )));
        }
        Ok(Self { time, df })
    }
}

/// Curve parameterization: flat analytic or bootstrapped from quotes.
#[derive(Debug, Clone)]
enum CurveData {
    Flat {
        rate: f64,
        compounding: Compounding,
        day_count: DayCount,
    },
    /// Quotes sorted ascending by time. Duplicate times are permitted;
    /// lookups resolve a duplicated time to a single quote.
    Bootstrapped { quotes: Vec<ZeroQuote> },
}

/// An immutable zero curve supplying discount factors and forward prices.
///
/// # Example
///
/// ```rust
/// use tenor_core::daycounts::DayCount;
/// use tenor_core::Compounding;
/// use tenor_curves::DiscountCurve;
///
/// let curve = DiscountCurve::flat(0.05, Compounding::Continuous, DayCount::Act365F).unwrap();
///
/// let df = curve.df(1.0).unwrap();
/// assert!((df - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    data: CurveData,
}

impl DiscountCurve {
    /// Creates a flat curve from a single yield.
    ///
    /// Negative yields are permitted; non-finite yields are rejected. The
    /// day count tag is recorded for instrument-level callers that map
    /// dates to year fractions; the curve itself works in year fractions.
    pub fn flat(rate: f64, compounding: Compounding, day_count: DayCount) -> CurveResult<Self> {
        if !rate.is_finite() {
            return Err(CurveError::invalid_input(format!(
                "flat yield must be finite, got {rate}"
            )));
        }
        Ok(Self {
            data: CurveData::Flat {
                rate,
                compounding,
                day_count,
            },
        })
    }

    /// Creates a bootstrapped curve from market quotes.
    ///
    /// The quote list must be non-empty; every quote's time and discount
    /// factor must be finite and strictly positive (re-validated here so a
    /// struct-literal [`ZeroQuote`] cannot smuggle bad values in). Quotes
    /// are sorted ascending by time; duplicates are tolerated.
    pub fn bootstrapped(mut quotes: Vec<ZeroQuote>) -> CurveResult<Self> {
        if quotes.is_empty() {
            return Err(CurveError::construction_failed(
                "cannot bootstrap a curve from an empty quote list",
            ));
        }
        for quote in &quotes {
            ZeroQuote::new(quote.time, quote.df)?;
        }
        quotes.sort_by(|a, b| a.time.total_cmp(&b.time));

        Ok(Self {
            data: CurveData::Bootstrapped { quotes },
        })
    }

    /// Discount factor `P(0, t)`.
    ///
    /// Returns 1.0 for any `t <= 0`. Bootstrapped curves flat-extrapolate
    /// outside the quoted range and interpolate log-linearly between
    /// bracketing quotes, falling back to straight linear interpolation in
    /// the (guarded, validation-excluded) case of a non-positive endpoint.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidInput`] if `t` is NaN or infinite.
    pub fn df(&self, t: f64) -> CurveResult<f64> {
        if !t.is_finite() {
            return Err(CurveError::invalid_input(format!(
                "time must be finite, got {t}"
            )));
        }
        if t <= 0.0 {
            return Ok(1.0);
        }

        match &self.data {
            CurveData::Flat {
                rate, compounding, ..
            } => Ok(compounding.discount_factor(*rate, t)),
            CurveData::Bootstrapped { quotes } => Ok(Self::interpolate(quotes, t)),
        }
    }

    /// Forward bond price `1 / df(t)`, or 0.0 when the discount factor is
    /// non-positive and cannot be inverted.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidInput`] if `t` is NaN or infinite.
    pub fn forward_bond_price(&self, t: f64) -> CurveResult<f64> {
        let df = self.df(t)?;
        Ok(if df > 0.0 { 1.0 / df } else { 0.0 })
    }

    /// The day count tag recorded at construction (flat curves only).
    #[must_use]
    pub fn day_count(&self) -> Option<DayCount> {
        match &self.data {
            CurveData::Flat { day_count, .. } => Some(*day_count),
            CurveData::Bootstrapped { .. } => None,
        }
    }

    /// Log-linear interpolation with flat extrapolation at both ends.
    fn interpolate(quotes: &[ZeroQuote], t: f64) -> f64 {
        // First quote at or beyond t (quotes are sorted ascending).
        let idx = quotes.partition_point(|q| q.time < t);

        if idx == 0 {
            return quotes[0].df;
        }
        if idx == quotes.len() {
            return quotes[quotes.len() - 1].df;
        }

        let (t0, df0) = (quotes[idx - 1].time, quotes[idx - 1].df);
        let (t1, df1) = (quotes[idx].time, quotes[idx].df);

        if t1 == t0 {
            // Degenerate segment from duplicated quote times
            return df0;
        }

        let weight = (t - t0) / (t1 - t0);

        if df0 <= 0.0 || df1 <= 0.0 {
            // Guard: log interpolation needs positive endpoints
            return df0 + weight * (df1 - df0);
        }

        // ln(df) linear in t preserves strict positivity
        (df0.ln() + weight * (df1.ln() - df0.ln())).exp()
    }
}
