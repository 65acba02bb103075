//! Compounding conventions and the shared discounting primitive.
//!
//! Both the curve crate (flat curves) and the analytic sensitivity module
//! discount through the methods on [`Compounding`], so the compounding math
//! exists exactly once in the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interest compounding convention.
///
/// `Continuous` is the sentinel for exponential discounting; the discrete
/// conventions compound `m` times per year.
///
/// # Example
///
/// ```rust
/// use tenor_core::Compounding;
///
/// let rate = 0.05; // 5% rate
/// let t = 2.0;     // 2 years
///
/// let df_continuous = Compounding::Continuous.discount_factor(rate, t);
/// let df_annual = Compounding::Annual.discount_factor(rate, t);
///
/// // Continuous compounding gives the lower discount factor
/// assert!(df_continuous < df_annual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year) - standard for US bonds
    #[default]
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Continuous compounding
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year, or `None` for
    /// continuous compounding.
    #[must_use]
    pub fn periods_per_year_opt(&self) -> Option<u32> {
        match self {
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
            Compounding::Continuous => None,
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuous)
    }

    /// Discount factor for a yield `y` over `t` years.
    ///
    /// - Continuous: `exp(-y*t)`
    /// - Discrete (m periods/year): `(1 + y/m)^(-m*t)`
    #[must_use]
    pub fn discount_factor(&self, y: f64, t: f64) -> f64 {
        match self.periods_per_year_opt() {
            None => (-y * t).exp(),
            Some(m) => {
                let m = f64::from(m);
                (1.0 + y / m).powf(-m * t)
            }
        }
    }

    /// First derivative of the discount factor with respect to the yield.
    ///
    /// - Continuous: `-t * exp(-y*t)`
    /// - Discrete: `-t * (1 + y/m)^(-m*t - 1)`
    #[must_use]
    pub fn discount_factor_dy(&self, y: f64, t: f64) -> f64 {
        match self.periods_per_year_opt() {
            None => -t * (-y * t).exp(),
            Some(m) => {
                let m = f64::from(m);
                -t * (1.0 + y / m).powf(-m * t - 1.0)
            }
        }
    }

    /// Second derivative of the discount factor with respect to the yield.
    ///
    /// - Continuous: `t^2 * exp(-y*t)`
    /// - Discrete: `(t^2 + t/m) * (1 + y/m)^(-m*t - 2)`
    #[must_use]
    pub fn discount_factor_d2y(&self, y: f64, t: f64) -> f64 {
        match self.periods_per_year_opt() {
            None => t * t * (-y * t).exp(),
            Some(m) => {
                let m = f64::from(m);
                (t * t + t / m) * (1.0 + y / m).powf(-m * t - 2.0)
            }
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Annual => "Annual",
            Compounding::SemiAnnual => "Semi-Annual",
            Compounding::Quarterly => "Quarterly",
            Compounding::Monthly => "Monthly",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}
