//! European option on a forward bond price.

use serde::{Deserialize, Serialize};
use tenor_analytics::{black76, mc_price};
use tenor_core::OptionType;
use tenor_curves::DiscountCurve;

use crate::error::BondResult;

/// Years between option expiry and the underlying bond's maturity.
const UNDERLYING_MATURITY_OFFSET: f64 = 5.0;

/// A European call or put on the forward price of a bond maturing five
/// years after option expiry.
///
/// The underlying forward is read off the discount curve as
/// `forward_bond_price(expiry + 5)` and the payoff is discounted with
/// `df(expiry)`. Pricing goes through Black-76 or, as a cross-check,
/// the Monte Carlo engine with its default configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuropeanBondOption {
    option_type: OptionType,
    strike: f64,
    expiry: f64,
}

impl EuropeanBondOption {
    /// A new option with the given type, strike, and expiry in years.
    #[must_use]
    pub fn new(option_type: OptionType, strike: f64, expiry: f64) -> Self {
        Self {
            option_type,
            strike,
            expiry,
        }
    }

    /// Call or put.
    #[must_use]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike on the forward bond price.
    #[must_use]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Option expiry in years.
    #[must_use]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Black-76 price under the given curve and lognormal volatility.
    pub fn price_black(&self, curve: &DiscountCurve, volatility: f64) -> BondResult<f64> {
        let forward = self.forward_price(curve)?;
        let discount_factor = curve.df(self.expiry)?;
        Ok(black76::price(
            forward,
            self.strike,
            self.expiry,
            volatility,
            discount_factor,
            self.option_type,
        ))
    }

    /// Black-76 vega under the given curve and volatility.
    pub fn vega_black(&self, curve: &DiscountCurve, volatility: f64) -> BondResult<f64> {
        let forward = self.forward_price(curve)?;
        let discount_factor = curve.df(self.expiry)?;
        Ok(black76::vega(
            forward,
            self.strike,
            self.expiry,
            volatility,
            discount_factor,
        ))
    }

    /// Monte Carlo price with the engine's default configuration.
    pub fn price_mc(
        &self,
        curve: &DiscountCurve,
        volatility: f64,
        num_paths: u64,
    ) -> BondResult<f64> {
        let forward = self.forward_price(curve)?;
        let discount_factor = curve.df(self.expiry)?;
        Ok(mc_price(
            forward,
            self.strike,
            self.expiry,
            volatility,
            discount_factor,
            self.option_type,
            num_paths,
        ))
    }

    fn forward_price(&self, curve: &DiscountCurve) -> BondResult<f64> {
        let bond_maturity = self.expiry + UNDERLYING_MATURITY_OFFSET;
        Ok(curve.forward_bond_price(bond_maturity)?)
    }
}
