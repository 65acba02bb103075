//! # Tenor Curves
//!
//! Discount curve construction and interpolation.
//!
//! A [`DiscountCurve`] is either *flat* (a single yield and compounding
//! convention) or *bootstrapped* (interpolated through market
//! [`ZeroQuote`]s). Either way it answers two questions:
//!
//! - [`DiscountCurve::df`]: the present value of one unit paid at `t`
//! - [`DiscountCurve::forward_bond_price`]: the forward price `1 / df(t)`
//!
//! Bootstrapped curves interpolate **log-linearly** (ln df linear in t),
//! which keeps interpolated factors strictly positive, and flat-extrapolate
//! beyond the quoted range.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod discount;
pub mod error;

pub use discount::{DiscountCurve, ZeroQuote};
pub use error::{CurveError, CurveResult};
