//! # Tenor Analytics
//!
//! Pricing and risk engines for the Tenor fixed income library:
//!
//! - **Black-76** ([`black76`]): closed-form pricer and Greeks for European
//!   options on forwards/futures
//! - **Sensitivity** ([`sensitivity`]): analytic price, duration, convexity,
//!   and DV01 from a cash-flow list under a flat yield
//! - **Monte Carlo** ([`mc`]): batched, vectorizable terminal-price
//!   simulation with antithetic variance reduction, used as a cross-check
//!   for the closed form
//!
//! All engines are stateless free functions over plain values; the Monte
//! Carlo engine's only state is a deterministically seeded generator local
//! to each call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod black76;
pub mod mc;
pub mod sensitivity;

pub use mc::{mc_price, mc_price_advanced, mc_price_with_stats, McConfig, McResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::black76;
    pub use crate::mc::{mc_price, mc_price_advanced, mc_price_with_stats, McConfig, McResult};
    pub use crate::sensitivity;
}
