//! # Tenor Bonds
//!
//! Instrument layer of the Tenor fixed income library:
//!
//! - [`bullet_schedule`]: cash-flow generation for bullet bonds
//! - [`Bond`]: a fixed-coupon bullet bond with curve pricing, implied
//!   yield, and risk measures
//! - [`EuropeanBondOption`]: a European option on a forward bond price,
//!   priced with Black-76 or Monte Carlo
//!
//! Instruments are thin compositions over the lower layers: schedules
//! feed the `sensitivity` engine, curve lookups come from
//! `tenor-curves`, and yield solving goes through `tenor-math`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bond;
pub mod error;
pub mod option;
pub mod schedule;

pub use bond::Bond;
pub use error::{BondError, BondResult};
pub use option::EuropeanBondOption;
pub use schedule::bullet_schedule;
