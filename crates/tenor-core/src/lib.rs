//! # Tenor Core
//!
//! Core types and abstractions for the Tenor fixed income pricing library.
//!
//! This crate provides:
//!
//! - **Types**: [`Compounding`], [`CashFlow`], [`OptionType`]
//! - **Discounting**: the single discounting primitive shared by curve
//!   construction and analytic risk (see [`Compounding::discount_factor`])
//! - **Day counts**: ACT/365F and 30/360 US year fractions
//! - **Errors**: [`CoreError`] and [`CoreResult`]
//!
//! ## Design Philosophy
//!
//! - **Value semantics**: every type here is a plain immutable value with no
//!   shared mutable state
//! - **One discounting formula**: curve and sensitivity code both delegate to
//!   [`Compounding`], so the compounding math cannot diverge

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use daycounts::{year_fraction, Date, DayCount};
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, Compounding, OptionType};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{year_fraction, Date, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, Compounding, OptionType};
}
