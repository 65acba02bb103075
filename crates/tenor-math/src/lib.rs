//! # Tenor Math
//!
//! Root-finding utilities for the Tenor fixed income pricing library.
//!
//! The centerpiece is [`solvers::implied_yield`], the hybrid
//! bisection + Newton-Raphson solver that inverts an arbitrary pricing
//! function into the yield that reproduces a target price.
//!
//! ## Design Philosophy
//!
//! - **Robustness first**: a fixed bisection phase buys a bracket-safe
//!   starting point before Newton's quadratic convergence takes over
//! - **Numerical stability**: adaptive finite-difference steps, derivative
//!   underflow guards, and hard iterate clamps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{implied_yield, SolverResult};
