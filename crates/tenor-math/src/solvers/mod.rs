//! Root-finding algorithms.
//!
//! This module provides the hybrid solver used to back implied yields out of
//! prices:
//!
//! - [`implied_yield`]: fixed-length bisection for a bracket-safe coarse
//!   estimate, then Newton-Raphson with a finite-difference derivative for
//!   precision
//!
//! # Choosing the phases
//!
//! | Phase | Speed | Reliability | Requires |
//! |-------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Newton-Raphson | Fast (quadratic) | May stall | Good start |
//!
//! Bisection pays a fixed cost of 10 iterations to hand Newton a start that
//! is already within ~0.2% of the root, which removes Newton's sensitivity
//! to poor initial guesses for bond-like (monotone) price functions.

mod implied_yield;

pub use implied_yield::implied_yield;

/// Number of bisection iterations in the coarse phase.
///
/// 10 halvings of a width-2 bracket leave a resolution of 2/1024.
pub const BISECTION_ITERATIONS: u32 = 10;

/// Maximum Newton-Raphson iterations in the refinement phase.
pub const MAX_NEWTON_ITERATIONS: u32 = 100;

/// Absolute price tolerance for Newton convergence.
pub const PRICE_TOLERANCE: f64 = 1e-12;

/// Derivative magnitude below which Newton aborts as near-singular.
pub const DERIVATIVE_FLOOR: f64 = 1e-15;

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found (best iterate if the tolerance was not reached).
    pub root: f64,
    /// Number of Newton iterations used.
    pub iterations: u32,
    /// Final residual (price error at the root).
    pub residual: f64,
}

impl SolverResult {
    /// Whether the final residual met the price tolerance.
    ///
    /// The solver itself never fails on non-convergence; callers that need
    /// a guarantee check this (or re-price at [`SolverResult::root`]).
    #[must_use]
    pub fn converged(&self) -> bool {
        self.residual.abs() < PRICE_TOLERANCE
    }
}
