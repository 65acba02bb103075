//! Option type flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Call/put flag shared by the closed-form and Monte Carlo pricers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Undiscounted exercise payoff at terminal price `f` for strike `k`.
    #[must_use]
    pub fn payoff(&self, f: f64, k: f64) -> f64 {
        match self {
            OptionType::Call => (f - k).max(0.0),
            OptionType::Put => (k - f).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        assert_eq!(OptionType::Call.payoff(105.0, 100.0), 5.0);
        assert_eq!(OptionType::Call.payoff(95.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(OptionType::Put.payoff(95.0, 100.0), 5.0);
        assert_eq!(OptionType::Put.payoff(105.0, 100.0), 0.0);
    }
}
