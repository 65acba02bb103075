//! Cash flow value type.

use serde::{Deserialize, Serialize};

/// A single fixed cash flow.
///
/// `time` is the year fraction from valuation to payment; `amount` is the
/// payment in currency units. Schedules are ordered lists of these values,
/// produced by the instrument layer and consumed by pricing and risk code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Time to payment in years.
    pub time: f64,
    /// Payment amount.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(time: f64, amount: f64) -> Self {
        Self { time, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cashflow_value_semantics() {
        let cf = CashFlow::new(0.5, 2.5);
        let copy = cf;
        assert_eq!(cf, copy);
    }

    #[test]
    fn test_serde_roundtrip() {
        let cf = CashFlow::new(1.0, 102.5);
        let json = serde_json::to_string(&cf).unwrap();
        let back: CashFlow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cf);
    }
}
