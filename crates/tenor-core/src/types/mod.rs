//! Core value types.

mod cashflow;
mod compounding;
mod option_type;

pub use cashflow::CashFlow;
pub use compounding::Compounding;
pub use option_type::OptionType;
