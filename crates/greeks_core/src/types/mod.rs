//! Shared value types.
//!
//! - `OptionType`: Call/put selector
//! - `MarketInputs`: Spot, strike, expiry, volatility and rate
//! - `GreeksError`: Domain-validation errors

pub mod error;
pub mod inputs;
pub mod option_type;

pub use error::GreeksError;
pub use inputs::MarketInputs;
pub use option_type::OptionType;
