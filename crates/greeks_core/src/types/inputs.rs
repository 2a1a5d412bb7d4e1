//! Market inputs shared by every Greek.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five scalar Black-Scholes inputs for a single option.
///
/// A plain value bundle: constructing one performs no validation, so
/// degenerate values (zero volatility, zero expiry) are representable and
/// are resolved by the Greeks functions themselves. Use
/// [`crate::analytical::strict::validate`] to reject out-of-domain values.
///
/// # Examples
/// ```
/// use greeks_core::types::MarketInputs;
///
/// let inputs = MarketInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015);
/// assert_eq!(inputs.strike, 206.0);
/// assert!(!inputs.is_at_the_money());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketInputs {
    /// Current price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
    /// Annualised risk-free interest rate (r)
    pub rate: f64,
}

impl MarketInputs {
    /// Creates a new set of market inputs.
    #[inline]
    pub fn new(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            volatility,
            rate,
        }
    }

    /// Returns `true` when strike equals spot exactly.
    #[inline]
    pub fn is_at_the_money(&self) -> bool {
        self.strike == self.spot
    }

    /// Returns `true` when zero volatility or zero expiry makes d1 undefined.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.volatility == 0.0 || self.expiry == 0.0
    }
}
