//! Error types for domain validation.
//!
//! This module provides:
//! - `GreeksError`: Rejections raised by strict-mode validation and by
//!   option-type parsing
//!
//! The lenient Greeks functions in [`crate::analytical`] never return errors;
//! degenerate numeric inputs resolve to sentinel values instead.

use thiserror::Error;

/// Domain-validation errors.
///
/// # Variants
/// - `InvalidSpot` / `InvalidStrike`: Non-positive or non-finite price
/// - `InvalidExpiry`: Negative or non-finite time to expiry
/// - `InvalidVolatility`: Negative or non-finite volatility
/// - `InvalidRate`: Non-finite interest rate
/// - `InvalidScale`: Non-positive or non-finite Theta/Rho divisor
/// - `InvalidOptionCode`: Integer code other than 1 (call) or 2 (put)
/// - `UnknownOptionType`: Unparseable option type name
///
/// # Examples
/// ```
/// use greeks_core::types::GreeksError;
///
/// let err = GreeksError::InvalidSpot { spot: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GreeksError {
    /// Spot price is not a positive finite number.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Strike price is not a positive finite number.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The rejected strike price
        strike: f64,
    },

    /// Time to expiry is negative or not finite.
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected time to expiry in years
        expiry: f64,
    },

    /// Volatility is negative or not finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Interest rate is not finite.
    #[error("Invalid interest rate: r = {rate}")]
    InvalidRate {
        /// The rejected interest rate
        rate: f64,
    },

    /// Theta/Rho scale is not a positive finite number.
    #[error("Invalid scale: {scale} (must be positive and finite)")]
    InvalidScale {
        /// The rejected scale divisor
        scale: f64,
    },

    /// Option type code is neither 1 (call) nor 2 (put).
    #[error("Invalid option type code: {code} (expected 1 = call or 2 = put)")]
    InvalidOptionCode {
        /// The rejected integer code
        code: i32,
    },

    /// Option type name could not be parsed.
    #[error("Unknown option type: {name} (expected call or put)")]
    UnknownOptionType {
        /// The rejected name
        name: String,
    },
}
