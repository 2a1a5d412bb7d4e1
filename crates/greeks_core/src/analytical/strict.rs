//! Opt-in domain validation.
//!
//! The lenient functions in [`super::black_scholes`] accept any input and
//! resolve degeneracy to sentinel values. The wrappers here reject inputs
//! outside the model's domain first and otherwise return exactly what the
//! lenient functions return.
//!
//! ## Domain
//! - spot > 0, strike > 0
//! - expiry ≥ 0, volatility ≥ 0
//! - rate finite (negative rates allowed)
//! - Theta/Rho scale > 0
//! - every value finite
//!
//! Zero volatility and zero expiry are inside the domain; they still yield
//! the documented degenerate results.

use super::black_scholes;
use super::result::{Greeks, GreeksScales};
use crate::types::{GreeksError, MarketInputs, OptionType};

/// Checks that `inputs` lie inside the model's domain.
///
/// Fields are checked in declaration order; the first violation is returned.
///
/// # Errors
/// - `GreeksError::InvalidSpot` if spot is not positive and finite
/// - `GreeksError::InvalidStrike` if strike is not positive and finite
/// - `GreeksError::InvalidExpiry` if expiry is negative or not finite
/// - `GreeksError::InvalidVolatility` if volatility is negative or not finite
/// - `GreeksError::InvalidRate` if rate is not finite
///
/// # Examples
/// ```
/// use greeks_core::analytical::strict::validate;
/// use greeks_core::types::{GreeksError, MarketInputs};
///
/// assert!(validate(&MarketInputs::new(100.0, 100.0, 0.0, 0.0, -0.01)).is_ok());
/// assert_eq!(
///     validate(&MarketInputs::new(-1.0, 100.0, 1.0, 0.2, 0.01)),
///     Err(GreeksError::InvalidSpot { spot: -1.0 })
/// );
/// ```
pub fn validate(inputs: &MarketInputs) -> Result<(), GreeksError> {
    if !(inputs.spot.is_finite() && inputs.spot > 0.0) {
        return Err(GreeksError::InvalidSpot { spot: inputs.spot });
    }

    if !(inputs.strike.is_finite() && inputs.strike > 0.0) {
        return Err(GreeksError::InvalidStrike {
            strike: inputs.strike,
        });
    }

    if !(inputs.expiry.is_finite() && inputs.expiry >= 0.0) {
        return Err(GreeksError::InvalidExpiry {
            expiry: inputs.expiry,
        });
    }

    if !(inputs.volatility.is_finite() && inputs.volatility >= 0.0) {
        return Err(GreeksError::InvalidVolatility {
            volatility: inputs.volatility,
        });
    }

    if !inputs.rate.is_finite() {
        return Err(GreeksError::InvalidRate { rate: inputs.rate });
    }

    Ok(())
}

/// Checks that a Theta/Rho divisor is positive and finite.
///
/// # Errors
/// `GreeksError::InvalidScale` otherwise.
pub fn validate_scale(scale: f64) -> Result<(), GreeksError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(GreeksError::InvalidScale { scale })
    }
}

/// Validated [`black_scholes::delta`].
pub fn delta(inputs: &MarketInputs, option_type: OptionType) -> Result<f64, GreeksError> {
    validate(inputs)?;
    Ok(black_scholes::delta(
        inputs.spot,
        inputs.strike,
        inputs.expiry,
        inputs.volatility,
        inputs.rate,
        option_type,
    ))
}

/// Validated [`black_scholes::theta`].
pub fn theta(
    inputs: &MarketInputs,
    option_type: OptionType,
    scale: f64,
) -> Result<f64, GreeksError> {
    validate(inputs)?;
    validate_scale(scale)?;
    Ok(black_scholes::theta(
        inputs.spot,
        inputs.strike,
        inputs.expiry,
        inputs.volatility,
        inputs.rate,
        option_type,
        scale,
    ))
}

/// Validated [`black_scholes::gamma`].
pub fn gamma(inputs: &MarketInputs) -> Result<f64, GreeksError> {
    validate(inputs)?;
    Ok(black_scholes::gamma(
        inputs.spot,
        inputs.strike,
        inputs.expiry,
        inputs.volatility,
        inputs.rate,
    ))
}

/// Validated [`black_scholes::vega`].
pub fn vega(inputs: &MarketInputs) -> Result<f64, GreeksError> {
    validate(inputs)?;
    Ok(black_scholes::vega(
        inputs.spot,
        inputs.strike,
        inputs.expiry,
        inputs.volatility,
        inputs.rate,
    ))
}

/// Validated [`black_scholes::rho`].
pub fn rho(inputs: &MarketInputs, option_type: OptionType, scale: f64) -> Result<f64, GreeksError> {
    validate(inputs)?;
    validate_scale(scale)?;
    Ok(black_scholes::rho(
        inputs.spot,
        inputs.strike,
        inputs.expiry,
        inputs.volatility,
        inputs.rate,
        option_type,
        scale,
    ))
}

/// Validated [`Greeks::compute`].
///
/// # Examples
/// ```
/// use greeks_core::analytical::{strict, GreeksScales};
/// use greeks_core::types::{GreeksError, MarketInputs, OptionType};
///
/// let inputs = MarketInputs::new(100.0, 100.0, -0.5, 0.2, 0.01);
/// let result = strict::greeks(&inputs, OptionType::Call, GreeksScales::default());
/// assert_eq!(result, Err(GreeksError::InvalidExpiry { expiry: -0.5 }));
/// ```
pub fn greeks(
    inputs: &MarketInputs,
    option_type: OptionType,
    scales: GreeksScales,
) -> Result<Greeks, GreeksError> {
    validate(inputs)?;
    validate_scale(scales.theta)?;
    validate_scale(scales.rho)?;
    Ok(Greeks::compute(inputs, option_type, scales))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MarketInputs {
        MarketInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015)
    }

    // ==========================================================
    // validate tests
    // ==========================================================

    #[test]
    fn test_validate_accepts_valid_inputs() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn test_validate_accepts_degenerate_but_valid_inputs() {
        assert!(validate(&MarketInputs::new(100.0, 100.0, 0.0, 0.2, 0.01)).is_ok());
        assert!(validate(&MarketInputs::new(100.0, 100.0, 1.0, 0.0, 0.01)).is_ok());
        assert!(validate(&MarketInputs::new(100.0, 100.0, 1.0, 0.2, -0.02)).is_ok());
    }

    #[test]
    fn test_validate_rejects_spot() {
        for spot in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let inputs = MarketInputs { spot, ..valid() };
            match validate(&inputs) {
                Err(GreeksError::InvalidSpot { .. }) => {}
                other => panic!("Expected InvalidSpot for {}, got {:?}", spot, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_strike() {
        for strike in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let inputs = MarketInputs { strike, ..valid() };
            match validate(&inputs) {
                Err(GreeksError::InvalidStrike { .. }) => {}
                other => panic!("Expected InvalidStrike for {}, got {:?}", strike, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_expiry() {
        for expiry in [-0.01, f64::NAN, f64::INFINITY] {
            let inputs = MarketInputs { expiry, ..valid() };
            match validate(&inputs) {
                Err(GreeksError::InvalidExpiry { .. }) => {}
                other => panic!("Expected InvalidExpiry for {}, got {:?}", expiry, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_volatility() {
        for volatility in [-0.2, f64::NAN, f64::INFINITY] {
            let inputs = MarketInputs {
                volatility,
                ..valid()
            };
            match validate(&inputs) {
                Err(GreeksError::InvalidVolatility { .. }) => {}
                other => panic!(
                    "Expected InvalidVolatility for {}, got {:?}",
                    volatility, other
                ),
            }
        }
    }

    #[test]
    fn test_validate_rejects_rate() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let inputs = MarketInputs { rate, ..valid() };
            match validate(&inputs) {
                Err(GreeksError::InvalidRate { .. }) => {}
                other => panic!("Expected InvalidRate for {}, got {:?}", rate, other),
            }
        }
    }

    #[test]
    fn test_validate_reports_first_violation() {
        let inputs = MarketInputs::new(-1.0, -1.0, -1.0, -1.0, f64::NAN);
        assert_eq!(
            validate(&inputs),
            Err(GreeksError::InvalidSpot { spot: -1.0 })
        );
    }

    #[test]
    fn test_validate_scale() {
        assert!(validate_scale(365.0).is_ok());
        assert!(validate_scale(1e-9).is_ok());
        for scale in [0.0, -365.0, f64::NAN, f64::INFINITY] {
            assert!(validate_scale(scale).is_err(), "scale {} accepted", scale);
        }
    }

    // ==========================================================
    // Checked wrapper tests
    // ==========================================================

    #[test]
    fn test_wrappers_match_lenient_functions() {
        let i = valid();
        for option_type in [OptionType::Call, OptionType::Put] {
            assert_eq!(
                delta(&i, option_type),
                Ok(black_scholes::delta(
                    i.spot,
                    i.strike,
                    i.expiry,
                    i.volatility,
                    i.rate,
                    option_type
                ))
            );
            assert_eq!(
                theta(&i, option_type, 252.0),
                Ok(black_scholes::theta(
                    i.spot, i.strike, i.expiry, i.volatility, i.rate, option_type, 252.0
                ))
            );
            assert_eq!(
                rho(&i, option_type, 10_000.0),
                Ok(black_scholes::rho(
                    i.spot, i.strike, i.expiry, i.volatility, i.rate, option_type, 10_000.0
                ))
            );
        }
        assert_eq!(
            gamma(&i),
            Ok(black_scholes::gamma(i.spot, i.strike, i.expiry, i.volatility, i.rate))
        );
        assert_eq!(
            vega(&i),
            Ok(black_scholes::vega(i.spot, i.strike, i.expiry, i.volatility, i.rate))
        );
    }

    #[test]
    fn test_wrappers_keep_degenerate_sentinels() {
        let expired_atm = MarketInputs::new(100.0, 100.0, 0.0, 0.2, 0.01);
        assert_eq!(delta(&expired_atm, OptionType::Put), Ok(0.0));
        assert_eq!(theta(&expired_atm, OptionType::Call, 365.0), Ok(0.0));
        assert_eq!(gamma(&expired_atm), Ok(0.0));
    }

    #[test]
    fn test_wrappers_reject_invalid_scale() {
        assert_eq!(
            theta(&valid(), OptionType::Call, 0.0),
            Err(GreeksError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(
            rho(&valid(), OptionType::Put, -100.0),
            Err(GreeksError::InvalidScale { scale: -100.0 })
        );
        assert!(greeks(&valid(), OptionType::Call, GreeksScales::new(365.0, 0.0)).is_err());
    }

    #[test]
    fn test_greeks_matches_compute() {
        let scales = GreeksScales::default();
        assert_eq!(
            greeks(&valid(), OptionType::Call, scales),
            Ok(Greeks::compute(&valid(), OptionType::Call, scales))
        );
    }

    #[test]
    fn test_greeks_rejects_negative_strike() {
        let inputs = MarketInputs {
            strike: -206.0,
            ..valid()
        };
        assert_eq!(
            greeks(&inputs, OptionType::Put, GreeksScales::default()),
            Err(GreeksError::InvalidStrike { strike: -206.0 })
        );
    }
}
