//! Result bundle holding all five Greeks for one option.

use std::iter::Sum;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::black_scholes::{
    delta, gamma, rho, theta, vega, RHO_SCALE_PERCENT, THETA_SCALE_CALENDAR_DAYS,
};
use crate::types::{MarketInputs, OptionType};

/// Divisors applied to Theta and Rho.
///
/// Defaults to per-calendar-day Theta and per-1% Rho.
///
/// # Examples
/// ```
/// use greeks_core::analytical::GreeksScales;
///
/// let scales = GreeksScales::default();
/// assert_eq!(scales.theta, 365.0);
/// assert_eq!(scales.rho, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreeksScales {
    /// Theta divisor (365 calendar days, 252 trading days, ...)
    pub theta: f64,
    /// Rho divisor (100 per 1%, 10000 per 1bp)
    pub rho: f64,
}

impl Default for GreeksScales {
    fn default() -> Self {
        Self {
            theta: THETA_SCALE_CALENDAR_DAYS,
            rho: RHO_SCALE_PERCENT,
        }
    }
}

impl GreeksScales {
    /// Creates a new pair of scales.
    #[inline]
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }
}

/// All five Black-Scholes Greeks for a single option.
///
/// Theta and Rho are already divided by the scales passed to
/// [`Greeks::compute`]; Vega is per volatility point.
///
/// # Examples
/// ```
/// use greeks_core::analytical::{Greeks, GreeksScales};
/// use greeks_core::types::{MarketInputs, OptionType};
///
/// let inputs = MarketInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015);
/// let greeks = Greeks::compute(&inputs, OptionType::Call, GreeksScales::default());
///
/// assert!(greeks.delta > 0.5);
/// assert!(greeks.theta < 0.0);
///
/// // Aggregate a 10-lot
/// let position = greeks.scaled(10.0);
/// assert!((position.gamma - 10.0 * greeks.gamma).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per volatility point
    pub vega: f64,
    /// ∂V/∂t divided by the theta scale
    pub theta: f64,
    /// ∂V/∂r divided by the rho scale
    pub rho: f64,
}

impl Greeks {
    /// Evaluates every Greek for `inputs`.
    ///
    /// Each Greek recomputes d1 independently, exactly as the standalone
    /// functions do.
    pub fn compute(inputs: &MarketInputs, option_type: OptionType, scales: GreeksScales) -> Self {
        let MarketInputs {
            spot,
            strike,
            expiry,
            volatility,
            rate,
        } = *inputs;

        Self {
            delta: delta(spot, strike, expiry, volatility, rate, option_type),
            gamma: gamma(spot, strike, expiry, volatility, rate),
            vega: vega(spot, strike, expiry, volatility, rate),
            theta: theta(spot, strike, expiry, volatility, rate, option_type, scales.theta),
            rho: rho(spot, strike, expiry, volatility, rate, option_type, scales.rho),
        }
    }

    /// Multiplies every Greek by `quantity`.
    #[inline]
    pub fn scaled(self, quantity: f64) -> Self {
        Self {
            delta: self.delta * quantity,
            gamma: self.gamma * quantity,
            vega: self.vega * quantity,
            theta: self.theta * quantity,
            rho: self.rho * quantity,
        }
    }
}

impl Add for Greeks {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            vega: self.vega + other.vega,
            theta: self.theta + other.theta,
            rho: self.rho + other.rho,
        }
    }
}

impl Sum for Greeks {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
