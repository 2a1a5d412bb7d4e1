//! Black-Scholes Greeks for European call and put options.
//!
//! ## Mathematical Formulas
//!
//! All Greeks share the d1 term, referred to here as omega:
//!
//! ```text
//! ω = (r·T + σ²·T/2 − ln(K/S)) / (σ·√T)
//! ```
//!
//! - **Delta**: Call N(ω), Put N(ω) − 1
//! - **Theta**: −σ·S·φ(ω)/(2√T) ∓ K·r·e^(−rT)·N(±(ω − σ√T)), divided by scale
//! - **Gamma**: φ(ω) / (S·σ·√T)
//! - **Vega**: S·√T·φ(ω) / 100 (per volatility point)
//! - **Rho**: ±K·T·e^(−rT)·N(±(ω − σ√T)), divided by scale
//!
//! ## Degenerate Inputs
//!
//! σ = 0 or T = 0 divides by zero inside ω, giving ±∞ or NaN. Each Greek
//! resolves this explicitly:
//!
//! | Greek | Guard | Degenerate result |
//! |---|---|---|
//! | Delta | ω not finite | Call: 1 if S > K else 0; Put: call − 1, or 0 at the money |
//! | Theta | ω not finite | 0 |
//! | Gamma | ω not finite | 0 |
//! | Vega  | ω not finite | 0 |
//! | Rho   | ω is NaN     | 0 (an infinite ω flows into the saturating CDF) |

use crate::math::distributions::{standard_normal_cdf, standard_normal_density};
use crate::math::float::{is_finite, is_nan};
use crate::types::OptionType;

/// Theta divisor for a per-calendar-day figure.
pub const THETA_SCALE_CALENDAR_DAYS: f64 = 365.0;

/// Theta divisor for a per-trading-day figure.
pub const THETA_SCALE_TRADING_DAYS: f64 = 252.0;

/// Rho divisor for sensitivity per 1% (100bp) rate move.
pub const RHO_SCALE_PERCENT: f64 = 100.0;

/// Rho divisor for sensitivity per 1bp rate move.
pub const RHO_SCALE_BASIS_POINT: f64 = 10_000.0;

/// Vega is reported per 1 percentage point change in volatility.
const VEGA_UNIT: f64 = 100.0;

/// Computes the Black-Scholes d1 term.
///
/// Not clamped: returns ±∞ or NaN when σ·√T is zero, and callers branch on
/// [`is_finite`] / [`is_nan`].
#[inline]
pub(crate) fn omega(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    (rate * expiry + volatility.powi(2) * expiry / 2.0 - (strike / spot).ln())
        / (volatility * expiry.sqrt())
}

/// Computes Delta (∂V/∂S).
///
/// # Arguments
/// * `spot` - Current underlying price (S)
/// * `strike` - Strike price (K)
/// * `expiry` - Time to expiry in years (T)
/// * `volatility` - Annualised volatility (σ)
/// * `rate` - Annualised risk-free rate (r)
/// * `option_type` - Call or put
///
/// # Returns
/// A value in [0, 1] for calls and [−1, 0] for puts. With zero volatility
/// or zero expiry the call delta is the limiting value 1 (S > K) or 0, and
/// the at-the-money put delta is 0 rather than −1.
///
/// # Examples
/// ```
/// use greeks_core::analytical::delta;
/// use greeks_core::types::OptionType;
///
/// let call = delta(100.0, 100.0, 0.086, 0.1, 0.0015, OptionType::Call);
/// let put = delta(100.0, 100.0, 0.086, 0.1, 0.0015, OptionType::Put);
/// assert!((call - put - 1.0).abs() < 1e-15);
///
/// // Expired in the money
/// assert_eq!(delta(110.0, 100.0, 0.0, 0.2, 0.01, OptionType::Call), 1.0);
/// ```
pub fn delta(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    option_type: OptionType,
) -> f64 {
    match option_type {
        OptionType::Call => call_delta(spot, strike, expiry, volatility, rate),
        OptionType::Put => put_delta(spot, strike, expiry, volatility, rate),
    }
}

fn call_delta(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);

    if !is_finite(omega) {
        return if spot > strike { 1.0 } else { 0.0 };
    }
    standard_normal_cdf(omega)
}

fn put_delta(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let delta = call_delta(spot, strike, expiry, volatility, rate) - 1.0;

    // Degenerate at-the-money: call delta collapsed to 0
    if delta == -1.0 && strike == spot {
        return 0.0;
    }
    delta
}

/// Computes Theta (∂V/∂t), divided by `scale`.
///
/// `scale` is a plain divisor converting the annualised figure to per-period
/// units, conventionally [`THETA_SCALE_CALENDAR_DAYS`] or
/// [`THETA_SCALE_TRADING_DAYS`]. No validation is performed on it.
///
/// # Returns
/// The scaled theta, usually negative. Zero when volatility or expiry is
/// zero.
///
/// # Examples
/// ```
/// use greeks_core::analytical::{theta, THETA_SCALE_CALENDAR_DAYS};
/// use greeks_core::types::OptionType;
///
/// let per_day = theta(
///     206.35, 206.0, 0.086, 0.1, 0.0015,
///     OptionType::Call,
///     THETA_SCALE_CALENDAR_DAYS,
/// );
/// assert!((per_day - -0.03877971361524501).abs() < 1e-15);
///
/// assert_eq!(theta(100.0, 100.0, 0.0, 0.2, 0.01, OptionType::Put, 365.0), 0.0);
/// ```
pub fn theta(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    option_type: OptionType,
    scale: f64,
) -> f64 {
    let annual = match option_type {
        OptionType::Call => call_theta(spot, strike, expiry, volatility, rate),
        OptionType::Put => put_theta(spot, strike, expiry, volatility, rate),
    };
    annual / scale
}

fn call_theta(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);
    if !is_finite(omega) {
        return 0.0;
    }

    let sqrt_t = expiry.sqrt();
    let decay = -volatility * spot * standard_normal_density(omega) / (2.0 * sqrt_t);
    let carry = strike * rate * (-rate * expiry).exp();

    decay - carry * standard_normal_cdf(omega - volatility * sqrt_t)
}

fn put_theta(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);
    if !is_finite(omega) {
        return 0.0;
    }

    let sqrt_t = expiry.sqrt();
    let decay = -volatility * spot * standard_normal_density(omega) / (2.0 * sqrt_t);
    let carry = strike * rate * (-rate * expiry).exp();

    decay + carry * standard_normal_cdf(volatility * sqrt_t - omega)
}

/// Computes Gamma (∂²V/∂S²).
///
/// Identical for calls and puts.
///
/// # Returns
/// φ(ω) / (S·σ·√T), always non-negative; 0 when volatility or expiry is zero.
///
/// # Examples
/// ```
/// use greeks_core::analytical::gamma;
///
/// let g = gamma(206.35, 206.0, 0.086, 0.1, 0.0015);
/// assert!((g - 0.06573105549942765).abs() < 1e-14);
/// assert_eq!(gamma(100.0, 100.0, 1.0, 0.0, 0.01), 0.0);
/// ```
pub fn gamma(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);

    if is_finite(omega) {
        return standard_normal_density(omega) / (spot * volatility * expiry.sqrt());
    }
    0.0
}

/// Computes Vega (∂V/∂σ) per 1 percentage point of volatility.
///
/// Identical for calls and puts.
///
/// # Returns
/// S·√T·φ(ω) / 100, always non-negative; 0 when volatility or expiry is zero.
///
/// # Examples
/// ```
/// use greeks_core::analytical::vega;
///
/// let v = vega(206.35, 206.0, 0.086, 0.1, 0.0015);
/// assert!((v - 0.24070106056306834).abs() < 1e-14);
/// ```
pub fn vega(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);

    if is_finite(omega) {
        return spot * expiry.sqrt() * standard_normal_density(omega) / VEGA_UNIT;
    }
    0.0
}

/// Computes Rho (∂V/∂r), divided by `scale`.
///
/// `scale` is a plain divisor: [`RHO_SCALE_PERCENT`] for sensitivity per 1%
/// rate move, [`RHO_SCALE_BASIS_POINT`] per 1bp.
///
/// Only a NaN omega short-circuits to 0. An infinite omega (zero volatility
/// with positive expiry and S ≠ K) is passed through to the CDF, which
/// saturates to 0 or 1.
///
/// # Examples
/// ```
/// use greeks_core::analytical::{rho, RHO_SCALE_PERCENT};
/// use greeks_core::types::OptionType;
///
/// let call = rho(206.35, 206.0, 0.086, 0.1, 0.0015, OptionType::Call, RHO_SCALE_PERCENT);
/// assert!((call - 0.09193271711465777).abs() < 1e-15);
///
/// // Zero volatility, in the money: the CDF saturates at 1
/// let saturated = rho(110.0, 100.0, 1.0, 0.0, 0.0, OptionType::Call, 1.0);
/// assert_eq!(saturated, 100.0);
/// ```
pub fn rho(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    option_type: OptionType,
    scale: f64,
) -> f64 {
    let annual = match option_type {
        OptionType::Call => call_rho(spot, strike, expiry, volatility, rate),
        OptionType::Put => put_rho(spot, strike, expiry, volatility, rate),
    };
    annual / scale
}

fn call_rho(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);
    if is_nan(omega) {
        return 0.0;
    }

    strike
        * expiry
        * (-rate * expiry).exp()
        * standard_normal_cdf(omega - volatility * expiry.sqrt())
}

fn put_rho(spot: f64, strike: f64, expiry: f64, volatility: f64, rate: f64) -> f64 {
    let omega = omega(spot, strike, expiry, volatility, rate);
    if is_nan(omega) {
        return 0.0;
    }

    -strike
        * expiry
        * (-rate * expiry).exp()
        * standard_normal_cdf(volatility * expiry.sqrt() - omega)
}
