//! Standard normal distribution functions.
//!
//! This module provides:
//! - `standard_normal_density`: Probability density function (PDF)
//! - `standard_normal_cdf`: Cumulative distribution function (CDF)
//! - `double_factorial`: n·(n−2)·(n−4)·…, used by the CDF series
//!
//! The CDF is a truncated MacLaurin expansion around zero rather than an
//! erf/erfc approximation:
//!
//! ```text
//! Φ(x) = 1/2 + φ(x) · Σ_{i=0}^{99} x^(2i+1) / (2i+1)!!
//! ```
//!
//! Individual terms grow large before the double factorial dominates, so the
//! series is clipped at |x| ≥ 8 where Φ saturates to 0 or 1 within ~1e-15.

use std::f64::consts::PI;

/// Number of terms summed by [`standard_normal_cdf`].
pub const CDF_SERIES_TERMS: usize = 100;

/// |x| at or beyond which [`standard_normal_cdf`] returns exactly 0 or 1.
pub const CDF_SATURATION_BOUND: f64 = 8.0;

/// Double factorial n!! = n·(n−2)·(n−4)·…
///
/// Iterates downwards in steps of 2 while the factor is greater than 1, so
/// odd n end at 1, even n end at 2, and any n ≤ 1 returns 1.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::double_factorial;
///
/// assert_eq!(double_factorial(1.0), 1.0);
/// assert_eq!(double_factorial(7.0), 105.0); // 7·5·3·1
/// assert_eq!(double_factorial(8.0), 384.0); // 8·6·4·2
/// assert_eq!(double_factorial(0.0), 1.0);
/// ```
#[inline]
pub fn double_factorial(n: f64) -> f64 {
    let mut result = 1.0;
    let mut factor = n;
    while factor > 1.0 {
        result *= factor;
        factor -= 2.0;
    }
    result
}

/// Standard normal probability density function.
///
/// φ(x) = exp(−x²/2) / √(2π)
///
/// Underflows smoothly to 0 for large |x|; never overflows.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::standard_normal_density;
///
/// let pdf_0 = standard_normal_density(0.0);
/// assert!((pdf_0 - 0.3989422804014327).abs() < 1e-15);
/// assert_eq!(standard_normal_density(1.5), standard_normal_density(-1.5));
/// ```
#[inline]
pub fn standard_normal_density(x: f64) -> f64 {
    (-(x * x) / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution function P(Z ≤ x).
///
/// Sums the first [`CDF_SERIES_TERMS`] terms of `x^(2i+1) / (2i+1)!!`,
/// multiplies by `exp(−x²/2) / √(2π)` and adds 0.5. Inputs at or beyond
/// ±[`CDF_SATURATION_BOUND`] (including ±∞) saturate to exactly 1 or 0.
/// Rounding in the series tail can overshoot by a few ulps just inside the
/// bound, so the result is clamped to [0, 1]. NaN propagates.
///
/// # Examples
/// ```
/// use greeks_core::math::distributions::standard_normal_cdf;
///
/// assert_eq!(standard_normal_cdf(0.0), 0.5);
/// assert_eq!(standard_normal_cdf(8.0), 1.0);
/// assert_eq!(standard_normal_cdf(-8.0), 0.0);
/// assert!((standard_normal_cdf(1.0) - 0.8413447460685429).abs() < 1e-15);
/// ```
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x >= CDF_SATURATION_BOUND {
        return 1.0;
    }
    if x <= -CDF_SATURATION_BOUND {
        return 0.0;
    }

    let mut result = 0.0;
    for i in 0..CDF_SERIES_TERMS {
        let power = (2 * i + 1) as i32;
        result += x.powi(power) / double_factorial(f64::from(power));
    }
    result *= (-0.5 * x * x).exp();
    result /= (2.0 * PI).sqrt();
    (result + 0.5).clamp(0.0, 1.0)
}
