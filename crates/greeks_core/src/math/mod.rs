//! Numerical kernel for the standard normal distribution.
//!
//! - `distributions`: density, series-expansion CDF and double factorial
//! - `float`: NaN and finiteness predicates used by the Greeks engine
//!
//! The kernel has no dependency on the `analytical` layer.

pub mod distributions;
pub mod float;

pub use distributions::{
    double_factorial, standard_normal_cdf, standard_normal_density, CDF_SATURATION_BOUND,
    CDF_SERIES_TERMS,
};
pub use float::{is_finite, is_nan};
