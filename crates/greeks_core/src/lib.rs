//! # greeks_core: Black-Scholes Greeks for European Options
//!
//! ## Layer Role
//!
//! greeks_core is a pure computational library consumed by risk and pricing
//! systems. It provides:
//! - Standard normal density and series-expansion CDF (`math::distributions`)
//! - Finiteness helpers used for degeneracy handling (`math::float`)
//! - Delta, Theta, Gamma, Vega and Rho for calls and puts (`analytical`)
//! - Opt-in domain validation (`analytical::strict`)
//! - Order-preserving batch evaluation (`analytical::batch`)
//! - Shared value types and errors (`types`)
//!
//! Every public function is a pure mapping from scalar inputs to a scalar
//! output. There is no shared mutable state, so all functions may be called
//! from any number of threads without synchronisation.
//!
//! ## Degenerate Inputs
//!
//! The Greeks functions never fail. Zero volatility or zero time to expiry
//! drive the intermediate d1 term to ±∞ or NaN; each Greek resolves that to
//! a documented sentinel (0, 1 or a limiting value) instead of propagating
//! non-finite values. Callers wanting rejection of out-of-domain inputs use
//! [`analytical::strict`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use greeks_core::analytical::{delta, gamma, theta, THETA_SCALE_CALENDAR_DAYS};
//! use greeks_core::math::distributions::standard_normal_cdf;
//! use greeks_core::types::OptionType;
//!
//! let call_delta = delta(100.0, 100.0, 0.086, 0.1, 0.0015, OptionType::Call);
//! assert!((call_delta - 0.5076040742445566).abs() < 1e-12);
//!
//! let daily_theta = theta(
//!     206.35, 206.0, 0.086, 0.1, 0.0015,
//!     OptionType::Call,
//!     THETA_SCALE_CALENDAR_DAYS,
//! );
//! assert!(daily_theta < 0.0);
//!
//! assert!(gamma(206.35, 206.0, 0.086, 0.1, 0.0015) > 0.0);
//! assert_eq!(standard_normal_cdf(0.0), 0.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Evaluate batches with rayon
//! - `serde`: Enable serialisation for `OptionType`, `MarketInputs`, `Greeks`
//!   and `GreeksRequest`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod math;
pub mod types;

pub use analytical::{delta, gamma, rho, theta, vega, Greeks, GreeksScales};
pub use math::distributions::{standard_normal_cdf, standard_normal_density};
pub use types::{GreeksError, MarketInputs, OptionType};
