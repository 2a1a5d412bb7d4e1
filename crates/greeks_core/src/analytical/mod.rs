//! Closed-form Black-Scholes Greeks for European options.
//!
//! This module provides:
//! - Delta, Theta, Gamma, Vega and Rho as free functions (`black_scholes`)
//! - A bundle of all five Greeks and aggregation helpers (`result`)
//! - Validating wrappers that reject out-of-domain inputs (`strict`)
//! - Order-preserving batch evaluation (`batch`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: No state survives a call; d1 is recomputed per Greek
//! - **Never fails**: Degenerate inputs resolve to documented sentinel values
//! - **Validation is opt-in**: `strict` layers domain checks on top without
//!   changing any result

pub mod batch;
pub mod black_scholes;
pub mod result;
pub mod strict;

pub use black_scholes::{
    delta, gamma, rho, theta, vega, RHO_SCALE_BASIS_POINT, RHO_SCALE_PERCENT,
    THETA_SCALE_CALENDAR_DAYS, THETA_SCALE_TRADING_DAYS,
};
pub use result::{Greeks, GreeksScales};
