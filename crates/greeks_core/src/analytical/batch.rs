//! Batch evaluation of Greeks over many independent options.
//!
//! Each request is a pure function of its own inputs, so the batch is
//! evaluated with a plain parallel map (rayon, behind the default `parallel`
//! feature) and no coordination between requests. Output order always
//! matches input order.
//!
//! ```
//! use greeks_core::analytical::batch::{self, GreeksRequest};
//! use greeks_core::analytical::GreeksScales;
//! use greeks_core::types::{MarketInputs, OptionType};
//!
//! let inputs = MarketInputs::new(100.0, 100.0, 0.5, 0.2, 0.01);
//! let book = vec![
//!     GreeksRequest::new(inputs, OptionType::Call, 10.0),
//!     GreeksRequest::new(inputs, OptionType::Put, 10.0),
//! ];
//!
//! let per_option = batch::compute(&book, GreeksScales::default());
//! assert_eq!(per_option.len(), 2);
//!
//! // Long straddle: deltas nearly cancel, gammas add
//! let total = batch::aggregate(&book, &per_option);
//! assert!((total.gamma - 20.0 * per_option[0].gamma).abs() < 1e-12);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::result::{Greeks, GreeksScales};
use super::strict;
use crate::types::{GreeksError, MarketInputs, OptionType};

/// A single option in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreeksRequest {
    /// Market inputs for this option
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub inputs: MarketInputs,
    /// Call or put
    pub option_type: OptionType,
    /// Signed position size used by [`aggregate`] (negative for short)
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub quantity: f64,
}

#[cfg(feature = "serde")]
fn default_quantity() -> f64 {
    1.0
}

impl GreeksRequest {
    /// Creates a new request.
    #[inline]
    pub fn new(inputs: MarketInputs, option_type: OptionType, quantity: f64) -> Self {
        Self {
            inputs,
            option_type,
            quantity,
        }
    }

    /// Evaluates the unit (quantity 1) Greeks for this request.
    #[inline]
    pub fn evaluate(&self, scales: GreeksScales) -> Greeks {
        Greeks::compute(&self.inputs, self.option_type, scales)
    }

    /// Strict-mode counterpart of [`GreeksRequest::evaluate`].
    #[inline]
    pub fn try_evaluate(&self, scales: GreeksScales) -> Result<Greeks, GreeksError> {
        strict::greeks(&self.inputs, self.option_type, scales)
    }
}

/// Evaluates unit Greeks for every request, preserving order.
pub fn compute(requests: &[GreeksRequest], scales: GreeksScales) -> Vec<Greeks> {
    #[cfg(feature = "parallel")]
    {
        requests.par_iter().map(|r| r.evaluate(scales)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(|r| r.evaluate(scales)).collect()
    }
}

/// Strict-mode batch evaluation.
///
/// # Errors
/// The first validation error encountered. With the `parallel` feature the
/// reported error is from some invalid request, not necessarily the one with
/// the lowest index.
pub fn try_compute(
    requests: &[GreeksRequest],
    scales: GreeksScales,
) -> Result<Vec<Greeks>, GreeksError> {
    #[cfg(feature = "parallel")]
    {
        requests.par_iter().map(|r| r.try_evaluate(scales)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(|r| r.try_evaluate(scales)).collect()
    }
}

/// Sums `greeks[i] * requests[i].quantity` over the book.
///
/// `greeks` is expected to be the output of [`compute`] for the same
/// `requests`; extra entries on either side are ignored.
pub fn aggregate(requests: &[GreeksRequest], greeks: &[Greeks]) -> Greeks {
    requests
        .iter()
        .zip(greeks)
        .map(|(request, unit)| unit.scaled(request.quantity))
        .sum()
}
