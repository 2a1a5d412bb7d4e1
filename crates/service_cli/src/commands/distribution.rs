//! Distribution command implementations
//!
//! Exposes the standard normal CDF and density used by the Greeks.

use greeks_core::math::distributions::{
    standard_normal_cdf, standard_normal_density, CDF_SATURATION_BOUND,
};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::{output, CliError, Result};

/// Distribution function to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Cdf,
    Density,
}

impl Distribution {
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Cdf => "cdf",
            Distribution::Density => "density",
        }
    }
}

/// Run a distribution command
pub fn run(distribution: Distribution, x: f64, config: &CliConfig) -> Result<()> {
    info!("Evaluating standard normal {} at x = {}", distribution.name(), x);

    let value = evaluate(distribution, x, config)?;
    println!("{}", output::render_value(distribution.name(), value, config.format)?);

    Ok(())
}

/// Evaluate the distribution function; strict mode rejects NaN input.
pub fn evaluate(distribution: Distribution, x: f64, config: &CliConfig) -> Result<f64> {
    if config.strict && x.is_nan() {
        return Err(CliError::InvalidArgument(
            "x must be a number, got NaN".to_string(),
        ));
    }

    let value = match distribution {
        Distribution::Cdf => {
            if x.abs() >= CDF_SATURATION_BOUND {
                debug!("|x| >= {}: cdf saturated", CDF_SATURATION_BOUND);
            }
            standard_normal_cdf(x)
        }
        Distribution::Density => standard_normal_density(x),
    };

    Ok(value)
}
