//! Greek command implementations
//!
//! Evaluates one Greek, or all five, for a single option. Strict mode routes
//! through domain validation; otherwise degenerate inputs fall back to the
//! lenient boundary values.

use greeks_core::analytical::{self, strict, Greeks, GreeksScales};
use greeks_core::types::{MarketInputs, OptionType};
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::{output, Result};

/// Which Greek a single-value command reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreekKind {
    Delta,
    Theta,
    Gamma,
    Vega,
    Rho,
}

impl GreekKind {
    pub fn name(self) -> &'static str {
        match self {
            GreekKind::Delta => "delta",
            GreekKind::Theta => "theta",
            GreekKind::Gamma => "gamma",
            GreekKind::Vega => "vega",
            GreekKind::Rho => "rho",
        }
    }
}

/// Run a single-Greek command
pub fn run(
    kind: GreekKind,
    inputs: &MarketInputs,
    option_type: OptionType,
    scale: Option<f64>,
    config: &CliConfig,
) -> Result<()> {
    info!("Computing {} for {} option", kind.name(), option_type);
    log_inputs(inputs);

    let value = evaluate(kind, inputs, option_type, scale, config)?;
    println!("{}", output::render_value(kind.name(), value, config.format)?);

    info!("{} complete", kind.name());
    Ok(())
}

/// Evaluate a single Greek, falling back to the configured scale for
/// Theta and Rho.
pub fn evaluate(
    kind: GreekKind,
    inputs: &MarketInputs,
    option_type: OptionType,
    scale: Option<f64>,
    config: &CliConfig,
) -> Result<f64> {
    let theta_scale = scale.unwrap_or(config.theta_scale);
    let rho_scale = scale.unwrap_or(config.rho_scale);

    if config.strict {
        let value = match kind {
            GreekKind::Delta => strict::delta(inputs, option_type),
            GreekKind::Theta => strict::theta(inputs, option_type, theta_scale),
            GreekKind::Gamma => strict::gamma(inputs),
            GreekKind::Vega => strict::vega(inputs),
            GreekKind::Rho => strict::rho(inputs, option_type, rho_scale),
        }
        .inspect_err(|e| warn!("Strict validation failed: {}", e))?;
        return Ok(value);
    }

    if inputs.is_degenerate() {
        warn!("Zero volatility or expiry: reporting boundary value");
    }

    let MarketInputs {
        spot,
        strike,
        expiry,
        volatility,
        rate,
    } = *inputs;

    let value = match kind {
        GreekKind::Delta => analytical::delta(spot, strike, expiry, volatility, rate, option_type),
        GreekKind::Theta => {
            analytical::theta(spot, strike, expiry, volatility, rate, option_type, theta_scale)
        }
        GreekKind::Gamma => analytical::gamma(spot, strike, expiry, volatility, rate),
        GreekKind::Vega => analytical::vega(spot, strike, expiry, volatility, rate),
        GreekKind::Rho => {
            analytical::rho(spot, strike, expiry, volatility, rate, option_type, rho_scale)
        }
    };

    debug!("{} = {}", kind.name(), value);
    Ok(value)
}

/// Run the all-Greeks command
pub fn run_all(
    inputs: &MarketInputs,
    option_type: OptionType,
    theta_scale: Option<f64>,
    rho_scale: Option<f64>,
    config: &CliConfig,
) -> Result<()> {
    info!("Computing all Greeks for {} option", option_type);
    log_inputs(inputs);

    let greeks = evaluate_all(inputs, option_type, theta_scale, rho_scale, config)?;
    println!("{}", output::render_greeks(&greeks, config.format)?);

    info!("Greeks complete");
    Ok(())
}

/// Evaluate every Greek for one option
pub fn evaluate_all(
    inputs: &MarketInputs,
    option_type: OptionType,
    theta_scale: Option<f64>,
    rho_scale: Option<f64>,
    config: &CliConfig,
) -> Result<Greeks> {
    let defaults = config.scales();
    let scales = GreeksScales::new(
        theta_scale.unwrap_or(defaults.theta),
        rho_scale.unwrap_or(defaults.rho),
    );

    if config.strict {
        let greeks = strict::greeks(inputs, option_type, scales)
            .inspect_err(|e| warn!("Strict validation failed: {}", e))?;
        return Ok(greeks);
    }

    if inputs.is_degenerate() {
        warn!("Zero volatility or expiry: reporting boundary values");
    }

    Ok(Greeks::compute(inputs, option_type, scales))
}

fn log_inputs(inputs: &MarketInputs) {
    debug!("  Spot: {}", inputs.spot);
    debug!("  Strike: {}", inputs.strike);
    debug!("  Expiry: {}", inputs.expiry);
    debug!("  Volatility: {}", inputs.volatility);
    debug!("  Rate: {}", inputs.rate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;
    use greeks_core::types::GreeksError;

    fn reference_inputs() -> MarketInputs {
        MarketInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015)
    }

    fn strict_config() -> CliConfig {
        CliConfig {
            strict: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_greek_kind_names() {
        assert_eq!(GreekKind::Delta.name(), "delta");
        assert_eq!(GreekKind::Rho.name(), "rho");
    }

    #[test]
    fn test_evaluate_reference_values() {
        let config = CliConfig::default();
        let inputs = reference_inputs();

        let call_delta =
            evaluate(GreekKind::Delta, &inputs, OptionType::Call, None, &config).unwrap();
        assert_relative_eq!(call_delta, 0.5306679384531505, max_relative = 1e-12);

        let call_theta =
            evaluate(GreekKind::Theta, &inputs, OptionType::Call, None, &config).unwrap();
        assert_relative_eq!(call_theta, -0.03877971361524501, max_relative = 1e-12);

        let gamma = evaluate(GreekKind::Gamma, &inputs, OptionType::Put, None, &config).unwrap();
        assert_relative_eq!(gamma, 0.06573105549942765, max_relative = 1e-12);

        let put_rho = evaluate(GreekKind::Rho, &inputs, OptionType::Put, None, &config).unwrap();
        assert_relative_eq!(put_rho, -0.08520443071933861, max_relative = 1e-12);
    }

    #[test]
    fn test_evaluate_delta_at_the_money() {
        let config = CliConfig::default();
        let inputs = MarketInputs::new(100.0, 100.0, 0.086, 0.1, 0.0015);

        let call = evaluate(GreekKind::Delta, &inputs, OptionType::Call, None, &config).unwrap();
        assert_relative_eq!(call, 0.5076040742445566, max_relative = 1e-12);

        let put = evaluate(GreekKind::Delta, &inputs, OptionType::Put, None, &config).unwrap();
        assert_relative_eq!(put, -0.49239592575544344, max_relative = 1e-12);
    }

    #[test]
    fn test_evaluate_explicit_scale_overrides_config() {
        let config = CliConfig::default();
        let inputs = reference_inputs();

        let theta =
            evaluate(GreekKind::Theta, &inputs, OptionType::Call, Some(252.0), &config).unwrap();
        assert_relative_eq!(theta, -0.05616902964112869, max_relative = 1e-12);

        let rho =
            evaluate(GreekKind::Rho, &inputs, OptionType::Call, Some(10_000.0), &config).unwrap();
        assert_relative_eq!(rho, 0.0009193271711465777, max_relative = 1e-12);
    }

    #[test]
    fn test_evaluate_uses_configured_scales() {
        let config = CliConfig {
            theta_scale: 252.0,
            rho_scale: 10_000.0,
            ..Default::default()
        };
        let inputs = reference_inputs();

        let theta = evaluate(GreekKind::Theta, &inputs, OptionType::Put, None, &config).unwrap();
        assert_relative_eq!(theta, -0.054942997333307556, max_relative = 1e-12);

        let rho = evaluate(GreekKind::Rho, &inputs, OptionType::Put, None, &config).unwrap();
        assert_relative_eq!(rho, -0.0008520443071933862, max_relative = 1e-12);
    }

    #[test]
    fn test_lenient_degenerate_returns_boundary_value() {
        let inputs = MarketInputs::new(100.0, 100.0, 0.0, 0.2, 0.01);
        let config = CliConfig::default();

        let value = evaluate(GreekKind::Gamma, &inputs, OptionType::Call, None, &config).unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_strict_rejects_invalid_spot() {
        let inputs = MarketInputs::new(-1.0, 100.0, 1.0, 0.2, 0.01);
        let result = evaluate(
            GreekKind::Delta,
            &inputs,
            OptionType::Call,
            None,
            &strict_config(),
        );
        assert!(matches!(
            result,
            Err(CliError::Greeks(GreeksError::InvalidSpot { .. }))
        ));
    }

    #[test]
    fn test_strict_rejects_invalid_scale() {
        let result = evaluate(
            GreekKind::Theta,
            &reference_inputs(),
            OptionType::Call,
            Some(0.0),
            &strict_config(),
        );
        assert!(matches!(
            result,
            Err(CliError::Greeks(GreeksError::InvalidScale { .. }))
        ));
    }

    #[test]
    fn test_strict_matches_lenient_for_valid_inputs() {
        let inputs = reference_inputs();
        for kind in [
            GreekKind::Delta,
            GreekKind::Theta,
            GreekKind::Gamma,
            GreekKind::Vega,
            GreekKind::Rho,
        ] {
            let lenient =
                evaluate(kind, &inputs, OptionType::Put, None, &CliConfig::default()).unwrap();
            let checked = evaluate(kind, &inputs, OptionType::Put, None, &strict_config()).unwrap();
            assert_eq!(lenient, checked, "{} differs", kind.name());
        }
    }

    #[test]
    fn test_evaluate_all_matches_bundle() {
        let inputs = reference_inputs();
        let greeks =
            evaluate_all(&inputs, OptionType::Call, Some(252.0), None, &CliConfig::default())
                .unwrap();
        let expected = Greeks::compute(&inputs, OptionType::Call, GreeksScales::new(252.0, 100.0));
        assert_eq!(greeks, expected);
    }

    #[test]
    fn test_evaluate_all_strict_rejects_degenerate_expiry() {
        let inputs = MarketInputs::new(100.0, 100.0, -0.5, 0.2, 0.01);
        let result = evaluate_all(&inputs, OptionType::Call, None, None, &strict_config());
        assert!(matches!(
            result,
            Err(CliError::Greeks(GreeksError::InvalidExpiry { .. }))
        ));
    }
}
