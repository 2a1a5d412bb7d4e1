//! Greeks CLI - Command Line Operations for Black-Scholes Sensitivities
//!
//! This is the operational entry point for the greeks_core library.
//!
//! # Commands
//!
//! - `greeks delta|theta|gamma|vega|rho` - Evaluate a single Greek
//! - `greeks all` - Evaluate all five Greeks for one option
//! - `greeks cdf <x>` / `greeks density <x>` - Standard normal distribution
//! - `greeks batch --input <file>` - Evaluate and aggregate a JSON book
//!
//! # Configuration
//!
//! Settings are read from `greeks.toml` (or `--config`), then `GREEKS_*`
//! environment variables, then command-line flags. `RUST_LOG` overrides the
//! configured log level unless `--verbose` is given.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use greeks_core::types::{MarketInputs, OptionType};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::distribution::Distribution;
use commands::greek::GreekKind;
use config::{CliArgs, CliConfig, ConfigSource, OutputFormat, DEFAULT_CONFIG_FILE};

/// Black-Scholes Greeks CLI
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: greeks.toml if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Reject out-of-domain inputs instead of returning boundary values
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Market inputs shared by every Greek command
#[derive(Args)]
struct MarketArgs {
    /// Spot price of the underlying
    #[arg(long, allow_negative_numbers = true)]
    spot: f64,

    /// Strike price
    #[arg(long, allow_negative_numbers = true)]
    strike: f64,

    /// Time to expiry in years
    #[arg(long, allow_negative_numbers = true)]
    expiry: f64,

    /// Annualised volatility (0.2 = 20%)
    #[arg(long, allow_negative_numbers = true)]
    volatility: f64,

    /// Annualised risk-free rate (0.01 = 1%)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate: f64,
}

impl MarketArgs {
    fn inputs(&self) -> MarketInputs {
        MarketInputs::new(self.spot, self.strike, self.expiry, self.volatility, self.rate)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sensitivity to the spot price
    Delta {
        #[command(flatten)]
        market: MarketArgs,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,
    },

    /// Time decay, divided by the theta scale
    Theta {
        #[command(flatten)]
        market: MarketArgs,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,

        /// Divisor (365 calendar days, 252 trading days) [default: from config]
        #[arg(long)]
        scale: Option<f64>,
    },

    /// Sensitivity of delta to the spot price
    Gamma {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Sensitivity to volatility, per volatility point
    Vega {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Sensitivity to the interest rate, divided by the rho scale
    Rho {
        #[command(flatten)]
        market: MarketArgs,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,

        /// Divisor (100 per 1%, 10000 per 1bp) [default: from config]
        #[arg(long)]
        scale: Option<f64>,
    },

    /// All five Greeks for one option
    All {
        #[command(flatten)]
        market: MarketArgs,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,

        /// Theta divisor [default: from config]
        #[arg(long)]
        theta_scale: Option<f64>,

        /// Rho divisor [default: from config]
        #[arg(long)]
        rho_scale: Option<f64>,
    },

    /// Standard normal cumulative distribution P(Z <= x)
    Cdf {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },

    /// Standard normal probability density
    Density {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },

    /// Evaluate and aggregate a JSON book of options
    Batch {
        /// Path to a JSON array of options
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(config.log_level.as_filter_str())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        verbose: cli.verbose,
        strict: cli.strict,
        format: cli.format,
    };
    let (config, source) = config::build_config(&args)?;

    init_tracing(&config, cli.verbose);

    match &source {
        ConfigSource::File(path) => info!("Loaded configuration from {}", path.display()),
        ConfigSource::Defaults => debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE),
    }
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Delta {
            market,
            option_type,
        } => commands::greek::run(GreekKind::Delta, &market.inputs(), option_type, None, &config),
        Commands::Theta {
            market,
            option_type,
            scale,
        } => commands::greek::run(GreekKind::Theta, &market.inputs(), option_type, scale, &config),
        Commands::Gamma { market } => commands::greek::run(
            GreekKind::Gamma,
            &market.inputs(),
            OptionType::Call,
            None,
            &config,
        ),
        Commands::Vega { market } => {
            commands::greek::run(GreekKind::Vega, &market.inputs(), OptionType::Call, None, &config)
        }
        Commands::Rho {
            market,
            option_type,
            scale,
        } => commands::greek::run(GreekKind::Rho, &market.inputs(), option_type, scale, &config),
        Commands::All {
            market,
            option_type,
            theta_scale,
            rho_scale,
        } => commands::greek::run_all(
            &market.inputs(),
            option_type,
            theta_scale,
            rho_scale,
            &config,
        ),
        Commands::Cdf { x } => commands::distribution::run(Distribution::Cdf, x, &config),
        Commands::Density { x } => commands::distribution::run(Distribution::Density, x, &config),
        Commands::Batch { input } => commands::batch::run(&input, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_theta_with_negative_rate() {
        let cli = Cli::try_parse_from([
            "greeks",
            "theta",
            "--spot",
            "206.35",
            "--strike",
            "206",
            "--expiry",
            "0.086",
            "--volatility",
            "0.1",
            "--rate",
            "-0.005",
            "-t",
            "put",
            "--scale",
            "252",
        ])
        .unwrap();

        match cli.command {
            Commands::Theta {
                market,
                option_type,
                scale,
            } => {
                assert_eq!(market.rate, -0.005);
                assert_eq!(option_type, OptionType::Put);
                assert_eq!(scale, Some(252.0));
            }
            _ => panic!("expected theta command"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from([
            "greeks",
            "delta",
            "--spot",
            "100",
            "--strike",
            "100",
            "--expiry",
            "1",
            "--volatility",
            "0.2",
        ])
        .unwrap();

        assert!(!cli.verbose);
        assert!(!cli.strict);
        assert!(cli.config.is_none());
        assert!(cli.format.is_none());
        match cli.command {
            Commands::Delta {
                market,
                option_type,
            } => {
                assert_eq!(market.rate, 0.0);
                assert_eq!(option_type, OptionType::Call);
            }
            _ => panic!("expected delta command"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["greeks", "cdf", "-1.5", "--format", "json", "--strict"])
            .unwrap();

        assert!(cli.strict);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Cdf { x } => assert_eq!(x, -1.5),
            _ => panic!("expected cdf command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_option_type() {
        let result = Cli::try_parse_from([
            "greeks",
            "rho",
            "--spot",
            "100",
            "--strike",
            "100",
            "--expiry",
            "1",
            "--volatility",
            "0.2",
            "--option-type",
            "straddle",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_batch() {
        let cli = Cli::try_parse_from(["greeks", "batch", "--input", "book.json"]).unwrap();
        match cli.command {
            Commands::Batch { input } => assert_eq!(input, PathBuf::from("book.json")),
            _ => panic!("expected batch command"),
        }
    }
}
