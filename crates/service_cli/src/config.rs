//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use greeks_core::analytical::{GreeksScales, RHO_SCALE_PERCENT, THETA_SCALE_CALENDAR_DAYS};
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "greeks.toml";

const ENV_LOG_LEVEL: &str = "GREEKS_LOG_LEVEL";
const ENV_THETA_SCALE: &str = "GREEKS_THETA_SCALE";
const ENV_RHO_SCALE: &str = "GREEKS_RHO_SCALE";
const ENV_STRICT: &str = "GREEKS_STRICT";
const ENV_FORMAT: &str = "GREEKS_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid {name} scale: {value}. Must be positive and finite")]
    InvalidScale { name: &'static str, value: f64 },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default Theta divisor
    pub theta_scale: f64,
    /// Default Rho divisor
    pub rho_scale: f64,
    /// Route every calculation through domain validation
    pub strict: bool,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            theta_scale: THETA_SCALE_CALENDAR_DAYS,
            rho_scale: RHO_SCALE_PERCENT,
            strict: false,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(scale) = lookup(ENV_THETA_SCALE) {
            self.theta_scale = parse_env_f64(ENV_THETA_SCALE, &scale)?;
        }

        if let Some(scale) = lookup(ENV_RHO_SCALE) {
            self.rho_scale = parse_env_f64(ENV_RHO_SCALE, &scale)?;
        }

        if let Some(strict) = lookup(ENV_STRICT) {
            self.strict = matches!(strict.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if cli.strict {
            self.strict = true;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_scale("theta", self.theta_scale)?;
        check_scale("rho", self.rho_scale)?;
        Ok(())
    }

    /// Default Theta/Rho divisors as a [`GreeksScales`]
    pub fn scales(&self) -> GreeksScales {
        GreeksScales::new(self.theta_scale, self.rho_scale)
    }
}

fn parse_env_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a number", key, value)))
}

fn check_scale(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScale { name, value })
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// Force debug logging
    pub verbose: bool,
    /// Force strict mode
    pub strict: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Where the file layer of the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Build configuration from all sources
///
/// An explicit `--config` path must exist; the default file is optional.
pub fn build_config(cli: &CliArgs) -> Result<(CliConfig, ConfigSource), ConfigError> {
    let path = cli
        .config_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let (mut config, source) = if path.exists() {
        (CliConfig::from_file(&path)?, ConfigSource::File(path))
    } else if cli.config_file.is_some() {
        return Err(ConfigError::FileError(format!(
            "Config file not found: {}",
            path.display()
        )));
    } else {
        (CliConfig::default(), ConfigSource::Defaults)
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok((config, source))
}
