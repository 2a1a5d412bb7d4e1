//! Batch command implementation
//!
//! Loads a JSON array of options, evaluates every one in parallel and
//! prints per-position Greeks together with the quantity-weighted total.
//!
//! Each element carries the market inputs, an option type and an optional
//! quantity (defaults to 1):
//!
//! ```json
//! [
//!   { "spot": 100.0, "strike": 95.0, "expiry": 0.5, "volatility": 0.2,
//!     "rate": 0.01, "option_type": "call", "quantity": 10 }
//! ]
//! ```

use std::path::Path;

use greeks_core::analytical::batch::{self, GreeksRequest};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::output::{self, BatchReport};
use crate::{CliError, Result};

/// Run the batch command
pub fn run(input: &Path, config: &CliConfig) -> Result<()> {
    info!("Starting batch evaluation...");
    info!("  Input: {}", input.display());
    info!("  Strict: {}", config.strict);

    let requests = load(input)?;
    info!("Loaded {} options", requests.len());

    let report = evaluate(&requests, config)?;
    println!("{}", output::render_batch(&requests, &report, config.format)?);

    info!("Batch evaluation complete");
    Ok(())
}

/// Read and parse a JSON batch file
pub fn load(input: &Path) -> Result<Vec<GreeksRequest>> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let content = std::fs::read_to_string(input)?;
    parse(&content)
}

/// Parse a JSON batch document
pub fn parse(content: &str) -> Result<Vec<GreeksRequest>> {
    Ok(serde_json::from_str(content)?)
}

/// Evaluate every request and aggregate by quantity
pub fn evaluate(requests: &[GreeksRequest], config: &CliConfig) -> Result<BatchReport> {
    let scales = config.scales();

    let positions = if config.strict {
        batch::try_compute(requests, scales)
            .inspect_err(|e| warn!("Batch rejected: {}", e))?
    } else {
        let degenerate = requests.iter().filter(|r| r.inputs.is_degenerate()).count();
        if degenerate > 0 {
            warn!("{} options have zero volatility or expiry", degenerate);
        }
        batch::compute(requests, scales)
    };

    let total = batch::aggregate(requests, &positions);
    Ok(BatchReport { positions, total })
}
