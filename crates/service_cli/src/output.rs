//! Result rendering for table and JSON output.

use greeks_core::analytical::batch::GreeksRequest;
use greeks_core::analytical::Greeks;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::OutputFormat;
use crate::Result;

/// Per-position and aggregated Greeks for a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub positions: Vec<Greeks>,
    pub total: Greeks,
}

/// Render a single named value.
pub fn render_value(name: &str, value: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut object = Map::new();
            object.insert(name.to_string(), to_json_number(value));
            Ok(serde_json::to_string_pretty(&Value::Object(object))?)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            out.push_str("┌────────┬──────────────────────────┐\n");
            out.push_str(&format!("│ {:<6} │ {:>24} │\n", name, value));
            out.push_str("└────────┴──────────────────────────┘");
            Ok(out)
        }
    }
}

/// Render all five Greeks for one option.
pub fn render_greeks(greeks: &Greeks, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(greeks)?),
        OutputFormat::Table => {
            let rows = [
                ("delta", greeks.delta),
                ("gamma", greeks.gamma),
                ("vega", greeks.vega),
                ("theta", greeks.theta),
                ("rho", greeks.rho),
            ];

            let mut out = String::new();
            out.push_str("┌────────┬──────────────────────────┐\n");
            out.push_str("│ Greek  │ Value                    │\n");
            out.push_str("├────────┼──────────────────────────┤\n");
            for (name, value) in rows {
                out.push_str(&format!("│ {:<6} │ {:>24} │\n", name, value));
            }
            out.push_str("└────────┴──────────────────────────┘");
            Ok(out)
        }
    }
}

/// Render a batch report, one row per position plus the aggregate.
pub fn render_batch(
    requests: &[GreeksRequest],
    report: &BatchReport,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let rule = |left: &str, mid: &str, right: &str| {
                format!(
                    "{}{}{}\n",
                    left,
                    [6, 6, 10, 14, 14, 14, 14, 14]
                        .iter()
                        .map(|w| "─".repeat(*w))
                        .collect::<Vec<_>>()
                        .join(mid),
                    right
                )
            };

            let mut out = String::new();
            out.push_str(&rule("┌", "┬", "┐"));
            out.push_str(&format!(
                "│{:>5} │{:>5} │{:>9} │{:>13} │{:>13} │{:>13} │{:>13} │{:>13} │\n",
                "#", "type", "qty", "delta", "gamma", "vega", "theta", "rho"
            ));
            out.push_str(&rule("├", "┼", "┤"));

            for (i, (request, greeks)) in requests.iter().zip(&report.positions).enumerate() {
                out.push_str(&format!(
                    "│{:>5} │{:>5} │{:>9} │{:>13.6} │{:>13.6} │{:>13.6} │{:>13.6} │{:>13.6} │\n",
                    i + 1,
                    request.option_type.to_string(),
                    request.quantity,
                    greeks.delta,
                    greeks.gamma,
                    greeks.vega,
                    greeks.theta,
                    greeks.rho
                ));
            }

            out.push_str(&rule("├", "┼", "┤"));
            let total = &report.total;
            out.push_str(&format!(
                "│{:>5} │{:>5} │{:>9} │{:>13.6} │{:>13.6} │{:>13.6} │{:>13.6} │{:>13.6} │\n",
                "total", "", "", total.delta, total.gamma, total.vega, total.theta, total.rho
            ));
            out.push_str(&rule("└", "┴", "┘"));
            Ok(out.trim_end().to_string())
        }
    }
}

// serde_json has no representation for NaN or infinities
fn to_json_number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
