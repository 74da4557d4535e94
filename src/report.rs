//! Report rendering for throughput estimates
//!
//! Two output formats, selected by the CLI `--format` flag:
//! - `text`: human-readable, two decimal places, units spelled out
//! - `json`: pretty-printed `serde_json`, for scripting

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::estimate::ThroughputEstimate;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render an estimate as human-readable text
///
/// All numbers are formatted to two decimal places; the quantization factor
/// is a bare multiplier.
#[must_use]
pub fn render_text(est: &ThroughputEstimate) -> String {
    format!(
        "Model size:       {:.2} GB\n\
         Theoretical TPS:  {:.2} tokens/sec\n\
         Estimated real:   {:.2} tokens/sec (~50% of theoretical)\n\
         Quant factor:     {:.2}x",
        est.model_size_gb, est.theoretical_tps, est.real_tps, est.quant_factor
    )
}

/// Render an estimate as pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails (not expected for
/// finite float inputs).
pub fn render_json(est: &ThroughputEstimate) -> Result<String> {
    Ok(serde_json::to_string_pretty(est)?)
}

/// Render an estimate in the requested format
///
/// # Errors
///
/// Propagates JSON serialization failures; the text path is infallible.
pub fn render(est: &ThroughputEstimate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(est)),
        OutputFormat::Json => render_json(est),
    }
}
