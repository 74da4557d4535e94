//! Bandwidth-bound throughput estimation
//!
//! Memory bandwidth is the limiting resource for single-stream LLM decoding:
//! every generated token streams the full weight set through the memory bus.
//! The closed-form estimate is
//!
//! ```text
//! TPS = (bandwidth_gbs / model_size_gb) * quant_factor
//! ```
//!
//! with model size derived from parameter count at one byte per parameter,
//! and a fixed 50% derating from theoretical to expected real-world
//! throughput (batching, context length, I/O overhead).
//!
//! [`estimate`] is pure, deterministic and total: it never errors, and
//! degenerate inputs (zero parameters or zero bandwidth) produce zero-valued
//! outputs instead of a division by zero.

use serde::{Deserialize, Serialize};

use crate::quantize::QuantizationMode;

/// Storage assumption: bytes per model parameter at the FP8 baseline
///
/// Kept as an explicit constant so a change to the baseline only touches
/// one place; quantization is applied as a throughput factor, not here.
pub const BYTES_PER_PARAM: f64 = 1.0;

/// Derating from theoretical to expected real-world throughput
pub const REAL_WORLD_FACTOR: f64 = 0.5;

/// Validated inputs to one estimation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThroughputInputs {
    /// Model parameter count in billions
    pub params_billions: f64,
    /// GPU memory bandwidth in GB/s
    pub bandwidth_gbs: f64,
    /// Weight quantization mode
    pub mode: QuantizationMode,
}

/// Derived outputs of one estimation pass
///
/// Fully determined by [`ThroughputInputs`]; no hidden state, no history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThroughputEstimate {
    /// Model weight footprint in GB
    pub model_size_gb: f64,
    /// Bandwidth-bound upper bound, tokens per second
    pub theoretical_tps: f64,
    /// Expected real-world throughput, tokens per second
    pub real_tps: f64,
    /// Quantization factor applied
    pub quant_factor: f64,
}

/// Estimate decode throughput from bandwidth, parameter count and quantization
///
/// Pure and total. Zero or negative bandwidth/parameter count yields zero
/// throughput. Negative values injected programmatically are not otherwise
/// guarded: the arithmetic evaluates as-is, matching the guard's `> 0` test.
#[must_use]
pub fn estimate(inputs: &ThroughputInputs) -> ThroughputEstimate {
    let model_size_gb = inputs.params_billions * 1e9 * BYTES_PER_PARAM / 1e9;
    let quant_factor = inputs.mode.factor();

    let theoretical_tps = if inputs.bandwidth_gbs > 0.0 && inputs.params_billions > 0.0 {
        (inputs.bandwidth_gbs / model_size_gb) * quant_factor
    } else {
        0.0
    };
    let real_tps = theoretical_tps * REAL_WORLD_FACTOR;

    ThroughputEstimate {
        model_size_gb,
        theoretical_tps,
        real_tps,
        quant_factor,
    }
}
