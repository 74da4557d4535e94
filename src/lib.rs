//! # Estimar
//!
//! Pure Rust estimator for LLM inference throughput (tokens per second).
//!
//! Estimar (Spanish: "to estimate") computes a bandwidth-bound decode
//! throughput estimate from three inputs: model parameter count (billions),
//! weight quantization mode, and GPU memory bandwidth (GB/s). Single-stream
//! decoding streams the full weight set per token, so memory bandwidth is
//! the limiting resource:
//!
//! ```text
//! TPS = (bandwidth / model size) * quantization factor
//! ```
//!
//! Real-world throughput is derated to ~50% of theoretical to account for
//! batching, context length and I/O overhead.
//!
//! ## Example
//!
//! ```rust
//! use estimar::estimate::{estimate, ThroughputInputs};
//! use estimar::quantize::QuantizationMode;
//!
//! let est = estimate(&ThroughputInputs {
//!     params_billions: 13.0,
//!     bandwidth_gbs: 600.0,
//!     mode: QuantizationMode::Fp8,
//! });
//!
//! assert_eq!(est.model_size_gb, 13.0);
//! assert!((est.theoretical_tps - 46.15).abs() < 0.01);
//! assert_eq!(est.real_tps, est.theoretical_tps * 0.5);
//! ```
//!
//! ## Architecture
//!
//! The estimation core is total: every input, valid or degenerate, maps to a
//! defined output. Malformed field text is rejected at the validation
//! boundary (keeping the previous value), and unparsable-but-accepted
//! partial text coerces to zero, which the zero-guard turns into zero-valued
//! outputs rather than a division by zero.
//!
//! - [`validate`]: keystroke-level acceptance of numeric field text
//! - [`quantize`]: the closed quantization mode set and its factor table
//! - [`estimate`]: the pure throughput calculation
//! - [`session`]: explicit field state with recompute-on-read semantics
//! - [`report`]: text/JSON rendering of results
//! - [`cli`]: command implementations for the `estimar` binary

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // Not all methods need #[must_use]
#![allow(clippy::float_cmp)] // Exact float equality is intended where asserted
#![allow(clippy::uninlined_format_args)] // Prefer explicit format args

/// CLI command implementations (extracted for testability)
pub mod cli;
pub mod error;
pub mod estimate;
pub mod quantize;
pub mod report;
pub mod session;
pub mod validate;

pub use error::{EstimarError, Result};
pub use estimate::{estimate, ThroughputEstimate, ThroughputInputs};
pub use quantize::QuantizationMode;
pub use session::EstimatorSession;
