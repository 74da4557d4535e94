//! Quantization modes and their throughput factors
//!
//! Lower weight precision moves fewer bytes per token, so quantization acts
//! as a straight multiplier on the bandwidth-bound throughput estimate:
//!
//! | Mode | Factor |
//! |------|--------|
//! | FP8  | 1.0    |
//! | FP4  | 2.0    |
//! | FP16 | 0.5    |
//!
//! The mapping is total and fixed: every mode has exactly one factor and the
//! table is never mutated at runtime. FP8 is the baseline (factor 1.0).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimarError;

/// Weight quantization mode
///
/// A closed set: no free-form values are representable. The interactive
/// selection mechanism only ever offers these three, and the CLI path goes
/// through [`FromStr`], which rejects anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuantizationMode {
    /// 8-bit floating point (baseline, factor 1.0)
    #[default]
    Fp8,
    /// 4-bit floating point (factor 2.0)
    Fp4,
    /// 16-bit floating point (factor 0.5)
    Fp16,
}

impl QuantizationMode {
    /// All supported modes, in declaration order
    pub const ALL: [Self; 3] = [Self::Fp8, Self::Fp4, Self::Fp16];

    /// Throughput factor for this mode
    ///
    /// Total and constant across calls.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Fp8 => 1.0,
            Self::Fp4 => 2.0,
            Self::Fp16 => 0.5,
        }
    }

    /// Canonical upper-case name ("FP8", "FP4", "FP16")
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fp8 => "FP8",
            Self::Fp4 => "FP4",
            Self::Fp16 => "FP16",
        }
    }
}

impl fmt::Display for QuantizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantizationMode {
    type Err = EstimarError;

    /// Case-insensitive parse of a mode name
    ///
    /// # Errors
    ///
    /// Returns `EstimarError::UnknownQuantization` for any name outside the
    /// supported set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fp8" => Ok(Self::Fp8),
            "fp4" => Ok(Self::Fp4),
            "fp16" => Ok(Self::Fp16),
            _ => Err(EstimarError::UnknownQuantization {
                name: s.to_string(),
            }),
        }
    }
}
