//! Estimator session state
//!
//! The original surface for this estimator is a reactive form: three fields,
//! recomputed outputs on every accepted keystroke. [`EstimatorSession`] is
//! that state made explicit — one controller object owning the raw field
//! text, with edits funneled through the validator and outputs recomputed
//! fresh on every read. No caching, so outputs can never be stale relative
//! to the fields.
//!
//! Edits replace the stored text wholesale (the full proposed field content,
//! not a delta). A rejected edit leaves the field untouched and reports
//! `false`; no error is surfaced.

use crate::estimate::{estimate, ThroughputEstimate, ThroughputInputs};
use crate::quantize::QuantizationMode;
use crate::validate::{is_partial_decimal, parse_or_zero};

/// Default parameter-count field text (13B, a common mid-size model)
pub const DEFAULT_PARAMS_TEXT: &str = "13.0";

/// Default bandwidth field text (600 GB/s, consumer-GPU class)
pub const DEFAULT_BANDWIDTH_TEXT: &str = "600.0";

/// Mutable input state for one estimator instance
#[derive(Debug, Clone)]
pub struct EstimatorSession {
    params_text: String,
    bandwidth_text: String,
    mode: QuantizationMode,
}

impl Default for EstimatorSession {
    fn default() -> Self {
        Self {
            params_text: DEFAULT_PARAMS_TEXT.to_string(),
            bandwidth_text: DEFAULT_BANDWIDTH_TEXT.to_string(),
            mode: QuantizationMode::default(),
        }
    }
}

impl EstimatorSession {
    /// Create a session with the default field values (13.0 B, 600.0 GB/s, FP8)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Propose new text for the parameter-count field
    ///
    /// Returns `true` and stores the text if it passes validation; otherwise
    /// leaves the field unchanged and returns `false`.
    pub fn edit_params(&mut self, text: &str) -> bool {
        Self::apply_edit(&mut self.params_text, text)
    }

    /// Propose new text for the bandwidth field
    pub fn edit_bandwidth(&mut self, text: &str) -> bool {
        Self::apply_edit(&mut self.bandwidth_text, text)
    }

    /// Select a quantization mode (infallible; the set is closed)
    pub fn set_mode(&mut self, mode: QuantizationMode) {
        self.mode = mode;
    }

    /// Current parameter-count field text
    #[must_use]
    pub fn params_text(&self) -> &str {
        &self.params_text
    }

    /// Current bandwidth field text
    #[must_use]
    pub fn bandwidth_text(&self) -> &str {
        &self.bandwidth_text
    }

    /// Current quantization mode
    #[must_use]
    pub fn mode(&self) -> QuantizationMode {
        self.mode
    }

    /// Validated numeric inputs derived from the current field text
    #[must_use]
    pub fn inputs(&self) -> ThroughputInputs {
        ThroughputInputs {
            params_billions: parse_or_zero(&self.params_text),
            bandwidth_gbs: parse_or_zero(&self.bandwidth_text),
            mode: self.mode,
        }
    }

    /// Recompute the estimate from the current fields
    ///
    /// Fresh evaluation on every call, keyed only on current inputs.
    #[must_use]
    pub fn current(&self) -> ThroughputEstimate {
        estimate(&self.inputs())
    }

    fn apply_edit(field: &mut String, proposed: &str) -> bool {
        if is_partial_decimal(proposed) {
            field.clear();
            field.push_str(proposed);
            true
        } else {
            false
        }
    }
}
