//! Error types for estimar
//!
//! The estimation core itself is total: every input, valid or degenerate,
//! maps to a defined output. Errors only arise at the outer CLI boundary,
//! where a flag value that never passed through the interactive validator
//! must be diagnosed instead of silently coerced.

use thiserror::Error;

/// Error type for estimar operations
#[derive(Debug, Error)]
pub enum EstimarError {
    /// A numeric flag value is not a non-negative decimal number
    #[error("Invalid number: {text:?} (expected a non-negative decimal, e.g. 13 or 13.5)")]
    InvalidNumber {
        /// The offending text as supplied
        text: String,
    },

    /// A quantization mode name is not one of the supported set
    #[error("Unknown quantization mode: {name:?} (expected one of: fp8, fp4, fp16)")]
    UnknownQuantization {
        /// The offending mode name as supplied
        name: String,
    },

    /// I/O failure reading interactive input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for estimar operations
pub type Result<T> = std::result::Result<T, EstimarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_display() {
        let err = EstimarError::InvalidNumber {
            text: "12a".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("12a"));
        assert!(msg.contains("non-negative decimal"));
    }

    #[test]
    fn test_unknown_quantization_display() {
        let err = EstimarError::UnknownQuantization {
            name: "int4".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("int4"));
        assert!(msg.contains("fp8"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: EstimarError = io.into();
        assert!(matches!(err, EstimarError::Io(_)));
    }
}
