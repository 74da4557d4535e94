//! CLI command implementations
//!
//! Business logic for the `estimar` commands, extracted from main.rs for
//! testability. The interactive loop is generic over its reader/writer so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{EstimarError, Result};
use crate::estimate::{estimate, ThroughputInputs};
use crate::quantize::QuantizationMode;
use crate::report::{render, render_text, OutputFormat};
use crate::session::EstimatorSession;
use crate::validate::{is_partial_decimal, parse_or_zero};

/// Parse a one-shot numeric flag strictly
///
/// One-shot flags never went through the keystroke validator, so unlike the
/// interactive path a malformed value is an error, not a silent coercion to
/// zero. Accepts exactly what the field validator accepts, minus the partial
/// forms that carry no number ("" and ".").
///
/// # Errors
///
/// Returns `EstimarError::InvalidNumber` for anything that is not a complete
/// non-negative decimal.
pub fn parse_numeric_flag(text: &str) -> Result<f64> {
    if !is_partial_decimal(text) || text.is_empty() || text == "." {
        return Err(EstimarError::InvalidNumber {
            text: text.to_string(),
        });
    }
    Ok(parse_or_zero(text))
}

/// Handle `estimar estimate`: one-shot estimation from flags
///
/// # Errors
///
/// Returns an error for malformed numeric flags or JSON rendering failure.
pub fn handle_estimate(
    params: &str,
    bandwidth: &str,
    mode: QuantizationMode,
    format: OutputFormat,
) -> Result<String> {
    let inputs = ThroughputInputs {
        params_billions: parse_numeric_flag(params)?,
        bandwidth_gbs: parse_numeric_flag(bandwidth)?,
        mode,
    };
    render(&estimate(&inputs), format)
}

/// Handle `estimar modes`: print the quantization factor table
#[must_use]
pub fn handle_modes() -> String {
    let mut out = String::from("Quantization factors:\n");
    for mode in QuantizationMode::ALL {
        out.push_str(&format!("  {:<5} {}x\n", mode.name(), mode.factor()));
    }
    out.push_str("\nTPS = (bandwidth / model size) * factor; real-world ~50% of theoretical.");
    out
}

/// Handle `estimar interactive`: a line-oriented estimation session
///
/// Commands: `params <text>`, `bandwidth <text>`, `quant <mode>`, `show`,
/// `quit`. Every accepted edit re-renders the full report, mirroring the
/// recompute-on-change behavior of the original form. Rejected edits print a
/// notice and keep the previous value; they never terminate the session.
///
/// # Errors
///
/// Returns an error only for I/O failures on the reader/writer.
pub fn run_interactive<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut session = EstimatorSession::new();

    writeln!(output, "estimar interactive session")?;
    writeln!(
        output,
        "commands: params <n> | bandwidth <n> | quant <fp8|fp4|fp16> | show | quit"
    )?;
    writeln!(output, "{}", render_text(&session.current()))?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (trimmed, ""),
        };

        match command {
            "quit" | "exit" => break,
            "show" => writeln!(output, "{}", render_text(&session.current()))?,
            "params" => {
                if session.edit_params(arg) {
                    writeln!(output, "{}", render_text(&session.current()))?;
                } else {
                    writeln!(output, "ignored: {arg:?} is not a non-negative decimal")?;
                }
            },
            "bandwidth" => {
                if session.edit_bandwidth(arg) {
                    writeln!(output, "{}", render_text(&session.current()))?;
                } else {
                    writeln!(output, "ignored: {arg:?} is not a non-negative decimal")?;
                }
            },
            "quant" => match arg.parse::<QuantizationMode>() {
                Ok(mode) => {
                    session.set_mode(mode);
                    writeln!(output, "{}", render_text(&session.current()))?;
                },
                Err(err) => writeln!(output, "ignored: {err}")?,
            },
            other => writeln!(output, "unknown command: {other:?}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // ========================================================================
    // Strict flag parsing
    // ========================================================================

    #[test]
    fn test_parse_numeric_flag_accepts_decimals() {
        assert_eq!(parse_numeric_flag("13").unwrap(), 13.0);
        assert_eq!(parse_numeric_flag("13.5").unwrap(), 13.5);
        assert_eq!(parse_numeric_flag(".5").unwrap(), 0.5);
        assert_eq!(parse_numeric_flag("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_numeric_flag_rejects_malformed() {
        for bad in ["", ".", "-5", "1e10", "12a", "1.2.3"] {
            let err = parse_numeric_flag(bad).unwrap_err();
            assert!(
                matches!(err, EstimarError::InvalidNumber { .. }),
                "wrong error for {bad:?}"
            );
        }
    }

    // ========================================================================
    // One-shot estimate
    // ========================================================================

    #[test]
    fn test_handle_estimate_text() {
        let out =
            handle_estimate("13", "600", QuantizationMode::Fp8, OutputFormat::Text).unwrap();
        assert!(out.contains("13.00 GB"));
        assert!(out.contains("46.15 tokens/sec"));
    }

    #[test]
    fn test_handle_estimate_json() {
        let out =
            handle_estimate("70", "1935", QuantizationMode::Fp16, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["model_size_gb"], 70.0);
        assert_eq!(value["quant_factor"], 0.5);
    }

    #[test]
    fn test_handle_estimate_propagates_bad_flag() {
        let err = handle_estimate("12a", "600", QuantizationMode::Fp8, OutputFormat::Text)
            .unwrap_err();
        assert!(matches!(err, EstimarError::InvalidNumber { .. }));
    }

    #[test]
    fn test_handle_modes_lists_all_factors() {
        let out = handle_modes();
        assert!(out.contains("FP8"));
        assert!(out.contains("FP4"));
        assert!(out.contains("FP16"));
        assert!(out.contains("2x"));
        assert!(out.contains("0.5x"));
    }

    // ========================================================================
    // Interactive session
    // ========================================================================

    fn drive(script: &str) -> String {
        let mut out = Vec::new();
        run_interactive(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_interactive_shows_defaults_on_start() {
        let out = drive("quit\n");
        assert!(out.contains("13.00 GB"));
        assert!(out.contains("46.15 tokens/sec"));
    }

    #[test]
    fn test_interactive_edit_recomputes() {
        let out = drive("params 70\nbandwidth 1935\nquant fp16\nquit\n");
        assert!(out.contains("70.00 GB"));
        assert!(out.contains("13.82 tokens/sec"));
        assert!(out.contains("6.91 tokens/sec"));
    }

    #[test]
    fn test_interactive_rejected_edit_keeps_previous_value() {
        let out = drive("params 12a\nshow\nquit\n");
        assert!(out.contains("ignored"));
        // Final `show` still reports the default 13B model
        assert!(out.matches("13.00 GB").count() >= 2);
    }

    #[test]
    fn test_interactive_unknown_quant_is_ignored() {
        let out = drive("quant int4\nshow\nquit\n");
        assert!(out.contains("ignored"));
        assert!(out.contains("Unknown quantization mode"));
    }

    #[test]
    fn test_interactive_empty_lines_skipped() {
        let out = drive("\n\nshow\nquit\n");
        assert!(!out.contains("unknown command"));
    }

    #[test]
    fn test_interactive_eof_terminates() {
        // No explicit quit; loop ends at EOF
        let out = drive("params 7\n");
        assert!(out.contains("7.00 GB"));
    }
}
