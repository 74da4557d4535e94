//! Numeric input validation
//!
//! The two numeric fields (parameter count, bandwidth) accept text as typed,
//! one full proposed value per edit. An edit is accepted iff the text is a
//! possibly-partial non-negative decimal number: zero or more digits, an
//! optional single decimal point, zero or more digits. Empty text is accepted
//! (the field is mid-edit). No sign, no exponent, no thousands separators.
//!
//! Rejected edits are discarded silently; the caller keeps its previous
//! value. Nothing here errors.
//!
//! Partial values ("", ".", "13.") are accepted by the validator but do not
//! all parse as numbers; [`parse_or_zero`] coerces those to 0.0 so the
//! estimator downstream stays total.

/// Check whether `text` is an acceptable (possibly partial) decimal field value
///
/// Accepts the empty string and any string matching `\d*\.?\d*`. Direct
/// character scan; deliberately stricter than `f64::from_str`, which would
/// also take signs, exponents, "inf" and "NaN".
#[must_use]
pub fn is_partial_decimal(text: &str) -> bool {
    let mut seen_point = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {},
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Parse a validated field value, coercing anything unparsable to 0.0
///
/// Empty text and a lone "." pass the validator but are not numbers; they
/// parse as 0.0 rather than an error. Total function.
#[must_use]
pub fn parse_or_zero(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}
