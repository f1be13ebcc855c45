//! Parsers of single-valued fields.
//!
//! Each of them returns `Ok(None)` for an empty (or blank) value, which is the absent value of the
//! field.

use super::{ParseWarning, Result};

/// Parses a free text field. The trimmed value is taken verbatim.
#[must_use]
pub fn parse_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parses a time field, a signed decimal such as `-0.009` in seconds.
///
/// # Errors
///
/// Returns [`ParseWarning::MalformedNumber`] if the value is not a signed decimal.
pub fn parse_time(value: &str) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_decimal(trimmed).map(Some)
}

/// Parses an unsigned decimal integer field.
///
/// # Errors
///
/// Returns [`ParseWarning::MalformedNumber`] on non-digit content or overflow.
pub fn parse_int(value: &str) -> Result<Option<u32>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseWarning::MalformedNumber(trimmed.to_owned()));
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ParseWarning::MalformedNumber(trimmed.to_owned()))
}

/// Parses a flag field spelled `YES` or `NO`.
///
/// # Errors
///
/// Returns [`ParseWarning::UnrecognizedEnum`] for any other spelling.
pub fn parse_flag(value: &str) -> Result<Option<bool>> {
    match value.trim() {
        "" => Ok(None),
        "YES" => Ok(Some(true)),
        "NO" => Ok(Some(false)),
        other => Err(ParseWarning::UnrecognizedEnum(other.to_owned())),
    }
}

/// Parses a non-empty signed decimal: an optional sign, digits and an optional fraction.
///
/// Exponents, `inf` and `NaN` are rejected.
///
/// # Errors
///
/// Returns [`ParseWarning::MalformedNumber`] if `text` is not a signed decimal.
pub fn parse_decimal(text: &str) -> Result<f64> {
    let malformed = || ParseWarning::MalformedNumber(text.to_owned());
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return Err(malformed());
    }
    text.parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(malformed)
}
