//! Numeric parsing and rendering for text.
//!
//! The `to_*` functions never fail: malformed input yields the caller's
//! default. The `try_*` variants expose the reason for embedders that care.

use super::Text;
use crate::errors::ParseError;

fn trimmed(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|c| !super::is_space(*c)).unwrap_or(s.len());
    let end = s.iter().rposition(|c| !super::is_space(*c)).map_or(start, |e| e + 1);
    &s[start..end.max(start)]
}

/// Parse a whole decimal integer token (optional sign, digits only).
pub fn try_to_int(s: impl AsRef<[u8]>) -> Result<i64, ParseError> {
    let raw = s.as_ref();
    let t = trimmed(raw);
    if t.is_empty() {
        return Err(ParseError::Empty);
    }
    let digits = match t[0] {
        b'+' | b'-' => &t[1..],
        _ => t,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseError::Malformed(Text::from_bytes(raw)));
    }
    // Every byte is ASCII at this point.
    let text = std::str::from_utf8(t).map_err(|_| ParseError::Malformed(Text::from_bytes(raw)))?;
    text.parse::<i64>()
        .map_err(|_| ParseError::OutOfRange(Text::from_bytes(raw)))
}

pub fn try_to_float(s: impl AsRef<[u8]>) -> Result<f64, ParseError> {
    let raw = s.as_ref();
    let t = trimmed(raw);
    if t.is_empty() {
        return Err(ParseError::Empty);
    }
    std::str::from_utf8(t)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| ParseError::Malformed(Text::from_bytes(raw)))
}

pub fn to_int(s: impl AsRef<[u8]>, default: i64) -> i64 {
    try_to_int(s).unwrap_or(default)
}

pub fn to_float(s: impl AsRef<[u8]>, default: f64) -> f64 {
    try_to_float(s).unwrap_or(default)
}

pub fn from_int(n: i64) -> Text {
    let mut buf = itoa::Buffer::new();
    Text::from(buf.format(n))
}

/// Shortest representation that parses back to the same `f64`.
pub fn from_float(n: f64) -> Text {
    if !n.is_finite() {
        return Text::from(nonfinite_name(n));
    }
    let mut buf = ryu::Buffer::new();
    Text::from(buf.format_finite(n))
}

pub(crate) fn nonfinite_name(n: f64) -> &'static str {
    if n.is_nan() {
        "nan"
    } else if n.is_sign_negative() {
        "-inf"
    } else {
        "inf"
    }
}
