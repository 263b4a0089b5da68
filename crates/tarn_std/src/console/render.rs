//! Canonical textual rendering of primitive values.
//!
//! Booleans render as `true`/`false`, integers in decimal, floats in the
//! compact general format of C's `%g` (six significant digits, trailing zeros
//! dropped) and text verbatim.

use crate::text::{Text, nonfinite_name};

/// The kind names used in format diagnostics.
pub const KIND_BOOL: &str = "bool";
pub const KIND_INT: &str = "int";
pub const KIND_FLOAT: &str = "float";
pub const KIND_TEXT: &str = "text";

pub trait Render {
    fn render_into(&self, out: &mut Vec<u8>);

    fn render(&self) -> Text {
        let mut out = Vec::new();
        self.render_into(&mut out);
        Text::from_vec(out)
    }
}

impl Render for bool {
    fn render_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(if *self { b"true" } else { b"false" });
    }
}

impl Render for i64 {
    fn render_into(&self, out: &mut Vec<u8>) {
        let mut buf = itoa::Buffer::new();
        out.extend_from_slice(buf.format(*self).as_bytes());
    }
}

impl Render for f64 {
    fn render_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(format_general(*self, 6, false, false).as_bytes());
    }
}

impl Render for str {
    fn render_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Render for String {
    fn render_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Render for [u8] {
    fn render_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

impl Render for Text {
    fn render_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_into(&self, out: &mut Vec<u8>) {
        (**self).render_into(out);
    }
}

/// `%e`: one digit before the point, `precision` after, C-style exponent
/// (`e+05`, at least two exponent digits).
pub fn format_exponent(x: f64, precision: usize, upper: bool) -> String {
    if !x.is_finite() {
        return nonfinite(x, upper);
    }
    let rust = format!("{:.*e}", precision, x);
    let (mantissa, exp) = split_exponent(&rust);
    let sign = if exp < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{:02}", exp.unsigned_abs())
}

/// `%f`: fixed notation with `precision` fractional digits.
pub fn format_fixed(x: f64, precision: usize, upper: bool) -> String {
    if !x.is_finite() {
        return nonfinite(x, upper);
    }
    format!("{:.*}", precision, x)
}

/// `%g`: the shorter of `%e`/`%f` under C's selection rule, with trailing
/// zeros removed unless `alternate` is set.
pub fn format_general(x: f64, precision: usize, alternate: bool, upper: bool) -> String {
    if !x.is_finite() {
        return nonfinite(x, upper);
    }
    let p = precision.max(1);
    // The exponent that %e would print after rounding to p significant digits.
    let exp = if x == 0.0 {
        0
    } else {
        split_exponent(&format!("{:.*e}", p - 1, x)).1
    };
    let body = if exp < -4 || exp >= p as i32 {
        format_exponent(x, p - 1, upper)
    } else {
        format_fixed(x, (p as i32 - 1 - exp) as usize, upper)
    };
    if alternate {
        body
    } else {
        strip_fraction_zeros(&body)
    }
}

fn nonfinite(x: f64, upper: bool) -> String {
    let name = nonfinite_name(x);
    if upper {
        name.to_ascii_uppercase()
    } else {
        name.to_string()
    }
}

fn split_exponent(s: &str) -> (&str, i32) {
    match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], s[pos + 1..].parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn strip_fraction_zeros(body: &str) -> String {
    let (mantissa, suffix) = match body.find(['e', 'E']) {
        Some(pos) => body.split_at(pos),
        None => (body, ""),
    };
    if !mantissa.contains('.') {
        return body.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{suffix}")
}
