//! Constants and IEEE-754 elementary functions.
//!
//! These are thin wrappers; NaN and infinities propagate unchanged.

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const TAU: f64 = std::f64::consts::TAU;
pub const SQRT2: f64 = std::f64::consts::SQRT_2;
pub const LN2: f64 = std::f64::consts::LN_2;
pub const LN10: f64 = std::f64::consts::LN_10;

pub fn abs(x: f64) -> f64 {
    x.abs()
}

/// Integer absolute value; `i64::MIN` wraps to itself.
pub fn abs_int(x: i64) -> i64 {
    x.wrapping_abs()
}

pub fn floor(x: f64) -> f64 {
    x.floor()
}

pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Half-way cases round away from zero.
pub fn round(x: f64) -> f64 {
    x.round()
}

pub fn trunc(x: f64) -> f64 {
    x.trunc()
}

pub fn pow(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

pub fn cbrt(x: f64) -> f64 {
    x.cbrt()
}

pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Natural logarithm.
pub fn log(x: f64) -> f64 {
    x.ln()
}

pub fn log2(x: f64) -> f64 {
    x.log2()
}

pub fn log10(x: f64) -> f64 {
    x.log10()
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

pub fn tan(x: f64) -> f64 {
    x.tan()
}

pub fn asin(x: f64) -> f64 {
    x.asin()
}

pub fn acos(x: f64) -> f64 {
    x.acos()
}

pub fn atan(x: f64) -> f64 {
    x.atan()
}

pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

// min/max follow `std::min`/`std::max` on the first argument: when the
// comparison is false (NaN involved) the first operand is returned.

pub fn min(a: f64, b: f64) -> f64 {
    if b < a { b } else { a }
}

pub fn max(a: f64, b: f64) -> f64 {
    if a < b { b } else { a }
}

pub fn min_int(a: i64, b: i64) -> i64 {
    a.min(b)
}

pub fn max_int(a: i64, b: i64) -> i64 {
    a.max(b)
}

/// Clamp `x` into `[lo, hi]`.
///
/// Callers must ensure `lo <= hi`. For `lo > hi` the result is whatever
/// `max(lo, min(x, hi))` produces and is not part of the contract. Unlike
/// `f64::clamp` this never panics.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    max(lo, min(x, hi))
}

/// Integer form of [`clamp`], same precondition.
pub fn clamp_int(x: i64, lo: i64, hi: i64) -> i64 {
    lo.max(x.min(hi))
}

pub fn is_nan(x: f64) -> bool {
    x.is_nan()
}

pub fn is_inf(x: f64) -> bool {
    x.is_infinite()
}

pub fn is_finite(x: f64) -> bool {
    x.is_finite()
}

/// -1, 0 or 1. NaN and both zeros give 0.
pub fn sign(x: f64) -> i64 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}
