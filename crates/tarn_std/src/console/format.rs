//! Type-checked printf-style formatting.
//!
//! A template is parsed into literal pieces and directives, then every
//! directive is checked against its positional argument before any byte of
//! output is produced. Any mismatch is reported as a [`FormatError`]; there is
//! no best-effort rendering.
//!
//! Directive grammar: `%[flags][width][.precision]conversion`.
//!
//! | conversion      | argument kind | rendering                              |
//! |-----------------|---------------|----------------------------------------|
//! | `d` `i`         | int           | signed decimal                         |
//! | `u`             | int           | two's-complement unsigned decimal      |
//! | `x` `X` `o`     | int           | two's-complement hex / octal           |
//! | `c`             | int           | the low byte                           |
//! | `f` `F`         | float         | fixed                                  |
//! | `e` `E`         | float         | exponent                               |
//! | `g` `G`         | float         | general                                |
//! | `b`             | bool          | `true` / `false`                       |
//! | `s`             | any           | canonical rendering, precision truncates |
//! | `%%`            | none          | a literal `%`                          |

use std::sync::OnceLock;

use regex::bytes::Regex;
use smallvec::SmallVec;

use super::render::{
    KIND_BOOL, KIND_FLOAT, KIND_INT, KIND_TEXT, Render, format_exponent, format_fixed,
    format_general,
};
use crate::errors::FormatError;
use crate::text::Text;

/// One positional format argument.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatArg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Text),
}

impl FormatArg {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FormatArg::Bool(_) => KIND_BOOL,
            FormatArg::Int(_) => KIND_INT,
            FormatArg::Float(_) => KIND_FLOAT,
            FormatArg::Text(_) => KIND_TEXT,
        }
    }
}

impl Render for FormatArg {
    fn render_into(&self, out: &mut Vec<u8>) {
        match self {
            FormatArg::Bool(b) => b.render_into(out),
            FormatArg::Int(i) => i.render_into(out),
            FormatArg::Float(f) => f.render_into(out),
            FormatArg::Text(t) => t.render_into(out),
        }
    }
}

impl From<bool> for FormatArg {
    fn from(v: bool) -> Self {
        FormatArg::Bool(v)
    }
}

impl From<i64> for FormatArg {
    fn from(v: i64) -> Self {
        FormatArg::Int(v)
    }
}

impl From<i32> for FormatArg {
    fn from(v: i32) -> Self {
        FormatArg::Int(v.into())
    }
}

impl From<f64> for FormatArg {
    fn from(v: f64) -> Self {
        FormatArg::Float(v)
    }
}

impl From<Text> for FormatArg {
    fn from(v: Text) -> Self {
        FormatArg::Text(v)
    }
}

impl From<&str> for FormatArg {
    fn from(v: &str) -> Self {
        FormatArg::Text(v.into())
    }
}

impl From<String> for FormatArg {
    fn from(v: String) -> Self {
        FormatArg::Text(v.into())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Directive {
    offset: usize,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece<'t> {
    Literal(&'t [u8]),
    Percent,
    Directive(Directive),
}

fn directive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s-u)%([-+ 0#]*)([0-9]+)?(?:\.([0-9]*))?(.)?")
            .expect("directive pattern is valid")
    })
}

/// Upper bound for a directive's width and precision.
pub const MAX_FIELD: usize = 4096;

fn parse_count(
    bytes: Option<&[u8]>,
    field: &'static str,
    offset: usize,
) -> Result<Option<usize>, FormatError> {
    let Some(bytes) = bytes else {
        return Ok(None);
    };
    let value = bytes.iter().try_fold(0usize, |acc, d| {
        acc.checked_mul(10)?
            .checked_add((d - b'0') as usize)
            .filter(|&v| v <= MAX_FIELD)
    });
    match value {
        Some(v) => Ok(Some(v)),
        None => Err(FormatError::FieldTooWide {
            offset,
            field,
            value: String::from_utf8_lossy(bytes).into_owned(),
            max: MAX_FIELD,
        }),
    }
}

fn parse_template(template: &[u8]) -> Result<SmallVec<[Piece<'_>; 8]>, FormatError> {
    let mut pieces = SmallVec::new();
    let mut last = 0;
    for caps in directive_pattern().captures_iter(template) {
        let whole = caps.get(0).expect("group 0 always participates");
        if whole.start() > last {
            pieces.push(Piece::Literal(&template[last..whole.start()]));
        }
        last = whole.end();
        let Some(conv) = caps.get(4) else {
            return Err(FormatError::DanglingPercent {
                offset: whole.start(),
            });
        };
        let conversion = conv.as_bytes()[0];
        if conversion == b'%' {
            pieces.push(Piece::Percent);
            continue;
        }
        if !b"diuxXocfFeEgGbs".contains(&conversion) {
            return Err(FormatError::UnknownDirective {
                offset: whole.start(),
                directive: String::from_utf8_lossy(whole.as_bytes()).into_owned(),
            });
        }
        let flag_bytes = caps.get(1).map_or(&b""[..], |m| m.as_bytes());
        let flags = Flags {
            left: flag_bytes.contains(&b'-'),
            plus: flag_bytes.contains(&b'+'),
            space: flag_bytes.contains(&b' '),
            zero: flag_bytes.contains(&b'0'),
            alternate: flag_bytes.contains(&b'#'),
        };
        pieces.push(Piece::Directive(Directive {
            offset: whole.start(),
            flags,
            width: parse_count(caps.get(2).map(|m| m.as_bytes()), "width", whole.start())?,
            precision: parse_count(caps.get(3).map(|m| m.as_bytes()), "precision", whole.start())?,
            conversion,
        }));
    }
    if last < template.len() {
        pieces.push(Piece::Literal(&template[last..]));
    }
    Ok(pieces)
}

fn expected_kind(conversion: u8) -> Option<&'static str> {
    match conversion {
        b'd' | b'i' | b'u' | b'x' | b'X' | b'o' | b'c' => Some(KIND_INT),
        b'f' | b'F' | b'e' | b'E' | b'g' | b'G' => Some(KIND_FLOAT),
        b'b' => Some(KIND_BOOL),
        _ => None,
    }
}

fn check(pieces: &[Piece<'_>], args: &[FormatArg]) -> Result<(), FormatError> {
    let mut index = 0;
    for piece in pieces {
        let Piece::Directive(d) = piece else {
            continue;
        };
        let Some(arg) = args.get(index) else {
            return Err(FormatError::MissingArgument {
                index,
                offset: d.offset,
                supplied: args.len(),
            });
        };
        if let Some(expected) = expected_kind(d.conversion) {
            if arg.kind_name() != expected {
                return Err(FormatError::KindMismatch {
                    index,
                    conversion: d.conversion as char,
                    expected,
                    actual: arg.kind_name(),
                });
            }
        }
        index += 1;
    }
    if index != args.len() {
        return Err(FormatError::ExtraArguments {
            used: index,
            supplied: args.len(),
        });
    }
    Ok(())
}

/// Validate `template` against `args` without rendering.
pub fn validate(template: impl AsRef<[u8]>, args: &[FormatArg]) -> Result<(), FormatError> {
    let pieces = parse_template(template.as_ref())?;
    check(&pieces, args)
}

/// Render `template` with `args`, or explain why the pair does not match.
pub fn format(template: impl AsRef<[u8]>, args: &[FormatArg]) -> Result<Text, FormatError> {
    let template = template.as_ref();
    let pieces = parse_template(template)?;
    check(&pieces, args)?;
    let mut out = Vec::with_capacity(template.len() + args.len() * 8);
    let mut index = 0;
    for piece in &pieces {
        match piece {
            Piece::Literal(bytes) => out.extend_from_slice(bytes),
            Piece::Percent => out.push(b'%'),
            Piece::Directive(d) => {
                render_directive(d, &args[index], &mut out);
                index += 1;
            }
        }
    }
    Ok(Text::from_vec(out))
}

fn render_directive(d: &Directive, arg: &FormatArg, out: &mut Vec<u8>) {
    let upper = d.conversion.is_ascii_uppercase();
    let mut negative = false;
    let mut radix_prefix: &[u8] = b"";
    let (body, numeric): (Vec<u8>, bool) = match (d.conversion, arg) {
        (b'd' | b'i', FormatArg::Int(n)) => {
            negative = *n < 0;
            let mut buf = itoa::Buffer::new();
            (min_digits(buf.format(n.unsigned_abs()), d.precision), true)
        }
        (b'u', FormatArg::Int(n)) => {
            let mut buf = itoa::Buffer::new();
            (min_digits(buf.format(*n as u64), d.precision), true)
        }
        (b'x' | b'X', FormatArg::Int(n)) => {
            let digits = if upper {
                format!("{:X}", *n as u64)
            } else {
                format!("{:x}", *n as u64)
            };
            if d.flags.alternate && *n != 0 {
                radix_prefix = if upper { b"0X" } else { b"0x" };
            }
            (min_digits(&digits, d.precision), true)
        }
        (b'o', FormatArg::Int(n)) => {
            let mut body = min_digits(&format!("{:o}", *n as u64), d.precision);
            if d.flags.alternate && body.first() != Some(&b'0') {
                body.insert(0, b'0');
            }
            (body, true)
        }
        (b'c', FormatArg::Int(n)) => (vec![*n as u8], false),
        (b'f' | b'F' | b'e' | b'E' | b'g' | b'G', FormatArg::Float(x)) => {
            negative = x.is_sign_negative() && !x.is_nan();
            let precision = d.precision.unwrap_or(6);
            let s = match d.conversion {
                b'f' | b'F' => format_fixed(x.abs(), precision, upper),
                b'e' | b'E' => format_exponent(x.abs(), precision, upper),
                _ => format_general(x.abs(), precision, d.flags.alternate, upper),
            };
            (s.into_bytes(), true)
        }
        (b's', arg) => {
            let mut body = arg.render().into_vec();
            if let Some(p) = d.precision {
                body.truncate(p);
            }
            (body, false)
        }
        (_, arg) => (arg.render().into_vec(), false),
    };

    let sign: &[u8] = if negative {
        b"-"
    } else if numeric && d.flags.plus && signed_conversion(d.conversion) {
        b"+"
    } else if numeric && d.flags.space && signed_conversion(d.conversion) {
        b" "
    } else {
        radix_prefix
    };

    let width = d.width.unwrap_or(0);
    let fill = width.saturating_sub(sign.len() + body.len());
    // Zero padding is ignored for left-justified output, for non-finite
    // floats and for integers with an explicit precision, as in C.
    let zero_pad = d.flags.zero
        && !d.flags.left
        && numeric
        && !(d.precision.is_some() && expected_kind(d.conversion) == Some(KIND_INT))
        && body.first().is_some_and(|c| c.is_ascii_digit());

    if d.flags.left {
        out.extend_from_slice(sign);
        out.extend_from_slice(&body);
        out.resize(out.len() + fill, b' ');
    } else if zero_pad {
        out.extend_from_slice(sign);
        out.resize(out.len() + fill, b'0');
        out.extend_from_slice(&body);
    } else {
        out.resize(out.len() + fill, b' ');
        out.extend_from_slice(sign);
        out.extend_from_slice(&body);
    }
}

fn signed_conversion(conversion: u8) -> bool {
    matches!(
        conversion,
        b'd' | b'i' | b'f' | b'F' | b'e' | b'E' | b'g' | b'G'
    )
}

fn min_digits(digits: &str, precision: Option<usize>) -> Vec<u8> {
    let want = precision.unwrap_or(1);
    let mut out = Vec::with_capacity(want.max(digits.len()));
    // C prints nothing for a zero value with an explicit zero precision.
    if want == 0 && digits == "0" {
        return out;
    }
    out.resize(want.saturating_sub(digits.len()), b'0');
    out.extend_from_slice(digits.as_bytes());
    out
}
