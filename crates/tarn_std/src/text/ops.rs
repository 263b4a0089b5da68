//! Byte-oriented text operations.
//!
//! Positions are `i64` so that the "not found" sentinel `-1` is a real
//! negative number. Out-of-range indices are clamped, never rejected.

use super::Text;

/// Returned by `index_of`/`last_index_of` when the needle is absent.
pub const NOT_FOUND: i64 = -1;

/// The character `char_at` yields for an out-of-range position.
pub const NUL: u8 = 0;

/// Bytes removed by the trim family.
const TRIM_SET: &[u8] = b" \t\n\r\x0C\x0B";

pub fn len(s: impl AsRef<[u8]>) -> i64 {
    s.as_ref().len() as i64
}

pub fn is_empty(s: impl AsRef<[u8]>) -> bool {
    s.as_ref().is_empty()
}

pub fn char_at(s: impl AsRef<[u8]>, index: i64) -> u8 {
    let s = s.as_ref();
    if index < 0 {
        return NUL;
    }
    s.get(index as usize).copied().unwrap_or(NUL)
}

/// `s[start..end]` with both ends clamped into range.
///
/// A start at or past the end of the text yields an empty value; an end before
/// the start does too.
pub fn substring(s: impl AsRef<[u8]>, start: i64, end: i64) -> Text {
    let s = s.as_ref();
    let n = s.len() as i64;
    let start = start.max(0);
    if start >= n {
        return Text::new();
    }
    let end = end.min(n);
    if end <= start {
        return Text::new();
    }
    Text::from_bytes(&s[start as usize..end as usize])
}

pub fn substring_from(s: impl AsRef<[u8]>, start: i64) -> Text {
    let s = s.as_ref();
    substring(s, start, s.len() as i64)
}

/// Python-style slice. Negative bounds count from the end, then both bounds
/// are clamped into `[0, len]`.
pub fn slice(s: impl AsRef<[u8]>, start: i64, end: i64) -> Text {
    let s = s.as_ref();
    let (start, end) = resolve_range(s.len(), start, end);
    if start >= end {
        return Text::new();
    }
    Text::from_bytes(&s[start..end])
}

pub fn slice_from(s: impl AsRef<[u8]>, start: i64) -> Text {
    let s = s.as_ref();
    slice(s, start, s.len() as i64)
}

/// Resolve a possibly negative `(start, end)` pair against `len`.
pub fn resolve_range(len: usize, start: i64, end: i64) -> (usize, usize) {
    let n = len as i64;
    let clamp = |i: i64| -> usize {
        let i = if i < 0 { n.saturating_add(i) } else { i };
        i.clamp(0, n) as usize
    };
    (clamp(start), clamp(end))
}

pub(crate) fn find_from(hay: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > hay.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    if needle.len() > hay.len() - from {
        return None;
    }
    hay[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn rfind(hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(hay.len());
    }
    if needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len()).rposition(|w| w == needle)
}

pub fn index_of(s: impl AsRef<[u8]>, search: impl AsRef<[u8]>) -> i64 {
    index_of_from(s, search, 0)
}

/// Search starting at `from`; a negative start searches from 0.
pub fn index_of_from(s: impl AsRef<[u8]>, search: impl AsRef<[u8]>, from: i64) -> i64 {
    let from = from.max(0) as usize;
    match find_from(s.as_ref(), search.as_ref(), from) {
        Some(p) => p as i64,
        None => NOT_FOUND,
    }
}

pub fn last_index_of(s: impl AsRef<[u8]>, search: impl AsRef<[u8]>) -> i64 {
    match rfind(s.as_ref(), search.as_ref()) {
        Some(p) => p as i64,
        None => NOT_FOUND,
    }
}

pub fn contains(s: impl AsRef<[u8]>, search: impl AsRef<[u8]>) -> bool {
    index_of(s, search) != NOT_FOUND
}

pub fn starts_with(s: impl AsRef<[u8]>, prefix: impl AsRef<[u8]>) -> bool {
    s.as_ref().starts_with(prefix.as_ref())
}

pub fn ends_with(s: impl AsRef<[u8]>, suffix: impl AsRef<[u8]>) -> bool {
    s.as_ref().ends_with(suffix.as_ref())
}

// Case conversion and classification only touch 7-bit ASCII; any byte >= 0x80
// passes through unchanged and classifies as false.

pub fn to_upper(s: impl AsRef<[u8]>) -> Text {
    s.as_ref().iter().map(u8::to_ascii_uppercase).collect()
}

pub fn to_lower(s: impl AsRef<[u8]>) -> Text {
    s.as_ref().iter().map(u8::to_ascii_lowercase).collect()
}

/// Upper-case the first byte only.
pub fn capitalize(s: impl AsRef<[u8]>) -> Text {
    let s = s.as_ref();
    match s.split_first() {
        None => Text::new(),
        Some((first, rest)) => {
            let head = [first.to_ascii_uppercase()];
            Text::concat_many(&[&head[..], rest])
        }
    }
}

pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alnum(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Space, tab, newline, carriage return, form feed and vertical tab.
pub fn is_space(c: u8) -> bool {
    TRIM_SET.contains(&c)
}

/// True for non-empty text made only of digits, `.`, `-` and `+`.
///
/// This is a character-set check, not a grammar check: `"1-2"` passes.
pub fn is_numeric(s: impl AsRef<[u8]>) -> bool {
    let s = s.as_ref();
    !s.is_empty()
        && s
            .iter()
            .all(|&c| c.is_ascii_digit() || c == b'.' || c == b'-' || c == b'+')
}

pub fn trim_left(s: impl AsRef<[u8]>) -> Text {
    let s = s.as_ref();
    match s.iter().position(|c| !is_space(*c)) {
        Some(start) => Text::from_bytes(&s[start..]),
        None => Text::new(),
    }
}

pub fn trim_right(s: impl AsRef<[u8]>) -> Text {
    let s = s.as_ref();
    match s.iter().rposition(|c| !is_space(*c)) {
        Some(end) => Text::from_bytes(&s[..=end]),
        None => Text::new(),
    }
}

pub fn trim(s: impl AsRef<[u8]>) -> Text {
    trim_right(trim_left(s))
}

/// Split on every occurrence of `delimiter`.
///
/// An empty delimiter yields one element per byte (and nothing for empty
/// input). A non-empty delimiter always yields at least one element.
pub fn split(s: impl AsRef<[u8]>, delimiter: impl AsRef<[u8]>) -> Vec<Text> {
    let s = s.as_ref();
    let delimiter = delimiter.as_ref();
    if delimiter.is_empty() {
        return s.iter().map(|&c| Text::from(c)).collect();
    }
    let mut parts = Vec::new();
    let mut start = 0;
    while let Some(pos) = find_from(s, delimiter, start) {
        parts.push(Text::from_bytes(&s[start..pos]));
        start = pos + delimiter.len();
    }
    parts.push(Text::from_bytes(&s[start..]));
    parts
}

pub fn join<P: AsRef<[u8]>>(parts: &[P], delimiter: impl AsRef<[u8]>) -> Text {
    let delimiter = delimiter.as_ref();
    let Some((first, rest)) = parts.split_first() else {
        return Text::new();
    };
    let total = parts.iter().map(|p| p.as_ref().len()).sum::<usize>()
        + delimiter.len() * rest.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(first.as_ref());
    for p in rest {
        out.extend_from_slice(delimiter);
        out.extend_from_slice(p.as_ref());
    }
    Text::from_vec(out)
}

/// Replace every non-overlapping occurrence, scanning left to right.
pub fn replace(s: impl AsRef<[u8]>, from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> Text {
    let (s, from, to) = (s.as_ref(), from.as_ref(), to.as_ref());
    if from.is_empty() {
        return Text::from_bytes(s);
    }
    let mut out = Vec::with_capacity(s.len());
    let mut start = 0;
    while let Some(pos) = find_from(s, from, start) {
        out.extend_from_slice(&s[start..pos]);
        out.extend_from_slice(to);
        start = pos + from.len();
    }
    out.extend_from_slice(&s[start..]);
    Text::from_vec(out)
}

pub fn replace_first(s: impl AsRef<[u8]>, from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> Text {
    let (s, from, to) = (s.as_ref(), from.as_ref(), to.as_ref());
    if from.is_empty() {
        return Text::from_bytes(s);
    }
    match find_from(s, from, 0) {
        Some(pos) => Text::concat_many(&[&s[..pos], to, &s[pos + from.len()..]]),
        None => Text::from_bytes(s),
    }
}

/// Buffer for `len` bytes, or `None` when the size cannot be allocated.
fn try_buffer(len: usize) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).ok()?;
    Some(out)
}

/// `s` repeated `count` times. A count of zero or less, or a result too
/// large to allocate, gives empty text.
pub fn repeat(s: impl AsRef<[u8]>, count: i64) -> Text {
    let s = s.as_ref();
    if count <= 0 || s.is_empty() {
        return Text::new();
    }
    let Some(total) = usize::try_from(count).ok().and_then(|c| c.checked_mul(s.len())) else {
        return Text::new();
    };
    let Some(mut out) = try_buffer(total) else {
        return Text::new();
    };
    for _ in 0..count {
        out.extend_from_slice(s);
    }
    Text::from_vec(out)
}

pub fn pad_left(s: impl AsRef<[u8]>, width: i64) -> Text {
    pad_left_with(s, width, b' ')
}

pub fn pad_right(s: impl AsRef<[u8]>, width: i64) -> Text {
    pad_right_with(s, width, b' ')
}

/// Fill on the left up to `width` bytes. A width too large to allocate
/// gives empty text.
pub fn pad_left_with(s: impl AsRef<[u8]>, width: i64, fill: u8) -> Text {
    let s = s.as_ref();
    let Some(missing) = padding_needed(s, width) else {
        return Text::from_bytes(s);
    };
    let Some(mut out) = try_buffer(s.len() + missing) else {
        return Text::new();
    };
    out.resize(missing, fill);
    out.extend_from_slice(s);
    Text::from_vec(out)
}

/// Fill on the right up to `width` bytes. A width too large to allocate
/// gives empty text.
pub fn pad_right_with(s: impl AsRef<[u8]>, width: i64, fill: u8) -> Text {
    let s = s.as_ref();
    let Some(missing) = padding_needed(s, width) else {
        return Text::from_bytes(s);
    };
    let Some(mut out) = try_buffer(s.len() + missing) else {
        return Text::new();
    };
    out.extend_from_slice(s);
    out.resize(s.len() + missing, fill);
    Text::from_vec(out)
}

fn padding_needed(s: &[u8], width: i64) -> Option<usize> {
    let width = usize::try_from(width).ok()?;
    width.checked_sub(s.len()).filter(|m| *m > 0)
}

pub fn reverse(s: impl AsRef<[u8]>) -> Text {
    s.as_ref().iter().rev().copied().collect()
}
