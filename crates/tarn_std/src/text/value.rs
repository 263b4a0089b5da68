//! Immutable byte string with small string optimization.
//!
//! Every byte is one character. Nothing here validates or interprets UTF-8;
//! `Display` renders lossily for humans, everything else works on raw bytes.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

pub(crate) const INLINE_CAP: usize = 22;

#[derive(Clone)]
pub enum Text {
    Inline { len: u8, buf: [u8; INLINE_CAP] },
    Heap { data: Rc<[u8]> },
}

impl Text {
    pub fn new() -> Self {
        Self::Inline {
            len: 0,
            buf: [0u8; INLINE_CAP],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Text::Inline { len, buf } => &buf[..*len as usize],
            Text::Heap { data } => data,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Text::Inline { len, .. } => *len as usize,
            Text::Heap { data } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_bytes(s: &[u8]) -> Self {
        if s.len() <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            buf[..s.len()].copy_from_slice(s);
            return Self::Inline {
                len: s.len() as u8,
                buf,
            };
        }
        Self::Heap { data: Rc::from(s) }
    }

    pub fn from_vec(s: Vec<u8>) -> Self {
        if s.len() <= INLINE_CAP {
            return Self::from_bytes(&s);
        }
        Self::Heap {
            data: Rc::from(s.into_boxed_slice()),
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Text::Inline { len, buf } => buf[..len as usize].to_vec(),
            Text::Heap { data } => data.to_vec(),
        }
    }

    /// Lossy UTF-8 view, used when handing text to host APIs that want `str`.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Concatenate byte slices, pre-sizing the result.
    pub fn concat_many(parts: &[&[u8]]) -> Text {
        let total: usize = parts.iter().map(|s| s.len()).sum();
        if total == 0 {
            return Text::new();
        }
        if total <= INLINE_CAP {
            let mut buf = [0u8; INLINE_CAP];
            let mut pos = 0;
            for s in parts {
                buf[pos..pos + s.len()].copy_from_slice(s);
                pos += s.len();
            }
            return Text::Inline {
                len: total as u8,
                buf,
            };
        }
        let mut out = Vec::with_capacity(total);
        for s in parts {
            out.extend_from_slice(s);
        }
        Text::from_vec(out)
    }

    #[inline]
    pub fn is_ascii(&self) -> bool {
        self.as_bytes().is_ascii()
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Text::Heap { data: a }, Text::Heap { data: b }) => Rc::ptr_eq(a, b) || a == b,
            _ => self.as_bytes() == other.as_bytes(),
        }
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_bytes().escape_ascii().to_string())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::from_bytes(value.as_bytes())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_vec(value.into_bytes())
    }
}

impl From<&[u8]> for Text {
    fn from(value: &[u8]) -> Self {
        Text::from_bytes(value)
    }
}

impl From<Vec<u8>> for Text {
    fn from(value: Vec<u8>) -> Self {
        Text::from_vec(value)
    }
}

impl From<u8> for Text {
    fn from(value: u8) -> Self {
        Text::from_bytes(&[value])
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for Text {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Deref for Text {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl FromIterator<u8> for Text {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Text::from_vec(iter.into_iter().collect())
    }
}
