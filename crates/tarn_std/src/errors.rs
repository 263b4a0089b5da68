//! Error taxonomy shared by every primitive family.
//!
//! Errors only travel inside the layer. Public contract functions collapse
//! them into sentinels, defaults, booleans or options before returning.

use std::io;

use thiserror::Error;

use crate::text::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    IoFailure,
    ConversionFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::IoFailure => "i/o failure",
            ErrorKind::ConversionFailure => "conversion failure",
        }
    }
}

/// A failed request to the host platform.
#[derive(Debug, Error)]
#[error("{op} {path}: {message}")]
pub struct HostError {
    pub kind: ErrorKind,
    pub op: &'static str,
    pub path: String,
    pub message: String,
}

impl HostError {
    pub fn new(kind: ErrorKind, op: &'static str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            op,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn from_io(op: &'static str, path: impl Into<String>, err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::InvalidInput => ErrorKind::InvalidArgument,
            _ => ErrorKind::IoFailure,
        };
        Self::new(kind, op, path, err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

pub type HostResult<T> = Result<T, HostError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty numeric text")]
    Empty,
    #[error("malformed numeric text: {0}")]
    Malformed(Text),
    #[error("numeric text out of range: {0}")]
    OutOfRange(Text),
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ConversionFailure
    }
}

/// A template/argument mismatch detected before any output is produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("directive {index} at byte {offset} has no argument ({supplied} supplied)")]
    MissingArgument {
        index: usize,
        offset: usize,
        supplied: usize,
    },
    #[error("template uses {used} arguments but {supplied} were supplied")]
    ExtraArguments { used: usize, supplied: usize },
    #[error("directive %{conversion} (argument {index}) expects {expected} but got {actual}")]
    KindMismatch {
        index: usize,
        conversion: char,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("unknown directive {directive:?} at byte {offset}")]
    UnknownDirective { offset: usize, directive: String },
    #[error("dangling '%' at byte {offset}")]
    DanglingPercent { offset: usize },
    #[error("{field} {value} at byte {offset} exceeds the limit of {max}")]
    FieldTooWide {
        offset: usize,
        field: &'static str,
        value: String,
        max: usize,
    },
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
