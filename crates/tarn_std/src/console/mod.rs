//! Line-oriented and formatted console I/O.
//!
//! [`Console`] owns a set of host streams plus the unread part of the last
//! input line, so token reads and line reads can be mixed the way a compiled
//! program expects: after `read_int()` consumes `"12"` from `"12 apples\n"`,
//! `read_line()` returns `" apples"`.
//!
//! Numeric reads never fail. A malformed token is consumed and the fallback is
//! returned; end of stream also yields the fallback.
//!
//! Write failures on the host streams (a closed pipe, say) are logged and
//! otherwise ignored, since output operations have no result channel.

mod format;
mod input;
mod render;

use std::cell::RefCell;

use crate::errors::FormatError;
use crate::host::{ConsoleStreams, StdConsole};
use crate::text::Text;

pub use format::{FormatArg, MAX_FIELD, format, validate};
pub use render::{
    KIND_BOOL, KIND_FLOAT, KIND_INT, KIND_TEXT, Render, format_exponent, format_fixed,
    format_general,
};

pub const DEFAULT_DEBUG_LABEL: &str = "[DEBUG]";

pub struct Console {
    streams: Box<dyn ConsoleStreams>,
    pending: Vec<u8>,
    pos: usize,
    debug_label: String,
}

impl Console {
    pub fn new(streams: Box<dyn ConsoleStreams>) -> Self {
        Self {
            streams,
            pending: Vec::new(),
            pos: 0,
            debug_label: DEFAULT_DEBUG_LABEL.to_string(),
        }
    }

    pub fn stdio() -> Self {
        Self::new(Box::new(StdConsole))
    }

    pub fn set_debug_label(&mut self, label: impl Into<String>) {
        self.debug_label = label.into();
    }

    pub fn debug_label(&self) -> &str {
        &self.debug_label
    }

    fn out(&mut self, bytes: &[u8]) {
        if let Err(e) = self.streams.write_out(bytes) {
            tracing::debug!(error = %e, "console write failed");
        }
    }

    fn err(&mut self, bytes: &[u8]) {
        if let Err(e) = self.streams.write_err(bytes) {
            tracing::debug!(error = %e, "diagnostic write failed");
        }
    }

    pub fn print<T: Render + ?Sized>(&mut self, value: &T) {
        let mut buf = Vec::new();
        value.render_into(&mut buf);
        self.out(&buf);
    }

    pub fn println<T: Render + ?Sized>(&mut self, value: &T) {
        let mut buf = Vec::new();
        value.render_into(&mut buf);
        buf.push(b'\n');
        self.out(&buf);
    }

    /// A bare line terminator.
    pub fn newline(&mut self) {
        self.out(b"\n");
    }

    pub fn eprint<T: Render + ?Sized>(&mut self, value: &T) {
        let mut buf = Vec::new();
        value.render_into(&mut buf);
        self.err(&buf);
    }

    pub fn eprintln<T: Render + ?Sized>(&mut self, value: &T) {
        let mut buf = Vec::new();
        value.render_into(&mut buf);
        buf.push(b'\n');
        self.err(&buf);
    }

    /// Format and print. Nothing is written when the template and arguments
    /// do not match.
    pub fn printf(&mut self, template: impl AsRef<[u8]>, args: &[FormatArg]) -> Result<(), FormatError> {
        let rendered = format(template, args)?;
        self.out(&rendered);
        Ok(())
    }

    /// Write `"<label> <value>"` to the diagnostic stream and hand the value
    /// back untouched.
    pub fn dbg<T: Render>(&mut self, value: T) -> T {
        let mut buf = self.debug_label.clone().into_bytes();
        buf.push(b' ');
        value.render_into(&mut buf);
        buf.push(b'\n');
        self.err(&buf);
        value
    }

    /// Like [`Console::dbg`], naming the value: `"<label> name = <value>"`.
    pub fn dbg_named<T: Render>(&mut self, name: &str, value: T) -> T {
        let mut buf = self.debug_label.clone().into_bytes();
        buf.push(b' ');
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b" = ");
        value.render_into(&mut buf);
        buf.push(b'\n');
        self.err(&buf);
        value
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.streams.flush_out() {
            tracing::debug!(error = %e, "console flush failed");
        }
    }
}

thread_local! {
    static STDIO: RefCell<Console> = RefCell::new(Console::stdio());
}

/// Run `f` against this thread's stdio console.
pub fn with_stdio<R>(f: impl FnOnce(&mut Console) -> R) -> R {
    STDIO.with(|c| f(&mut c.borrow_mut()))
}

pub fn print<T: Render + ?Sized>(value: &T) {
    with_stdio(|c| c.print(value));
}

pub fn println<T: Render + ?Sized>(value: &T) {
    with_stdio(|c| c.println(value));
}

pub fn newline() {
    with_stdio(Console::newline);
}

pub fn eprint<T: Render + ?Sized>(value: &T) {
    with_stdio(|c| c.eprint(value));
}

pub fn eprintln<T: Render + ?Sized>(value: &T) {
    with_stdio(|c| c.eprintln(value));
}

pub fn printf(template: impl AsRef<[u8]>, args: &[FormatArg]) -> Result<(), FormatError> {
    with_stdio(|c| c.printf(template, args))
}

pub fn dbg<T: Render>(value: T) -> T {
    with_stdio(|c| c.dbg(value))
}

pub fn readln() -> Text {
    with_stdio(Console::read_line)
}

pub fn read_int() -> i64 {
    with_stdio(Console::read_int)
}

pub fn read_float() -> f64 {
    with_stdio(Console::read_float)
}
