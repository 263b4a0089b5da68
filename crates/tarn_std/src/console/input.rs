//! Line and token input over the buffered remainder of the current line.

use super::Console;
use crate::text::{self, Text};

impl Console {
    /// Make sure unread input is buffered. Returns false at end of stream.
    fn fill(&mut self) -> bool {
        if self.pos < self.pending.len() {
            return true;
        }
        self.pending.clear();
        self.pos = 0;
        // Prompts written with `print` must be visible before blocking.
        self.flush();
        match self.streams.read_line(&mut self.pending) {
            Ok(n) => n > 0,
            Err(e) => {
                tracing::debug!(error = %e, "console read failed");
                self.pending.clear();
                false
            }
        }
    }

    /// The rest of the current line without its terminator; empty at end of
    /// stream.
    pub fn read_line(&mut self) -> Text {
        if !self.fill() {
            return Text::new();
        }
        let rest = &self.pending[self.pos..];
        let (line, consumed) = match rest.iter().position(|&c| c == b'\n') {
            Some(nl) => (&rest[..nl], nl + 1),
            None => (rest, rest.len()),
        };
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let out = Text::from_bytes(line);
        self.pos += consumed;
        out
    }

    /// Next whitespace-delimited token, crossing line boundaries. Empty at end
    /// of stream.
    pub fn read_token(&mut self) -> Text {
        loop {
            if !self.fill() {
                return Text::new();
            }
            while self.pos < self.pending.len() && text::is_space(self.pending[self.pos]) {
                self.pos += 1;
            }
            if self.pos < self.pending.len() {
                break;
            }
        }
        let start = self.pos;
        while self.pos < self.pending.len() && !text::is_space(self.pending[self.pos]) {
            self.pos += 1;
        }
        Text::from_bytes(&self.pending[start..self.pos])
    }

    pub fn read_int_or(&mut self, fallback: i64) -> i64 {
        text::to_int(self.read_token(), fallback)
    }

    pub fn read_float_or(&mut self, fallback: f64) -> f64 {
        text::to_float(self.read_token(), fallback)
    }

    /// Next integer token, 0 when it is missing or malformed.
    pub fn read_int(&mut self) -> i64 {
        self.read_int_or(0)
    }

    /// Next float token, 0.0 when it is missing or malformed.
    pub fn read_float(&mut self) -> f64 {
        self.read_float_or(0.0)
    }
}
