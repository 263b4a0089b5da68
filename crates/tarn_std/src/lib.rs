//! Tarn runtime primitives.
//!
//! The layer compiled programs link against: byte text, numerics, console
//! I/O and the filesystem. Each family resolves its own failures into
//! sentinels, caller defaults, booleans or options, so nothing here can
//! abort the calling program. Formatted output is the one place a mismatch
//! surfaces as an error ([`errors::FormatError`]).
//!
//! Host access goes through the traits in [`host`]; the families take them
//! by injection and also offer free functions bound to the real host.

#![allow(clippy::new_without_default)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::len_without_is_empty)]

pub mod console;
pub mod errors;
pub mod fs;
pub mod host;
pub mod num;
pub mod text;

pub use console::{Console, FormatArg, Render};
pub use errors::{ErrorKind, FormatError, HostError, HostResult, ParseError};
pub use fs::Fs;
pub use host::{
    BufferedConsole, Capabilities, ConsoleStreams, Entropy, FileKind, FileStat, FileSystem,
    RngAlgorithm, SplitMix64, StdConsole, StdFileSystem, SystemEntropy,
};
pub use num::RandomStream;
pub use text::{NOT_FOUND, Text};
