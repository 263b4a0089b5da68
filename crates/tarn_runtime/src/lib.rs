//! Tarn runtime.
//!
//! A dynamically typed realization of the primitive layer: generated code
//! calls builtins by name with [`Value`] arguments, and the runtime guards
//! arity and kinds before delegating to `tarn_std`.

#![allow(clippy::new_without_default)]
#![allow(clippy::unnecessary_cast)]

mod builtins;
pub mod builtins_registry;
pub mod diag;
mod runtime;
mod value;

pub use builtins_registry::{BUILTIN_NAMES, BuiltinFn, BuiltinProvider, BuiltinRegistry, StdBuiltinProvider};
pub use diag::{DiagnosticKind, DiagnosticsFormatter};
pub use runtime::{ExecResult, Runtime, RuntimeConfig};
pub use value::Value;

pub use tarn_std::{Capabilities, Text};
