//! Text primitives.
//!
//! Text is a sequence of single-byte characters. Lengths and positions count
//! bytes; no multi-byte decoding is attempted anywhere in this module.

mod ops;
mod parse;
mod value;

pub use ops::*;
pub use parse::{from_float, from_int, to_float, to_int, try_to_float, try_to_int};
pub(crate) use parse::nonfinite_name;
pub use value::Text;
