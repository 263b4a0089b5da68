//! Numeric primitives: constants, elementary functions, integer helpers and
//! random streams.

mod int;
mod math;
mod random;

pub use int::{factorial, fibonacci, gcd, is_prime, lcm};
pub use math::*;
pub use random::{RandomStream, random, random_float, random_int, seed, with_default_stream};
