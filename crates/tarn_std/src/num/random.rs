//! Reproducible pseudo-random streams.
//!
//! A [`RandomStream`] is fully determined by its seed, its algorithm and the
//! ordered sequence of draws made from it. The distribution mapping below is
//! part of the contract, so two realizations seeded alike agree bit for bit:
//!
//! - `random()` takes the top 53 bits of one draw and scales by 2^-53.
//! - `random_int(lo, hi)` rejects draws in the biased tail of `u64`, then
//!   reduces modulo the inclusive span.
//! - `random_float(lo, hi)` scales `random()` and redraws the rare result
//!   that rounds up to `hi`.
//!
//! The process-wide default stream is a convenience only. It is seeded from
//! host entropy on first use and shared by every thread, so interleaved draws
//! from several threads have no defined order.

use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::host::{Entropy, RngAlgorithm, SplitMix64, SystemEntropy};

const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Draws `random_float` attempts before giving up on landing below `hi`.
pub const MAX_FLOAT_REDRAWS: usize = 64;

/// The largest finite double strictly below `x`, for finite `x`.
fn below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

pub struct RandomStream {
    state: u64,
    algo: Box<dyn RngAlgorithm>,
}

impl RandomStream {
    pub fn new(seed: u64) -> Self {
        Self::with_algorithm(seed, Box::new(SplitMix64))
    }

    pub fn with_algorithm(seed: u64, algo: Box<dyn RngAlgorithm>) -> Self {
        tracing::trace!(seed, "random stream seeded");
        Self { state: seed, algo }
    }

    pub fn from_entropy(entropy: &dyn Entropy) -> Self {
        Self::new(entropy.seed())
    }

    /// Reset to the start of the sequence for `seed`.
    pub fn seed(&mut self, seed: u64) {
        tracing::trace!(seed, "random stream reseeded");
        self.state = seed;
    }

    pub fn set_algorithm(&mut self, algo: Box<dyn RngAlgorithm>) {
        self.algo = algo;
    }

    pub fn next_u64(&mut self) -> u64 {
        self.algo.next_u64(&mut self.state)
    }

    /// Uniform in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// Uniform over `[lo, hi]`, both inclusive. Reversed bounds are swapped.
    pub fn random_int(&mut self, lo: i64, hi: i64) -> i64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = hi.wrapping_sub(lo) as u64;
        if span == u64::MAX {
            return self.next_u64() as i64;
        }
        let span = span + 1;
        let zone = u64::MAX - (u64::MAX % span);
        loop {
            let draw = self.next_u64();
            if draw < zone {
                return lo.wrapping_add((draw % span) as i64);
            }
        }
    }

    /// Uniform over `[lo, hi)`. An empty or non-finite range returns `lo`
    /// without consuming a draw.
    ///
    /// A width too large for `f64` is interpolated as `lo * (1 - u) + hi * u`.
    /// After [`MAX_FLOAT_REDRAWS`] draws that all round up to `hi`, the
    /// largest double below `hi` is returned.
    pub fn random_float(&mut self, lo: f64, hi: f64) -> f64 {
        if !(lo < hi) || !lo.is_finite() || !hi.is_finite() {
            return lo;
        }
        let width = hi - lo;
        for _ in 0..MAX_FLOAT_REDRAWS {
            let u = self.random();
            let x = if width.is_finite() {
                lo + u * width
            } else {
                (lo * (1.0 - u) + hi * u).max(lo)
            };
            if x < hi {
                return x;
            }
        }
        below(hi)
    }
}

fn default_stream() -> MutexGuard<'static, RandomStream> {
    static DEFAULT: OnceLock<Mutex<RandomStream>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Mutex::new(RandomStream::from_entropy(&SystemEntropy)))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run `f` against the process-wide stream.
pub fn with_default_stream<R>(f: impl FnOnce(&mut RandomStream) -> R) -> R {
    f(&mut default_stream())
}

pub fn random() -> f64 {
    with_default_stream(RandomStream::random)
}

pub fn random_int(lo: i64, hi: i64) -> i64 {
    with_default_stream(|s| s.random_int(lo, hi))
}

pub fn random_float(lo: f64, hi: f64) -> f64 {
    with_default_stream(|s| s.random_float(lo, hi))
}

pub fn seed(s: u64) {
    with_default_stream(|stream| stream.seed(s));
}
