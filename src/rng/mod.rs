//! Secure random source, injected as a capability.
//!
//! The generator never constructs its own randomness; callers hand it a
//! [`RandomSource`], which keeps tests deterministic and production draws on
//! the OS CSPRNG.

use rand::Rng;
use rand::rngs::OsRng;

/// Uniform integer draws from a cryptographically secure source.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, n)`.
    ///
    /// `n` must be non-zero; callers check pool emptiness before drawing.
    fn next_below(&mut self, n: usize) -> usize;
}

/// Operating-system CSPRNG (getrandom / /dev/urandom).
///
/// Stateless and thread-safe; entropy acquisition may block inside the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    #[inline]
    fn next_below(&mut self, n: usize) -> usize {
        OsRng.gen_range(0..n)
    }
}
