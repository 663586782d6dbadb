//! RNG module - seeded linear congruential generator
//!
//! Produces a reproducible stream of `f64` values in `[0, 1)`. The same seed
//! always yields the same infinite sequence, which is what makes a game
//! replayable from its seed and inputs alone.

use crate::types::lossy_seed;

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Placement draws through this trait so drivers and tests can substitute
/// their own sources.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Multiplier `a`
    pub const MULTIPLIER: u32 = 1_664_525;
    /// Increment `c`
    pub const INCREMENT: u32 = 1_013_904_223;

    const MODULUS: f64 = 4_294_967_296.0;

    /// Create a new RNG with the given seed.
    ///
    /// Every seed is used as-is, including 0.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create an RNG from any integer, truncated to its low 32 bits.
    ///
    /// Negative seeds wrap around (`-1` becomes `u32::MAX`).
    pub fn from_lossy_seed(seed: i64) -> Self {
        Self::new(lossy_seed(seed))
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Current internal state (what the next draw advances from)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::MODULUS
    }
}
