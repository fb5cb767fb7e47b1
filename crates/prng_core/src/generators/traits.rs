//! Capability traits for bit generators.
//!
//! - [`BitGenerator`]: the interchangeable 64-bit output contract
//! - [`StatefulGenerator`]: optional capability for generators whose entire
//!   state fits in, and is restorable from, a single `u64`
//!
//! Both traits are used through static dispatch (generics or
//! [`GeneratorEnum`](super::GeneratorEnum)); neither requires `dyn`.

use crate::types::Algorithm;

/// A deterministic source of raw 64-bit values.
///
/// Every call to [`next_u64`](BitGenerator::next_u64) both advances the state
/// and returns a value; there is no peek-without-advance. Instances are
/// single-owner: concurrent use of the same instance needs external
/// synchronisation, while [`copy`](BitGenerator::copy) produces an
/// independent clone that replays the same sequence from the copy point.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::{BitGenerator, XorShift128Plus};
///
/// let mut original = XorShift128Plus::new(7);
/// let mut copy = original.copy();
/// assert_eq!(original.next_u64(), copy.next_u64());
///
/// // Reseeding restarts the sequence deterministically
/// original.seed(7);
/// let mut fresh = XorShift128Plus::new(7);
/// assert_eq!(original.next_u64(), fresh.next_u64());
/// ```
pub trait BitGenerator: Clone {
    /// Re-initialises the state deterministically from a 64-bit seed.
    ///
    /// Seeding is total: no seed is rejected.
    fn seed(&mut self, seed: u64);

    /// Advances the state and returns 64 raw bits.
    fn next_u64(&mut self) -> u64;

    /// Returns the algorithm tag of this generator.
    fn algorithm(&self) -> Algorithm;

    /// Returns an independent clone sharing no mutable state.
    #[inline]
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// A generator whose full state is a single inspectable `u64`.
///
/// `set_state(x)` followed by `state()` returns `x` unchanged, and the
/// sequence produced afterwards is a function of `x` alone.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::{BitGenerator, SplitMix64, StatefulGenerator};
///
/// let mut rng = SplitMix64::new(99);
/// rng.next_u64();
/// let checkpoint = rng.state();
/// let a = rng.next_u64();
///
/// rng.set_state(checkpoint);
/// assert_eq!(rng.next_u64(), a);
/// ```
pub trait StatefulGenerator: BitGenerator {
    /// Returns the complete current state.
    fn state(&self) -> u64;

    /// Replaces the complete state.
    fn set_state(&mut self, state: u64);
}
