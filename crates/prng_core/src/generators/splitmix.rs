//! SplitMix64 bit generator.
//!
//! Steele, Lea and Flood's SplitMix64 (2014): a Weyl sequence with increment
//! `0x9E3779B97F4A7C15`, passed through a 64-bit mix on output. Its whole
//! state is one `u64`, so it is the generator family's only
//! [`StatefulGenerator`]: the state can be read, stored and written back for
//! exact replay. Period is 2^64.
//!
//! Any state word is valid, including zero; seeding stores the seed as-is.

use super::entropy::entropy_seed;
use super::mix::{splitmix_mix64, GOLDEN_GAMMA};
use super::traits::{BitGenerator, StatefulGenerator};
use crate::hash::hash64_text;
use crate::types::{Algorithm, RngError};

/// SplitMix64 generator with a single inspectable state word.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::{BitGenerator, SplitMix64, StatefulGenerator};
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
///
/// rng.set_state(0);
/// assert_eq!(rng.state(), 0);
/// assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator whose state is `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from the FNV-1a hash of `text`.
    #[inline]
    pub fn from_text(text: &str) -> Self {
        Self::new(hash64_text(text))
    }

    /// Creates a generator seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EntropyUnavailable`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, RngError> {
        Ok(Self::new(entropy_seed()?))
    }

    /// Creates a state-inspectable generator from any other generator.
    ///
    /// Draws exactly one value from `source` and uses it as the seed, so
    /// `source` advances by one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::generators::{BitGenerator, SplitMix64, XorShift128Plus};
    ///
    /// let mut source = XorShift128Plus::new(5);
    /// let expected_seed = source.copy().next_u64();
    /// let rng = SplitMix64::from_generator(&mut source);
    /// assert_eq!(rng, SplitMix64::new(expected_seed));
    /// ```
    pub fn from_generator<G: BitGenerator>(source: &mut G) -> Self {
        let seed = source.next_u64();
        tracing::debug!(
            source = %source.algorithm(),
            "seeded splitmix64 from a generator without state access"
        );
        Self::new(seed)
    }
}

impl BitGenerator for SplitMix64 {
    #[inline]
    fn seed(&mut self, seed: u64) {
        self.state = seed;
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        splitmix_mix64(self.state)
    }

    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::SplitMix64
    }
}

impl StatefulGenerator for SplitMix64 {
    #[inline]
    fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn set_state(&mut self, state: u64) {
        tracing::trace!(state, "restoring splitmix64 state");
        self.state = state;
    }
}
