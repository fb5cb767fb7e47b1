//! xoroshiro128+ bit generator.
//!
//! Blackman and Vigna's xoroshiro128+ (2016): xor/rotate/shift/rotate over
//! two 64-bit words, period 2^128 − 1. The output is captured before the
//! state update.
//!
//! # Seeding
//!
//! The two state words are the first two outputs of a SplitMix64 stream
//! started at the seed (zero replaced by `u64::MAX`), so each word gets its
//! own Weyl increment rather than both words sharing one mixed value.

use super::entropy::entropy_seed;
use super::mix::{nonzero_seed, splitmix_mix64, GOLDEN_GAMMA};
use super::traits::BitGenerator;
use crate::hash::hash64_text;
use crate::types::{Algorithm, RngError};

/// xoroshiro128+ generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::{BitGenerator, Xoroshiro128Plus};
///
/// let mut a = Xoroshiro128Plus::new(2024);
/// let mut b = Xoroshiro128Plus::new(2024);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    state0: u64,
    state1: u64,
}

impl Xoroshiro128Plus {
    /// Creates a generator seeded with `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state0: 0,
            state1: 0,
        };
        rng.seed(seed);
        rng
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

    /// Returns the two state words `(state0, state1)` for inspection.
    #[inline]
    pub fn state_words(&self) -> (u64, u64) {
        (self.state0, self.state1)
    }
}

impl BitGenerator for Xoroshiro128Plus {
    fn seed(&mut self, seed: u64) {
        let mut z = nonzero_seed(seed);
        z = z.wrapping_add(GOLDEN_GAMMA);
        self.state0 = splitmix_mix64(z);
        z = z.wrapping_add(GOLDEN_GAMMA);
        self.state1 = splitmix_mix64(z);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state0;
        let mut s1 = self.state1;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state0 = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state1 = s1.rotate_left(36);

        result
    }

    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::Xoroshiro128Plus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::SplitMix64;

    #[test]
    fn test_seed_one_reference_outputs() {
        let mut rng = Xoroshiro128Plus::new(1);
        assert_eq!(
            rng.state_words(),
            (0x910a_2dec_8902_5cc1, 0xbeeb_8da1_658e_ec67)
        );
        assert_eq!(rng.next_u64(), 0x4ff5_bb8d_ee91_4928);
        assert_eq!(rng.next_u64(), 0xf005_68db_34fb_b666);
    }

    #[test]
    fn test_state_words_follow_splitmix_stream() {
        let mut stream = SplitMix64::new(12345);
        let rng = Xoroshiro128Plus::new(12345);
        assert_eq!(rng.state_words(), (stream.next_u64(), stream.next_u64()));
    }

    #[test]
    fn test_state_words_differ() {
        for seed in [0u64, 1, 2, u64::MAX] {
            let (s0, s1) = Xoroshiro128Plus::new(seed).state_words();
            assert_ne!(s0, s1, "seed {} produced identical words", seed);
        }
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = Xoroshiro128Plus::new(0);
        let first = rng.next_u64();
        let second = rng.next_u64();
        assert_ne!(first, second);
        assert_ne!(rng.state_words(), (0, 0));
    }
}
