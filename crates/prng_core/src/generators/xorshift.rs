//! xorshift128+ bit generator.
//!
//! Vigna's xorshift128+ (2014) shift triple (23, 17, 26) over two 64-bit
//! words; output is the wrapping sum of the two words after the shift step.
//! Both right shifts propagate the sign bit. The recurrence stays linear,
//! but the 2^128 − 1 period of the logical-shift variant is not guaranteed.
//!
//! # Seeding
//!
//! A 64-bit seed is expanded into 128 bits of state by chaining
//! [`murmur_fmix64`] three times. A zero seed is replaced by `u64::MAX`
//! first. Both `0` and `u64::MAX` then mix to zero, so those two seeds fall
//! back to [`GOLDEN_GAMMA`] and the state is never all-zero. The mix is
//! eight-to-one, so groups of eight seeds share a sequence.

use super::entropy::entropy_seed;
use super::mix::{murmur_fmix64, nonzero_seed, sar, GOLDEN_GAMMA};
use super::traits::BitGenerator;
use crate::hash::hash64_text;
use crate::types::{Algorithm, RngError};

/// xorshift128+ generator.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::{BitGenerator, XorShift128Plus};
///
/// let mut rng = XorShift128Plus::new(1);
/// assert_eq!(rng.next_u64(), 0x6001_b0d1_aef4_76e9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift128Plus {
    state0: u64,
    state1: u64,
}

impl XorShift128Plus {
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
    ///
    /// The words cannot be written back; use [`BitGenerator::seed`] or
    /// [`BitGenerator::copy`] to reproduce a sequence.
    #[inline]
    pub fn state_words(&self) -> (u64, u64) {
        (self.state0, self.state1)
    }
}

impl BitGenerator for XorShift128Plus {
    fn seed(&mut self, seed: u64) {
        let mut mixed = murmur_fmix64(nonzero_seed(seed));
        if mixed == 0 {
            mixed = murmur_fmix64(GOLDEN_GAMMA);
        }
        // mixed is non-zero and below 2^63, so state1 cannot mix to zero
        self.state1 = murmur_fmix64(mixed);
        self.state0 = murmur_fmix64(self.state1);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state0;
        let s0 = self.state1;
        self.state0 = s0;
        s1 ^= s1 << 23;
        self.state1 = s1 ^ s0 ^ sar(s1, 17) ^ sar(s0, 26);
        self.state1.wrapping_add(s0)
    }

    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::XorShift128Plus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_one_reference_state() {
        let rng = XorShift128Plus::new(1);
        assert_eq!(
            rng.state_words(),
            (0x3097_7ade_decb_f3f5, 0x4c9c_f084_d54c_1ba3)
        );
    }

    #[test]
    fn test_seed_one_reference_outputs() {
        let mut rng = XorShift128Plus::new(1);
        assert_eq!(rng.next_u64(), 0x6001_b0d1_aef4_76e9);
        assert_eq!(rng.next_u64(), 0x30f7_5207_08b9_2cfb);
        assert_eq!(rng.next_u64(), 0x462d_3112_6a3d_2ae1);
    }

    #[test]
    fn test_zero_seed_matches_sentinel_seed() {
        let mut zero = XorShift128Plus::new(0);
        let mut sentinel = XorShift128Plus::new(u64::MAX);
        assert_ne!(zero.state_words(), (0, 0));
        assert_eq!(zero.next_u64(), 0x7fac_e291_bd89_85f0);
        assert_eq!(sentinel.next_u64(), 0x7fac_e291_bd89_85f0);
    }

    #[test]
    fn test_collapsing_seeds_fall_back_to_golden_gamma() {
        let fallback = XorShift128Plus::new(GOLDEN_GAMMA);
        assert_eq!(XorShift128Plus::new(0), fallback);
        assert_eq!(XorShift128Plus::new(u64::MAX), fallback);
        assert_eq!(
            fallback.state_words(),
            (0x2e15_dea2_3ac7_6815, 0x7d52_b007_61d4_ca65)
        );
    }

    #[test]
    fn test_complement_seeds_share_a_sequence() {
        for seed in [1u64, 42, 0x0123_4567_89ab_cdef] {
            assert_eq!(XorShift128Plus::new(seed), XorShift128Plus::new(!seed));
        }
    }

    #[test]
    fn test_right_shifts_propagate_sign() {
        // state0 with the top bit set exercises the sign-propagating s1 >> 17
        let mut rng = XorShift128Plus {
            state0: 0x8000_0000_0000_0000,
            state1: 0,
        };
        // s1 ^= s1 << 23 leaves only the top bit; s1 >> 17 then fills bits 46..=63
        assert_eq!(rng.next_u64(), 0x7fff_c000_0000_0000);
        assert_eq!(rng.state_words(), (0, 0x7fff_c000_0000_0000));
    }

    #[test]
    fn test_from_text_is_stable() {
        let mut a = XorShift128Plus::from_text("seed phrase");
        let mut b = XorShift128Plus::from_text("seed phrase");
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_algorithm_tag() {
        assert_eq!(
            XorShift128Plus::new(3).algorithm(),
            Algorithm::XorShift128Plus
        );
    }
}
