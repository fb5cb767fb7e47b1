//! Uniform draw engine over any bit generator.
//!
//! [`DrawEngine`] owns one [`BitGenerator`] and derives every value from its
//! raw 64-bit output. Bounded integer draws use rejection sampling, so every
//! value in `[0, bound)` is exactly equally likely whatever the bound.

use super::traits::RandomDraw;
use crate::generators::{BitGenerator, GeneratorEnum, SplitMix64, StatefulGenerator};
use crate::types::{Algorithm, RngError};
use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};

/// Mask selecting the low 53 bits (double mantissa width).
pub(crate) const DOUBLE_MASK: u64 = (1 << 53) - 1;

/// 2^-53.
pub(crate) const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Mask selecting the low 24 bits (float mantissa width).
pub(crate) const FLOAT_MASK: u64 = (1 << 24) - 1;

/// 2^-24.
pub(crate) const FLOAT_UNIT: f64 = 1.0 / (1u64 << 24) as f64;

/// Uniform draw engine.
///
/// Exclusive owner of its generator: cloning or [`copy`](DrawEngine::copy)
/// deep-copies the generator state, and the two engines evolve independently
/// from that point.
///
/// The engine also implements [`rand::RngCore`], so it can drive any
/// `rand`/`rand_distr` distribution.
///
/// # Examples
///
/// ```rust
/// use prng_core::draw::{DrawEngine, RandomDraw};
/// use prng_core::generators::XorShift128Plus;
///
/// let mut engine = DrawEngine::new(XorShift128Plus::new(12345));
///
/// let u = engine.next_double();
/// assert!((0.0..1.0).contains(&u));
///
/// let roll = engine.next_int_bounded(6).unwrap();
/// assert!((0..6).contains(&roll));
///
/// let mut buffer = [0u8; 13];
/// engine.next_bytes(&mut buffer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawEngine<G> {
    generator: G,
}

impl<G: BitGenerator> DrawEngine<G> {
    /// Wraps `generator`, taking ownership of it.
    #[inline]
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Returns the wrapped generator.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Consumes the engine and returns the wrapped generator.
    #[inline]
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// Returns the algorithm tag of the wrapped generator.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.generator.algorithm()
    }

    /// Reseeds the wrapped generator.
    #[inline]
    pub fn seed(&mut self, seed: u64) {
        self.generator.seed(seed);
    }

    /// Returns an independent copy that replays this engine's sequence.
    #[inline]
    pub fn copy(&self) -> Self {
        Self {
            generator: self.generator.copy(),
        }
    }

    /// Advances the generator and returns 64 raw bits.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.generator.next_u64()
    }

    /// Generates a standard normal variate (mean 0, standard deviation 1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`; the
    /// number of raw draws consumed varies with the rejection steps.
    #[inline]
    pub fn next_normal(&mut self) -> f64 {
        StandardNormal.sample(self)
    }

    /// Fills the buffer with uniform values in `[0, 1)`.
    ///
    /// Equivalent to calling [`next_double`](RandomDraw::next_double) once
    /// per element; an empty buffer consumes nothing.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_double();
        }
    }

    /// Fills the buffer with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_normal();
        }
    }
}

impl<G: StatefulGenerator> DrawEngine<G> {
    /// Returns the complete generator state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.generator.state()
    }

    /// Restores the complete generator state.
    #[inline]
    pub fn set_state(&mut self, state: u64) {
        self.generator.set_state(state);
    }
}

impl DrawEngine<SplitMix64> {
    /// Creates a state-inspectable engine seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::draw::{DrawEngine, RandomDraw};
    ///
    /// let mut engine = DrawEngine::stateful(7);
    /// let saved = engine.state();
    /// let a = engine.next_double();
    /// engine.set_state(saved);
    /// assert_eq!(engine.next_double(), a);
    /// ```
    #[inline]
    pub fn stateful(seed: u64) -> Self {
        Self::new(SplitMix64::new(seed))
    }

    /// Creates a state-inspectable engine from any generator variant.
    ///
    /// See [`GeneratorEnum::into_stateful`] for the conversion rule.
    #[inline]
    pub fn from_generator(generator: impl Into<GeneratorEnum>) -> Self {
        Self::new(generator.into().into_stateful())
    }
}

impl<G: BitGenerator> RandomDraw for DrawEngine<G> {
    /// Low 53 bits scaled by 2^-53.
    #[inline]
    fn next_double(&mut self) -> f64 {
        (self.next_u64() & DOUBLE_MASK) as f64 * DOUBLE_UNIT
    }

    /// Low 24 bits scaled by 2^-24.
    #[inline]
    fn next_float(&mut self) -> f32 {
        ((self.next_u64() & FLOAT_MASK) as f64 * FLOAT_UNIT) as f32
    }

    #[inline]
    fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 != 0
    }

    #[inline]
    fn next_int(&mut self) -> i32 {
        self.next_u64() as i32
    }

    #[inline]
    fn next_long(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Rejection sampling over 31-bit draws.
    ///
    /// Values below `threshold = 2^31 mod bound` are redrawn, leaving a
    /// range whose length is a multiple of `bound`.
    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound {
                bound: i64::from(bound),
            });
        }
        let threshold = (i32::MAX - bound + 1) % bound;
        loop {
            let bits = (self.next_u64() & 0x7fff_ffff) as i32;
            if bits >= threshold {
                return Ok(bits % bound);
            }
        }
    }

    /// Rejection sampling over 63-bit draws.
    fn next_long_bounded(&mut self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound { bound });
        }
        let threshold = (i64::MAX - bound + 1) % bound;
        loop {
            let bits = (self.next_u64() & 0x7fff_ffff_ffff_ffff) as i64;
            if bits >= threshold {
                return Ok(bits % bound);
            }
        }
    }

    /// Low `bits` bits of one raw draw.
    #[inline]
    fn next_bits(&mut self, bits: u32) -> u32 {
        let bits = bits.min(32);
        if bits == 0 {
            return 0;
        }
        (self.next_u64() & ((1u64 << bits) - 1)) as u32
    }

    /// One draw per 8 bytes, little-endian; the last draw is truncated.
    fn next_bytes(&mut self, buffer: &mut [u8]) {
        for chunk in buffer.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl<G: BitGenerator> RngCore for DrawEngine<G> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generator.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.generator.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.next_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.next_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{XorShift128Plus, Xoroshiro128Plus};

    #[test]
    fn test_next_double_uses_low_53_bits() {
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        let expected = (0x6001_b0d1_aef4_76e9u64 & DOUBLE_MASK) as f64 * DOUBLE_UNIT;
        assert_eq!(engine.next_double(), expected);
    }

    #[test]
    fn test_next_float_uses_low_24_bits() {
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        let expected = (0x6001_b0d1_aef4_76e9u64 & FLOAT_MASK) as f32 / 16_777_216.0;
        assert_eq!(engine.next_float(), expected);
    }

    #[test]
    fn test_next_int_truncates_to_low_32_bits() {
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        assert_eq!(engine.next_int(), 0xaef4_76e9u32 as i32);
    }

    #[test]
    fn test_next_bits_uses_low_bits() {
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        assert_eq!(engine.next_bits(8), 0xe9);
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        assert_eq!(engine.next_bits(32), 0xaef4_76e9);
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        assert_eq!(engine.next_bits(40), 0xaef4_76e9);
    }

    #[test]
    fn test_next_bits_zero_consumes_nothing() {
        let mut engine = DrawEngine::new(Xoroshiro128Plus::new(6));
        let reference = engine.copy();
        assert_eq!(engine.next_bits(0), 0);
        assert_eq!(engine, reference);
    }

    #[test]
    fn test_next_bool_uses_low_bit() {
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        let mut raw = XorShift128Plus::new(1);
        for _ in 0..4 {
            assert_eq!(engine.next_bool(), raw.next_u64() & 1 == 1);
        }
    }

    #[test]
    fn test_next_bytes_little_endian() {
        let mut engine = DrawEngine::new(XorShift128Plus::new(1));
        let mut buffer = [0u8; 11];
        engine.next_bytes(&mut buffer);
        assert_eq!(&buffer[..8], &0x6001_b0d1_aef4_76e9u64.to_le_bytes());
        assert_eq!(&buffer[8..], &0x30f7_5207_08b9_2cfbu64.to_le_bytes()[..3]);
    }

    #[test]
    fn test_next_bytes_consumes_ceil_n_over_8_draws() {
        for len in [0usize, 1, 7, 8, 9, 16, 17] {
            let mut engine = DrawEngine::new(Xoroshiro128Plus::new(3));
            let mut reference = engine.copy();
            let mut buffer = vec![0u8; len];
            engine.next_bytes(&mut buffer);
            for _ in 0..len.div_ceil(8) {
                reference.next_u64();
            }
            assert_eq!(engine, reference, "len {}", len);
        }
    }

    #[test]
    fn test_invalid_bounds_are_errors_without_consuming() {
        let mut engine = DrawEngine::new(Xoroshiro128Plus::new(9));
        let reference = engine.copy();

        assert_eq!(
            engine.next_int_bounded(0),
            Err(RngError::InvalidBound { bound: 0 })
        );
        assert_eq!(
            engine.next_long_bounded(-3),
            Err(RngError::InvalidBound { bound: -3 })
        );
        assert_eq!(
            engine.next_int_range(5, 5),
            Err(RngError::InvalidRange { lower: 5, upper: 5 })
        );
        assert_eq!(engine, reference);
    }

    #[test]
    fn test_bound_one_always_zero() {
        let mut engine = DrawEngine::new(Xoroshiro128Plus::new(9));
        for _ in 0..100 {
            assert_eq!(engine.next_int_bounded(1), Ok(0));
            assert_eq!(engine.next_long_bounded(1), Ok(0));
        }
    }

    #[test]
    fn test_rejection_threshold_skips_low_draws() {
        // 2^31 mod (2^30 + 1) = 2^30 - 1, so about half of all draws are redrawn
        let bound = (1 << 30) + 1;
        let mut engine = DrawEngine::new(XorShift128Plus::new(4));
        let mut reference = engine.copy();
        let value = engine.next_int_bounded(bound).unwrap();

        let threshold = (i32::MAX - bound + 1) % bound;
        let accepted = loop {
            let bits = (reference.next_u64() & 0x7fff_ffff) as i32;
            if bits >= threshold {
                break bits;
            }
        };
        assert_eq!(value, accepted % bound);
        assert_eq!(engine, reference);
    }

    #[test]
    fn test_int_range_full_width() {
        let mut engine = DrawEngine::new(SplitMix64::new(5));
        for _ in 0..1000 {
            let v = engine.next_int_range(i32::MIN, i32::MAX).unwrap();
            assert!(v < i32::MAX);
        }
        for _ in 0..1000 {
            let v = engine.next_int_range(-10, 10).unwrap();
            assert!((-10..10).contains(&v));
        }
    }

    #[test]
    fn test_stateful_engine_replay() {
        let mut engine = DrawEngine::stateful(2024);
        engine.next_int_bounded(10).unwrap();
        let saved = engine.state();
        let a: Vec<i32> = (0..20).map(|_| engine.next_int()).collect();
        engine.set_state(saved);
        let b: Vec<i32> = (0..20).map(|_| engine.next_int()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_core_interop() {
        let mut engine = DrawEngine::new(Xoroshiro128Plus::new(11));
        let mut reference = engine.copy();
        assert_eq!(RngCore::next_u64(&mut engine), reference.next_u64());
        assert_eq!(
            RngCore::next_u32(&mut engine),
            reference.next_u64() as u32
        );
        let value = engine.next_normal();
        assert!(value.is_finite());
    }
}
