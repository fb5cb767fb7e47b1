//! Static dispatch enum over the concrete bit generators.

use super::entropy::entropy_seed;
use super::traits::BitGenerator;
use super::{SplitMix64, XorShift128Plus, Xoroshiro128Plus};
use crate::hash::hash64_text;
use crate::types::{Algorithm, RngError};

/// Static dispatch enum wrapping every concrete bit generator.
///
/// Lets the algorithm be chosen at runtime (for example from a
/// [`GeneratorConfig`](super::GeneratorConfig)) without trait objects. Only
/// the [`SplitMix64`] variant carries the state-inspection capability; use
/// [`as_stateful`](GeneratorEnum::as_stateful) to test for it.
///
/// # Variants
///
/// - `XorShift128Plus`: xorshift128+
/// - `Xoroshiro128Plus`: xoroshiro128+
/// - `SplitMix64`: SplitMix64 (state-inspectable)
///
/// # Example
///
/// ```
/// use prng_core::generators::{BitGenerator, GeneratorEnum};
/// use prng_core::types::Algorithm;
///
/// let mut rng = GeneratorEnum::new(Algorithm::XorShift128Plus, 1);
/// assert_eq!(rng.algorithm(), Algorithm::XorShift128Plus);
/// assert_eq!(rng.next_u64(), 0x6001_b0d1_aef4_76e9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorEnum {
    /// xorshift128+ generator
    XorShift128Plus(XorShift128Plus),
    /// xoroshiro128+ generator
    Xoroshiro128Plus(Xoroshiro128Plus),
    /// SplitMix64 generator
    SplitMix64(SplitMix64),
}

impl GeneratorEnum {
    /// Creates a generator of the given algorithm seeded with `seed`.
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        match algorithm {
            Algorithm::XorShift128Plus => {
                GeneratorEnum::XorShift128Plus(XorShift128Plus::new(seed))
            }
            Algorithm::Xoroshiro128Plus => {
                GeneratorEnum::Xoroshiro128Plus(Xoroshiro128Plus::new(seed))
            }
            Algorithm::SplitMix64 => GeneratorEnum::SplitMix64(SplitMix64::new(seed)),
        }
    }

    /// Creates a generator seeded from the FNV-1a hash of `text`.
    #[inline]
    pub fn from_text(algorithm: Algorithm, text: &str) -> Self {
        Self::new(algorithm, hash64_text(text))
    }

    /// Creates a generator seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EntropyUnavailable`] if the OS source fails.
    pub fn from_entropy(algorithm: Algorithm) -> Result<Self, RngError> {
        Ok(Self::new(algorithm, entropy_seed()?))
    }

    /// Returns the inner generator if it supports state inspection.
    #[inline]
    pub fn as_stateful(&self) -> Option<&SplitMix64> {
        match self {
            GeneratorEnum::SplitMix64(rng) => Some(rng),
            _ => None,
        }
    }

    /// Mutable variant of [`as_stateful`](GeneratorEnum::as_stateful).
    #[inline]
    pub fn as_stateful_mut(&mut self) -> Option<&mut SplitMix64> {
        match self {
            GeneratorEnum::SplitMix64(rng) => Some(rng),
            _ => None,
        }
    }

    /// Converts into a state-inspectable generator.
    ///
    /// A [`SplitMix64`] variant is returned unchanged. Any other variant
    /// draws one value that becomes the new generator's seed.
    ///
    /// # Example
    ///
    /// ```
    /// use prng_core::generators::{BitGenerator, GeneratorEnum, SplitMix64};
    /// use prng_core::types::Algorithm;
    ///
    /// let stateful = GeneratorEnum::new(Algorithm::SplitMix64, 9).into_stateful();
    /// assert_eq!(stateful, SplitMix64::new(9));
    ///
    /// let converted = GeneratorEnum::new(Algorithm::Xoroshiro128Plus, 9).into_stateful();
    /// assert_eq!(converted.algorithm(), Algorithm::SplitMix64);
    /// ```
    pub fn into_stateful(self) -> SplitMix64 {
        match self {
            GeneratorEnum::SplitMix64(rng) => rng,
            mut other => SplitMix64::from_generator(&mut other),
        }
    }
}

impl BitGenerator for GeneratorEnum {
    fn seed(&mut self, seed: u64) {
        match self {
            GeneratorEnum::XorShift128Plus(rng) => rng.seed(seed),
            GeneratorEnum::Xoroshiro128Plus(rng) => rng.seed(seed),
            GeneratorEnum::SplitMix64(rng) => rng.seed(seed),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            GeneratorEnum::XorShift128Plus(rng) => rng.next_u64(),
            GeneratorEnum::Xoroshiro128Plus(rng) => rng.next_u64(),
            GeneratorEnum::SplitMix64(rng) => rng.next_u64(),
        }
    }

    #[inline]
    fn algorithm(&self) -> Algorithm {
        match self {
            GeneratorEnum::XorShift128Plus(_) => Algorithm::XorShift128Plus,
            GeneratorEnum::Xoroshiro128Plus(_) => Algorithm::Xoroshiro128Plus,
            GeneratorEnum::SplitMix64(_) => Algorithm::SplitMix64,
        }
    }
}

impl From<XorShift128Plus> for GeneratorEnum {
    fn from(rng: XorShift128Plus) -> Self {
        GeneratorEnum::XorShift128Plus(rng)
    }
}

impl From<Xoroshiro128Plus> for GeneratorEnum {
    fn from(rng: Xoroshiro128Plus) -> Self {
        GeneratorEnum::Xoroshiro128Plus(rng)
    }
}

impl From<SplitMix64> for GeneratorEnum {
    fn from(rng: SplitMix64) -> Self {
        GeneratorEnum::SplitMix64(rng)
    }
}
