//! Generator construction from configuration.
//!
//! [`GeneratorConfig`] pairs an [`Algorithm`] with a [`SeedSource`] so the
//! choice of generator and seed can come from a settings file (with the
//! `serde` feature) or be assembled in code.

use super::entropy::entropy_seed;
use super::GeneratorEnum;
use crate::hash::hash64_text;
use crate::types::{Algorithm, RngError};

/// Where a generator's 64-bit seed comes from.
///
/// `Entropy` is the only non-deterministic source and must be chosen
/// explicitly.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::SeedSource;
/// use prng_core::hash::hash64_text;
///
/// assert_eq!(SeedSource::Value(42).resolve().unwrap(), 42);
/// assert_eq!(
///     SeedSource::Text("level-1".into()).resolve().unwrap(),
///     hash64_text("level-1")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeedSource {
    /// Use the integer directly.
    Value(u64),
    /// Use the FNV-1a hash of the text.
    Text(String),
    /// Read a seed from operating system entropy.
    Entropy,
}

impl SeedSource {
    /// Resolves the source to a concrete seed.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EntropyUnavailable`] for `Entropy` if the OS
    /// source fails. `Value` and `Text` never fail.
    pub fn resolve(&self) -> Result<u64, RngError> {
        match self {
            SeedSource::Value(seed) => Ok(*seed),
            SeedSource::Text(text) => Ok(hash64_text(text)),
            SeedSource::Entropy => entropy_seed(),
        }
    }

    /// Whether resolving this source always yields the same seed.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, SeedSource::Entropy)
    }
}

impl From<u64> for SeedSource {
    fn from(seed: u64) -> Self {
        SeedSource::Value(seed)
    }
}

impl From<&str> for SeedSource {
    fn from(text: &str) -> Self {
        SeedSource::Text(text.to_string())
    }
}

/// Generator configuration: algorithm plus seed source.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::{BitGenerator, GeneratorConfig, SeedSource};
/// use prng_core::types::Algorithm;
///
/// let config = GeneratorConfig::new(Algorithm::SplitMix64, SeedSource::Value(0));
/// let mut rng = config.build().expect("deterministic seed");
/// assert_eq!(rng.algorithm(), Algorithm::SplitMix64);
/// assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Algorithm to instantiate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: Algorithm,
    /// Seed source.
    pub seed: SeedSource,
}

impl GeneratorConfig {
    /// Creates a configuration.
    #[inline]
    pub fn new(algorithm: Algorithm, seed: impl Into<SeedSource>) -> Self {
        Self {
            algorithm,
            seed: seed.into(),
        }
    }

    /// Resolves the seed and instantiates the generator.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EntropyUnavailable`] when the seed source is
    /// `Entropy` and the OS source fails.
    pub fn build(&self) -> Result<GeneratorEnum, RngError> {
        let seed = self.seed.resolve()?;
        tracing::debug!(
            algorithm = %self.algorithm,
            deterministic = self.seed.is_deterministic(),
            "building generator from configuration"
        );
        Ok(GeneratorEnum::new(self.algorithm, seed))
    }
}
