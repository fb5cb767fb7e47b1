//! Draw engine whose doubles follow a configurable mean and spread.
//!
//! Each biased double comes from one raw 64-bit draw. The low 53 bits give a
//! uniform `u`, remapped to `1 - u^k` with `k = e / (1 - e)`, which has mean
//! `e`. With a non-zero centrality, a second variate from the top 24 bits is
//! blended in: a remapped copy (positive centrality, narrower spread) or an
//! arcsine-shaped one (negative centrality, wider spread).

use super::config::BiasConfig;
use super::engine::{DrawEngine, DOUBLE_MASK, DOUBLE_UNIT, FLOAT_UNIT};
use super::traits::RandomDraw;
use crate::generators::{GeneratorEnum, SplitMix64};
use crate::hash::hash64_text;
use crate::types::RngError;
use std::f64::consts::FRAC_PI_2;

/// Largest double below 1.0 (`1 - 2^-53`).
pub const ONE_BELOW: f64 = 1.0 - DOUBLE_UNIT;

/// Blend weight of the primary variate.
const PRIMARY_WEIGHT: f64 = 100.0;

/// Shift that moves the top 24 of 64 bits down.
const SCATTER_SHIFT: u32 = 40;

const FLOAT_SCALE: f64 = (1u64 << 24) as f64;

/// Maps a uniform in `[0, 1)` to `ONE_BELOW - u^exponent`.
#[inline]
fn remap(uniform: f64, exponent: f64) -> f64 {
    ONE_BELOW - uniform.powf(exponent)
}

/// Draw engine with biased doubles.
///
/// Every derived value ([`next_int`](RandomDraw::next_int),
/// [`next_int_bounded`](RandomDraw::next_int_bounded), bytes, shuffles and
/// so on) is computed from the biased [`next_double`](RandomDraw::next_double),
/// so the bias carries through. The engine wraps a [`SplitMix64`] so its state
/// can be saved and restored.
///
/// # Examples
///
/// ```rust
/// use prng_core::draw::{BiasConfig, BiasedDrawEngine, RandomDraw};
///
/// let config = BiasConfig::builder().expected(0.8).build();
/// let mut engine = BiasedDrawEngine::with_config(42, config);
///
/// let n = 10_000;
/// let mean = (0..n).map(|_| engine.next_double()).sum::<f64>() / n as f64;
/// assert!((mean - 0.8).abs() < 0.02);
///
/// // The unbiased uniform behind the last draw
/// let raw = engine.raw_latest();
/// assert!((0.0..1.0).contains(&raw));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BiasedDrawEngine {
    engine: DrawEngine<SplitMix64>,
    config: BiasConfig,
    raw_latest: f64,
}

impl BiasedDrawEngine {
    /// Creates an engine with neutral bias (`expected = 0.5`, `centrality = 0`).
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, BiasConfig::default())
    }

    /// Creates an engine seeded with `seed`.
    #[inline]
    pub fn with_config(seed: u64, config: BiasConfig) -> Self {
        Self::from_engine(DrawEngine::stateful(seed), config)
    }

    /// Creates an engine seeded from the FNV-1a hash of `text`.
    #[inline]
    pub fn from_text(text: &str, config: BiasConfig) -> Self {
        Self::with_config(hash64_text(text), config)
    }

    /// Wraps an existing stateful engine.
    #[inline]
    pub fn from_engine(engine: DrawEngine<SplitMix64>, config: BiasConfig) -> Self {
        Self {
            engine,
            config,
            raw_latest: 0.5,
        }
    }

    /// Creates an engine from any generator variant.
    ///
    /// Non-stateful variants are converted by seeding a [`SplitMix64`] with
    /// one draw, see [`GeneratorEnum::into_stateful`].
    #[inline]
    pub fn from_generator(generator: impl Into<GeneratorEnum>, config: BiasConfig) -> Self {
        Self::from_engine(DrawEngine::from_generator(generator), config)
    }

    /// Creates an engine seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EntropyUnavailable`] if the OS source fails.
    pub fn from_entropy(config: BiasConfig) -> Result<Self, RngError> {
        Ok(Self::from_engine(
            DrawEngine::new(SplitMix64::from_entropy()?),
            config,
        ))
    }

    /// Returns the expected mean.
    #[inline]
    pub fn expected(&self) -> f64 {
        self.config.expected()
    }

    /// Updates the expected mean (repaired as in [`BiasConfig::new`]).
    #[inline]
    pub fn set_expected(&mut self, expected: f64) {
        self.config.set_expected(expected);
    }

    /// Returns the centrality.
    #[inline]
    pub fn centrality(&self) -> f64 {
        self.config.centrality()
    }

    /// Updates the centrality (repaired as in [`BiasConfig::new`]).
    #[inline]
    pub fn set_centrality(&mut self, centrality: f64) {
        self.config.set_centrality(centrality);
    }

    /// Returns the bias configuration.
    #[inline]
    pub fn config(&self) -> &BiasConfig {
        &self.config
    }

    /// Returns the underlying uniform engine.
    #[inline]
    pub fn engine(&self) -> &DrawEngine<SplitMix64> {
        &self.engine
    }

    /// Returns `ONE_BELOW - u` for the uniform `u` behind the latest biased
    /// double, or 0.5 before the first draw.
    ///
    /// With neutral bias this equals the latest double exactly.
    #[inline]
    pub fn raw_latest(&self) -> f64 {
        self.raw_latest
    }

    /// Returns the generator state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.engine.state()
    }

    /// Restores the generator state. `raw_latest` is left unchanged.
    #[inline]
    pub fn set_state(&mut self, state: u64) {
        self.engine.set_state(state);
    }

    /// Returns an independent copy, including bias and `raw_latest`.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Draws one biased double and records `raw_latest`.
    fn biased_double(&mut self) -> f64 {
        let bits = self.engine.next_u64();
        let uniform = (bits & DOUBLE_MASK) as f64 * DOUBLE_UNIT;
        let scatter = (bits >> SCATTER_SHIFT) as f64 * FLOAT_UNIT;
        self.raw_latest = ONE_BELOW - uniform;

        let expected = self.config.expected();
        let centrality = self.config.centrality();
        let exponent = 1.0 / (1.0 - expected) - 1.0;
        let mut value = remap(uniform, exponent);

        if centrality > 0.0 {
            let scatter = remap(scatter, exponent);
            value = (value * PRIMARY_WEIGHT + scatter * centrality)
                / (PRIMARY_WEIGHT + centrality);
        } else if centrality < 0.0 {
            let shaped = (scatter * FRAC_PI_2).sin().powi(2);
            let scatter = if expected >= 0.5 {
                shaped * (1.0 - expected) * 2.0 + expected - (1.0 - expected)
            } else {
                shaped * expected * 2.0
            };
            let weight = -centrality;
            value = (value * PRIMARY_WEIGHT + scatter * weight) / (PRIMARY_WEIGHT + weight);
        }

        // powf rounding can land a hair outside [0, 1)
        value.clamp(0.0, ONE_BELOW)
    }
}

impl RandomDraw for BiasedDrawEngine {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.biased_double()
    }

    /// The biased double truncated to 24 bits.
    #[inline]
    fn next_float(&mut self) -> f32 {
        let truncated = (self.biased_double() * FLOAT_SCALE) as u32;
        (f64::from(truncated) * FLOAT_UNIT) as f32
    }

    #[inline]
    fn next_bool(&mut self) -> bool {
        self.biased_double() >= 0.5
    }

    #[inline]
    fn next_int(&mut self) -> i32 {
        ((self.biased_double() * 2.0 - 1.0) * f64::from(i32::MAX)) as i32
    }

    #[inline]
    fn next_long(&mut self) -> i64 {
        ((self.biased_double() * 2.0 - 1.0) * i64::MAX as f64) as i64
    }

    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound {
                bound: i64::from(bound),
            });
        }
        let scaled = (self.biased_double() * f64::from(bound)) as i32;
        Ok(scaled.min(bound - 1))
    }

    fn next_long_bounded(&mut self, bound: i64) -> Result<i64, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound { bound });
        }
        // bound as f64 may round up to the next power of two
        let scaled = (self.biased_double() * bound as f64) as i64;
        Ok(scaled.min(bound - 1))
    }

    /// The biased double scaled by `2^bits` and truncated.
    fn next_bits(&mut self, bits: u32) -> u32 {
        let bits = bits.min(32);
        if bits == 0 {
            return 0;
        }
        // d < 1, so the product stays below 2^bits
        (self.biased_double() * (1u64 << bits) as f64) as u32
    }

    /// One biased double per byte.
    fn next_bytes(&mut self, buffer: &mut [u8]) {
        for byte in buffer.iter_mut() {
            *byte = (self.biased_double() * 256.0) as u8;
        }
    }
}
