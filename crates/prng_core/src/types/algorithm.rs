//! Algorithm tags for the bit generator family.

use super::error::RngError;
use std::str::FromStr;

/// Identifies a bit generator algorithm.
///
/// Used as the variant tag of [`GeneratorEnum`](crate::generators::GeneratorEnum)
/// and as the selector in [`GeneratorConfig`](crate::generators::GeneratorConfig).
///
/// # Variants
///
/// - `XorShift128Plus`: Vigna's xorshift128+, 128-bit state
/// - `Xoroshiro128Plus`: Blackman and Vigna's xoroshiro128+, 128-bit state
/// - `SplitMix64`: single-word Weyl-sequence generator, state-inspectable
///
/// # Example
///
/// ```
/// use prng_core::types::Algorithm;
///
/// let algorithm: Algorithm = "xoroshiro128+".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Xoroshiro128Plus);
/// assert_eq!(algorithm.as_str(), "xoroshiro128+");
/// assert!(!algorithm.is_stateful());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// xorshift128+ with sign-propagating right shifts.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "xorshift128plus", alias = "xorshift128+")
    )]
    XorShift128Plus,
    /// xoroshiro128+ (period 2^128 - 1).
    #[default]
    #[cfg_attr(
        feature = "serde",
        serde(rename = "xoroshiro128plus", alias = "xoroshiro128+")
    )]
    Xoroshiro128Plus,
    /// SplitMix64 (period 2^64), supports `state()`/`set_state()`.
    #[cfg_attr(feature = "serde", serde(rename = "splitmix64"))]
    SplitMix64,
}

impl Algorithm {
    /// All known algorithms, in declaration order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::XorShift128Plus,
        Algorithm::Xoroshiro128Plus,
        Algorithm::SplitMix64,
    ];

    /// Return the canonical string representation.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::XorShift128Plus => "xorshift128+",
            Algorithm::Xoroshiro128Plus => "xoroshiro128+",
            Algorithm::SplitMix64 => "splitmix64",
        }
    }

    /// Whether generators of this algorithm expose their full state as one `u64`.
    #[inline]
    pub fn is_stateful(&self) -> bool {
        matches!(self, Algorithm::SplitMix64)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xorshift128+" | "xorshift128plus" | "xorshift128_plus" | "xorshift" => {
                Ok(Algorithm::XorShift128Plus)
            }
            "xoroshiro128+" | "xoroshiro128plus" | "xoroshiro128_plus" | "xoroshiro" => {
                Ok(Algorithm::Xoroshiro128Plus)
            }
            "splitmix64" | "split_mix64" | "splitmix" => Ok(Algorithm::SplitMix64),
            _ => Err(RngError::UnknownAlgorithm(s.to_string())),
        }
    }
}
