//! # Bit Generators
//!
//! Interchangeable 64-bit pseudo-random bit generators with deterministic
//! seeding. Every generator is non-cryptographic and single-owner.
//!
//! ## Algorithms
//!
//! | Type                 | State    | Period      | State access |
//! |----------------------|----------|-------------|--------------|
//! | [`XorShift128Plus`]  | 2 × u64  | unproven    | reseed only  |
//! | [`Xoroshiro128Plus`] | 2 × u64  | 2^128 − 1   | reseed only  |
//! | [`SplitMix64`]       | 1 × u64  | 2^64        | `state()` / `set_state()` |
//!
//! ## Module Structure
//!
//! - [`traits`]: [`BitGenerator`] and [`StatefulGenerator`] capabilities
//! - [`mix`]: avalanche mixing functions used by seeding
//! - [`GeneratorEnum`]: runtime-selectable static dispatch over all variants
//! - [`GeneratorConfig`] / [`SeedSource`]: construction from configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::generators::{BitGenerator, GeneratorEnum, StatefulGenerator};
//! use prng_core::types::Algorithm;
//!
//! let mut rng = GeneratorEnum::from_text(Algorithm::Xoroshiro128Plus, "world-seed");
//! let raw = rng.next_u64();
//!
//! // Exact replay needs a state-inspectable generator
//! let mut stateful = rng.into_stateful();
//! let saved = stateful.state();
//! let a = stateful.next_u64();
//! stateful.set_state(saved);
//! assert_eq!(stateful.next_u64(), a);
//! # let _ = raw;
//! ```

mod config;
mod entropy;
mod generator_enum;
pub mod mix;
mod splitmix;
pub mod traits;
mod xoroshiro;
mod xorshift;

pub use config::{GeneratorConfig, SeedSource};
pub use entropy::entropy_seed;
pub use generator_enum::GeneratorEnum;
pub use splitmix::SplitMix64;
pub use traits::{BitGenerator, StatefulGenerator};
pub use xoroshiro::Xoroshiro128Plus;
pub use xorshift::XorShift128Plus;

#[cfg(test)]
mod tests;
