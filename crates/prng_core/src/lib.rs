//! # prng_core: Pluggable Pseudo-Random Number Generation
//!
//! Deterministic, non-cryptographic random number generation built from
//! three layers:
//!
//! - Bit generators (`generators`): XorShift128+, Xoroshiro128+ and the
//!   state-inspectable SplitMix64, behind the [`BitGenerator`] trait
//! - Draw engines (`draw`): uniform values with bias-free bounded integers
//!   ([`DrawEngine`]), and doubles with a configurable mean and spread
//!   ([`BiasedDrawEngine`])
//! - Seed derivation (`hash`): 64-bit FNV-1a for seeding from text
//!
//! Errors are reported through [`RngError`] (`types::error`).
//!
//! ## Determinism
//!
//! The same algorithm and seed always yield the same sequence, on every
//! platform. Operating system entropy is used only when asked for
//! explicitly (`from_entropy` constructors, [`SeedSource::Entropy`]).
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{BiasConfig, BiasedDrawEngine, DrawEngine, RandomDraw, XorShift128Plus};
//!
//! // Uniform draws from a specific generator
//! let mut engine = DrawEngine::new(XorShift128Plus::new(1));
//! let card = engine.next_int_bounded(52).unwrap();
//! assert!((0..52).contains(&card));
//!
//! // Biased draws, replayable from a saved state
//! let mut loot = BiasedDrawEngine::from_text("chest-3", BiasConfig::new(0.2, 0.0));
//! let saved = loot.state();
//! let first = loot.next_double();
//! loot.set_state(saved);
//! assert_eq!(loot.next_double(), first);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `tracing` facade (entropy seeding, generator
//! conversion, parameter repair) and never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Algorithm`, `SeedSource`,
//!   `GeneratorConfig` and `BiasConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod draw;
pub mod generators;
pub mod hash;
pub mod types;

pub use draw::{BiasConfig, BiasedDrawEngine, DrawEngine, RandomDraw};
pub use generators::{
    BitGenerator, GeneratorConfig, GeneratorEnum, SeedSource, SplitMix64, StatefulGenerator,
    XorShift128Plus, Xoroshiro128Plus,
};
pub use hash::{hash64, hash64_text};
pub use types::{Algorithm, RngError};
