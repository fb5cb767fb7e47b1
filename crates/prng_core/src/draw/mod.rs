//! # Draw Engines
//!
//! Typed random values built on a [`BitGenerator`](crate::generators::BitGenerator).
//!
//! ## Engines
//!
//! - [`DrawEngine`]: uniform values from raw generator bits; bounded integers
//!   by rejection sampling. Also implements [`rand::RngCore`].
//! - [`BiasedDrawEngine`]: doubles with a configurable mean ([`BiasConfig`]),
//!   every other value derived from those doubles.
//!
//! Both implement [`RandomDraw`], so code written against the trait accepts
//! either engine.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::draw::{BiasConfig, BiasedDrawEngine, DrawEngine, RandomDraw};
//! use prng_core::generators::Xoroshiro128Plus;
//!
//! fn roll<D: RandomDraw>(draw: &mut D) -> i32 {
//!     draw.next_int_range(1, 7).unwrap()
//! }
//!
//! let mut uniform = DrawEngine::new(Xoroshiro128Plus::new(1));
//! let mut loaded = BiasedDrawEngine::with_config(1, BiasConfig::new(0.85, 0.0));
//!
//! assert!((1..7).contains(&roll(&mut uniform)));
//! assert!((1..7).contains(&roll(&mut loaded)));
//! ```

mod biased;
mod config;
mod engine;
mod traits;

pub use biased::{BiasedDrawEngine, ONE_BELOW};
pub use config::{BiasConfig, BiasConfigBuilder, DEFAULT_EXPECTED, MAX_EXPECTED, MIN_EXPECTED};
pub use engine::DrawEngine;
pub use traits::RandomDraw;
