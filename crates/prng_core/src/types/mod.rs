//! Shared types for the generator family.
//!
//! This module provides:
//! - `algorithm`: the [`Algorithm`] tag identifying each bit generator
//! - `error`: the structured [`RngError`] type
//!
//! # Re-exports
//!
//! [`Algorithm`] and [`RngError`] are re-exported at this module level.

pub mod algorithm;
pub mod error;

pub use algorithm::Algorithm;
pub use error::RngError;
