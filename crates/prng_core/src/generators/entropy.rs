//! Seeding from operating system entropy.
//!
//! Read only by the `from_entropy` constructors and `SeedSource::Entropy`;
//! every other constructor is deterministic.

use crate::types::RngError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Reads a 64-bit seed from the operating system entropy source.
///
/// # Errors
///
/// Returns [`RngError::EntropyUnavailable`] if the OS source fails.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::entropy_seed;
///
/// let seed = entropy_seed().expect("OS entropy available");
/// # let _ = seed;
/// ```
pub fn entropy_seed() -> Result<u64, RngError> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| RngError::EntropyUnavailable(e.to_string()))?;
    let seed = u64::from_le_bytes(bytes);
    tracing::debug!("drew generator seed from OS entropy");
    Ok(seed)
}
