//! Avalanche mixing functions shared by the seeding rules.

/// Increment of the SplitMix64 Weyl sequence (2^64 / golden ratio, odd).
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Sentinel substituted for a zero seed before mixing (−1 as a signed word).
pub const ZERO_SEED_SENTINEL: u64 = u64::MAX;

/// Sign-propagating right shift of a 64-bit word.
#[inline(always)]
pub(crate) fn sar(x: u64, n: u32) -> u64 {
    ((x as i64) >> n) as u64
}

/// MurmurHash3 64-bit finaliser with sign-propagating right shifts.
///
/// The multiply constants are MurmurHash3's; the right shifts copy the
/// sign bit instead of filling with zeros.
///
/// The xor-shift steps clear the top bit and fold `x` and `!x` onto the
/// same value, so the mix is eight-to-one and its output is always below
/// 2^63. Only `0` and `u64::MAX` map to `0`.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::mix::murmur_fmix64;
///
/// assert_eq!(murmur_fmix64(0), 0);
/// assert_eq!(murmur_fmix64(u64::MAX), 0);
/// assert_ne!(murmur_fmix64(1), murmur_fmix64(2));
/// ```
#[inline(always)]
pub fn murmur_fmix64(mut k: u64) -> u64 {
    k ^= sar(k, 33);
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= sar(k, 33);
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= sar(k, 33);
    k
}

/// SplitMix64 output mix (Stafford variant 13).
#[inline(always)]
pub fn splitmix_mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Replaces a zero seed with [`ZERO_SEED_SENTINEL`].
#[inline(always)]
pub fn nonzero_seed(seed: u64) -> u64 {
    if seed == 0 {
        ZERO_SEED_SENTINEL
    } else {
        seed
    }
}
