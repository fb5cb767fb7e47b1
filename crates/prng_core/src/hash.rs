//! Seed derivation from arbitrary input.
//!
//! 64-bit FNV-1a (Fowler/Noll/Vo) hashing, used only to turn bytes or text
//! into a `u64` seed. The hash is stable across platforms and releases, so a
//! text seed always reproduces the same generator sequence.
//!
//! Bytes are folded in as signed values, so `0x80..=0xff` sign-extend to a
//! full 64-bit word before the xor. Text code units are folded unsigned.
//!
//! Empty input hashes to 0, which the generators then treat like any other
//! seed.

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes a byte slice with 64-bit FNV-1a.
///
/// # Examples
///
/// ```rust
/// use prng_core::hash::hash64;
///
/// assert_eq!(hash64(b"a"), 0xaf63_dc4c_8601_ec8c);
/// assert_eq!(hash64(&[0xe9]), 0x509c_33b3_79fe_2ea4);
/// assert_eq!(hash64(&[]), 0);
/// ```
pub fn hash64(data: &[u8]) -> u64 {
    if data.is_empty() {
        return 0;
    }
    data.iter()
        .fold(FNV_OFFSET_BASIS, |h, &byte| fnv_step(h, byte as i8 as i64 as u64))
}

/// Hashes text with 64-bit FNV-1a over its UTF-16 code units.
///
/// Each code unit contributes its low byte, then its high byte, so text
/// seeds agree with implementations that hash 16-bit character arrays.
///
/// # Examples
///
/// ```rust
/// use prng_core::hash::hash64_text;
///
/// let seed = hash64_text("dungeon level 3");
/// assert_eq!(seed, hash64_text("dungeon level 3"));
/// assert_ne!(seed, hash64_text("dungeon level 4"));
/// assert_eq!(hash64_text(""), 0);
/// ```
pub fn hash64_text(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        let [low, high] = unit.to_le_bytes();
        fnv_step(fnv_step(h, u64::from(low)), u64::from(high))
    })
}

#[inline(always)]
fn fnv_step(h: u64, word: u64) -> u64 {
    (h ^ word).wrapping_mul(FNV_PRIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash64_reference_vectors() {
        assert_eq!(hash64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(hash64(b"abc"), 0xe71f_a219_0541_574b);
    }

    #[test]
    fn test_hash64_text_reference_vectors() {
        assert_eq!(hash64_text("abc"), 0xcec6_4e15_5111_225d);
        assert_eq!(hash64_text("hello"), 0x3296_4f71_b276_4b97);
    }

    #[test]
    fn test_hash64_sign_extends_high_bytes() {
        assert_eq!(hash64(&[0xe9]), 0x509c_33b3_79fe_2ea4);
        assert_eq!(hash64(&[0xff, 0x00, 0x80]), 0xe1f6_e118_70f7_bd1e);
    }

    #[test]
    fn test_text_hash_interleaves_high_bytes() {
        // "a" as UTF-16 is [0x61, 0x00], so it differs from the byte hash of "a"
        assert_eq!(hash64_text("a"), hash64(&[0x61, 0x00]));
        assert_ne!(hash64_text("a"), hash64(b"a"));
    }

    #[test]
    fn test_non_ascii_text() {
        // U+00E9 is a single UTF-16 unit: low 0xE9, high 0x00, both unsigned
        assert_eq!(hash64_text("\u{e9}"), 0x0a6a_1207_b6cd_9fac);
        assert_ne!(hash64_text("\u{e9}"), hash64(&[0xe9, 0x00]));
    }

    #[test]
    fn test_empty_inputs_hash_to_zero() {
        assert_eq!(hash64(&[]), 0);
        assert_eq!(hash64_text(""), 0);
    }
}
