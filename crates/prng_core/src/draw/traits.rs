//! The shared draw surface of every engine.

use crate::types::RngError;

/// Derived random values built on an engine's primitives.
///
/// Implemented by [`DrawEngine`](super::DrawEngine), which derives every
/// value from raw generator bits, and by
/// [`BiasedDrawEngine`](super::BiasedDrawEngine), which derives every value
/// from its biased [`next_double`](RandomDraw::next_double). The provided
/// methods use only the required ones, so bias carries through them too.
///
/// # Bound Policy
///
/// Bounded draws never clamp or substitute: a non-positive bound returns
/// [`RngError::InvalidBound`] and an empty range returns
/// [`RngError::InvalidRange`], in both cases without consuming a draw.
///
/// # Examples
///
/// ```rust
/// use prng_core::draw::{DrawEngine, RandomDraw};
/// use prng_core::generators::Xoroshiro128Plus;
///
/// let mut engine = DrawEngine::new(Xoroshiro128Plus::new(42));
///
/// let die = engine.next_int_range(1, 7).unwrap();
/// assert!((1..7).contains(&die));
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// engine.shuffle(&mut deck);
/// assert_eq!(deck.len(), 52);
///
/// assert!(engine.next_int_bounded(0).is_err());
/// ```
pub trait RandomDraw {
    /// Returns a double in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Returns a float in `[0, 1)`.
    fn next_float(&mut self) -> f32;

    /// Returns a boolean.
    fn next_bool(&mut self) -> bool;

    /// Returns an `i32` over the full signed range.
    fn next_int(&mut self) -> i32;

    /// Returns an `i64` over the full signed range.
    fn next_long(&mut self) -> i64;

    /// Returns an `i32` in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidBound`] if `bound <= 0`.
    fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError>;

    /// Returns an `i64` in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidBound`] if `bound <= 0`.
    fn next_long_bounded(&mut self, bound: i64) -> Result<i64, RngError>;

    /// Returns a value in `[0, 2^bits)`.
    ///
    /// `bits` above 32 is treated as 32. A `bits` of 0 returns 0 without
    /// consuming a draw.
    fn next_bits(&mut self, bits: u32) -> u32;

    /// Fills `buffer` with random bytes.
    fn next_bytes(&mut self, buffer: &mut [u8]);

    /// Returns a double in `[0, max)` (or `(max, 0]` for negative `max`).
    #[inline]
    fn next_double_max(&mut self, max: f64) -> f64 {
        self.next_double() * max
    }

    /// Returns an `i32` in `[lower, upper)`.
    ///
    /// Spans wider than `i32::MAX` are drawn with
    /// [`next_long_bounded`](RandomDraw::next_long_bounded).
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidRange`] if `upper <= lower`.
    fn next_int_range(&mut self, lower: i32, upper: i32) -> Result<i32, RngError> {
        if upper <= lower {
            return Err(RngError::InvalidRange {
                lower: i64::from(lower),
                upper: i64::from(upper),
            });
        }
        let span = i64::from(upper) - i64::from(lower);
        let offset = match i32::try_from(span) {
            Ok(bound) => i64::from(self.next_int_bounded(bound)?),
            Err(_) => self.next_long_bounded(span)?,
        };
        // lower + offset < upper, so the narrowing cannot truncate
        Ok((i64::from(lower) + offset) as i32)
    }

    /// Returns a uniformly chosen element, or `None` for an empty slice.
    fn random_element<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = draw_index(self, items.len());
        items.get(index)
    }

    /// Shuffles `items` in place (Fisher–Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = draw_index(self, i + 1);
            items.swap(i, j);
        }
    }
}

/// Draws an index in `[0, len)`; `len` must be non-zero.
fn draw_index<D: RandomDraw + ?Sized>(draw: &mut D, len: usize) -> usize {
    let index = match i32::try_from(len) {
        Ok(bound) => draw.next_int_bounded(bound).map(|i| i as usize),
        Err(_) => draw
            .next_long_bounded(i64::try_from(len).unwrap_or(i64::MAX))
            .map(|i| i as usize),
    };
    // Bounds here are positive, so the error arm is unreachable
    index.unwrap_or(0)
}
