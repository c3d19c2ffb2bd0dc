//! Bounded view over an externally owned LED buffer.

use crate::colors::Rgb8;
use crate::BLACK;

/// A fixed-length, borrowed LED buffer that drops out-of-range writes.
///
/// Effects compute positions with signed wraparound arithmetic that routinely
/// runs off either end of the strip. Every write goes through [`LedStrip::set`],
/// which only touches `0 <= index < len()`.
#[derive(Debug)]
pub struct LedStrip<'a> {
    leds: &'a mut [Rgb8],
    len: usize,
}

impl<'a> LedStrip<'a> {
    /// Wraps the first `len` LEDs of `leds`.
    ///
    /// `len` is clamped to the buffer length.
    pub fn new(leds: &'a mut [Rgb8], len: usize) -> Self {
        let len = len.min(leds.len());
        Self { leds, len }
    }

    /// Number of LEDs this view drives.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Writes `color` at `index` if it lies on the strip. Returns whether it was written.
    #[inline]
    pub fn set(&mut self, index: isize, color: Rgb8) -> bool {
        match usize::try_from(index) {
            Ok(i) if i < self.len => {
                self.leds[i] = color;
                true
            }
            _ => false,
        }
    }

    /// Reads the LED at `index`, if it lies on the strip.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.as_slice().get(index).copied()
    }

    /// Sets every driven LED to black.
    pub fn clear(&mut self) {
        self.leds[..self.len].fill(BLACK);
    }

    /// Next position after `index`, wrapping at the strip length.
    /// Always 0 on an empty strip.
    #[inline]
    pub fn advance(&self, index: usize) -> usize {
        (index + 1).checked_rem(self.len).unwrap_or(0)
    }

    /// The driven LEDs.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.leds[..self.len]
    }

    /// Gives the buffer back without touching it.
    pub fn into_inner(self) -> &'a mut [Rgb8] {
        self.leds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WHITE;

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut leds = [BLACK; 4];
        let mut strip = LedStrip::new(&mut leds, 4);

        assert!(!strip.set(-1, WHITE));
        assert!(!strip.set(4, WHITE));
        assert!(strip.set(3, WHITE));

        assert_eq!(leds, [BLACK, BLACK, BLACK, WHITE]);
    }

    #[test]
    fn view_shorter_than_buffer_leaves_tail_alone() {
        let mut leds = [WHITE; 5];
        let mut strip = LedStrip::new(&mut leds, 3);

        strip.clear();
        assert!(!strip.set(3, BLACK));
        assert_eq!(strip.get(3), None);

        assert_eq!(leds, [BLACK, BLACK, BLACK, WHITE, WHITE]);
    }

    #[test]
    fn advance_wraps_at_len() {
        let mut leds = [BLACK; 3];
        let strip = LedStrip::new(&mut leds, 3);
        assert_eq!(strip.advance(0), 1);
        assert_eq!(strip.advance(2), 0);

        let mut empty: [Rgb8; 0] = [];
        let strip = LedStrip::new(&mut empty, 0);
        assert_eq!(strip.advance(0), 0);
    }
}
