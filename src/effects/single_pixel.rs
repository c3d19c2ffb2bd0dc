use super::FrameStep;
use crate::colors::Rgb8;
use crate::strip::LedStrip;
use crate::{BLACK, WHITE};

/// Lights one LED at a time, moving one position per frame.
///
/// Only the previous and current LED are touched each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePixel {
    color: Rgb8,
    index: usize,
}

impl SinglePixel {
    pub fn new(color: Rgb8) -> Self {
        Self { color, index: 0 }
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    /// Position lit by the next frame.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for SinglePixel {
    fn default() -> Self {
        Self::new(WHITE)
    }
}

impl FrameStep for SinglePixel {
    fn reset(&mut self, _led_count: usize) {
        self.index = 0;
    }

    fn step(&mut self, strip: &mut LedStrip<'_>) -> bool {
        let len = strip.len();
        if len == 0 {
            return false;
        }

        let previous = (self.index + len - 1) % len;

        strip.set(previous as isize, BLACK);
        strip.set(self.index as isize, self.color);

        self.index = strip.advance(self.index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RED;

    #[test]
    fn pixel_walks_and_wraps() {
        let mut leds = [BLACK; 3];
        let mut strip = LedStrip::new(&mut leds, 3);
        let mut pixel = SinglePixel::new(RED);

        pixel.step(&mut strip);
        pixel.step(&mut strip);
        pixel.step(&mut strip);
        assert_eq!(strip.as_slice(), &[BLACK, BLACK, RED]);
        assert_eq!(pixel.index(), 0);

        pixel.step(&mut strip);
        assert_eq!(strip.as_slice(), &[RED, BLACK, BLACK]);
    }

    #[test]
    fn empty_strip_draws_nothing() {
        let mut leds: [Rgb8; 0] = [];
        let mut strip = LedStrip::new(&mut leds, 0);
        let mut pixel = SinglePixel::new(RED);

        assert!(!pixel.step(&mut strip));
        assert_eq!(pixel.index(), 0);
    }
}
