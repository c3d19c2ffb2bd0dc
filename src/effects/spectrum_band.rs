use super::FrameStep;
use crate::BLACK;
use crate::colors::{SPECTRUM_LENGTH, rainbow_spectrum};
use crate::strip::LedStrip;

/// Frames spent recoloring the band before it moves one LED.
pub const FRAMES_PER_MOVE: u16 = 5;

/// A band of LEDs that slides along the strip while cycling through the
/// rainbow spectrum.
///
/// The whole band shares one color, taken from [`rainbow_spectrum`] at the
/// current frame counter. The band moves every [`FRAMES_PER_MOVE`] frames and
/// enters and leaves the strip gradually.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumBand {
    length: usize,
    frame: u16,
    start: isize,
}

impl SpectrumBand {
    /// Creates a band `length` LEDs long. `length` must be at least 1.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            frame: 0,
            start: 0,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Spectrum index used by the next frame, `0..1530`.
    pub fn frame(&self) -> u16 {
        self.frame
    }

    /// Leading LED of the band.
    pub fn start(&self) -> isize {
        self.start
    }

    /// Trailing LED of the band. Negative while the band is entering.
    pub fn end(&self) -> isize {
        self.start - self.length as isize + 1
    }
}

impl FrameStep for SpectrumBand {
    fn reset(&mut self, _led_count: usize) {
        self.start = 0;
        self.frame = 0;
    }

    fn step(&mut self, strip: &mut LedStrip<'_>) -> bool {
        if strip.is_empty() || self.length == 0 {
            return false;
        }

        if self.frame % FRAMES_PER_MOVE == 0 {
            strip.set(self.start, BLACK);
            strip.set(self.end(), BLACK);

            let span = (strip.len() + self.length - 1) as isize;
            self.start = (self.start + 1) % span;
        }

        let color = rainbow_spectrum(u32::from(self.frame));
        for i in (self.end()..=self.start).rev() {
            strip.set(i, color);
        }

        self.frame = (self.frame + 1) % SPECTRUM_LENGTH;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Rgb8;
    use palette::Srgb;

    #[test]
    fn band_enters_one_led_per_move() {
        let mut leds = [BLACK; 4];
        let mut strip = LedStrip::new(&mut leds, 4);
        let mut band = SpectrumBand::new(2);

        band.step(&mut strip);
        assert_eq!(band.start(), 1);
        assert_eq!(band.end(), 0);
        assert_eq!(band.frame(), 1);

        let red = Srgb::new(255, 0, 0);
        assert_eq!(strip.as_slice(), &[red, red, BLACK, BLACK]);

        band.step(&mut strip);
        assert_eq!(band.start(), 1);
        assert_eq!(strip.get(0), Some(Srgb::new(255, 1, 0)));
    }

    #[test]
    fn empty_strip_or_zero_length_draws_nothing() {
        let mut empty: [Rgb8; 0] = [];
        let mut strip = LedStrip::new(&mut empty, 0);
        let mut band = SpectrumBand::new(3);
        assert!(!band.step(&mut strip));
        assert_eq!(band.frame(), 0);

        let mut leds = [BLACK; 1];
        let mut strip = LedStrip::new(&mut leds, 1);
        let mut band = SpectrumBand::new(0);
        assert!(!band.step(&mut strip));
        assert_eq!(strip.as_slice(), &[BLACK]);
    }
}
