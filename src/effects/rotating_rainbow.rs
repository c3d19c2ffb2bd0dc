use super::FrameStep;
use crate::colors::Hsl;
use crate::strip::LedStrip;

/// Spreads the hue circle across the whole strip and rotates it one LED per
/// frame.
///
/// Every LED is repainted each frame, so the strip never needs clearing
/// between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatingRainbow {
    saturation: f32,
    lightness: f32,
    hue_offset: u16,
    index: usize,
}

impl RotatingRainbow {
    /// Fully saturated rainbow at half lightness.
    pub fn new() -> Self {
        Self::with_saturation_lightness(1.0, 0.5)
    }

    pub fn with_saturation_lightness(saturation: f32, lightness: f32) -> Self {
        Self {
            saturation,
            lightness,
            hue_offset: 0,
            index: 0,
        }
    }

    /// Hue step between neighbouring LEDs, `floor(360 / led_count)`.
    pub fn hue_offset(&self) -> u16 {
        self.hue_offset
    }

    /// Rotation applied by the next frame.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for RotatingRainbow {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStep for RotatingRainbow {
    fn reset(&mut self, led_count: usize) {
        self.hue_offset = (360 / led_count.max(1)) as u16;
        self.index = 0;

        #[cfg(feature = "defmt")]
        defmt::debug!("rotating rainbow hue offset = {}", self.hue_offset);
    }

    fn step(&mut self, strip: &mut LedStrip<'_>) -> bool {
        let len = strip.len();
        if len == 0 {
            return false;
        }

        for position in 0..len {
            let hue = (u32::from(self.hue_offset) * position as u32) % 360;
            let hsl = Hsl::new(hue as u16, self.saturation, self.lightness);
            strip.set(((position + self.index) % len) as isize, hsl.to_rgb());
        }

        self.index = strip.advance(self.index);
        true
    }
}
