use super::FrameStep;
use crate::colors::{Hsl, Rgb8};
use crate::strip::LedStrip;
use crate::{BLACK, WHITE};

/// Default lightness multiplier applied per LED along the tail.
pub const DEFAULT_FADE_FACTOR: f32 = 0.85;

/// A moving LED followed by a tail that dims geometrically.
///
/// The head runs past the end of the strip until the whole tail has left it,
/// then wraps back to position 0. Lightness drops by the fade factor for each
/// visible LED behind the first one drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TailedPixel {
    color: Rgb8,
    tail_length: usize,
    fade_factor: f32,
    index: usize,
}

impl TailedPixel {
    /// Creates a tailed pixel with the default fade factor.
    pub fn new(color: Rgb8, tail_length: usize) -> Self {
        Self::with_fade(color, tail_length, DEFAULT_FADE_FACTOR)
    }

    /// Creates a tailed pixel whose lightness is multiplied by `fade_factor`
    /// for each LED behind the head.
    pub fn with_fade(color: Rgb8, tail_length: usize, fade_factor: f32) -> Self {
        Self {
            color,
            tail_length,
            fade_factor,
            index: 0,
        }
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    pub fn fade_factor(&self) -> f32 {
        self.fade_factor
    }

    /// Head position drawn by the next frame. May lie past the end of the strip.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for TailedPixel {
    fn default() -> Self {
        Self::new(WHITE, 3)
    }
}

impl FrameStep for TailedPixel {
    fn reset(&mut self, _led_count: usize) {
        self.index = 0;
    }

    fn step(&mut self, strip: &mut LedStrip<'_>) -> bool {
        if strip.is_empty() {
            return false;
        }

        let head = self.index as isize;
        let tail = self.tail_length as isize;

        // Previous frame covered [head - 1 - tail, head - 1].
        for i in (head - 1 - tail..=head - 1).rev() {
            strip.set(i, BLACK);
        }

        // Only LEDs on the strip advance the fade, so the first visible LED
        // of an entering or exiting tail is drawn at full lightness.
        let mut hsl = Hsl::from_rgb(self.color);
        for i in (head - tail..=head).rev() {
            if strip.set(i, hsl.to_rgb()) {
                hsl.lightness *= self.fade_factor;
            }
        }

        self.index = (self.index + 1) % (strip.len() + self.tail_length + 1);
        true
    }
}
