//! The concrete animation patterns.
//!
//! Each pattern is a small state machine over position counters. [`Pattern`]
//! closes the set so an [`Effect`](crate::Effect) can hold any of them without
//! dynamic dispatch.

mod rotating_rainbow;
mod single_pixel;
mod spectrum_band;
mod tailed_pixel;

pub use rotating_rainbow::RotatingRainbow;
pub use single_pixel::SinglePixel;
pub use spectrum_band::{FRAMES_PER_MOVE, SpectrumBand};
pub use tailed_pixel::{DEFAULT_FADE_FACTOR, TailedPixel};

use crate::strip::LedStrip;

/// Per-frame behavior of an animation pattern.
///
/// `step` is not rate limited; callers gate it by frame length. On an empty
/// strip `step` draws nothing and returns false.
pub trait FrameStep {
    /// Rewinds position counters to frame zero for a strip of `led_count` LEDs.
    fn reset(&mut self, led_count: usize);

    /// Draws one frame and advances position counters.
    ///
    /// Returns true if the strip changed.
    fn step(&mut self, strip: &mut LedStrip<'_>) -> bool;
}

/// One of the available animation patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    SinglePixel(SinglePixel),
    TailedPixel(TailedPixel),
    SpectrumBand(SpectrumBand),
    RotatingRainbow(RotatingRainbow),
}

impl FrameStep for Pattern {
    fn reset(&mut self, led_count: usize) {
        match self {
            Pattern::SinglePixel(p) => p.reset(led_count),
            Pattern::TailedPixel(p) => p.reset(led_count),
            Pattern::SpectrumBand(p) => p.reset(led_count),
            Pattern::RotatingRainbow(p) => p.reset(led_count),
        }
    }

    fn step(&mut self, strip: &mut LedStrip<'_>) -> bool {
        match self {
            Pattern::SinglePixel(p) => p.step(strip),
            Pattern::TailedPixel(p) => p.step(strip),
            Pattern::SpectrumBand(p) => p.step(strip),
            Pattern::RotatingRainbow(p) => p.step(strip),
        }
    }
}

impl From<SinglePixel> for Pattern {
    fn from(pattern: SinglePixel) -> Self {
        Pattern::SinglePixel(pattern)
    }
}

impl From<TailedPixel> for Pattern {
    fn from(pattern: TailedPixel) -> Self {
        Pattern::TailedPixel(pattern)
    }
}

impl From<SpectrumBand> for Pattern {
    fn from(pattern: SpectrumBand) -> Self {
        Pattern::SpectrumBand(pattern)
    }
}

impl From<RotatingRainbow> for Pattern {
    fn from(pattern: RotatingRainbow) -> Self {
        Pattern::RotatingRainbow(pattern)
    }
}
