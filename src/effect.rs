//! Frame-gated effect driver.
//!
//! Provides [`Effect`], which binds a [`Pattern`] to a borrowed LED buffer and a
//! millisecond clock. The host loop calls [`Effect::animate`] as often as it
//! likes; a frame is only drawn once the configured frame length has elapsed.

use crate::colors::Rgb8;
use crate::effects::{FrameStep, Pattern};
use crate::strip::LedStrip;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{EffectConfig, EffectError, EffectState};

/// Drives one animation pattern over an LED buffer.
///
/// The effect mutably borrows the buffer for its whole lifetime and only ever
/// writes in-range indices. Use [`Effect::leds`] to read the buffer between
/// frames, or [`Effect::release`] to hand it back.
///
/// Access must be serialized by the caller; nothing here blocks or locks.
///
/// # Type Parameters
/// * `'a` - Lifetime of the LED buffer borrow
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Effect<'a, 't, I: TimeInstant, T: TimeSource<I>> {
    strip: LedStrip<'a>,
    time_source: &'t T,
    frame_length: I::Duration,
    last_animation_time: Option<I>,
    pattern: Pattern,
}

impl<'a, 't, I: TimeInstant, T: TimeSource<I>> Effect<'a, 't, I, T> {
    /// Creates an idle effect.
    ///
    /// The pattern's counters are rewound for the strip length, but the buffer
    /// is left untouched until the first [`reset`](Self::reset) or frame.
    ///
    /// # Errors
    /// * `EmptyStrip` - The effect would drive zero LEDs
    /// * `LedCountExceedsBuffer` - `config.led_count` is larger than `leds`
    /// * `ZeroBandLength` - A spectrum band pattern has length zero
    pub fn new(
        leds: &'a mut [Rgb8],
        time_source: &'t T,
        pattern: impl Into<Pattern>,
        config: EffectConfig<I::Duration>,
    ) -> Result<Self, EffectError> {
        let buffer_len = leds.len();
        let led_count = config.led_count.unwrap_or(buffer_len);

        if led_count > buffer_len {
            return Err(EffectError::LedCountExceedsBuffer {
                led_count,
                buffer_len,
            });
        }
        if led_count == 0 {
            return Err(EffectError::EmptyStrip);
        }

        let mut pattern = pattern.into();
        if matches!(&pattern, Pattern::SpectrumBand(band) if band.length() == 0) {
            return Err(EffectError::ZeroBandLength);
        }
        pattern.reset(led_count);

        Ok(Self {
            strip: LedStrip::new(leds, led_count),
            time_source,
            frame_length: config.frame_length,
            last_animation_time: None,
            pattern,
        })
    }

    /// Rewinds the effect to frame zero and clears the strip.
    ///
    /// The next due [`animate`](Self::animate) fires immediately. Always
    /// returns true.
    pub fn reset(&mut self) -> bool {
        #[cfg(feature = "defmt")]
        defmt::debug!("effect reset ({} LEDs)", self.strip.len());

        self.pattern.reset(self.strip.len());
        self.last_animation_time = None;
        self.strip.clear();
        true
    }

    /// Returns true if a frame is due.
    ///
    /// Never true while the frame length is zero. Otherwise true before the
    /// first frame, then once at least one frame length has elapsed since the
    /// last one.
    pub fn ready_to_animate(&self) -> bool {
        if self.frame_length == I::Duration::ZERO {
            return false;
        }

        match self.last_animation_time {
            None => true,
            Some(last) => {
                let elapsed = self.time_source.now().duration_since(last);
                elapsed.as_millis() >= self.frame_length.as_millis()
            }
        }
    }

    /// Draws the next frame if one is due.
    ///
    /// Returns false without touching anything when no frame is due, otherwise
    /// whether the frame changed the strip.
    pub fn animate(&mut self) -> bool {
        if !self.ready_to_animate() {
            return false;
        }

        self.last_animation_time = Some(self.time_source.now());
        self.pattern.step(&mut self.strip)
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> EffectState {
        match self.last_animation_time {
            None => EffectState::Idle,
            Some(_) => EffectState::Running,
        }
    }

    /// Returns the time each frame is displayed.
    pub fn frame_length(&self) -> I::Duration {
        self.frame_length
    }

    /// Changes the frame length. Zero stops animation until changed again.
    pub fn set_frame_length(&mut self, frame_length: I::Duration) {
        self.frame_length = frame_length;
    }

    /// Returns when the last frame was drawn, if any.
    ///
    /// `None` marks the idle state instead of a zero timestamp, so a frame drawn
    /// at clock reading 0 still counts as drawn.
    pub fn last_animation_time(&self) -> Option<I> {
        self.last_animation_time
    }

    /// Returns the pattern and its position counters.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the number of LEDs driven.
    pub fn led_count(&self) -> usize {
        self.strip.len()
    }

    /// Returns the driven LEDs.
    pub fn leds(&self) -> &[Rgb8] {
        self.strip.as_slice()
    }

    /// Consumes the effect and returns the whole buffer unchanged.
    pub fn release(self) -> &'a mut [Rgb8] {
        self.strip.into_inner()
    }
}
