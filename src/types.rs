//! Core types for effect construction.

use crate::time::TimeDuration;

/// Default time each frame is displayed, in milliseconds.
pub const DEFAULT_FRAME_LENGTH_MS: u64 = 100;

/// Lifecycle state of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EffectState {
    /// No frame has been drawn since construction or the last reset.
    /// The next due `animate()` fires immediately.
    Idle,

    /// At least one frame has been drawn.
    Running,
}

/// Timing and strip configuration shared by every effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectConfig<D: TimeDuration> {
    /// Time each frame is displayed. Zero disables animation.
    pub frame_length: D,

    /// Number of LEDs driven, counted from the start of the buffer.
    /// `None` drives the whole buffer.
    pub led_count: Option<usize>,
}

impl<D: TimeDuration> EffectConfig<D> {
    /// Configuration with the default 100 ms frame length over the whole buffer.
    pub fn new() -> Self {
        Self {
            frame_length: D::from_millis(DEFAULT_FRAME_LENGTH_MS),
            led_count: None,
        }
    }

    /// Sets the frame length.
    pub fn with_frame_length(mut self, frame_length: D) -> Self {
        self.frame_length = frame_length;
        self
    }

    /// Restricts the effect to the first `led_count` LEDs of the buffer.
    pub fn with_led_count(mut self, led_count: usize) -> Self {
        self.led_count = Some(led_count);
        self
    }
}

impl<D: TimeDuration> Default for EffectConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Effect construction errors.
///
/// Each variant is a precondition that would otherwise lead to a modulo by
/// zero in the frame arithmetic. Once constructed, effects never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EffectError {
    /// The effect would drive zero LEDs.
    EmptyStrip,

    /// The configured LED count is larger than the buffer.
    LedCountExceedsBuffer { led_count: usize, buffer_len: usize },

    /// A spectrum band was configured with length zero.
    ZeroBandLength,
}

impl core::fmt::Display for EffectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EffectError::EmptyStrip => {
                write!(f, "effect must drive at least one LED")
            }
            EffectError::LedCountExceedsBuffer {
                led_count,
                buffer_len,
            } => {
                write!(
                    f,
                    "LED count {} exceeds buffer length {}",
                    led_count, buffer_len
                )
            }
            EffectError::ZeroBandLength => {
                write!(f, "spectrum band length must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EffectError {}
