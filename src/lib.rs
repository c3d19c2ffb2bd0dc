#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Effect`**: Drives one pattern over a borrowed LED buffer, gated by frame length
//! - **`Pattern`**: The closed set of animations (`SinglePixel`, `TailedPixel`, `SpectrumBand`, `RotatingRainbow`)
//! - **`FrameStep`**: Per-frame behavior every pattern implements
//! - **`LedStrip`**: Bounded buffer view that silently drops off-strip writes
//! - **`EffectConfig`**: Frame length and LED count, with documented defaults
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//! - **`Hsl`** and the `colors` functions: HSL/RGB conversion and the 1530-step spectrum
//!
//! Colors are byte-valued `Srgb<u8>` ([`Rgb8`]), the format most LED drivers consume.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod effect;
pub mod effects;
pub mod strip;
pub mod time;
pub mod types;

pub use colors::{Hsl, Rgb8, SPECTRUM_LENGTH, hsl_to_rgb, rainbow_spectrum, rgb_to_hsl};
pub use effect::Effect;
pub use effects::{FrameStep, Pattern, RotatingRainbow, SinglePixel, SpectrumBand, TailedPixel};
pub use strip::LedStrip;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{DEFAULT_FRAME_LENGTH_MS, EffectConfig, EffectError, EffectState};

pub const BLACK: Rgb8 = Srgb::new(0, 0, 0);
pub const WHITE: Rgb8 = Srgb::new(255, 255, 255);
pub const RED: Rgb8 = Srgb::new(255, 0, 0);
pub const GREEN: Rgb8 = Srgb::new(0, 255, 0);
pub const BLUE: Rgb8 = Srgb::new(0, 0, 255);
