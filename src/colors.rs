//! Color model: HSL/RGB conversion and the 1530-step rainbow spectrum.
//!
//! RGB colors are byte-valued `palette::Srgb<u8>` ([`Rgb8`]). HSL colors use an
//! integer hue in degrees, always reduced modulo 360, with floating-point
//! saturation and lightness in `[0, 1]`.
//!
//! The conversions are approximate inverses: hue is rounded to whole degrees and
//! channels are truncated to bytes, so a round trip may drift by a few steps per
//! channel.

use palette::Srgb;

/// Byte-valued RGB color as stored in an LED buffer.
pub type Rgb8 = Srgb<u8>;

/// Number of steps in one full trip around [`rainbow_spectrum`].
pub const SPECTRUM_LENGTH: u16 = 1530;

/// Floor-based modulo: `a - b * floor(a / b)`.
///
/// Unlike `%`, the result takes the sign of `b`, so negative hue offsets wrap
/// back into `[0, b)`.
#[inline]
pub fn floor_mod(a: f32, b: f32) -> f32 {
    a - b * libm::floorf(a / b)
}

/// A color in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    hue: u16,
    /// Saturation, expected in `[0, 1]`.
    pub saturation: f32,
    /// Lightness, expected in `[0, 1]`.
    pub lightness: f32,
}

impl Hsl {
    /// Creates an HSL color. The hue is reduced modulo 360.
    #[inline]
    pub fn new(hue: u16, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue % 360,
            saturation,
            lightness,
        }
    }

    /// Fully saturated color at half lightness.
    #[inline]
    pub fn from_hue(hue: u16) -> Self {
        Self::new(hue, 1.0, 0.5)
    }

    /// Converts a byte RGB color. See [`rgb_to_hsl`].
    #[inline]
    pub fn from_rgb(color: Rgb8) -> Self {
        rgb_to_hsl(color.red, color.green, color.blue)
    }

    /// Hue in degrees, `0..360`.
    #[inline]
    pub fn hue(&self) -> u16 {
        self.hue
    }

    #[inline]
    pub fn set_hue(&mut self, hue: u16) {
        self.hue = hue % 360;
    }

    /// Steps the hue one degree, wrapping 359 back to 0.
    #[inline]
    pub fn increment_hue(&mut self) {
        self.hue = (self.hue + 1) % 360;
    }

    /// Converts to byte RGB. See [`hsl_to_rgb`].
    #[inline]
    pub fn to_rgb(&self) -> Rgb8 {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::from_hue(0)
    }
}

/// Converts HSL to byte RGB using the six-sector decomposition.
///
/// The hue is reduced modulo 360 first. Channels are truncated, not rounded,
/// when scaled to bytes. Out-of-range saturation or lightness is not rejected;
/// the byte conversion saturates at 0 and 255.
pub fn hsl_to_rgb(hue: u16, saturation: f32, lightness: f32) -> Rgb8 {
    let hue = f32::from(hue % 360);

    let chroma = (1.0 - libm::fabsf(2.0 * lightness - 1.0)) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - libm::fabsf(floor_mod(sector, 2.0) - 1.0));
    let m = lightness - 0.5 * chroma;

    let (r1, g1, b1) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Srgb::new(to_byte(r1 + m), to_byte(g1 + m), to_byte(b1 + m))
}

/// Converts byte RGB to HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0. The hue
/// is rounded to the nearest degree and stored modulo 360.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    let r = f32::from(red) / 255.0;
    let g = f32::from(green) / 255.0;
    let b = f32::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let sector = if chroma == 0.0 {
        0.0
    } else if max == r {
        floor_mod((g - b) / chroma + 6.0, 6.0)
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    let lightness = 0.5 * (max + min);
    let saturation = if chroma == 0.0 {
        0.0
    } else {
        chroma / (1.0 - libm::fabsf(2.0 * lightness - 1.0))
    };

    let hue = libm::roundf(60.0 * sector) as u16;
    Hsl::new(hue, saturation, lightness)
}

/// Color at `index` on the hand-authored rainbow walk.
///
/// Six 255-step segments run red, yellow, green, cyan, blue, magenta and back to
/// red, with index 1530 as the closing pure red. Ramps use `index % 255`, so the
/// walk has a period of exactly [`SPECTRUM_LENGTH`]. Indices past 1530 are black.
pub fn rainbow_spectrum(index: u32) -> Rgb8 {
    let ramp = (index % 255) as u8;

    match index {
        0..=255 => Srgb::new(255, index as u8, 0),
        256..=509 => Srgb::new(255 - ramp, 255, 0),
        510..=764 => Srgb::new(0, 255, ramp),
        765..=1019 => Srgb::new(0, 255 - ramp, 255),
        1020..=1274 => Srgb::new(ramp, 0, 255),
        1275..=1529 => Srgb::new(255, 0, 255 - ramp),
        1530 => Srgb::new(255, 0, 0),
        _ => Srgb::new(0, 0, 0),
    }
}

#[inline]
fn to_byte(channel: f32) -> u8 {
    // `as` truncates toward zero and saturates at the u8 bounds.
    (255.0 * channel) as u8
}
