//! Color helpers for particle rendering.
//!
//! Particles are colored by remaining life on the HSL wheel. [`Hsl`] follows
//! CSS `hsl()` semantics: hue in degrees (wrapping modulo 360), saturation and
//! lightness in `0.0..=1.0`.

use serde::{Deserialize, Serialize};

/// An HSL color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees. Any value is accepted and wrapped into `[0, 360)`.
    pub h: f32,
    /// Saturation, `0.0..=1.0`.
    pub s: f32,
    /// Lightness, `0.0..=1.0`.
    pub l: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 1.0 {
            (c, x, 0.0)
        } else if h < 2.0 {
            (x, c, 0.0)
        } else if h < 3.0 {
            (0.0, c, x)
        } else if h < 4.0 {
            (0.0, x, c)
        } else if h < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::from_unit(r + m, g + m, b + m)
    }
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Build from channels in `0.0..=1.0`, rounding to the nearest byte.
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb([to_byte(r), to_byte(g), to_byte(b)])
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// RGBA pixel with full opacity.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r(), self.g(), self.b(), 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_at_sixty_percent_lightness() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.6).to_rgb(), Rgb([255, 51, 51]));
    }

    #[test]
    fn test_hue_wraps_past_360() {
        assert_eq!(Hsl::new(480.0, 1.0, 0.6).to_rgb(), Hsl::new(120.0, 1.0, 0.6).to_rgb());
        assert_eq!(Hsl::new(-60.0, 1.0, 0.6).to_rgb(), Hsl::new(300.0, 1.0, 0.6).to_rgb());
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb(), Rgb([0, 255, 0]));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb(), Rgb([0, 0, 255]));
        assert_eq!(Hsl::new(300.0, 1.0, 0.6).to_rgb(), Rgb([255, 51, 255]));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let gray = Hsl::new(200.0, 0.0, 0.5).to_rgb();
        assert_eq!(gray.r(), gray.g());
        assert_eq!(gray.g(), gray.b());
    }
}
