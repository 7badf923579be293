//! CPU drawing surface for the particle field.
//!
//! A fixed-size RGBA pixel buffer that is never fully erased between frames:
//! each frame blends a translucent background over it, so earlier frames fade
//! out as trails instead of disappearing.

use crate::visuals::Rgb;
use glam::Vec2;
use image::RgbaImage;

/// Fixed-size RGBA canvas.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Create a surface filled with `background`. Zero dimensions are clamped to 1.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let pixels = RgbaImage::from_pixel(width.max(1), height.max(1), background.to_rgba());
        Self { pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Size in pixels as `[width, height]`.
    pub fn size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        let rgba = color.to_rgba();
        for p in self.pixels.pixels_mut() {
            *p = rgba;
        }
    }

    /// Blend `color` over the whole surface with the given alpha (`0.0..=1.0`).
    pub fn fade(&mut self, color: Rgb, alpha: f32) {
        let a = alpha.clamp(0.0, 1.0);
        if a == 0.0 {
            return;
        }
        for p in self.pixels.pixels_mut() {
            for (channel, target) in p.0.iter_mut().take(3).zip(color.0) {
                let blended = *channel as f32 * (1.0 - a) + target as f32 * a;
                *channel = blended.round() as u8;
            }
            p.0[3] = 255;
        }
    }

    /// Fill a disc. Pixels whose centers lie within `radius` of `center` are
    /// painted; anything outside the surface is clipped.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        if !center.is_finite() || radius <= 0.0 {
            return;
        }

        let w = self.width() as f32;
        let h = self.height() as f32;
        let min_x = (center.x - radius).floor().max(0.0);
        let min_y = (center.y - radius).floor().max(0.0);
        let max_x = (center.x + radius).ceil().min(w);
        let max_y = (center.y + radius).ceil().min(h);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let rgba = color.to_rgba();
        let r2 = radius * radius;
        for y in min_y as u32..max_y as u32 {
            for x in min_x as u32..max_x as u32 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw RGBA bytes, row-major, `width * height * 4` long.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }
}
