//! A single firework particle.

use crate::visuals::Hsl;
use glam::Vec2;

/// An ephemeral point flying in a straight line until its life runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Direction of travel, radians.
    pub angle: f32,
    /// Distance travelled per frame.
    pub speed: f32,
    /// Frames left to live.
    pub life: i32,
}

impl Particle {
    pub fn new(position: Vec2, angle: f32, speed: f32, life: i32) -> Self {
        Self {
            position,
            angle,
            speed,
            life,
        }
    }

    /// Per-frame displacement.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.speed
    }

    /// Advance one frame: move along the heading and lose one life.
    #[inline]
    pub fn step(mut self) -> Self {
        self.position += self.velocity();
        self.life -= 1;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Color derived from remaining life.
    pub fn color(&self, hue_per_life: f32, saturation: f32, lightness: f32) -> Hsl {
        Hsl::new(self.life as f32 * hue_per_life, saturation, lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_step_moves_along_angle() {
        let p = Particle::new(Vec2::new(10.0, 10.0), FRAC_PI_2, 3.0, 5).step();
        assert!((p.position.x - 10.0).abs() < 1e-5);
        assert!((p.position.y - 13.0).abs() < 1e-5);
        assert_eq!(p.life, 4);
    }

    #[test]
    fn test_alive_until_zero() {
        let p = Particle::new(Vec2::ZERO, 0.0, 1.0, 1);
        assert!(p.is_alive());
        assert!(!p.step().is_alive());
    }

    #[test]
    fn test_color_tracks_life() {
        let p = Particle::new(Vec2::ZERO, 0.0, 1.0, 100);
        assert_eq!(p.color(3.0, 1.0, 0.6), Hsl::new(300.0, 1.0, 0.6));
    }
}
