//! The firework particle field.
//!
//! A [`ParticleField`] owns a fixed-size [`Surface`] and the set of live
//! particles. Clicking spawns a burst; every display frame the field washes the
//! surface with translucent background, moves and draws each particle, and
//! drops the ones whose life ran out.
//!
//! # Lifecycle
//!
//! ```ignore
//! let mut field = ParticleField::mount(1280, 720, FieldConfig::default());
//!
//! // Event handlers:
//! field.on_click(x, y);
//!
//! // Once per display frame:
//! if let Some(stats) = field.advance() {
//!     upload(field.surface().as_raw());
//! }
//!
//! // On unmount; stops the loop and detaches the click listener:
//! field.teardown();
//! ```
//!
//! The surface is sized once at mount. Window resizes are not tracked.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::spawn::SpawnContext;
use crate::surface::Surface;
use crate::time::FrameClock;
use glam::Vec2;
use tracing::{debug, info};

/// What one call to [`ParticleField::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number after this advance (1 for the first frame).
    pub frame: u64,
    /// Particles moved and drawn this frame.
    pub drawn: usize,
    /// Particles removed at the end of this frame.
    pub culled: usize,
    /// Particles still live afterwards.
    pub alive: usize,
}

/// Click-spawned particle animation bound to a drawing surface.
#[derive(Debug)]
pub struct ParticleField {
    config: FieldConfig,
    surface: Surface,
    particles: Vec<Particle>,
    spawner: SpawnContext,
    clock: FrameClock,
    running: bool,
    listening: bool,
}

impl ParticleField {
    /// Bind to a `width × height` surface, attach the click listener and start
    /// the loop. Out-of-range config values fall back to their defaults.
    pub fn mount(width: u32, height: u32, config: FieldConfig) -> Self {
        let config = config.sanitized();
        let surface = Surface::new(width, height, config.background);
        info!(
            width = surface.width(),
            height = surface.height(),
            "particle field mounted"
        );
        Self {
            config,
            surface,
            particles: Vec::new(),
            spawner: SpawnContext::new(),
            clock: FrameClock::new(),
            running: true,
            listening: true,
        }
    }

    /// Replace the RNG with a deterministic one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spawner = SpawnContext::with_seed(seed);
        self
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Spawn a burst at `(x, y)` with independently randomized headings and
    /// speeds.
    pub fn spawn(&mut self, x: f32, y: f32) {
        let origin = Vec2::new(x, y);
        let count = self.config.burst_size as usize;
        let speeds = self.config.speed_range();
        let life = self.config.initial_life;

        self.particles.reserve(count);
        for _ in 0..count {
            let angle = self.spawner.random_angle();
            let speed = self.spawner.random_speed(speeds.clone());
            self.particles.push(Particle::new(origin, angle, speed, life));
        }
        debug!(x, y, count, alive = self.particles.len(), "burst spawned");
    }

    /// Click listener. Spawns only while the listener is attached; returns
    /// whether a burst was spawned.
    pub fn on_click(&mut self, x: f32, y: f32) -> bool {
        if !self.listening {
            return false;
        }
        self.spawn(x, y);
        true
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance and render one frame. Returns `None` without touching anything
    /// if the loop is stopped.
    pub fn advance(&mut self) -> Option<FrameStats> {
        if !self.running {
            return None;
        }

        let FieldConfig {
            fade_alpha,
            particle_radius,
            hue_per_life,
            saturation,
            lightness,
            background,
            ..
        } = self.config;

        self.surface.fade(background, fade_alpha);

        let drawn = self.particles.len();
        let mut next = Vec::with_capacity(drawn);
        for particle in self.particles.drain(..) {
            let particle = particle.step();
            let color = particle.color(hue_per_life, saturation, lightness).to_rgb();
            self.surface.fill_circle(particle.position, particle_radius, color);
            if particle.is_alive() {
                next.push(particle);
            }
        }
        self.particles = next;

        let culled = drawn - self.particles.len();
        if culled > 0 {
            debug!(culled, alive = self.particles.len(), "particles expired");
        }

        Some(FrameStats {
            frame: self.clock.tick(),
            drawn,
            culled,
            alive: self.particles.len(),
        })
    }

    /// Resume the loop.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.clock.reset_rate();
            info!("particle loop started");
        }
    }

    /// Pause the loop. Particles keep their state until restarted.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(frame = self.clock.frame(), "particle loop stopped");
        }
    }

    /// Stop the loop, detach the click listener and drop all particles.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.running && !self.listening && self.particles.is_empty() {
            return;
        }
        self.running = false;
        self.listening = false;
        self.particles.clear();
        info!(frame = self.clock.frame(), "particle field torn down");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Frames advanced since mount.
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        ParticleField::mount(200, 200, FieldConfig::default()).with_seed(3)
    }

    #[test]
    fn test_mount_state() {
        let field = field();
        assert!(field.is_running());
        assert!(field.is_listening());
        assert!(field.is_empty());
        assert_eq!(field.surface().size(), [200, 200]);
        assert_eq!(field.frame(), 0);
    }

    #[test]
    fn test_spawn_adds_burst() {
        let mut field = field();
        field.spawn(50.0, 60.0);
        assert_eq!(field.len(), 60);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.position == Vec2::new(50.0, 60.0) && p.life == 100));
    }

    #[test]
    fn test_advance_reports_stats() {
        let mut field = field();
        field.spawn(100.0, 100.0);
        let stats = field.advance().unwrap();
        assert_eq!(
            stats,
            FrameStats {
                frame: 1,
                drawn: 60,
                culled: 0,
                alive: 60
            }
        );
    }

    #[test]
    fn test_last_life_frame_is_drawn_then_culled() {
        let mut config = FieldConfig::default();
        config.initial_life = 1;
        config.speed_min = 0.0;
        config.speed_max = 0.0;
        let mut field = ParticleField::mount(20, 20, config).with_seed(1);
        field.spawn(10.0, 10.0);

        let stats = field.advance().unwrap();
        assert_eq!(stats.drawn, 60);
        assert_eq!(stats.culled, 60);
        assert!(field.is_empty());
        // Drawn with hue 0: red at 60% lightness.
        assert_eq!(field.surface().pixel(10, 10), Some([255, 51, 51, 255]));
    }

    #[test]
    fn test_stop_and_start() {
        let mut field = field();
        field.spawn(10.0, 10.0);
        field.stop();
        assert_eq!(field.advance(), None);
        assert_eq!(field.particles()[0].life, 100);

        field.start();
        assert!(field.advance().is_some());
        assert_eq!(field.particles()[0].life, 99);
    }

    #[test]
    fn test_teardown_detaches_and_stops() {
        let mut field = field();
        assert!(field.on_click(5.0, 5.0));
        field.teardown();
        assert!(!field.is_running());
        assert!(!field.is_listening());
        assert!(field.is_empty());
        assert!(!field.on_click(5.0, 5.0));
        assert!(field.is_empty());
        assert_eq!(field.advance(), None);
        field.teardown();
    }
}
