//! Frame counting for the particle loop.
//!
//! [`FrameClock`] counts advanced frames and estimates the frame rate. The
//! field ticks it once per advanced frame; a stopped field does not tick it.

use std::time::{Duration, Instant};

/// Frame counter with a periodically refreshed FPS estimate.
#[derive(Debug)]
pub struct FrameClock {
    /// Total frames ticked since creation.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record one frame. Returns the new frame number.
    pub fn tick(&mut self) -> u64 {
        self.frame_count += 1;

        let now = Instant::now();
        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.frame_count
    }

    /// Forget the FPS window, e.g. after the loop was stopped for a while.
    pub fn reset_rate(&mut self) {
        self.fps = 0.0;
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = Instant::now();
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_fps_updates_after_interval() {
        let mut clock = FrameClock::new();
        clock.tick();
        thread::sleep(Duration::from_millis(520));
        clock.tick();
        assert!(clock.fps() > 0.0);

        clock.reset_rate();
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.frame(), 2);
    }
}
