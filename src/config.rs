//! Configuration types for the studio.
//!
//! These types can be serialized to JSON and loaded at startup. Every field
//! has a default, so partial files are fine.

use crate::error::ConfigError;
use crate::visuals::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::warn;

/// Upper bound on particles spawned per click.
pub const MAX_BURST_SIZE: u32 = 10_000;

/// Particle field tuning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Particles spawned per click.
    pub burst_size: u32,
    /// Frames a particle lives.
    pub initial_life: i32,
    /// Lower bound of the spawn speed (inclusive), pixels per frame.
    pub speed_min: f32,
    /// Upper bound of the spawn speed (exclusive), pixels per frame.
    pub speed_max: f32,
    /// Alpha of the background wash painted every frame.
    pub fade_alpha: f32,
    /// Radius of each drawn particle, pixels.
    pub particle_radius: f32,
    /// Hue degrees per remaining life frame.
    pub hue_per_life: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub background: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            burst_size: 60,
            initial_life: 100,
            speed_min: 2.0,
            speed_max: 6.0,
            fade_alpha: 0.15,
            particle_radius: 2.0,
            hue_per_life: 3.0,
            saturation: 1.0,
            lightness: 0.6,
            background: Rgb::BLACK,
        }
    }
}

impl FieldConfig {
    pub fn speed_range(&self) -> Range<f32> {
        self.speed_min..self.speed_max
    }

    /// Replace out-of-range values with their defaults, logging each one.
    ///
    /// Speeds must be finite with `speed_min <= speed_max` and a finite span,
    /// life must be non-negative, `burst_size` at most [`MAX_BURST_SIZE`],
    /// `fade_alpha` in `0.0..=1.0` and `particle_radius` finite.
    pub fn sanitized(mut self) -> Self {
        let defaults = FieldConfig::default();

        let span = self.speed_max - self.speed_min;
        if !(self.speed_min.is_finite() && self.speed_max.is_finite() && span.is_finite() && span >= 0.0) {
            warn!(
                speed_min = self.speed_min,
                speed_max = self.speed_max,
                "invalid speed range, using defaults"
            );
            self.speed_min = defaults.speed_min;
            self.speed_max = defaults.speed_max;
        }
        if self.initial_life < 0 {
            warn!(initial_life = self.initial_life, "negative particle life, using default");
            self.initial_life = defaults.initial_life;
        }
        if self.burst_size > MAX_BURST_SIZE {
            warn!(burst_size = self.burst_size, max = MAX_BURST_SIZE, "burst size clamped");
            self.burst_size = MAX_BURST_SIZE;
        }
        if !(0.0..=1.0).contains(&self.fade_alpha) {
            warn!(fade_alpha = self.fade_alpha, "fade alpha out of range, using default");
            self.fade_alpha = defaults.fade_alpha;
        }
        if !self.particle_radius.is_finite() {
            warn!(particle_radius = self.particle_radius, "invalid particle radius, using default");
            self.particle_radius = defaults.particle_radius;
        }
        self
    }
}

/// Text and layout of the feed UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    pub title: String,
    pub choose_image_label: String,
    pub caption_hint: String,
    pub launch_label: String,
    pub comments_heading: String,
    /// Prefix drawn before every comment.
    pub comment_marker: String,
    pub comment_hint: String,
    pub spark_label: String,
    /// Width of the centered content column, points.
    pub column_width: f32,
    /// Extensions offered by the file dialog.
    pub image_extensions: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "🔥 My Fireworks Studio".to_string(),
            choose_image_label: "Choose image…".to_string(),
            caption_hint: "Lifestyle update...".to_string(),
            launch_label: "Launch".to_string(),
            comments_heading: "Anonymous sparks".to_string(),
            comment_marker: "✨".to_string(),
            comment_hint: "Send anonymously".to_string(),
            spark_label: "Spark".to_string(),
            column_width: 576.0,
            image_extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Complete studio configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StudioConfig {
    pub field: FieldConfig,
    pub feed: FeedConfig,
}

impl StudioConfig {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let mut config: StudioConfig = serde_json::from_str(&json)?;
        config.field = config.field.sanitized();
        Ok(config)
    }
}
