//! # SparkFeed
//!
//! A photo feed with anonymous comments, layered over a click-to-launch
//! firework particle field.
//!
//! The crate holds the two independent pieces of state a front end needs and
//! leaves presentation to it (see the `sparkfeed-studio` binary):
//!
//! - [`ParticleField`]: a fixed-size RGBA [`Surface`] plus live particles.
//!   Clicks spawn bursts, [`ParticleField::advance`] moves, draws and culls
//!   them once per display frame.
//! - [`PostFeed`]: newest-first posts, each an image handle, a caption and an
//!   append-only comment thread, plus the staged input for the next post.
//!
//! ## Quick Start
//!
//! ```
//! use sparkfeed::prelude::*;
//!
//! let mut field = ParticleField::mount(640, 480, FieldConfig::default());
//! field.on_click(320.0, 240.0);
//! assert_eq!(field.len(), 60);
//!
//! for _ in 0..100 {
//!     field.advance();
//! }
//! assert!(field.is_empty());
//!
//! let mut feed = PostFeed::new();
//! feed.select_image(SelectedImage::new("cat.jpg", vec![0xFF, 0xD8, 0xFF]));
//! feed.set_caption("first!");
//! let id = feed.submit_post().unwrap();
//! feed.submit_comment(id, "nice");
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod field;
pub mod image_store;
pub mod particle;
pub mod spawn;
pub mod surface;
pub mod time;
pub mod visuals;

pub use config::{FeedConfig, FieldConfig, StudioConfig};
pub use error::{ConfigError, ImageError};
pub use feed::{Comment, Post, PostFeed, PostId};
pub use field::{FrameStats, ParticleField};
pub use glam::Vec2;
pub use image_store::{ImageRef, ImageStore, SelectedImage, StoredImage};
pub use particle::Particle;
pub use spawn::SpawnContext;
pub use surface::Surface;
pub use time::FrameClock;
pub use visuals::{Hsl, Rgb};

/// Convenient re-exports for front ends.
pub mod prelude {
    pub use crate::config::{FeedConfig, FieldConfig, StudioConfig};
    pub use crate::feed::{Comment, Post, PostFeed, PostId};
    pub use crate::field::{FrameStats, ParticleField};
    pub use crate::image_store::{ImageRef, SelectedImage};
    pub use crate::visuals::{Hsl, Rgb};
    pub use glam::Vec2;
}
