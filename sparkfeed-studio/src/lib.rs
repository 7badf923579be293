//! SparkFeed Studio: the desktop front end.
//!
//! Hosts a [`sparkfeed::PostFeed`] in an egui window laid over a
//! [`sparkfeed::ParticleField`] canvas.

pub mod app;
pub mod canvas;
pub mod textures;
pub mod ui;

pub use app::StudioApp;
