//! Error types for SparkFeed.
//!
//! Feed and field operations never fail: a missing image or an unknown post id
//! is absorbed silently. The errors here cover the ambient operations around
//! them (reading image files, decoding for display, loading configuration).

use crate::image_store::ImageRef;
use thiserror::Error;

/// Errors that can occur while reading or decoding user images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Failed to read the selected file from disk.
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    /// The stored bytes are not a decodable image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// The handle was released (or never issued by this store).
    #[error("Image handle {0} has been released")]
    Released(ImageRef),
}

/// Errors that can occur while loading or saving a studio configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`StudioConfig`](crate::StudioConfig).
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
