//! Session-scoped storage for user-selected images.
//!
//! Posts never hold image bytes directly; they hold an [`ImageRef`] issued by
//! an [`ImageStore`]. A handle stays resolvable until it is explicitly
//! released, and the owner of the store decides when that happens (post
//! removal or session teardown).

use crate::error::ImageError;
use image::RgbaImage;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// An image the user picked but has not posted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    /// Display name, usually the file name.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an image file from disk. Contents are not validated here.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// Opaque handle to an image held by an [`ImageStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(u64);

impl ImageRef {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image:{}", self.0)
    }
}

/// Raw bytes behind an [`ImageRef`].
#[derive(Debug, Clone)]
pub struct StoredImage {
    name: String,
    bytes: Vec<u8>,
}

impl StoredImage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type guessed from the leading bytes.
    pub fn media_type(&self) -> &'static str {
        image::guess_format(&self.bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream")
    }
}

/// Registry of image bytes for the lifetime of a session.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: HashMap<ImageRef, StoredImage>,
    next_id: u64,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a selected image and issue a handle for it.
    pub fn insert(&mut self, image: SelectedImage) -> ImageRef {
        let handle = ImageRef(self.next_id);
        self.next_id += 1;
        debug!(%handle, name = %image.name, bytes = image.bytes.len(), "image registered");
        self.images.insert(
            handle,
            StoredImage {
                name: image.name,
                bytes: image.bytes,
            },
        );
        handle
    }

    pub fn get(&self, handle: ImageRef) -> Option<&StoredImage> {
        self.images.get(&handle)
    }

    pub fn contains(&self, handle: ImageRef) -> bool {
        self.images.contains_key(&handle)
    }

    /// Decode the image for display.
    pub fn decode(&self, handle: ImageRef) -> Result<RgbaImage, ImageError> {
        let stored = self.get(handle).ok_or(ImageError::Released(handle))?;
        let decoded = image::load_from_memory(stored.bytes())?;
        Ok(decoded.into_rgba8())
    }

    /// Drop the bytes behind `handle`. Returns `false` if it was already gone.
    pub fn release(&mut self, handle: ImageRef) -> bool {
        let released = self.images.remove(&handle).is_some();
        if released {
            debug!(%handle, "image released");
        }
        released
    }

    /// Release every handle.
    pub fn clear(&mut self) {
        if !self.images.is_empty() {
            debug!(count = self.images.len(), "releasing all images");
        }
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
