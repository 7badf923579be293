//! Lazily decoded post images, cached as egui textures.

use eframe::egui;
use sparkfeed::{ImageRef, ImageStore};
use std::collections::HashMap;
use tracing::warn;

/// One texture per [`ImageRef`]. Images that fail to decode are remembered as
/// `None` so they are not decoded again every frame.
#[derive(Default)]
pub struct ImageTextures {
    cache: HashMap<ImageRef, Option<egui::TextureHandle>>,
}

impl ImageTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `handle`, decoding and uploading it on first use.
    pub fn get(
        &mut self,
        ctx: &egui::Context,
        store: &ImageStore,
        handle: ImageRef,
    ) -> Option<&egui::TextureHandle> {
        self.cache
            .entry(handle)
            .or_insert_with(|| match store.decode(handle) {
                Ok(rgba) => {
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                    Some(ctx.load_texture(handle.to_string(), image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    warn!(%handle, error = %e, "cannot display image");
                    None
                }
            })
            .as_ref()
    }

    /// Drop textures whose handle is no longer in `store`.
    pub fn retain_live(&mut self, store: &ImageStore) {
        self.cache.retain(|handle, _| store.contains(*handle));
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkfeed::SelectedImage;
    use std::io::Cursor;

    fn png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 128, 255, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decodes_once_and_caches() {
        let ctx = egui::Context::default();
        let mut store = ImageStore::new();
        let handle = store.insert(SelectedImage::new("blue.png", png()));
        let mut textures = ImageTextures::new();

        let id = textures.get(&ctx, &store, handle).unwrap().id();
        assert_eq!(textures.get(&ctx, &store, handle).unwrap().id(), id);
        assert_eq!(textures.get(&ctx, &store, handle).unwrap().size(), [4, 4]);
        assert_eq!(textures.len(), 1);
    }

    #[test]
    fn test_undecodable_image_has_no_texture() {
        let ctx = egui::Context::default();
        let mut store = ImageStore::new();
        let handle = store.insert(SelectedImage::new("junk.png", vec![1, 2, 3]));
        let mut textures = ImageTextures::new();

        assert!(textures.get(&ctx, &store, handle).is_none());
        assert_eq!(textures.len(), 1);
    }

    #[test]
    fn test_retain_live_drops_released() {
        let ctx = egui::Context::default();
        let mut store = ImageStore::new();
        let handle = store.insert(SelectedImage::new("blue.png", png()));
        let mut textures = ImageTextures::new();
        textures.get(&ctx, &store, handle);

        store.release(handle);
        textures.retain_live(&store);
        assert!(textures.is_empty());
    }
}
