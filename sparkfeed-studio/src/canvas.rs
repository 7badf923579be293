//! Full-window firework canvas drawn behind the feed.
//!
//! Mounts a [`ParticleField`] the first time the window size is known, then
//! advances it once per egui frame and uploads the surface as a texture on the
//! background layer.

use eframe::egui;
use sparkfeed::{FieldConfig, ParticleField};
use tracing::debug;

pub struct ParticleCanvas {
    config: FieldConfig,
    field: Option<ParticleField>,
    texture: Option<egui::TextureHandle>,
}

impl ParticleCanvas {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            field: None,
            texture: None,
        }
    }

    /// Advance the field, upload it, and paint it over the whole screen.
    pub fn show(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let ppp = ctx.pixels_per_point();

        let field = self.field.get_or_insert_with(|| {
            let [w, h] = surface_size(screen.size(), ppp);
            ParticleField::mount(w, h, self.config.clone())
        });

        let Some(stats) = field.advance() else {
            return;
        };
        if stats.culled > 0 {
            debug!(frame = stats.frame, alive = stats.alive, "canvas frame");
        }

        let surface = field.surface();
        let image = egui::ColorImage::from_rgba_unmultiplied(surface.size(), surface.as_raw());
        if let Some(texture) = &mut self.texture {
            texture.set(image, egui::TextureOptions::LINEAR);
        } else {
            self.texture =
                Some(ctx.load_texture("particle_canvas", image, egui::TextureOptions::LINEAR));
        }

        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ctx.layer_painter(egui::LayerId::background())
                .image(texture.id(), screen, uv, egui::Color32::WHITE);
        }

        ctx.request_repaint();
    }

    /// Forward a click in screen points to the field.
    pub fn click(&mut self, pos: egui::Pos2, pixels_per_point: f32) -> bool {
        match &mut self.field {
            Some(field) => {
                let (x, y) = to_surface_coords(pos, pixels_per_point);
                field.on_click(x, y)
            }
            None => false,
        }
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    /// Detach the click listener and stop the frame loop.
    pub fn teardown(&mut self) {
        if let Some(field) = &mut self.field {
            field.teardown();
        }
        self.texture = None;
    }
}

impl Drop for ParticleCanvas {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Surface size in physical pixels for a screen of `size` points.
pub fn surface_size(size: egui::Vec2, pixels_per_point: f32) -> [u32; 2] {
    let px = size * pixels_per_point;
    [px.x.round().max(1.0) as u32, px.y.round().max(1.0) as u32]
}

/// Screen points to surface pixels.
pub fn to_surface_coords(pos: egui::Pos2, pixels_per_point: f32) -> (f32, f32) {
    (pos.x * pixels_per_point, pos.y * pixels_per_point)
}
