//! The studio application: feed UI over the firework canvas.

use crate::canvas::ParticleCanvas;
use crate::textures::ImageTextures;
use crate::ui::{card_frame, render_comment_input, render_compose_card, render_post_body};
use eframe::egui;
use sparkfeed::{PostFeed, PostId, SelectedImage, StudioConfig};
use std::time::{Duration, Instant};
use tracing::{info, warn};

const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

pub struct StudioApp {
    config: StudioConfig,
    canvas: ParticleCanvas,
    feed: PostFeed,
    textures: ImageTextures,
    status_message: Option<(String, Instant)>,
}

impl StudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: StudioConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(config)
    }

    pub fn with_config(config: StudioConfig) -> Self {
        Self {
            canvas: ParticleCanvas::new(config.field.clone()),
            feed: PostFeed::new(),
            textures: ImageTextures::new(),
            status_message: None,
            config,
        }
    }

    pub fn feed(&self) -> &PostFeed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut PostFeed {
        &mut self.feed
    }

    pub fn canvas(&self) -> &ParticleCanvas {
        &self.canvas
    }

    fn show_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    fn pick_image(&mut self) {
        let extensions = self.config.feed.image_extensions.as_slice();
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", extensions)
            .pick_file()
        else {
            return;
        };

        match SelectedImage::from_path(&path) {
            Ok(image) => {
                info!(path = %path.display(), bytes = image.bytes.len(), "image selected");
                self.feed.select_image(image);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "image selection failed");
                self.show_status(format!("Could not open {}: {}", path.display(), e));
            }
        }
    }

    /// Tear everything down: stop the canvas loop and release all images.
    pub fn shutdown(&mut self) {
        self.canvas.teardown();
        self.feed.close();
        self.textures.clear();
    }

    fn render_feed(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        let feed_config = &self.config.feed;

        ui.add_space(24.0);
        ui.heading(egui::RichText::new(feed_config.title.as_str()).size(28.0).strong());
        if let Some((msg, _)) = &self.status_message {
            ui.label(egui::RichText::new(msg.as_str()).color(egui::Color32::LIGHT_RED));
        }
        ui.add_space(16.0);

        let action = render_compose_card(ui, &mut self.feed, feed_config);
        if action.launch {
            // No image pending means nothing happens.
            self.feed.submit_post();
        }

        let ids: Vec<PostId> = self.feed.posts().iter().map(|p| p.id()).collect();
        for id in ids {
            ui.add_space(16.0);
            let mut spark = false;
            card_frame(ui).show(ui, |ui| {
                ui.set_width(ui.available_width());
                if let Some(post) = self.feed.post(id) {
                    let texture = self.textures.get(&ctx, self.feed.images(), post.image());
                    render_post_body(ui, post, texture, feed_config);
                }
                spark = render_comment_input(ui, self.feed.comment_draft_mut(id), feed_config);
            });
            if spark {
                self.feed.submit_comment_draft(id);
            }
        }
        ui.add_space(24.0);

        if action.pick_image {
            self.pick_image();
        }
    }
}

impl StudioApp {
    /// One frame of the studio: canvas behind, feed column on top.
    pub fn show_ui(&mut self, ctx: &egui::Context) {
        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
            }
        }

        self.textures.retain_live(self.feed.images());
        self.canvas.show(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                // Registered first so every widget on top of it wins hit-testing.
                let background = ui.interact(
                    ui.max_rect(),
                    ui.id().with("particle_canvas"),
                    egui::Sense::click(),
                );

                let column_width = self.config.feed.column_width.min(ui.available_width());
                // Dragging the feed would claim the background's clicks.
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .drag_to_scroll(false)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(column_width);
                            self.render_feed(ui);
                        });
                    });

                if background.clicked() {
                    if let Some(pos) = background.interact_pointer_pos() {
                        self.canvas.click(pos, ctx.pixels_per_point());
                    }
                }
            });
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shutdown();
            return;
        }
        self.show_ui(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b] = self.config.field.background.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }
}

impl Drop for StudioApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
