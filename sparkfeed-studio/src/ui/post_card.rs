//! Rendering of a single post and its anonymous comment thread

use eframe::egui;
use sparkfeed::{FeedConfig, Post};

/// Translucent card drawn over the particle canvas.
pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(egui::Color32::from_white_alpha(26))
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(16.0)
        .corner_radius(16.0)
}

/// Image, caption and the existing comments.
pub fn render_post_body(
    ui: &mut egui::Ui,
    post: &Post,
    texture: Option<&egui::TextureHandle>,
    config: &FeedConfig,
) {
    match texture {
        Some(texture) => {
            ui.add(egui::Image::new(texture).max_width(ui.available_width()));
        }
        None => {
            ui.label(egui::RichText::new("(image unavailable)").weak().italics());
        }
    }

    ui.label(post.caption());

    ui.add_space(4.0);
    ui.label(egui::RichText::new(config.comments_heading.as_str()).strong());
    for comment in post.comments() {
        ui.label(egui::RichText::new(format!("{} {}", config.comment_marker, comment)).small());
    }
}

/// Comment box and submit button. Returns true when the draft should be sent.
pub fn render_comment_input(ui: &mut egui::Ui, draft: &mut String, config: &FeedConfig) -> bool {
    ui.add(
        egui::TextEdit::singleline(draft)
            .hint_text(config.comment_hint.as_str())
            .desired_width(f32::INFINITY),
    );
    ui.small_button(config.spark_label.as_str()).clicked()
}
