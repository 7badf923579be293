//! Card for composing a new post

use eframe::egui;
use sparkfeed::{FeedConfig, PostFeed};

/// What the user asked for on the compose card this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComposeAction {
    pub pick_image: bool,
    pub launch: bool,
}

pub fn render_compose_card(ui: &mut egui::Ui, feed: &mut PostFeed, config: &FeedConfig) -> ComposeAction {
    let mut action = ComposeAction::default();

    super::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            action.pick_image = ui.button(config.choose_image_label.as_str()).clicked();
            match feed.pending_image() {
                Some(image) => ui.label(egui::RichText::new(&image.name).weak()),
                None => ui.label(egui::RichText::new("No image selected").weak().italics()),
            };
        });

        ui.add(
            egui::TextEdit::singleline(feed.caption_mut())
                .hint_text(config.caption_hint.as_str())
                .desired_width(f32::INFINITY),
        );

        action.launch = ui.button(config.launch_label.as_str()).clicked();
    });

    action
}
