//! UI modules for the studio

mod compose_panel;
mod post_card;

pub use compose_panel::{render_compose_card, ComposeAction};
pub use post_card::{card_frame, render_comment_input, render_post_body};
