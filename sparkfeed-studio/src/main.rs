//! SparkFeed Studio - post photos over a firework canvas
//!
//! Usage: `sparkfeed-studio [config.json]`
//! Log verbosity follows `RUST_LOG` (default `info`).

use eframe::egui;
use sparkfeed::StudioConfig;
use sparkfeed_studio::StudioApp;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(std::env::args().nth(1));
    let title = config.feed.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 800.0])
            .with_title(title.as_str()),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc, config)))),
    )
}

fn load_config(path: Option<String>) -> StudioConfig {
    let Some(path) = path else {
        return StudioConfig::default();
    };
    match StudioConfig::load(&path) {
        Ok(config) => {
            info!(%path, "loaded config");
            config
        }
        Err(e) => {
            warn!(%path, error = %e, "config load failed, using defaults");
            StudioConfig::default()
        }
    }
}
