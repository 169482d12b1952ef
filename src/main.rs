//! Live Tuner - interactive parameter tuning panel
//!
//! Entry point for the demo application. An optional first argument names a
//! JSON configuration file to load at start-up.

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use live_tuner::app::{demo_panel, TunerApp};

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("live_tuner=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let root = match demo_panel() {
        Ok(root) => root,
        Err(e) => {
            error!("Could not build the demo panel: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = TunerApp::new("Live Tuner", root);
    if let Some(path) = std::env::args_os().nth(1) {
        app.load(path);
    }
    info!("Starting Live Tuner");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Live Tuner"),
        ..Default::default()
    };

    eframe::run_native("Live Tuner", options, Box::new(|_cc| Ok(Box::new(app))))
}
