//! FitLog - Local Fitness Tracking Application
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitLog v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("FitLog"),
        ..Default::default()
    };

    eframe::run_native(
        "FitLog",
        options,
        Box::new(|cc| Ok(Box::new(app::FitLogApp::new(cc)?))),
    )
}
