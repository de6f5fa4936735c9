mod app;
mod config;
mod error;
mod i18n;
mod input;
mod io;
mod message;
mod model;
mod state;
mod style;
mod subscription;
mod view;

use app::Folio;
use config::Config;
use eframe::egui;
use state::Route;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = Config::load();
    if let Err(e) = Config::create_default() {
        warn!("Could not write default config: {}", e);
    }

    // Optional start route, e.g. `folio /project/lemon-dapp`
    let start = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|e| {
            warn!("{}, starting at /", e);
            Route::Home
        }),
        None => Route::Home,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Folio"),
        ..Default::default()
    };

    info!("Starting Folio");
    let result = eframe::run_native(
        "Folio",
        options,
        Box::new(|cc| Ok(Box::new(Folio::new(cc, config, start)))),
    );
    if let Err(e) = &result {
        error!("Application error: {}", e);
    }
    result
}
