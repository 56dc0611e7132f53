// main.rs - Interactive Conway's Game of Life on a wrapping board

use conway::{Config, LifeError, Session};
use eframe::egui;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui; // eframe::App implementation and the painter canvas

use ui::LifeApp;

#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] LifeError),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let session = Session::new(&config)?;
    info!(
        width = config.width,
        height = config.height,
        tick_rate = config.tick_rate,
        "starting session"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(session))),
    )?;
    Ok(())
}
