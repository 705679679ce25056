//! Ataxx GUI
//!
//! A graphical interface for playing Ataxx against the AI or another player.
//! The AI seed is read from `ATAXX_SEED` (default 0); log verbosity from
//! `RUST_LOG` (default `info`).

use ataxx::ui::AtaxxApp;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn seed_from_env() -> u64 {
    match std::env::var("ATAXX_SEED") {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(value = %raw, "ATAXX_SEED is not a number, using 0");
            0
        }),
        Err(_) => 0,
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = seed_from_env();
    info!(seed, "starting Ataxx");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Ataxx"),
        ..Default::default()
    };

    eframe::run_native(
        "Ataxx",
        options,
        Box::new(move |cc| Ok(Box::new(AtaxxApp::new(cc, seed)))),
    )
}
