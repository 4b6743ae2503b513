//! Interactive Color Mixer
//!
//! Averages three base colors into one mixed color and lets the user
//! collect mixed colors into a palette.

mod app;
mod config;
mod render;
mod utils;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use app::state::MixerState;
use app::MixerApp;
use config::MixerConfig;

/// Interactive Color Mixer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug { "debug" } else { "info" };
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_owned());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::builder().parse_lossy(directives))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Color Mixer starting...");

    let config = MixerConfig::get_default();
    let state = MixerState::from_config(&config)?;
    let [width, height] = config.window_size();

    // Create native options for eframe
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([width, 480.0])
            .with_title("Interactive Color Mixer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Interactive Color Mixer",
        native_options,
        Box::new(move |cc| Ok(Box::new(MixerApp::new(cc, config, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
