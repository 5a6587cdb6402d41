//! Entry point for the slide viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load the deck via `deck`.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application with the loaded deck and config.

mod anim;
mod announcer;
mod app;
mod config;
mod deck;
mod gesture;
mod navigator;

use crate::app::run_app;
use crate::config::load_config;
use crate::deck::load_deck;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

const DEFAULT_DECK: &str = "decks/welcome.toml";

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let deck_path = parse_args();
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %deck_path.display(),
        level = %config.log_level,
        "Starting slide viewer"
    );

    let deck = load_deck(&deck_path)?;
    run_app(deck, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> PathBuf {
    match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            warn!("No deck given; falling back to {DEFAULT_DECK}");
            PathBuf::from(DEFAULT_DECK)
        }
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}
