#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod context;
mod deck;
mod theme;

use anyhow::Context;
use bento_core::FieldStore;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::config::{Args, PopupConfig, DEFAULT_LOG_FILTER};
use crate::context::PopupContext;

/// `--log-level` wins over `RUST_LOG`, which wins over the default
fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Open the store and resolve the manifest the cards will load from
fn build_context(config: &PopupConfig) -> anyhow::Result<PopupContext> {
    let store = config
        .open_store()
        .with_context(|| format!("opening preferences at {}", config.prefs_path().display()))?;
    let manifest = config
        .load_manifest()
        .with_context(|| format!("loading gallery assets from {:?}", config.assets))?;

    tracing::info!(assets = manifest.len(), "asset manifest ready");
    Ok(PopupContext::new(FieldStore::new(store), manifest))
}

fn main() -> anyhow::Result<()> {
    let config = PopupConfig::from(Args::parse());
    init_logging(config.log_level.as_deref());

    let context = build_context(&config)?;

    tracing::info!("Starting Bento Popup with data dir: {:?}", config.data_dir);

    // Popup-sized window
    let window_width = 800.0;
    let window_height = 600.0;

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Bento Popup")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(context)
        .launch(app::App);

    Ok(())
}
