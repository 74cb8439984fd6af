//! Tweetboard Shell Server
//!
//! Run with: cargo run --bin tweetboard
//!
//! # Configuration
//!
//! Read from the first of `~/.config/tweetboard/config.toml`,
//! `/etc/tweetboard/config.toml` or `./config.toml`, or from the path in
//! `TWEETBOARD_CONFIG`. `TWEETBOARD_*` variables override file values and
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tweetboard::api::ApiService;
use tweetboard::config::Config;
use tweetboard::events::EventBus;
use tweetboard::shell::{serve, ShellState};
use tweetboard::stats::StatisticService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("TWEETBOARD_CONFIG") {
        Ok(path) => Config::load_with_env(&PathBuf::from(path))?,
        Err(_) => Config::load_default(),
    };

    config
        .logging
        .init()
        .context("Failed to initialize logging")?;

    tracing::info!("Starting Tweetboard shell v{}", env!("CARGO_PKG_VERSION"));

    let cookies = Arc::new(
        config
            .cookies
            .open_store()
            .context("Failed to open cookie jar")?,
    );
    match cookies.path() {
        Some(path) => tracing::info!("Cookie jar: {:?}", path),
        None => tracing::info!("Cookie jar: in memory"),
    }

    let events = Arc::new(EventBus::new());
    let api = Arc::new(ApiService::new(
        config.api.service_config(),
        Arc::clone(&cookies),
        Arc::clone(&events),
    ));

    let mode = config.api.data_mode();
    tracing::info!("Statistics API: {} ({:?})", config.api.base_url, mode);
    let source = Arc::new(StatisticService::new(api, mode));

    let state = ShellState::new(source, cookies, events, config.shell, config.assets);
    serve(state).await?;

    tracing::info!("Tweetboard shell stopped");
    Ok(())
}
