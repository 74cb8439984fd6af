//! # Tweetboard
//!
//! Tweet statistics dashboard: fetches annual, monthly and hourly tweet
//! counts, word weights and a sentiment breakdown from a statistics API,
//! and turns them into ECharts option objects served per page.
//!
//! ## Modules
//!
//! - [`api`]: Typed HTTP access to the statistics API
//! - [`cookie`]: Persisted session/locale cookie jar
//! - [`events`]: Publish/subscribe bus for cross-cutting signals
//! - [`stats`]: Statistic fetchers with a mock-data mode
//! - [`pages`]: Page loaders and chart option builders
//! - [`shell`]: Routed dashboard server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tweetboard::api::{ApiService, ApiServiceConfig};
//! use tweetboard::cookie::CookieStore;
//! use tweetboard::events::EventBus;
//! use tweetboard::pages::{HomePage, PageAssets};
//! use tweetboard::stats::{DataMode, StatisticService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiService::new(
//!         ApiServiceConfig::new("http://localhost:3000/api"),
//!         Arc::new(CookieStore::in_memory()),
//!         Arc::new(EventBus::new()),
//!     );
//!     let stats = StatisticService::new(Arc::new(api), DataMode::Mock);
//!
//!     let home = HomePage::load(&stats, &PageAssets::default()).await?;
//!     println!("2018: {:?} tweets", home.annual_total);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod cookie;
pub mod events;
pub mod pages;
pub mod shell;
pub mod stats;

// Re-export top-level types for convenience
pub use api::{ApiError, ApiParams, ApiResult, ApiService, ApiServiceConfig, PagedResult};

pub use cookie::{CookieError, CookieOptions, CookieStore, Expiry};

pub use events::{EventBus, GlobalEvent, Subscription};

pub use stats::{DataMode, StatisticService, StatisticSource};

pub use pages::{EmotionPage, HomePage, PageAssets, PageView};

pub use shell::{build_router, serve, Page, ShellError, ShellState};

pub use config::{
    generate_default_config, ApiClientConfig, Config, ConfigError, CookieConfig, LoggingConfig,
    ShellConfig,
};
