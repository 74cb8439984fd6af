//! Shell State
//!
//! Shared state accessible by all shell handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ShellConfig;
use crate::cookie::CookieStore;
use crate::events::{EventBus, GlobalEvent, Subscription};
use crate::pages::PageAssets;
use crate::stats::StatisticSource;

/// Shared application state for all handlers
pub struct ShellState {
    /// Statistics behind every page
    pub source: Arc<dyn StatisticSource>,
    /// Session cookies, cleared when the API rejects the token
    pub cookies: Arc<CookieStore>,
    pub events: Arc<EventBus>,
    pub config: Arc<ShellConfig>,
    pub assets: Arc<PageAssets>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    auth_subscription: Subscription,
}

impl ShellState {
    /// Create the state and start listening for `auth_failed`
    pub fn new(
        source: Arc<dyn StatisticSource>,
        cookies: Arc<CookieStore>,
        events: Arc<EventBus>,
        config: ShellConfig,
        assets: PageAssets,
    ) -> Self {
        let jar = Arc::clone(&cookies);
        let auth_subscription = events.subscribe(GlobalEvent::AuthFailed, move |_| {
            tracing::warn!("Session rejected by the API, clearing session cookies");
            if let Err(e) = jar.remove_auth_token() {
                tracing::error!("Failed to remove auth token: {}", e);
            }
            if let Err(e) = jar.remove_company_id() {
                tracing::error!("Failed to remove company id: {}", e);
            }
        });

        Self {
            source,
            cookies,
            events,
            config: Arc::new(config),
            assets: Arc::new(assets),
            start_time: Instant::now(),
            auth_subscription,
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Drop for ShellState {
    fn drop(&mut self) {
        self.events.unsubscribe(&self.auth_subscription);
    }
}
