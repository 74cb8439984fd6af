//! Event Bus
//!
//! In-process publish/subscribe keyed by event name. Used to carry
//! cross-cutting signals (for example an expired session) from the
//! data-access layer to whoever needs to react, without direct coupling.
//!
//! The bus is an ordinary value: construct one, wrap it in an `Arc`, and
//! hand it to the components that publish or subscribe.

mod bus;

pub use bus::{Callback, EventBus, Subscription};

/// Events published by the dashboard itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalEvent {
    /// The API rejected the session token (HTTP 401)
    AuthFailed,
    /// Any other API failure worth surfacing globally
    ApiError,
}

impl GlobalEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalEvent::AuthFailed => "auth_failed",
            GlobalEvent::ApiError => "api_error",
        }
    }
}

impl AsRef<str> for GlobalEvent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for GlobalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
