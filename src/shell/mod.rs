//! Dashboard Shell
//!
//! HTTP front of the dashboard, built with Axum. Every page route answers
//! with the page's chart options as JSON.
//!
//! # Endpoints
//!
//! - `GET /home` - Home page charts
//! - `GET /emotion` - Emotion page gauges
//! - `GET /menu` - Navigation menu
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Uptime and version
//!
//! `/` and unknown paths redirect (307) to `/home`. A page whose
//! statistics call is rejected with 401 redirects (303) to the configured
//! sign-in URL.

pub mod error;
mod handlers;
pub mod routes;
pub mod state;

pub use error::{ShellError, ShellResult};
pub use routes::{menu, resolve, MenuItem, Navigation, Page, DEFAULT_PAGE};
pub use state::ShellState;

use axum::{routing::get, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::events::GlobalEvent;
use crate::pages::{EmotionPage, HomePage, PageView};

/// Load a page and derive its charts
pub async fn render(state: &ShellState, page: Page) -> ShellResult<PageView> {
    let source = state.source.as_ref();
    let result = match page {
        Page::Home => HomePage::load(source, &state.assets).await.map(PageView::Home),
        Page::Emotion => EmotionPage::load(source).await.map(PageView::Emotion),
    };

    result.map_err(|e| {
        if !e.is_unauthorized() {
            state.events.publish_forced(
                GlobalEvent::ApiError,
                json!({ "page": page.slug(), "message": e.to_string() }),
            );
        }
        ShellError::from_api(e, &state.config.sign_in_url)
    })
}

/// Build the shell router with all routes and middleware
pub fn build_router(state: ShellState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(handlers::liveness))
        .route("/", get(handlers::health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/menu", get(handlers::menu_items))
        .nest("/health", health_routes)
        .fallback(handlers::navigate)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the shell server
pub async fn serve(state: ShellState) -> ShellResult<()> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Tweetboard shell listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ShellError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Tweetboard shell shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
