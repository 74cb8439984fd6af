//! Shell Handlers
//!
//! - GET /menu - Navigation menu
//! - GET /health/live - Liveness probe
//! - GET /health - Uptime and version
//! - everything else - resolved against the route table

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::render;
use super::routes::{menu, resolve, MenuItem, Navigation};
use super::state::ShellState;

/// GET /menu
pub async fn menu_items() -> Json<Vec<MenuItem>> {
    Json(menu())
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<ShellState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Page routes, `/` and unknown paths
pub async fn navigate(State(state): State<Arc<ShellState>>, uri: Uri) -> Response {
    match resolve(uri.path()) {
        Navigation::Render(page) => match render(&state, page).await {
            Ok(view) => Json(view).into_response(),
            Err(e) => e.into_response(),
        },
        Navigation::Redirect(page) => {
            tracing::debug!(from = %uri.path(), to = %page.path(), "Redirecting");
            Redirect::temporary(&page.path()).into_response()
        }
    }
}
