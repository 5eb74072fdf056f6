//! HTTP host for the plugin pipeline (feature `server`)
//!
//! Exposes the two endpoints of the original service:
//! - `POST /convert` runs a caller supplied pipeline over the input and
//!   answers with a `{"success": ...}` or `{"failure": ...}` envelope
//! - `GET /listplugins` returns the registry listing as JSON
//!
//! Unlike the command line host there is no name resolution step: the caller
//! is expected to send exact plugin names taken from the listing.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::pipeline::{self, Invocation};
use crate::plugin::PluginInfo;
use crate::registry::PluginRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PluginRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(PluginRegistry::with_builtins()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
pub struct PluginRequest {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub input: String,
    #[serde(default)]
    pub plugins: Vec<PluginRequest>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ConvertResponse {
    Success { success: String },
    Failure { failure: String },
}

/// Runs the requested pipeline and folds the outcome into the response
/// envelope. Kept free of any axum types so it can be exercised directly.
pub fn convert_request(registry: &PluginRegistry, request: &ConvertRequest) -> ConvertResponse {
    let chain: Vec<Invocation> = request
        .plugins
        .iter()
        .map(|p| Invocation::new(p.name.clone(), p.options.clone()))
        .collect();

    match pipeline::run(registry, request.input.as_bytes(), &chain) {
        Ok(output) => ConvertResponse::Success {
            success: String::from_utf8_lossy(&output).into_owned(),
        },
        Err(e) => ConvertResponse::Failure {
            failure: e.to_string(),
        },
    }
}

async fn convert(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Json<ConvertResponse> {
    Json(convert_request(&state.registry, &request))
}

async fn list_plugins(State(state): State<AppState>) -> Json<Vec<PluginInfo>> {
    Json(state.registry.listing())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(convert))
        .route("/listplugins", get(list_plugins))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
