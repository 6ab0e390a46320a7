//! Axum HTTP surface: routing, CORS, request tracing.

pub mod health;
pub mod search;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the router with all routes and layers. Shared with tests.
///
/// CORS is permissive: the browser dashboard runs on its own origin and
/// authenticates with a bearer token, not cookies. The layer also answers
/// `OPTIONS` preflights before they reach any handler, and stamps error
/// responses the same as successes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search::search))
        .route("/health", get(health::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
