//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `NameService`.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// CORS layer admitting requests from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The five record routes, without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/insert", post(handlers::names::insert))
        .route("/getAll", get(handlers::names::get_all))
        .route("/update", patch(handlers::names::update))
        .route("/delete/{id}", delete(handlers::names::delete))
        .route("/search/{name}", get(handlers::names::search))
}

/// Health route plus the five record routes, with state applied.
fn service_routes(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
}

/// Wrap a finished router in the CORS and tracing layers.
fn with_layers(router: Router) -> Router {
    router.layer(cors_layer()).layer(TraceLayer::new_for_http())
}

/// Create the main Axum router with all API routes.
///
/// For serving the browser client as well, use [`create_client_router`].
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`, `{name}`
pub fn create_router(ctx: AxumContext) -> Router {
    with_layers(service_routes(ctx))
}

/// Create a router with API routes and the browser client.
///
/// API routes take priority; any other path is looked up in `static_dir`,
/// with `/` answered by `index.html`. Static responses pass through the
/// same CORS and tracing layers as the API.
pub fn create_client_router<P: AsRef<Path>>(ctx: AxumContext, static_dir: P) -> Router {
    let serve_dir = ServeDir::new(static_dir.as_ref());
    with_layers(service_routes(ctx).fallback_service(serve_dir))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
