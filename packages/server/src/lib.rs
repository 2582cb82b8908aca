//! Treeline HTTP Server
//!
//! Thin transport layer over `treeline-core`: routing, DTOs, and
//! error-to-status mapping live here; every tree decision is made by the
//! core. The server loads the forest before binding the listener, so no
//! request ever observes a partially loaded tree.
//!
//! # Architecture
//!
//! Endpoint modules each expose a `routes(state)` router and are merged
//! into the application router, with a CORS layer applied on top for
//! browser clients.

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use treeline_core::TreeService;

mod http_error;
mod tree_endpoints;

pub use http_error::ApiError;

/// Application state shared across all endpoints
#[derive(Clone)]
pub struct AppState {
    pub tree: TreeService,
}

/// Create the application router with all endpoint modules
pub fn create_router(tree: TreeService) -> Router {
    let state = AppState { tree };
    Router::new()
        .merge(tree_endpoints::routes(state))
        .layer(cors_layer())
}

/// Create the CORS layer for browser clients
///
/// Allows any origin by default so the API can be exercised from local
/// tooling. Set TREELINE_CORS_ORIGIN to restrict access to a single
/// origin:
///
/// ```bash
/// TREELINE_CORS_ORIGIN="http://localhost:5173" cargo run
/// ```
fn cors_layer() -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers(Any)
        .allow_credentials(false);

    match std::env::var("TREELINE_CORS_ORIGIN") {
        Ok(origin) => layer.allow_origin(
            origin
                .parse::<header::HeaderValue>()
                .expect("Invalid TREELINE_CORS_ORIGIN - must be a valid HTTP origin"),
        ),
        Err(_) => layer.allow_origin(Any),
    }
}

/// Start the HTTP server on `port`, serving the given (fully loaded) tree
///
/// # Errors
///
/// Returns an error if the listener fails to bind or the server exits
/// abnormally.
pub async fn start_server(tree: TreeService, port: u16) -> anyhow::Result<()> {
    let app = create_router(tree);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🚀 Tree API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
