//! Tree API Endpoints
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/v1/tree/allDescendants?id=` - All descendants of a node
//! - `PUT /api/v1/tree/:id/parent/:parent_id` - Re-parent a node

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use treeline_core::Node;

use crate::{ApiError, AppState};

/// Query parameters for the descendants endpoint
#[derive(Debug, Deserialize)]
pub struct DescendantsQuery {
    /// Id of the node whose descendants are requested
    id: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/api/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// All descendants of a node, as a flat JSON array
///
/// # Query Parameters
///
/// - `id`: Node id to expand
///
/// # Example
///
/// ```bash
/// curl "http://localhost:8080/api/v1/tree/allDescendants?id=earth"
/// ```
///
/// Unknown ids are the caller's mistake and come back as 400, not 404.
async fn get_all_descendants(
    State(state): State<AppState>,
    Query(params): Query<DescendantsQuery>,
) -> Result<Json<Vec<Node>>, ApiError> {
    tracing::info!("Descendants requested for node {}", params.id);
    let descendants = state.tree.find_descendants(&params.id).await?;
    Ok(Json(descendants))
}

/// Move a node (with its subtree) under a new parent
///
/// # Path Parameters
///
/// - `id`: Node to move
/// - `parent_id`: New parent
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/tree/sweden/parent/asia
/// ```
async fn change_parent(
    State(state): State<AppState>,
    Path((id, parent_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    tracing::info!("Re-parent requested: node {} under {}", id, parent_id);
    state.tree.change_parent(&id, &parent_id).await?;
    Ok(StatusCode::OK)
}

/// Create router with all tree endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/v1/tree/allDescendants", get(get_all_descendants))
        .route("/api/v1/tree/:id/parent/:parent_id", put(change_parent))
        .with_state(state)
}
