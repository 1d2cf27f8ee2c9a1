//! Health check and index endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database_ready: bool,
}

/// GET /health
///
/// Never touches the database; `database_ready` reflects the last connection attempt.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        database_ready: state.db().is_ready(),
    })
}

/// Index response: what this server offers
#[derive(Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub endpoints: &'static [&'static str],
}

const ENDPOINTS: &[&str] = &[
    "GET /rooms",
    "POST /rooms/add",
    "GET /rooms/export",
    "GET /rooms/{room_id}",
    "GET|POST /rooms/{room_id}/edit",
    "GET|POST /rooms/{room_id}/delete",
    "POST /rooms/{room_id}/add_item",
    "GET /items",
    "GET /items/export",
    "GET|POST /items/{item_id}/edit/{room_id}",
    "GET|POST /items/{item_id}/delete/{room_id}",
    "GET /health",
    "GET /debug",
];

/// GET /
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "classroom-inventory",
        endpoints: ENDPOINTS,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_lists_routes() {
        let Json(body) = index().await;
        assert!(body.endpoints.contains(&"GET /rooms/export"));
    }
}
