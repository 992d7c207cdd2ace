//! Common routes: root greeting, health, version.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HelloBody {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn hello() -> Json<HelloBody> {
    Json(HelloBody {
        message: "Hello World",
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Stateless routes: GET /, GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/version", get(version))
}
