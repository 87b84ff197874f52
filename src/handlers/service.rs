// handlers/service.rs - GET / and GET /health

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::app::AppState;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Filestore API",
            "version": version,
            "description": "Minimal HTTP file storage over a local logs directory",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "create": "POST /api/files (admin)",
                "read": "GET /api/files/:filename (public)",
                "delete": "DELETE /api/files/:filename (admin)",
            }
        }
    }))
}

/// Liveness probe; degraded when the logs directory is missing
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    if state.store.is_available().await {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "storage": "ok"
                }
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "storage unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "storage": state.store.logs_dir().display().to_string()
                }
            })),
        )
    }
}
