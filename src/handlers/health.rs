use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::service::DealershipService;

pub fn router() -> Router<DealershipService> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Dealership API is healthy"
    }))
}
