use axum::{extract::State, Json};
use chrono::Local;
use serde_json::{json, Value};

use crate::db;
use crate::state::AppState;

/// GET /api/health
/// Service status plus a database probe. Not wrapped in the response envelope.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let database = if db::ping(&state.db).await { "up" } else { "down" };
    Json(json!({
        "status": "ok",
        "timestamp": Local::now().naive_local(),
        "service": "Job Assistance System",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}
