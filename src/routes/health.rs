use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports whether the subscription store file exists yet. An absent store
/// is still healthy; it reads as empty until the first webhook arrives.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store_status = if state.store.exists().await {
        "present"
    } else {
        "absent"
    };

    Json(json!({
        "status": "healthy",
        "store": store_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
