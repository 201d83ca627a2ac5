use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let enhancer = if state.config.groq_api_key.is_some() {
        "llm"
    } else {
        "simulated"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-enhancer",
        "enhancer": enhancer,
        "sessions": state.sessions.len().await,
    }))
}
