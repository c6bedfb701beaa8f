use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let sms_gateway = if state.otp_service.sms_configured() {
        "configured"
    } else {
        "unconfigured"
    };

    Json(json!({
        "status": "healthy",
        "sms_gateway": sms_gateway,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
