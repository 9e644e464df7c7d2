use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rules: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let rules = state.runner.extractor().rules().len();
    info!(rules, "Health check passed");
    Json(HealthResponse {
        status: "OK".to_string(),
        rules,
    })
}
