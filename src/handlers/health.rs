use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "ML Service is running",
        model_loaded: state.classifier.is_loaded(),
    })
}
