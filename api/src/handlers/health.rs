//! Service info and health endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::ports::ItemRepository;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub architecture: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub app_name: String,
    pub version: String,
}

/// GET /
pub async fn root<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {}", state.config.app_name),
        version: state.config.app_version.clone(),
        architecture: "hexagonal",
    })
}

/// GET /health
///
/// Always 200; `status` is `degraded` when the database does not answer.
pub async fn health_check<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Json<HealthResponse> {
    let (status, database) = match state.health.ping().await {
        Ok(()) => ("ok", "connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            ("degraded", "disconnected")
        }
    };

    Json(HealthResponse {
        status,
        database,
        app_name: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
    })
}
