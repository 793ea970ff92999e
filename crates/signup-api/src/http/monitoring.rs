//! Health check handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of activities in the registry.
    pub activities: usize,
    /// Requests served so far.
    pub requests: u64,
}

/// Health check handler.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        activities: state.registry.len(),
        requests: state.request_count(),
    })
}

/// Liveness probe (Kubernetes).
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::default());
        state.increment_requests();

        let Json(health) = health_check(State(state.clone())).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.activities, state.registry.len());
        assert_eq!(health.requests, 1);
    }

    #[tokio::test]
    async fn test_liveness_probe() {
        let response = liveness_probe().await;
        assert_eq!(response.0["status"], "alive");
    }
}
