//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::assets;
use crate::http::handlers::{list_activities, signup, unregister};
use crate::http::monitoring;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// /activities
///   GET    /activities                         - List activities
///   POST   /activities/{activity}/signup       - Sign up (?email=)
///   DELETE /activities/{activity}/participants - Unregister (?email=)
///
/// /          - Redirect to /static/index.html
/// /static/*  - Embedded UI
/// /health    - Health check
/// /livez     - Liveness probe
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let activity_routes = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity}/signup", post(signup))
        .route("/activities/{activity}/participants", delete(unregister))
        .route_layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .with_state(state.clone());

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .with_state(state);

    // UI and liveness have no state dependency
    let static_routes = Router::new()
        .route("/", get(assets::root))
        .route("/static/{*path}", get(assets::serve_static))
        .route("/livez", get(monitoring::liveness_probe));

    Router::new()
        .merge(activity_routes)
        .merge(monitoring_routes)
        .merge(static_routes)
        .layer(TraceLayer::new_for_http())
}

async fn count_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.increment_requests();
    next.run(request).await
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
