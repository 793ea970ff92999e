//! Activity API handlers.
//!
//! Each handler translates path and query parameters into one registry call.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use signup_core::ActivityCatalog;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters identifying a participant.
#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    /// Participant email, matched exactly.
    pub email: String,
}

/// Confirmation returned by mutating endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List all activities.
///
/// GET /activities
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityCatalog> {
    Json(state.registry.list_activities())
}

/// Sign a participant up for an activity.
///
/// POST /activities/{activity}/signup?email=
pub async fn signup(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity) = path.map_err(reject_path)?;
    let Query(ParticipantQuery { email }) = query.map_err(reject_query)?;

    state.registry.signup(&activity, &email)?;
    info!(activity = %activity, email = %email, "Signed up");

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity),
    }))
}

/// Remove a participant from an activity.
///
/// DELETE /activities/{activity}/participants?email=
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity) = path.map_err(reject_path)?;
    let Query(ParticipantQuery { email }) = query.map_err(reject_query)?;

    state.registry.unregister(&activity, &email)?;
    info!(activity = %activity, email = %email, "Unregistered");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity),
    }))
}

fn reject_path(rejection: PathRejection) -> ApiError {
    ApiError::InvalidRequest(rejection.body_text())
}

fn reject_query(rejection: QueryRejection) -> ApiError {
    ApiError::InvalidRequest(rejection.body_text())
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
