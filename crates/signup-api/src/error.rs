//! API error types and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use signup_core::{ErrorKind, RegistryError};

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Malformed request (e.g. missing query parameter).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Registry(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                ErrorKind::InvalidSeed => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message.
    pub fn detail(&self) -> String {
        match self {
            Self::Registry(RegistryError::ActivityNotFound(_)) => "Activity not found".to_string(),
            Self::Registry(RegistryError::AlreadySignedUp { .. }) => {
                "Student is already signed up".to_string()
            }
            Self::Registry(RegistryError::NotSignedUp { .. }) => {
                "Student is not signed up for this activity".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), "Request rejected: {}", self);
        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
