//! Registry error types.

use thiserror::Error;

/// Coarse classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The activity or the participant does not exist.
    NotFound,
    /// The participant is already signed up.
    Conflict,
    /// The seed data handed to the registry is inconsistent.
    InvalidSeed,
}

/// Errors from registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },

    #[error("Duplicate activity in seed: {0}")]
    DuplicateActivity(String),

    #[error("Duplicate participant {email} in seed activity {activity}")]
    DuplicateParticipant { activity: String, email: String },
}

impl RegistryError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound(_) | Self::NotSignedUp { .. } => ErrorKind::NotFound,
            Self::AlreadySignedUp { .. } => ErrorKind::Conflict,
            Self::DuplicateActivity(_) | Self::DuplicateParticipant { .. } => {
                ErrorKind::InvalidSeed
            }
        }
    }
}
