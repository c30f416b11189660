//! Error types for the Location actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Location already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LocationError {
    fn from(msg: String) -> Self {
        LocationError::ActorCommunicationError(msg)
    }
}
