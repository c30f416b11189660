//! Error types for the Commodity actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommodityError {
    #[error("Commodity not found: {0}")]
    NotFound(String),

    #[error("Commodity already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CommodityError {
    fn from(msg: String) -> Self {
        CommodityError::ActorCommunicationError(msg)
    }
}
