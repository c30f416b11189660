//! Error types for the Shipment actor.

use crate::commodity_actor::CommodityError;
use crate::location_actor::LocationError;
use crate::model::{ShipmentId, ShipmentStatus};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShipmentError {
    /// The order was rejected. `field` names the offending input.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Shipment {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: ShipmentId,
        from: ShipmentStatus,
        to: ShipmentStatus,
    },

    #[error("Shipment not found: {0}")]
    NotFound(String),

    #[error("Shipment already exists: {0}")]
    AlreadyExists(String),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Commodity error: {0}")]
    Commodity(#[from] CommodityError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ShipmentError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ShipmentError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<String> for ShipmentError {
    fn from(msg: String) -> Self {
        ShipmentError::ActorCommunicationError(msg)
    }
}
