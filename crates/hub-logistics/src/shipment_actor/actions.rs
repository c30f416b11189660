//! Custom actions for the Shipment actor and the settlement outcome they produce.

use crate::model::{Location, Shipment};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub enum ShipmentAction {
    /// Deliver the shipment if it has arrived by `at`.
    Settle { at: DateTime<Utc> },
    /// Stop an undelivered shipment for good.
    Cancel,
}

/// Results from ShipmentActions - variants match 1:1 with ShipmentAction
#[derive(Debug, Clone)]
pub enum ShipmentActionResult {
    Settle(Settlement),
    Cancel(Shipment),
}

/// What a settlement attempt did.
///
/// Only `Delivered` changed anything. Every other outcome is a normal answer to a
/// speculative request (a poller tick, a client polling too early), not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Delivered {
        shipment: Shipment,
        location: Location,
        credited: u64,
        discarded: u64,
    },
    NoOp(NoOpReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    AlreadyDelivered,
    NotYetArrived { remaining_ms: i64 },
    Cancelled,
    UnknownShipment,
}

impl Settlement {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Settlement::Delivered { .. })
    }

    /// Machine-readable outcome name.
    pub fn code(&self) -> &'static str {
        match self {
            Settlement::Delivered { .. } => "delivered",
            Settlement::NoOp(reason) => reason.code(),
        }
    }
}

impl NoOpReason {
    pub fn code(&self) -> &'static str {
        match self {
            NoOpReason::AlreadyDelivered => "already_delivered",
            NoOpReason::NotYetArrived { .. } => "not_yet_arrived",
            NoOpReason::Cancelled => "cancelled",
            NoOpReason::UnknownShipment => "unknown_shipment",
        }
    }
}
