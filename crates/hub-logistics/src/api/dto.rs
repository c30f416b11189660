//! Request bodies and response views.
//!
//! Request field names follow the dashboard client; `market` and `material` are accepted as
//! aliases for `destination`/`location` and `commodity`. Quantities may arrive as a JSON
//! integer or as a string of digits, since form inputs post numbers as text.

use crate::clients::Adjustment;
use crate::model::{Location, Shipment, ShipmentId, ShipmentStatus, StockStatus};
use crate::shipment_actor::{NoOpReason, Settlement};
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// ── Requests ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(alias = "market")]
    pub destination: String,
    #[serde(alias = "material")]
    pub commodity: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: i64,
}

/// Body of the receive and cancel endpoints.
#[derive(Debug, Deserialize)]
pub struct ShipmentRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    #[serde(alias = "market")]
    pub location: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    pub action: Adjustment,
}

/// Accepts `500` or `"500"`. Range checks stay with the actors.
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("quantity {text:?} is not an integer"))),
    }
}

// ── Views ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MarketView {
    pub name: String,
    pub region: String,
    pub stock: u64,
    pub capacity: u64,
    pub daily_usage: u64,
    pub status: StockStatus,
    pub days_of_cover: Option<f64>,
}

impl From<&Location> for MarketView {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            region: location.region.clone(),
            stock: location.stock,
            capacity: location.capacity,
            daily_usage: location.daily_usage,
            status: location.status(),
            days_of_cover: location.days_of_cover(),
        }
    }
}

/// A shipment as seen at one instant.
#[derive(Debug, Serialize)]
pub struct ShipmentView {
    pub id: ShipmentId,
    pub origin: String,
    pub destination: String,
    pub cargo: String,
    pub quantity: u64,
    pub status: ShipmentStatus,
    pub start_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub vehicle: &'static str,
    pub velocity_kmh: u32,
    pub carbon_kg: f64,
    pub estimated_cost: f64,
    pub progress: f64,
    pub remaining_ms: i64,
}

impl ShipmentView {
    pub fn at(shipment: &Shipment, now: DateTime<Utc>) -> Self {
        let remaining_ms = match shipment.status {
            ShipmentStatus::InTransit => shipment.remaining_ms(now),
            _ => 0,
        };
        Self {
            id: shipment.id,
            origin: shipment.origin.clone(),
            destination: shipment.destination.clone(),
            cargo: shipment.cargo.clone(),
            quantity: shipment.quantity,
            status: shipment.status,
            start_time: shipment.start_time,
            arrival_time: shipment.arrival_time,
            vehicle: shipment.transport.vehicle(),
            velocity_kmh: shipment.transport.velocity_kmh(),
            carbon_kg: shipment.carbon_kg,
            estimated_cost: shipment.estimated_cost,
            progress: shipment.progress_at(now),
            remaining_ms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShipmentAck {
    pub success: bool,
    pub shipment: ShipmentView,
}

#[derive(Debug, Serialize)]
pub struct LocationAck {
    pub success: bool,
    pub location: MarketView,
    pub applied: u64,
    pub excess: u64,
}

/// Outcome of a receive request. `success` is true once the shipment is delivered, whether by
/// this request or an earlier one.
#[derive(Debug, Serialize)]
pub struct SettlementView {
    pub success: bool,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<ShipmentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<MarketView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credited: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discarded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_ms: Option<i64>,
}

impl SettlementView {
    pub fn at(settlement: &Settlement, now: DateTime<Utc>) -> Self {
        let mut view = Self {
            success: matches!(
                settlement,
                Settlement::Delivered { .. } | Settlement::NoOp(NoOpReason::AlreadyDelivered)
            ),
            outcome: settlement.code(),
            shipment: None,
            location: None,
            credited: None,
            discarded: None,
            remaining_ms: None,
        };
        match settlement {
            Settlement::Delivered {
                shipment,
                location,
                credited,
                discarded,
            } => {
                view.shipment = Some(ShipmentView::at(shipment, now));
                view.location = Some(location.into());
                view.credited = Some(*credited);
                view.discarded = Some(*discarded);
            }
            Settlement::NoOp(NoOpReason::NotYetArrived { remaining_ms }) => {
                view.remaining_ms = Some(*remaining_ms);
            }
            Settlement::NoOp(_) => {}
        }
        view
    }
}
