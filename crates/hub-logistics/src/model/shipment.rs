//! A quantity of one commodity travelling from an origin to a destination location.
//!
//! ```text
//! Scheduled --(dispatch)--> InTransit --(arrived, settle)--> Delivered
//!                               \--(cancel)--> Cancelled
//! ```
//!
//! A shipment is dispatched while it is being created, so nothing outside the shipment actor
//! ever sees `Scheduled`. `Delivered` and `Cancelled` are terminal. `quantity`, `origin`,
//! `destination` and `cargo` never change after dispatch.

use crate::routing::RoutePlan;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

const ID_PREFIX: &str = "ORD-";
const FIRST_ORDER_NUMBER: u32 = 1000;

/// `ORD-<n>`, sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipmentId(pub u32);

impl ShipmentId {
    pub fn from_sequence(seq: u32) -> Self {
        Self(FIRST_ORDER_NUMBER.saturating_add(seq))
    }
}

impl Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a shipment id: {0:?}")]
pub struct ParseShipmentIdError(pub String);

impl FromStr for ShipmentId {
    type Err = ParseShipmentIdError;

    /// Only the exact `ORD-<n>` form is accepted: no padding, sign or leading zeros.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ID_PREFIX)
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|n| n.parse().ok())
            .map(ShipmentId)
            .filter(|id| id.to_string() == s)
            .ok_or_else(|| ParseShipmentIdError(s.to_string()))
    }
}

impl Serialize for ShipmentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Scheduled,
    InTransit,
    Delivered,
    Cancelled,
}

impl Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scheduled => "Scheduled",
            Self::InTransit => "InTransit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// Freight class, picked from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Road,
    Air,
}

impl Transport {
    pub fn vehicle(self) -> &'static str {
        match self {
            Self::Road => "Tata Prima 5530.S",
            Self::Air => "C-130J Hercules",
        }
    }

    pub fn velocity_kmh(self) -> u32 {
        match self {
            Self::Road => 72,
            Self::Air => 450,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: ShipmentId,
    pub origin: String,
    pub destination: String,
    pub cargo: String,
    pub quantity: u64,
    pub status: ShipmentStatus,
    pub start_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub transport: Transport,
    pub carbon_kg: f64,
    pub estimated_cost: f64,
}

impl Shipment {
    /// A shipment that has been accepted but not routed yet.
    pub fn scheduled(
        id: ShipmentId,
        destination: String,
        cargo: String,
        quantity: u64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            origin: String::new(),
            destination,
            cargo,
            quantity,
            status: ShipmentStatus::Scheduled,
            start_time: placed_at,
            arrival_time: placed_at,
            transport: Transport::Road,
            carbon_kg: carbon_estimate(id),
            estimated_cost: 0.0,
        }
    }

    /// Attach a route and put the shipment on the road (or in the air).
    ///
    /// Returns `false`, leaving the shipment untouched, if the arrival time would not be
    /// representable.
    pub(crate) fn dispatch(&mut self, plan: RoutePlan, transport: Transport) -> bool {
        let Some(arrival) = self.start_time.checked_add_signed(plan.duration) else {
            return false;
        };
        self.origin = plan.origin;
        self.arrival_time = arrival;
        self.transport = transport;
        self.status = ShipmentStatus::InTransit;
        true
    }

    pub fn has_arrived(&self, now: DateTime<Utc>) -> bool {
        now >= self.arrival_time
    }

    /// Milliseconds until arrival, 0 once arrived.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        (self.arrival_time - now).num_milliseconds().max(0)
    }

    /// Journey completion in percent. Cosmetic: settlement never reads it. A cancelled
    /// shipment stays at 0.
    pub fn progress_at(&self, now: DateTime<Utc>) -> f64 {
        match self.status {
            ShipmentStatus::Delivered => 100.0,
            ShipmentStatus::Scheduled | ShipmentStatus::Cancelled => 0.0,
            ShipmentStatus::InTransit => {
                let total = (self.arrival_time - self.start_time).num_milliseconds();
                if total <= 0 {
                    return 0.0;
                }
                let elapsed = (now - self.start_time).num_milliseconds();
                (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
            }
        }
    }
}

/// Create payload for the shipment actor.
///
/// `quantity` is signed so a negative request reaches validation instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub destination: String,
    pub commodity: String,
    pub quantity: i64,
    pub placed_at: DateTime<Utc>,
}

/// Deterministic stand-in for an emissions figure, 10.0 to 59.9 kg.
fn carbon_estimate(id: ShipmentId) -> f64 {
    let bucket = (u64::from(id.0) * 37) % 500;
    10.0 + bucket as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn in_transit() -> Shipment {
        let mut s = Shipment::scheduled(
            ShipmentId(1001),
            "Chennai Port".into(),
            "Titanium Alloy".into(),
            500,
            t0(),
        );
        let plan = RoutePlan {
            origin: "Mumbai HQ".into(),
            duration: TimeDelta::seconds(90),
        };
        assert!(s.dispatch(plan, Transport::Road));
        s
    }

    #[test]
    fn id_display_and_parse() {
        assert_eq!(ShipmentId::from_sequence(1).to_string(), "ORD-1001");
        assert_eq!("ORD-1042".parse::<ShipmentId>().unwrap(), ShipmentId(1042));
        assert!("SHP-1042".parse::<ShipmentId>().is_err());
        assert!("ORD-".parse::<ShipmentId>().is_err());
    }

    #[test]
    fn id_parse_accepts_only_the_exact_form() {
        for raw in ["ORD-01001", "ORD-+1001", " ORD-1001", "ORD-1001 ", "ORD--1", "ORD-1e3"] {
            assert!(raw.parse::<ShipmentId>().is_err(), "{raw:?} should not parse");
        }
        assert_eq!("ORD-0".parse::<ShipmentId>().unwrap(), ShipmentId(0));
    }

    #[test]
    fn id_serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&ShipmentId(1007)).unwrap(),
            "\"ORD-1007\""
        );
    }

    #[test]
    fn dispatch_sets_route() {
        let s = in_transit();
        assert_eq!(s.status, ShipmentStatus::InTransit);
        assert_eq!(s.origin, "Mumbai HQ");
        assert_eq!(s.arrival_time - s.start_time, TimeDelta::seconds(90));
    }

    #[test]
    fn progress_and_remaining() {
        let s = in_transit();
        assert_eq!(s.progress_at(t0()), 0.0);
        assert_eq!(s.progress_at(t0() + TimeDelta::seconds(45)), 50.0);
        assert_eq!(s.progress_at(t0() + TimeDelta::seconds(300)), 100.0);
        assert_eq!(s.remaining_ms(t0() + TimeDelta::seconds(30)), 60_000);
        assert_eq!(s.remaining_ms(t0() + TimeDelta::seconds(300)), 0);
        assert!(!s.has_arrived(t0() + TimeDelta::seconds(89)));
        assert!(s.has_arrived(t0() + TimeDelta::seconds(90)));
    }

    #[test]
    fn cancelled_progress_is_frozen() {
        let mut s = in_transit();
        s.status = ShipmentStatus::Cancelled;
        assert_eq!(s.progress_at(t0() + TimeDelta::seconds(45)), 0.0);
        assert_eq!(s.progress_at(t0() + TimeDelta::seconds(300)), 0.0);
    }

    #[test]
    fn carbon_estimate_stays_in_band() {
        for n in 1000..3000 {
            let kg = carbon_estimate(ShipmentId(n));
            assert!((10.0..60.0).contains(&kg), "{kg}");
        }
    }

    #[test]
    fn transport_telemetry() {
        assert_eq!(Transport::Air.vehicle(), "C-130J Hercules");
        assert_eq!(Transport::Air.velocity_kmh(), 450);
        assert_eq!(Transport::Road.velocity_kmh(), 72);
    }
}
