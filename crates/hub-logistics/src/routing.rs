//! # Route Table & Origin Policy
//!
//! Every order is shipped from exactly one origin, and the choice is a pure function of the
//! destination over a table that does not change while the system runs. Placing the same
//! order twice always yields the same origin and the same transit time.
//!
//! ## Policy
//!
//! 1. The candidate origin is the *default hub*, or the *secondary hub* when the destination
//!    is the default hub itself.
//! 2. If the table has a leg `candidate -> destination`, use it.
//! 3. Otherwise, if it has a leg `external supplier -> destination`, ship from the external
//!    supplier.
//! 4. Otherwise keep the candidate and use the default duration.
//!
//! Durations are positive by construction, so `arrival_time > start_time` for every shipment.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route {origin} -> {destination} must take longer than 0 ms")]
    ZeroDuration { origin: String, destination: String },

    #[error("route {origin} -> {destination}: {duration_ms} ms is out of range")]
    DurationOutOfRange {
        origin: String,
        destination: String,
        duration_ms: u64,
    },

    #[error("{role} must not be blank")]
    BlankHub { role: &'static str },
}

/// One directed leg as it appears in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub origin: String,
    pub destination: String,
    pub duration_ms: u64,
}

/// Serializable description of a route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSettings {
    pub default_hub: String,
    pub secondary_hub: String,
    pub external_supplier: String,
    pub default_duration_ms: u64,
    pub legs: Vec<Leg>,
}

impl RouteSettings {
    /// The demo network: three shipping points serving five locations.
    pub fn demo() -> Self {
        let leg = |origin: &str, destination: &str, duration_ms: u64| Leg {
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration_ms,
        };
        Self {
            default_hub: "Chennai Port".to_string(),
            secondary_hub: "Mumbai HQ".to_string(),
            external_supplier: "Global Supplier".to_string(),
            default_duration_ms: 30_000,
            legs: vec![
                leg("Mumbai HQ", "Delhi Hub", 60_000),
                leg("Mumbai HQ", "Pune Factory", 15_000),
                leg("Mumbai HQ", "Chennai Port", 90_000),
                leg("Mumbai HQ", "Kolkata Yard", 120_000),
                leg("Chennai Port", "Pune Factory", 45_000),
                leg("Chennai Port", "Delhi Hub", 100_000),
                leg("Chennai Port", "Mumbai HQ", 50_000),
                leg("Global Supplier", "Chennai Port", 120_000),
                leg("Global Supplier", "Mumbai HQ", 110_000),
                leg("Global Supplier", "Delhi Hub", 150_000),
            ],
        }
    }
}

/// Where a shipment leaves from and how long it travels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub origin: String,
    pub duration: TimeDelta,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    legs: HashMap<(String, String), TimeDelta>,
    default_hub: String,
    secondary_hub: String,
    external_supplier: String,
    default_duration: TimeDelta,
}

fn to_delta(origin: &str, destination: &str, duration_ms: u64) -> Result<TimeDelta, RouteError> {
    if duration_ms == 0 {
        return Err(RouteError::ZeroDuration {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    }
    i64::try_from(duration_ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .ok_or_else(|| RouteError::DurationOutOfRange {
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration_ms,
        })
}

impl RouteTable {
    pub fn from_settings(settings: &RouteSettings) -> Result<Self, RouteError> {
        for (role, name) in [
            ("default_hub", &settings.default_hub),
            ("secondary_hub", &settings.secondary_hub),
            ("external_supplier", &settings.external_supplier),
        ] {
            if name.trim().is_empty() {
                return Err(RouteError::BlankHub { role });
            }
        }

        let default_duration = to_delta("*", "*", settings.default_duration_ms)?;
        let mut legs = HashMap::with_capacity(settings.legs.len());
        for leg in &settings.legs {
            let duration = to_delta(&leg.origin, &leg.destination, leg.duration_ms)?;
            legs.insert((leg.origin.clone(), leg.destination.clone()), duration);
        }

        Ok(Self {
            legs,
            default_hub: settings.default_hub.clone(),
            secondary_hub: settings.secondary_hub.clone(),
            external_supplier: settings.external_supplier.clone(),
            default_duration,
        })
    }

    pub fn external_supplier(&self) -> &str {
        &self.external_supplier
    }

    fn leg(&self, origin: &str, destination: &str) -> Option<TimeDelta> {
        self.legs
            .get(&(origin.to_string(), destination.to_string()))
            .copied()
    }

    pub fn resolve(&self, destination: &str) -> RoutePlan {
        let candidate = if destination == self.default_hub {
            &self.secondary_hub
        } else {
            &self.default_hub
        };

        if let Some(duration) = self.leg(candidate, destination) {
            return RoutePlan {
                origin: candidate.clone(),
                duration,
            };
        }
        if let Some(duration) = self.leg(&self.external_supplier, destination) {
            return RoutePlan {
                origin: self.external_supplier.clone(),
                duration,
            };
        }
        RoutePlan {
            origin: candidate.clone(),
            duration: self.default_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> RouteTable {
        RouteTable::from_settings(&RouteSettings::demo()).unwrap()
    }

    #[test]
    fn default_hub_ships_from_secondary_hub() {
        let plan = demo().resolve("Chennai Port");
        assert_eq!(plan.origin, "Mumbai HQ");
        assert_eq!(plan.duration, TimeDelta::seconds(90));
    }

    #[test]
    fn other_destinations_ship_from_default_hub() {
        let table = demo();
        assert_eq!(
            table.resolve("Pune Factory"),
            RoutePlan {
                origin: "Chennai Port".into(),
                duration: TimeDelta::seconds(45)
            }
        );
        assert_eq!(table.resolve("Mumbai HQ").duration, TimeDelta::seconds(50));
        assert_eq!(table.resolve("Delhi Hub").duration, TimeDelta::seconds(100));
    }

    #[test]
    fn unrouted_destination_keeps_candidate_with_default_duration() {
        let plan = demo().resolve("Kolkata Yard");
        assert_eq!(plan.origin, "Chennai Port");
        assert_eq!(plan.duration, TimeDelta::seconds(30));
    }

    #[test]
    fn external_supplier_covers_missing_hub_leg() {
        let mut settings = RouteSettings::demo();
        settings
            .legs
            .retain(|l| !(l.origin == "Chennai Port" && l.destination == "Delhi Hub"));
        let plan = RouteTable::from_settings(&settings).unwrap().resolve("Delhi Hub");
        assert_eq!(plan.origin, "Global Supplier");
        assert_eq!(plan.duration, TimeDelta::seconds(150));
    }

    #[test]
    fn resolution_is_stable() {
        let table = demo();
        let first = table.resolve("Chennai Port");
        for _ in 0..100 {
            assert_eq!(table.resolve("Chennai Port"), first);
        }
    }

    #[test]
    fn zero_durations_are_rejected() {
        let mut settings = RouteSettings::demo();
        settings.legs[0].duration_ms = 0;
        assert!(matches!(
            RouteTable::from_settings(&settings),
            Err(RouteError::ZeroDuration { origin, .. }) if origin == "Mumbai HQ"
        ));

        let mut settings = RouteSettings::demo();
        settings.default_duration_ms = 0;
        assert!(RouteTable::from_settings(&settings).is_err());
    }

    #[test]
    fn blank_hub_is_rejected() {
        let mut settings = RouteSettings::demo();
        settings.secondary_hub = " ".into();
        assert_eq!(
            RouteTable::from_settings(&settings).unwrap_err(),
            RouteError::BlankHub {
                role: "secondary_hub"
            }
        );
    }
}
