//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the hub's actors, and the background work that runs beside
//! them.
//!
//! ## Wiring
//!
//! [`HubSystem::start`] creates the three actors first and injects dependencies afterwards,
//! through each actor's `run(context)`:
//!
//! ```rust,ignore
//! let (location_actor, locations) = location_actor::new();
//! let (commodity_actor, commodities) = commodity_actor::new();
//! let (shipment_actor, shipments) = shipment_actor::new();
//!
//! tokio::spawn(location_actor.run(()));
//! tokio::spawn(commodity_actor.run(()));
//! tokio::spawn(shipment_actor.run(ShipmentContext { locations, commodities, routes }));
//! ```
//!
//! Shipments depend on locations and commodities, never the other way round. Because the
//! graph is acyclic, dropping every client shuts the whole system down: the shipment actor
//! stops first and releases the clients in its context, which lets the other two stop.
//!
//! ## Settlement in the background
//!
//! Arrivals are not pushed anywhere; something has to ask. [`SettlementPoller`] asks on a
//! fixed period. It settles through the same shipment client as the HTTP API, so a poller
//! tick and a client request for the same shipment queue behind each other in the shipment
//! actor and exactly one of them delivers.
//!
//! ## Shutdown order
//!
//! 1. Stop the poller (it holds a shipment client).
//! 2. Stop serving requests (the router state holds clients).
//! 3. [`HubSystem::shutdown`] drops the remaining clients and awaits every actor task.

pub mod hub_system;
pub mod settlement;

pub use hub_system::*;
pub use settlement::*;
