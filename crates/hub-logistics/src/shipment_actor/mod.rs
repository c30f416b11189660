//! # Shipment Actor
//!
//! Places, settles and cancels shipments. This is where the two halves of the hub meet:
//!
//! - **Order & routing**: `create` validates the order, checks the destination and commodity
//!   against their actors, resolves the route and dispatches the shipment before it becomes
//!   visible.
//! - **Arrival settlement**: the `Settle` action credits the destination through the location
//!   actor and then marks the shipment `Delivered`, all inside one message. A second `Settle`
//!   for the same id, from any caller, waits behind the first and finds it delivered.
//!
//! ## Context
//!
//! The actor depends on the location and commodity actors and on the route table. They are
//! handed over in a [`ShipmentContext`] when the actor starts.
//!
//! ```rust,ignore
//! let (actor, client) = shipment_actor::new();
//! tokio::spawn(actor.run(ShipmentContext {
//!     locations: location_client.clone(),
//!     commodities: commodity_client.clone(),
//!     routes: Arc::new(route_table),
//! }));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CommodityClient, LocationClient};
use crate::model::Shipment;
use crate::routing::RouteTable;
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Dependencies injected into the shipment actor at `run` time.
#[derive(Clone)]
pub struct ShipmentContext {
    pub locations: LocationClient,
    pub commodities: CommodityClient,
    pub routes: Arc<RouteTable>,
}

/// Creates a new Shipment actor and its client.
pub fn new() -> (ResourceActor<Shipment>, ResourceClient<Shipment>) {
    ResourceActor::new(128)
}
