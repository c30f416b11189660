//! # Typed Clients
//!
//! Domain wrappers over [`ResourceClient`](actor_framework::ResourceClient). Each one turns
//! action enums into plain method calls and recovers the actor's own error type from
//! [`FrameworkError`](actor_framework::FrameworkError), so callers match on
//! `ShipmentError::Validation { .. }` rather than on a boxed error.

pub mod commodity_client;
pub mod location_client;
pub mod shipment_client;

pub use commodity_client::CommodityClient;
pub use location_client::{Adjustment, LocationClient};
pub use shipment_client::ShipmentClient;
