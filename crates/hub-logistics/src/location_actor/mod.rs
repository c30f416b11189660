//! # Location Actor
//!
//! Owns every [`Location`] and is the only place stock changes. Each credit or write-off is
//! one message, so concurrent settlements against the same destination apply one after the
//! other and the capacity clamp always sees the latest stock.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Location`]
//! - [`error`] - [`LocationError`]
//! - [`actions`] - [`LocationAction`] and [`LocationActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use hub_logistics::clients::LocationClient;
//! use hub_logistics::location_actor;
//! use hub_logistics::model::LocationCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = location_actor::new();
//!     let client = LocationClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let name = client
//!         .create_location(LocationCreate {
//!             name: "Pune Factory".into(),
//!             region: "West".into(),
//!             stock: 890,
//!             capacity: 3000,
//!             daily_usage: 200,
//!         })
//!         .await?;
//!
//!     let receipt = client.receive(name, 500).await?;
//!     assert_eq!(receipt.location.stock, 1390);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Location;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Location actor and its client.
pub fn new() -> (ResourceActor<Location>, ResourceClient<Location>) {
    ResourceActor::new(64)
}
