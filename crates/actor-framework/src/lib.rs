//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**: each
//! resource type (a location, a commodity, a shipment) gets its own actor that owns every
//! instance of that type and processes requests against them one at a time.
//!
//! - **Separation**: each resource type has completely isolated state.
//! - **Coordination**: when resources interact (a shipment crediting a location's stock) they
//!   send **Action messages** to each other instead of sharing memory.
//! - **No locks**: sequential processing inside an actor is what makes a read-modify-write on
//!   an entity atomic.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Silo {
//!     id: String,
//!     tonnes: u64,
//! }
//!
//! #[derive(Debug)] struct SiloCreate { name: String }
//! #[derive(Debug)] struct SiloUpdate;
//! #[derive(Debug)] enum SiloAction { Fill(u64) }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SiloError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Silo {
//!     type Id = String;
//!     type Create = SiloCreate;
//!     type Update = SiloUpdate;
//!     type Action = SiloAction;
//!     type ActionResult = u64;
//!     type Context = ();
//!     type Error = SiloError;
//!
//!     // Natural key: the silo's name.
//!     fn assign_id(params: &SiloCreate, _seq: u32) -> String {
//!         params.name.clone()
//!     }
//!
//!     fn from_create_params(id: String, _: SiloCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, tonnes: 0 })
//!     }
//!
//!     async fn on_update(&mut self, _: SiloUpdate, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: SiloAction, _: &()) -> Result<u64, Self::Error> {
//!         match action {
//!             SiloAction::Fill(t) => {
//!                 self.tonnes += t;
//!                 Ok(self.tonnes)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Silo>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(SiloCreate { name: "North".into() }).await.unwrap();
//!     assert_eq!(client.perform_action(id.clone(), SiloAction::Fill(40)).await.unwrap(), 40);
//!
//!     // Same natural key twice
//!     let dup = client.create(SiloCreate { name: "North".into() }).await;
//!     assert!(matches!(dup, Err(FrameworkError::AlreadyExists(_))));
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! Create every actor first, then start each one with the clients it needs. An actor that
//! depends on two others simply receives their clients:
//!
//! ```rust,ignore
//! let (location_actor, locations) = ResourceActor::<Location>::new(32);
//! let (shipment_actor, shipments) = ResourceActor::<Shipment>::new(32);
//!
//! tokio::spawn(location_actor.run(()));
//! tokio::spawn(shipment_actor.run(ShipmentContext { locations, .. }));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - An actor awaiting another actor inside a hook holds up only its own queue
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from scripted expectations, so
//! client logic and actors with dependencies can be tested without spawning those
//! dependencies. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
