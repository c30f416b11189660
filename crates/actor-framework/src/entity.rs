//! # ActorEntity Trait
//!
//! The contract every resource (a warehouse location, a commodity, a shipment, ...) implements
//! to be owned by a [`ResourceActor`](crate::ResourceActor). Associated types pin down the id,
//! the create/update DTOs, the custom actions and the per-entity error, so a request meant for
//! one resource type cannot be sent to another.
//!
//! # Identity
//! The actor does not hand out ids blindly. It keeps a monotonically increasing sequence number
//! and asks the entity to turn `(params, seq)` into an id through [`ActorEntity::assign_id`].
//! Entities with a natural key (a location's name) return that key and ignore the sequence;
//! entities with surrogate keys (`ORD-1001`) derive one from it. A create whose id is already
//! in the store is rejected with [`FrameworkError::AlreadyExists`](crate::FrameworkError).
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other actors. The `Context` type is injected
/// into every hook when the actor starts (`run(context)`), which lets an entity depend on
/// clients that did not exist yet when the actor was constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Receive`, `Settle`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor, shared by every hook and action. The framework boxes it into
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError); typed clients get
    /// it back with [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Choose the id for a new entity. `seq` starts at 1 and grows with every create request.
    fn assign_id(params: &Self::Create, seq: u32) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity becomes visible in the store.
    /// Failing here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// The actor awaits this before it looks at the next message, so everything done here,
    /// including calls out to other actors, happens as one step with respect to this entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
