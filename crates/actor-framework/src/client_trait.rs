//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Dock { id: String }
/// #[derive(Debug)] struct NewDock(String);
/// #[derive(Debug)] struct DockUpdate;
/// #[derive(Debug)] enum DockAction {}
/// #[derive(Debug)] struct DockError(String);
///
/// impl std::fmt::Display for DockError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for DockError {}
/// impl From<String> for DockError {
///     fn from(s: String) -> Self { DockError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Dock {
///     type Id = String;
///     type Create = NewDock;
///     type Update = DockUpdate;
///     type Action = DockAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = DockError;
///
///     fn assign_id(params: &NewDock, _seq: u32) -> String { params.0.clone() }
///     fn from_create_params(id: String, _: NewDock) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: DockUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, action: DockAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// struct DockClient {
///     inner: ResourceClient<Dock>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Dock> for DockClient {
///     type Error = DockError;
///
///     fn inner(&self) -> &ResourceClient<Dock> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         DockError(e.to_string())
///     }
/// }
///
/// async fn usage(client: DockClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get("Bay 4".to_string()).await;
///     let _ = client.list().await;
///     let _ = client.delete("Bay 4".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every entity the actor currently holds.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
