//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of an actor. Code that talks to an actor through a
//! client can then be tested without spawning the actor or any of its dependencies.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! * **Pattern 0, client logic**: a typed client wrapper over a `MockClient`.
//! * **Pattern 1, single actor**: a real `ResourceActor` with `Context = ()`.
//! * **Pattern 2, actor with mocked dependencies**: a real actor whose context holds clients
//!   obtained from `MockClient::client()`. The shipment actor tests in `hub-logistics` work
//!   this way.
//! * **Pattern 3, full system**: every actor real, driven through the public API.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Pallet { id: String, units: u64 }
//! #[derive(Debug)] struct NewPallet;
//! #[derive(Debug)] struct PalletUpdate;
//! #[derive(Debug)] enum PalletAction {}
//! #[derive(Debug, thiserror::Error)] #[error("pallet error")] struct PalletError;
//!
//! #[async_trait]
//! impl ActorEntity for Pallet {
//!     type Id = String; type Create = NewPallet; type Update = PalletUpdate;
//!     type Action = PalletAction; type ActionResult = (); type Context = (); type Error = PalletError;
//!     fn assign_id(_: &NewPallet, seq: u32) -> String { format!("P-{seq}") }
//!     fn from_create_params(id: String, _: NewPallet) -> Result<Self, PalletError> {
//!         Ok(Self { id, units: 0 })
//!     }
//!     async fn on_update(&mut self, _: PalletUpdate, _: &()) -> Result<(), PalletError> { Ok(()) }
//!     async fn handle_action(&mut self, a: PalletAction, _: &()) -> Result<(), PalletError> {
//!         match a {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Pallet>::new();
//!     mock.expect_get("P-1".to_string())
//!         .return_ok(Some(Pallet { id: "P-1".into(), units: 12 }));
//!     mock.expect_get("P-2".to_string())
//!         .return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get("P-1".into()).await.unwrap().unwrap().units, 12);
//!     assert!(matches!(client.get("P-2".into()).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver when a test needs to look
//! at the request payloads, or the fluent [`MockClient`] API when only the replies matter.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<V>(m: &Mutex<V>) -> MutexGuard<'_, V> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("Get {id}"),
        ResourceRequest::List { .. } => "List".to_string(),
        ResourceRequest::Update { id, .. } => format!("Update {id}"),
        ResourceRequest::Delete { id, .. } => format!("Delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("Action {id} {action:?}"),
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests that do not match the next expectation get no reply (the caller sees
/// `FrameworkError::ActorDropped`) and are reported by [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let misses = unexpected.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let had_expectation = expectation.is_some();
                        lock(&misses).push(format!(
                            "{} (expectation queued: {had_expectation})",
                            request_kind(&request)
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> Reply<T, Option<T>> {
        Reply::new(self.expectations.clone(), |response| Expectation::Get { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> Reply<T, Vec<T>> {
        Reply::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> Reply<T, T::Id> {
        Reply::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, _id: T::Id) -> Reply<T, T> {
        Reply::new(self.expectations.clone(), |response| Expectation::Update { response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, _id: T::Id) -> Reply<T, T::ActionResult> {
        Reply::new(self.expectations.clone(), |response| Expectation::Action { response })
    }

    /// Panics unless every expectation was consumed and no unexpected request arrived.
    pub fn verify(&self) {
        let misses = lock(&self.unexpected);
        if !misses.is_empty() {
            panic!("Unexpected requests: {misses:?}");
        }
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder that finishes an expectation with its reply.
pub struct Reply<T: ActorEntity, V> {
    expectations: Queue<T>,
    wrap: fn(Result<V, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, V> Reply<T, V> {
    fn new(expectations: Queue<T>, wrap: fn(Result<V, FrameworkError>) -> Expectation<T>) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// The test plays the actor: it pulls each request with [`expect_create`], [`expect_get`] or
/// [`expect_action`], asserts on the payload and answers through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
