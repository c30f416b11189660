//! # HTTP API
//!
//! JSON over axum. Handlers hold clones of the actor clients in [`AppState`] and never touch
//! entity state directly; every request becomes one or more actor messages.

pub mod dto;
pub mod error;
pub mod routes;

use crate::clients::{CommodityClient, LocationClient, ShipmentClient};
use crate::lifecycle::HubSystem;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;

/// Shared router state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub locations: LocationClient,
    pub commodities: CommodityClient,
    pub shipments: ShipmentClient,
}

impl AppState {
    pub fn new(system: &HubSystem) -> Self {
        Self {
            locations: system.locations.clone(),
            commodities: system.commodities.clone(),
            shipments: system.shipments.clone(),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
