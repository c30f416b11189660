//! # hub-logistics
//!
//! Starts the hub: actors, settlement poller and HTTP server. Configured through the
//! environment (see [`hub_logistics::config`]); stops cleanly on Ctrl-C.

use actor_framework::tracing::setup_tracing;
use hub_logistics::api::{self, AppState};
use hub_logistics::clock::SystemClock;
use hub_logistics::config::HubConfig;
use hub_logistics::lifecycle::{HubSystem, SettlementPoller};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = HubConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {e}");
        e
    })?;
    let seed = config.load_seed().map_err(|e| {
        error!("Cannot load seed: {e}");
        e
    })?;

    let system = HubSystem::start(&seed, Arc::new(SystemClock)).await.map_err(|e| {
        error!("Hub failed to start: {e}");
        e
    })?;
    let poller = SettlementPoller::spawn(system.shipments.clone(), config.settle_interval);

    let app = api::app(AppState::new(&system));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Hub listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    poller.stop().await;
    system.shutdown().await?;
    served?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
