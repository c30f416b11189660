use crate::clients::{Adjustment, CommodityClient, LocationClient, ShipmentClient};
use crate::clock::Clock;
use crate::commodity_actor::{self, CommodityError};
use crate::config::Seed;
use crate::location_actor::{self, LocationError};
use crate::model::{Shipment, ShipmentId, StockMovement};
use crate::routing::{RouteError, RouteTable};
use crate::shipment_actor::{self, Settlement, ShipmentContext, ShipmentError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("invalid route table: {0}")]
    Route(#[from] RouteError),

    #[error("cannot seed location: {0}")]
    Location(#[from] LocationError),

    #[error("cannot seed commodity: {0}")]
    Commodity(#[from] CommodityError),

    #[error("actor task failed: {0}")]
    ActorTask(String),
}

/// The running hub: one actor each for locations, commodities and shipments.
///
/// The clients are cheap to clone; hand clones to whatever needs them (the HTTP router, the
/// settlement poller) and drop them all before calling [`shutdown`](Self::shutdown).
///
/// ```ignore
/// let system = HubSystem::start(&Seed::demo(), Arc::new(SystemClock)).await?;
///
/// let shipment = system.place_order("Chennai Port", "Titanium Alloy", 500).await?;
/// let settlement = system.settle(shipment.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct HubSystem {
    pub locations: LocationClient,
    pub commodities: CommodityClient,
    pub shipments: ShipmentClient,

    handles: Vec<JoinHandle<()>>,
}

impl HubSystem {
    /// Validates the route table, spawns the actors and loads the seed.
    pub async fn start(seed: &Seed, clock: Arc<dyn Clock>) -> Result<Self, SystemError> {
        let routes = Arc::new(RouteTable::from_settings(&seed.routes)?);

        // Create first, wire at run time.
        let (location_actor, location_client) = location_actor::new();
        let (commodity_actor, commodity_client) = commodity_actor::new();
        let (shipment_actor, shipment_client) = shipment_actor::new();

        let locations = LocationClient::new(location_client);
        let commodities = CommodityClient::new(commodity_client);
        let shipments = ShipmentClient::new(shipment_client, clock);

        let handles = vec![
            tokio::spawn(location_actor.run(())),
            tokio::spawn(commodity_actor.run(())),
            tokio::spawn(shipment_actor.run(ShipmentContext {
                locations: locations.clone(),
                commodities: commodities.clone(),
                routes,
            })),
        ];

        let system = Self {
            locations,
            commodities,
            shipments,
            handles,
        };
        system.load(seed).await?;
        Ok(system)
    }

    async fn load(&self, seed: &Seed) -> Result<(), SystemError> {
        for location in &seed.locations {
            self.locations.create_location(location.clone()).await?;
        }
        for commodity in &seed.commodities {
            self.commodities.create_commodity(commodity.clone()).await?;
        }
        info!(
            locations = seed.locations.len(),
            commodities = seed.commodities.len(),
            legs = seed.routes.legs.len(),
            "Hub seeded"
        );
        Ok(())
    }

    pub async fn place_order(
        &self,
        destination: impl Into<String>,
        commodity: impl Into<String>,
        quantity: i64,
    ) -> Result<Shipment, ShipmentError> {
        self.shipments
            .place_order(destination.into(), commodity.into(), quantity)
            .await
    }

    pub async fn settle(&self, id: ShipmentId) -> Result<Settlement, ShipmentError> {
        self.shipments.settle(id).await
    }

    pub async fn cancel(&self, id: ShipmentId) -> Result<Shipment, ShipmentError> {
        self.shipments.cancel(id).await
    }

    pub async fn adjust_stock(
        &self,
        location: impl Into<String>,
        quantity: i64,
        adjustment: Adjustment,
    ) -> Result<StockMovement, LocationError> {
        self.locations
            .adjust(location.into(), quantity, adjustment)
            .await
    }

    /// Drops this system's clients and waits for every actor to stop.
    ///
    /// Clones held elsewhere keep their actor alive, so this only returns once those are gone
    /// too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down hub...");

        // Shipments first: its context holds the other two clients.
        drop(self.shipments);
        drop(self.commodities);
        drop(self.locations);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {e:?}");
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("Hub shutdown complete.");
        Ok(())
    }
}
