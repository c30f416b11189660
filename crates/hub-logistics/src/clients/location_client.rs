//! # Location Client
//!
//! High-level API for the `Location` actor: creating locations and moving stock.
use crate::location_actor::{LocationAction, LocationActionResult, LocationError};
use crate::model::{Location, LocationCreate, StockMovement};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Direction of a manual inventory adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Adjustment {
    Add,
    Remove,
}

/// Client for interacting with the Location actor.
#[derive(Clone)]
pub struct LocationClient {
    inner: ResourceClient<Location>,
}

#[async_trait]
impl ActorClient<Location> for LocationClient {
    type Error = LocationError;

    fn inner(&self) -> &ResourceClient<Location> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => LocationError::NotFound(id),
            FrameworkError::AlreadyExists(id) => LocationError::AlreadyExists(id),
            other => other
                .into_entity_error::<LocationError>()
                .unwrap_or_else(|e| LocationError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl LocationClient {
    pub fn new(inner: ResourceClient<Location>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_location(&self, params: LocationCreate) -> Result<String, LocationError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Credit stock. Anything over capacity is discarded and reported in `excess`.
    #[instrument(skip(self))]
    pub async fn receive(&self, name: String, quantity: u64) -> Result<StockMovement, LocationError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(name, LocationAction::Receive(quantity))
            .await
            .map_err(Self::map_error)?
        {
            LocationActionResult::Receive(movement) => Ok(movement),
            other => Err(unexpected(other)),
        }
    }

    /// Remove stock, stopping at zero.
    #[instrument(skip(self))]
    pub async fn write_off(&self, name: String, quantity: u64) -> Result<StockMovement, LocationError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(name, LocationAction::WriteOff(quantity))
            .await
            .map_err(Self::map_error)?
        {
            LocationActionResult::WriteOff(movement) => Ok(movement),
            other => Err(unexpected(other)),
        }
    }

    /// Manual stock correction. `quantity` must be positive.
    #[instrument(skip(self))]
    pub async fn adjust(
        &self,
        name: String,
        quantity: i64,
        adjustment: Adjustment,
    ) -> Result<StockMovement, LocationError> {
        let quantity = u64::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| LocationError::Invalid {
                field: "quantity",
                reason: format!("{quantity} is not a positive quantity"),
            })?;
        match adjustment {
            Adjustment::Add => self.receive(name, quantity).await,
            Adjustment::Remove => self.write_off(name, quantity).await,
        }
    }

    /// All locations, ordered by name.
    pub async fn list_sorted(&self) -> Result<Vec<Location>, LocationError> {
        let mut locations = self.list().await?;
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }
}

fn unexpected(result: LocationActionResult) -> LocationError {
    LocationError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn movement(stock: u64, applied: u64, excess: u64) -> StockMovement {
        StockMovement {
            location: Location::new("Mumbai HQ", "West", stock, 5000, 320),
            applied,
            excess,
        }
    }

    #[tokio::test]
    async fn receive_sends_the_quantity() {
        let (client, mut receiver) = create_mock_client::<Location>(10);
        let locations = LocationClient::new(client);

        let task = tokio::spawn(async move { locations.receive("Mumbai HQ".into(), 500).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "Mumbai HQ");
        assert!(matches!(action, LocationAction::Receive(500)));
        responder
            .send(Ok(LocationActionResult::Receive(movement(5000, 200, 300))))
            .unwrap();

        let received = task.await.unwrap().unwrap();
        assert_eq!(received.excess, 300);
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<Location>::new();
        mock.expect_action("Mumbai HQ".into())
            .return_err(FrameworkError::EntityError(Box::new(LocationError::Invalid {
                field: "quantity",
                reason: "must be greater than 0".into(),
            })));
        mock.expect_action("Atlantis".into())
            .return_err(FrameworkError::NotFound("Atlantis".into()));

        let locations = LocationClient::new(mock.client());
        assert!(matches!(
            locations.write_off("Mumbai HQ".into(), 0).await,
            Err(LocationError::Invalid { field: "quantity", .. })
        ));
        assert_eq!(
            locations.receive("Atlantis".into(), 1).await,
            Err(LocationError::NotFound("Atlantis".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn adjust_rejects_non_positive_quantity_without_a_round_trip() {
        let mock = MockClient::<Location>::new();
        let locations = LocationClient::new(mock.client());

        let err = locations
            .adjust("Mumbai HQ".into(), -3, Adjustment::Remove)
            .await
            .unwrap_err();
        assert!(matches!(err, LocationError::Invalid { field: "quantity", .. }));
        mock.verify();
    }

    #[tokio::test]
    async fn adjust_remove_writes_off() {
        let mut mock = MockClient::<Location>::new();
        mock.expect_action("Mumbai HQ".into())
            .return_ok(LocationActionResult::WriteOff(movement(1300, 150, 0)));

        let locations = LocationClient::new(mock.client());
        let moved = locations
            .adjust("Mumbai HQ".into(), 150, Adjustment::Remove)
            .await
            .unwrap();
        assert_eq!(moved.location.stock, 1300);
        mock.verify();
    }
}
