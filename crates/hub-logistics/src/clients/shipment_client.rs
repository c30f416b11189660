//! # Shipment Client
//!
//! Provides a high‑level API for the `Shipment` actor: placing orders, settling arrivals and
//! cancelling. It owns the clock, so every call stamps the time once, on the caller's side,
//! before the request is queued.
use crate::clock::Clock;
use crate::model::{OrderRequest, Shipment, ShipmentId, ShipmentStatus};
use crate::shipment_actor::{NoOpReason, Settlement, ShipmentAction, ShipmentActionResult, ShipmentError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the Shipment actor.
#[derive(Clone)]
pub struct ShipmentClient {
    inner: ResourceClient<Shipment>,
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl ActorClient<Shipment> for ShipmentClient {
    type Error = ShipmentError;

    fn inner(&self) -> &ResourceClient<Shipment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ShipmentError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ShipmentError::AlreadyExists(id),
            other => other
                .into_entity_error::<ShipmentError>()
                .unwrap_or_else(|e| ShipmentError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ShipmentClient {
    pub fn new(inner: ResourceClient<Shipment>, clock: Arc<dyn Clock>) -> Self {
        Self { inner, clock }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Validate, route and dispatch an order. Returns the shipment as dispatched.
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        destination: String,
        commodity: String,
        quantity: i64,
    ) -> Result<Shipment, ShipmentError> {
        debug!("Sending request");
        let order = OrderRequest {
            destination,
            commodity,
            quantity,
            placed_at: self.clock.now(),
        };
        let id = self.inner.create(order).await.map_err(Self::map_error)?;
        self.get(id)
            .await?
            .ok_or_else(|| ShipmentError::NotFound(id.to_string()))
    }

    /// Settle a shipment as of now. Unknown ids are a no-op, not an error.
    #[instrument(skip(self))]
    pub async fn settle(&self, id: ShipmentId) -> Result<Settlement, ShipmentError> {
        let at = self.clock.now();
        debug!(%at, "Sending request");
        match self
            .inner
            .perform_action(id, ShipmentAction::Settle { at })
            .await
        {
            Ok(ShipmentActionResult::Settle(settlement)) => Ok(settlement),
            Ok(other) => Err(ShipmentError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(FrameworkError::NotFound(_)) => Ok(Settlement::NoOp(NoOpReason::UnknownShipment)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ShipmentId) -> Result<Shipment, ShipmentError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ShipmentAction::Cancel)
            .await
            .map_err(Self::map_error)?
        {
            ShipmentActionResult::Cancel(shipment) => Ok(shipment),
            other => Err(ShipmentError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    /// Every shipment, newest first.
    pub async fn list_newest_first(&self) -> Result<Vec<Shipment>, ShipmentError> {
        let mut shipments = self.list().await?;
        shipments.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        Ok(shipments)
    }

    /// Ids of in-transit shipments whose arrival time has passed.
    pub async fn due_for_settlement(&self) -> Result<Vec<ShipmentId>, ShipmentError> {
        let now = self.clock.now();
        let mut due: Vec<ShipmentId> = self
            .list()
            .await?
            .into_iter()
            .filter(|s| s.status == ShipmentStatus::InTransit && s.has_arrived(now))
            .map(|s| s.id)
            .collect();
        due.sort();
        Ok(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};
    use chrono::{TimeDelta, TimeZone, Utc};

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()))
    }

    #[tokio::test]
    async fn settle_stamps_the_clock_time() {
        let clock = clock();
        clock.advance(TimeDelta::seconds(90));
        let expected = clock.now();

        let (client, mut receiver) = create_mock_client::<Shipment>(10);
        let shipments = ShipmentClient::new(client, clock);

        let task = tokio::spawn(async move { shipments.settle(ShipmentId(1001)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ShipmentId(1001));
        match action {
            ShipmentAction::Settle { at } => assert_eq!(at, expected),
            other => panic!("Expected Settle, got {other:?}"),
        }
        responder
            .send(Ok(ShipmentActionResult::Settle(Settlement::NoOp(
                NoOpReason::AlreadyDelivered,
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap(),
            Settlement::NoOp(NoOpReason::AlreadyDelivered)
        );
    }

    #[tokio::test]
    async fn settling_an_unknown_id_is_a_no_op() {
        let mut mock = MockClient::<Shipment>::new();
        mock.expect_action(ShipmentId(4040))
            .return_err(FrameworkError::NotFound("ORD-4040".into()));

        let shipments = ShipmentClient::new(mock.client(), clock());
        assert_eq!(
            shipments.settle(ShipmentId(4040)).await.unwrap(),
            Settlement::NoOp(NoOpReason::UnknownShipment)
        );
        mock.verify();
    }

    #[tokio::test]
    async fn cancelling_an_unknown_id_is_not_found() {
        let mut mock = MockClient::<Shipment>::new();
        mock.expect_action(ShipmentId(4040))
            .return_err(FrameworkError::NotFound("ORD-4040".into()));

        let shipments = ShipmentClient::new(mock.client(), clock());
        assert_eq!(
            shipments.cancel(ShipmentId(4040)).await,
            Err(ShipmentError::NotFound("ORD-4040".into()))
        );
    }

    #[tokio::test]
    async fn validation_errors_are_recovered_from_the_actor() {
        let mut mock = MockClient::<Shipment>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                ShipmentError::validation("quantity", "0 is not a positive quantity"),
            )));

        let shipments = ShipmentClient::new(mock.client(), clock());
        let err = shipments
            .place_order("Chennai Port".into(), "Titanium Alloy".into(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ShipmentError::Validation { field: "quantity", .. }));
        mock.verify();
    }
}
