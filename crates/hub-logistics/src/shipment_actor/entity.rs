//! ActorEntity implementation for [`Shipment`].
//!
//! Creation runs the order pipeline (validate, look up, route, price, dispatch); the `Settle`
//! and `Cancel` actions drive the rest of the lifecycle.

use super::actions::{NoOpReason, Settlement, ShipmentAction, ShipmentActionResult};
use super::error::ShipmentError;
use super::ShipmentContext;
use crate::model::{OrderRequest, Shipment, ShipmentId, ShipmentStatus, Transport};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Shipment {
    type Id = ShipmentId;
    type Create = OrderRequest;
    type Update = ();
    type Action = ShipmentAction;
    type ActionResult = ShipmentActionResult;
    type Context = ShipmentContext;
    type Error = ShipmentError;

    fn assign_id(_params: &OrderRequest, seq: u32) -> ShipmentId {
        ShipmentId::from_sequence(seq)
    }

    /// Checks the parts of an order that need no other actor.
    fn from_create_params(id: ShipmentId, order: OrderRequest) -> Result<Self, ShipmentError> {
        let quantity = u64::try_from(order.quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                ShipmentError::validation("quantity", format!("{} is not a positive quantity", order.quantity))
            })?;

        let destination = order.destination.trim();
        if destination.is_empty() {
            return Err(ShipmentError::validation("destination", "must not be blank"));
        }
        let commodity = order.commodity.trim();
        if commodity.is_empty() {
            return Err(ShipmentError::validation("commodity", "must not be blank"));
        }

        Ok(Shipment::scheduled(
            id,
            destination.to_string(),
            commodity.to_string(),
            quantity,
            order.placed_at,
        ))
    }

    async fn on_create(&mut self, ctx: &ShipmentContext) -> Result<(), ShipmentError> {
        if ctx.locations.get(self.destination.clone()).await?.is_none() {
            return Err(ShipmentError::validation(
                "destination",
                format!("unknown location {:?}", self.destination),
            ));
        }
        if ctx.commodities.get(self.cargo.clone()).await?.is_none() {
            return Err(ShipmentError::validation(
                "commodity",
                format!("unknown commodity {:?}", self.cargo),
            ));
        }

        let plan = ctx.routes.resolve(&self.destination);
        let transport = if plan.origin == ctx.routes.external_supplier() {
            Transport::Air
        } else {
            Transport::Road
        };
        let estimated_cost = ctx.commodities.quote(self.cargo.clone(), self.quantity).await?;

        if !self.dispatch(plan, transport) {
            return Err(ShipmentError::validation(
                "destination",
                "arrival time is out of range",
            ));
        }
        self.estimated_cost = estimated_cost;

        info!(
            shipment = %self.id,
            origin = %self.origin,
            destination = %self.destination,
            cargo = %self.cargo,
            quantity = self.quantity,
            transit_ms = (self.arrival_time - self.start_time).num_milliseconds(),
            "Dispatched"
        );
        Ok(())
    }

    /// Shipments change only through `Settle` and `Cancel`.
    async fn on_update(&mut self, _update: (), _ctx: &ShipmentContext) -> Result<(), ShipmentError> {
        Err(ShipmentError::validation(
            "update",
            "shipments change only through settle and cancel",
        ))
    }

    async fn handle_action(
        &mut self,
        action: ShipmentAction,
        ctx: &ShipmentContext,
    ) -> Result<ShipmentActionResult, ShipmentError> {
        match action {
            ShipmentAction::Settle { at } => self.settle(at, ctx).await.map(ShipmentActionResult::Settle),
            ShipmentAction::Cancel => self.cancel().map(ShipmentActionResult::Cancel),
        }
    }
}

impl Shipment {
    async fn settle(
        &mut self,
        at: DateTime<Utc>,
        ctx: &ShipmentContext,
    ) -> Result<Settlement, ShipmentError> {
        match self.status {
            ShipmentStatus::Delivered => Ok(Settlement::NoOp(NoOpReason::AlreadyDelivered)),
            ShipmentStatus::Cancelled => Ok(Settlement::NoOp(NoOpReason::Cancelled)),
            ShipmentStatus::Scheduled => Err(ShipmentError::InvalidTransition {
                id: self.id,
                from: self.status,
                to: ShipmentStatus::Delivered,
            }),
            ShipmentStatus::InTransit => {
                if !self.has_arrived(at) {
                    let remaining_ms = self.remaining_ms(at);
                    debug!(shipment = %self.id, remaining_ms, "Not yet arrived");
                    return Ok(Settlement::NoOp(NoOpReason::NotYetArrived { remaining_ms }));
                }

                // Credit first: if it fails the shipment stays in transit and can be retried.
                let movement = ctx
                    .locations
                    .receive(self.destination.clone(), self.quantity)
                    .await?;
                self.status = ShipmentStatus::Delivered;

                info!(
                    shipment = %self.id,
                    destination = %self.destination,
                    credited = movement.applied,
                    discarded = movement.excess,
                    stock = movement.location.stock,
                    "Delivered"
                );
                Ok(Settlement::Delivered {
                    shipment: self.clone(),
                    location: movement.location,
                    credited: movement.applied,
                    discarded: movement.excess,
                })
            }
        }
    }

    fn cancel(&mut self) -> Result<Shipment, ShipmentError> {
        match self.status {
            ShipmentStatus::Cancelled => Ok(self.clone()),
            ShipmentStatus::Delivered => Err(ShipmentError::InvalidTransition {
                id: self.id,
                from: self.status,
                to: ShipmentStatus::Cancelled,
            }),
            ShipmentStatus::Scheduled | ShipmentStatus::InTransit => {
                self.status = ShipmentStatus::Cancelled;
                info!(shipment = %self.id, destination = %self.destination, "Cancelled");
                Ok(self.clone())
            }
        }
    }
}
