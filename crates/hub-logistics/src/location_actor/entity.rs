//! ActorEntity implementation for [`Location`]. Locations are keyed by name.

use super::actions::{LocationAction, LocationActionResult};
use super::error::LocationError;
use crate::model::{Location, LocationCreate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::warn;

fn positive(quantity: u64) -> Result<u64, LocationError> {
    if quantity == 0 {
        return Err(LocationError::Invalid {
            field: "quantity",
            reason: "must be greater than 0".into(),
        });
    }
    Ok(quantity)
}

#[async_trait]
impl ActorEntity for Location {
    type Id = String;
    type Create = LocationCreate;
    type Update = ();
    type Action = LocationAction;
    type ActionResult = LocationActionResult;
    type Context = ();
    type Error = LocationError;

    fn assign_id(params: &LocationCreate, _seq: u32) -> String {
        params.name.trim().to_string()
    }

    fn from_create_params(id: String, params: LocationCreate) -> Result<Self, LocationError> {
        if id.is_empty() {
            return Err(LocationError::Invalid {
                field: "name",
                reason: "must not be blank".into(),
            });
        }
        if params.stock > params.capacity {
            warn!(location = %id, stock = params.stock, capacity = params.capacity, "Seed stock over capacity, clamped");
        }
        Ok(Location::new(
            id,
            params.region,
            params.stock,
            params.capacity,
            params.daily_usage,
        ))
    }

    /// Stock moves only through `Receive` and `WriteOff`.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), LocationError> {
        Err(LocationError::Invalid {
            field: "update",
            reason: "stock changes only through receive and write-off".into(),
        })
    }

    async fn handle_action(
        &mut self,
        action: LocationAction,
        _ctx: &(),
    ) -> Result<LocationActionResult, LocationError> {
        match action {
            LocationAction::Receive(quantity) => {
                let movement = self.credit(positive(quantity)?);
                if movement.excess > 0 {
                    warn!(
                        location = %self.name,
                        credited = movement.applied,
                        discarded = movement.excess,
                        capacity = self.capacity,
                        "Delivery exceeds capacity, excess discarded"
                    );
                }
                Ok(LocationActionResult::Receive(movement))
            }
            LocationAction::WriteOff(quantity) => {
                let movement = self.write_off(positive(quantity)?);
                if movement.excess > 0 {
                    warn!(
                        location = %self.name,
                        removed = movement.applied,
                        shortfall = movement.excess,
                        "Write-off exceeds stock, clamped at zero"
                    );
                }
                Ok(LocationActionResult::WriteOff(movement))
            }
        }
    }
}
