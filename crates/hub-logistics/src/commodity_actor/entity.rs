//! ActorEntity implementation for [`Commodity`]. Commodities are keyed by name.

use super::actions::{CommodityAction, CommodityActionResult};
use super::error::CommodityError;
use crate::model::{Commodity, CommodityCreate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Commodity {
    type Id = String;
    type Create = CommodityCreate;
    type Update = ();
    type Action = CommodityAction;
    type ActionResult = CommodityActionResult;
    type Context = ();
    type Error = CommodityError;

    fn assign_id(params: &CommodityCreate, _seq: u32) -> String {
        params.name.trim().to_string()
    }

    fn from_create_params(id: String, params: CommodityCreate) -> Result<Self, CommodityError> {
        if id.is_empty() {
            return Err(CommodityError::Invalid {
                field: "name",
                reason: "must not be blank".into(),
            });
        }
        if !(params.base_price.is_finite() && params.base_price > 0.0) {
            return Err(CommodityError::Invalid {
                field: "base_price",
                reason: format!("{} is not a positive price", params.base_price),
            });
        }
        if !(0.0..=1.0).contains(&params.yield_rate) {
            return Err(CommodityError::Invalid {
                field: "yield_rate",
                reason: format!("{} is outside 0..=1", params.yield_rate),
            });
        }
        Ok(Commodity {
            name: id,
            base_price: params.base_price,
            yield_rate: params.yield_rate,
            volatility: params.volatility,
            sentiment: params.sentiment,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CommodityError> {
        Err(CommodityError::Invalid {
            field: "update",
            reason: "the catalogue is fixed after seeding".into(),
        })
    }

    async fn handle_action(
        &mut self,
        action: CommodityAction,
        _ctx: &(),
    ) -> Result<CommodityActionResult, CommodityError> {
        match action {
            CommodityAction::Quote(quantity) => Ok(CommodityActionResult::Quote(self.quote(quantity))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commodity_actor;
    use crate::model::Volatility;

    fn steel() -> CommodityCreate {
        CommodityCreate {
            name: "Industrial Steel".into(),
            base_price: 450.0,
            yield_rate: 0.95,
            volatility: Volatility::Medium,
            sentiment: "Bullish".into(),
        }
    }

    #[test]
    fn quote_is_base_price_times_quantity() {
        let steel = Commodity::from_create_params("Industrial Steel".into(), steel()).unwrap();
        assert_eq!(steel.quote(20), 9000.0);
    }

    #[test]
    fn reference_data_is_validated() {
        let mut bad_price = steel();
        bad_price.base_price = 0.0;
        assert!(matches!(
            Commodity::from_create_params("Industrial Steel".into(), bad_price),
            Err(CommodityError::Invalid { field: "base_price", .. })
        ));

        let mut bad_yield = steel();
        bad_yield.yield_rate = 1.2;
        assert!(matches!(
            Commodity::from_create_params("Industrial Steel".into(), bad_yield),
            Err(CommodityError::Invalid { field: "yield_rate", .. })
        ));
    }

    #[tokio::test]
    async fn generic_update_is_rejected() {
        let (actor, client) = commodity_actor::new();
        tokio::spawn(actor.run(()));
        let id = client.create(steel()).await.unwrap();

        let err = client
            .update(id, ())
            .await
            .unwrap_err()
            .into_entity_error::<CommodityError>()
            .unwrap();
        assert!(matches!(err, CommodityError::Invalid { field: "update", .. }));
    }
}
