//! # Commodity Client
use crate::commodity_actor::{CommodityAction, CommodityActionResult, CommodityError};
use crate::model::{Commodity, CommodityCreate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Commodity actor.
#[derive(Clone)]
pub struct CommodityClient {
    inner: ResourceClient<Commodity>,
}

#[async_trait]
impl ActorClient<Commodity> for CommodityClient {
    type Error = CommodityError;

    fn inner(&self) -> &ResourceClient<Commodity> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CommodityError::NotFound(id),
            FrameworkError::AlreadyExists(id) => CommodityError::AlreadyExists(id),
            other => other
                .into_entity_error::<CommodityError>()
                .unwrap_or_else(|e| CommodityError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CommodityClient {
    pub fn new(inner: ResourceClient<Commodity>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_commodity(&self, params: CommodityCreate) -> Result<String, CommodityError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Price `quantity` units at the commodity's base price.
    #[instrument(skip(self))]
    pub async fn quote(&self, name: String, quantity: u64) -> Result<f64, CommodityError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(name, CommodityAction::Quote(quantity))
            .await
            .map_err(Self::map_error)?
        {
            CommodityActionResult::Quote(cost) => Ok(cost),
        }
    }

    /// The catalogue, ordered by name.
    pub async fn list_sorted(&self) -> Result<Vec<Commodity>, CommodityError> {
        let mut commodities = self.list().await?;
        commodities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(commodities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn quote_returns_the_priced_amount() {
        let mut mock = MockClient::<Commodity>::new();
        mock.expect_action("Microchips".into())
            .return_ok(CommodityActionResult::Quote(85_000.0));

        let commodities = CommodityClient::new(mock.client());
        assert_eq!(commodities.quote("Microchips".into(), 10).await.unwrap(), 85_000.0);
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_commodity_maps_to_not_found() {
        let mut mock = MockClient::<Commodity>::new();
        mock.expect_action("Unobtainium".into())
            .return_err(FrameworkError::NotFound("Unobtainium".into()));

        let commodities = CommodityClient::new(mock.client());
        assert_eq!(
            commodities.quote("Unobtainium".into(), 1).await,
            Err(CommodityError::NotFound("Unobtainium".into()))
        );
    }
}
