//! # Hub Endpoints
//!
//! - `GET /api/markets` - locations with derived stock status
//! - `GET /api/commodities` - commodity catalogue
//! - `GET /api/logistics` - every shipment, newest first
//! - `POST /api/order/place` - place an order
//! - `POST /api/shipment/receive` - settle an arrival
//! - `POST /api/shipment/cancel` - cancel an undelivered shipment
//! - `POST /api/inventory/adjust` - manual stock correction

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use super::dto::{
    AdjustStockRequest, LocationAck, MarketView, PlaceOrderRequest, SettlementView, ShipmentAck,
    ShipmentRef, ShipmentView,
};
use super::error::{extract_json, AppError};
use super::AppState;
use crate::model::{Commodity, ShipmentId};
use crate::shipment_actor::{NoOpReason, Settlement};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/markets", get(list_markets))
        .route("/api/commodities", get(list_commodities))
        .route("/api/logistics", get(list_shipments))
        .route("/api/order/place", post(place_order))
        .route("/api/shipment/receive", post(receive_shipment))
        .route("/api/shipment/cancel", post(cancel_shipment))
        .route("/api/inventory/adjust", post(adjust_stock))
}

async fn list_markets(State(state): State<AppState>) -> Result<Json<Vec<MarketView>>, AppError> {
    let locations = state.locations.list_sorted().await?;
    Ok(Json(locations.iter().map(MarketView::from).collect()))
}

async fn list_commodities(State(state): State<AppState>) -> Result<Json<Vec<Commodity>>, AppError> {
    Ok(Json(state.commodities.list_sorted().await?))
}

async fn list_shipments(State(state): State<AppState>) -> Result<Json<Vec<ShipmentView>>, AppError> {
    let shipments = state.shipments.list_newest_first().await?;
    let now = state.shipments.clock().now();
    Ok(Json(
        shipments.iter().map(|s| ShipmentView::at(s, now)).collect(),
    ))
}

async fn place_order(
    State(state): State<AppState>,
    body: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<ShipmentAck>, AppError> {
    let req = extract_json(body)?;
    let shipment = state
        .shipments
        .place_order(req.destination, req.commodity, req.quantity)
        .await?;
    let now = state.shipments.clock().now();
    Ok(Json(ShipmentAck {
        success: true,
        shipment: ShipmentView::at(&shipment, now),
    }))
}

/// An id that does not parse cannot name a shipment, so it settles like an unknown one.
async fn receive_shipment(
    State(state): State<AppState>,
    body: Result<Json<ShipmentRef>, JsonRejection>,
) -> Result<Json<SettlementView>, AppError> {
    let req = extract_json(body)?;
    let settlement = match req.id.parse::<ShipmentId>() {
        Ok(id) => state.shipments.settle(id).await?,
        Err(_) => Settlement::NoOp(NoOpReason::UnknownShipment),
    };
    if !settlement.is_delivered() {
        info!(shipment = %req.id, outcome = settlement.code(), "Receive was a no-op");
    }
    let now = state.shipments.clock().now();
    Ok(Json(SettlementView::at(&settlement, now)))
}

async fn cancel_shipment(
    State(state): State<AppState>,
    body: Result<Json<ShipmentRef>, JsonRejection>,
) -> Result<Json<ShipmentAck>, AppError> {
    let req = extract_json(body)?;
    let id: ShipmentId = req
        .id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Shipment not found: {}", req.id)))?;
    let shipment = state.shipments.cancel(id).await?;
    let now = state.shipments.clock().now();
    Ok(Json(ShipmentAck {
        success: true,
        shipment: ShipmentView::at(&shipment, now),
    }))
}

async fn adjust_stock(
    State(state): State<AppState>,
    body: Result<Json<AdjustStockRequest>, JsonRejection>,
) -> Result<Json<LocationAck>, AppError> {
    let req = extract_json(body)?;
    let movement = state
        .locations
        .adjust(req.location, req.quantity, req.action)
        .await?;
    Ok(Json(LocationAck {
        success: true,
        location: MarketView::from(&movement.location),
        applied: movement.applied,
        excess: movement.excess,
    }))
}
