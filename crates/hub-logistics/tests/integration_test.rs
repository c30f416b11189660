use actor_framework::ActorClient;
use chrono::{TimeDelta, TimeZone, Utc};
use hub_logistics::clients::Adjustment;
use hub_logistics::clock::ManualClock;
use hub_logistics::config::Seed;
use hub_logistics::lifecycle::{settle_due, HubSystem, SettlementPoller};
use hub_logistics::location_actor::LocationError;
use hub_logistics::model::{ShipmentStatus, StockStatus};
use hub_logistics::shipment_actor::{NoOpReason, Settlement, ShipmentError};
use std::sync::Arc;
use std::time::Duration;

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ))
}

/// The demo seed with Chennai Port's stock and capacity replaced.
fn seed_with_chennai(stock: u64, capacity: u64) -> Seed {
    let mut seed = Seed::demo();
    for location in &mut seed.locations {
        if location.name == "Chennai Port" {
            location.stock = stock;
            location.capacity = capacity;
        }
    }
    seed
}

async fn stock_of(system: &HubSystem, name: &str) -> u64 {
    system
        .locations
        .get(name.to_string())
        .await
        .expect("location actor should answer")
        .expect("location should exist")
        .stock
}

#[tokio::test]
async fn concurrent_settlement_credits_exactly_once() {
    let clock = clock();
    let system = HubSystem::start(&seed_with_chennai(1000, 5000), clock.clone())
        .await
        .unwrap();

    let shipment = system
        .place_order("Chennai Port", "Titanium Alloy", 500)
        .await
        .unwrap();
    clock.advance(TimeDelta::seconds(90));

    let id = shipment.id;
    let tasks: Vec<_> = (0..3)
        .map(|_| {
            let shipments = system.shipments.clone();
            tokio::spawn(async move { shipments.settle(id).await })
        })
        .collect();

    let mut delivered = 0;
    for task in tasks {
        match task.await.unwrap().unwrap() {
            Settlement::Delivered { .. } => delivered += 1,
            Settlement::NoOp(reason) => assert_eq!(reason, NoOpReason::AlreadyDelivered),
        }
    }
    assert_eq!(delivered, 1);
    assert_eq!(stock_of(&system, "Chennai Port").await, 1500);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn credit_is_clamped_at_capacity() {
    let clock = clock();
    let system = HubSystem::start(&seed_with_chennai(4800, 5000), clock.clone())
        .await
        .unwrap();

    let shipment = system
        .place_order("Chennai Port", "Titanium Alloy", 500)
        .await
        .unwrap();
    clock.advance(TimeDelta::seconds(90));

    match system.settle(shipment.id).await.unwrap() {
        Settlement::Delivered {
            credited,
            discarded,
            location,
            ..
        } => {
            assert_eq!(credited, 200);
            assert_eq!(discarded, 300);
            assert_eq!(location.stock, 5000);
        }
        other => panic!("expected delivery, got {other:?}"),
    }
    assert_eq!(stock_of(&system, "Chennai Port").await, 5000);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn routing_is_deterministic() {
    let system = HubSystem::start(&Seed::demo(), clock()).await.unwrap();

    for _ in 0..100 {
        let shipment = system
            .place_order("Chennai Port", "Titanium Alloy", 500)
            .await
            .unwrap();
        assert_eq!(shipment.origin, "Mumbai HQ");
        assert_eq!(shipment.arrival_time - shipment.start_time, TimeDelta::seconds(90));
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn seeded_markets_report_stock_status() {
    let system = HubSystem::start(&Seed::demo(), clock()).await.unwrap();

    let markets = system.locations.list_sorted().await.unwrap();
    let status = |name: &str| {
        markets
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.status())
            .unwrap()
    };
    assert_eq!(markets.len(), 5);
    assert_eq!(status("Chennai Port"), StockStatus::Critical);
    assert_eq!(status("Mumbai HQ"), StockStatus::Critical);
    assert_eq!(status("Delhi Hub"), StockStatus::Adequate);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn delivered_shipment_is_immutable() {
    let clock = clock();
    let system = HubSystem::start(&seed_with_chennai(1000, 5000), clock.clone())
        .await
        .unwrap();

    let shipment = system
        .place_order("Chennai Port", "Titanium Alloy", 500)
        .await
        .unwrap();
    clock.advance(TimeDelta::seconds(90));
    assert!(system.settle(shipment.id).await.unwrap().is_delivered());
    let delivered = system.shipments.get(shipment.id).await.unwrap().unwrap();

    let err = system.cancel(shipment.id).await.unwrap_err();
    assert!(matches!(err, ShipmentError::InvalidTransition { .. }));
    assert_eq!(
        system.settle(shipment.id).await.unwrap(),
        Settlement::NoOp(NoOpReason::AlreadyDelivered)
    );

    let after = system.shipments.get(shipment.id).await.unwrap().unwrap();
    assert_eq!(after, delivered);
    assert_eq!(after.quantity, 500);
    assert_eq!(after.origin, "Mumbai HQ");
    assert_eq!(after.destination, "Chennai Port");
    assert_eq!(after.status, ShipmentStatus::Delivered);
    assert_eq!(stock_of(&system, "Chennai Port").await, 1500);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn early_settlement_changes_nothing() {
    let clock = clock();
    let system = HubSystem::start(&seed_with_chennai(1000, 5000), clock.clone())
        .await
        .unwrap();

    let shipment = system
        .place_order("Chennai Port", "Titanium Alloy", 500)
        .await
        .unwrap();
    clock.advance(TimeDelta::milliseconds(89_999));

    assert_eq!(
        system.settle(shipment.id).await.unwrap(),
        Settlement::NoOp(NoOpReason::NotYetArrived { remaining_ms: 1 })
    );
    assert_eq!(stock_of(&system, "Chennai Port").await, 1000);
    let stored = system.shipments.get(shipment.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ShipmentStatus::InTransit);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cancelled_shipment_is_never_credited() {
    let clock = clock();
    let system = HubSystem::start(&seed_with_chennai(1000, 5000), clock.clone())
        .await
        .unwrap();

    let shipment = system
        .place_order("Chennai Port", "Titanium Alloy", 500)
        .await
        .unwrap();
    assert_eq!(
        system.cancel(shipment.id).await.unwrap().status,
        ShipmentStatus::Cancelled
    );
    // Cancelling twice is harmless.
    assert_eq!(
        system.cancel(shipment.id).await.unwrap().status,
        ShipmentStatus::Cancelled
    );

    clock.advance(TimeDelta::seconds(600));
    assert_eq!(
        system.settle(shipment.id).await.unwrap(),
        Settlement::NoOp(NoOpReason::Cancelled)
    );
    assert_eq!(settle_due(&system.shipments).await.unwrap(), 0);
    assert_eq!(stock_of(&system, "Chennai Port").await, 1000);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn validation_names_the_offending_field() {
    let system = HubSystem::start(&Seed::demo(), clock()).await.unwrap();

    let field = |err: ShipmentError| match err {
        ShipmentError::Validation { field, .. } => field,
        other => panic!("expected a validation error, got {other:?}"),
    };

    let err = system
        .place_order("Chennai Port", "Titanium Alloy", 0)
        .await
        .unwrap_err();
    assert_eq!(field(err), "quantity");

    let err = system
        .place_order("Chennai Port", "Titanium Alloy", -20)
        .await
        .unwrap_err();
    assert_eq!(field(err), "quantity");

    let err = system
        .place_order("Atlantis", "Titanium Alloy", 10)
        .await
        .unwrap_err();
    assert_eq!(field(err), "destination");

    let err = system
        .place_order("Chennai Port", "Unobtainium", 10)
        .await
        .unwrap_err();
    assert_eq!(field(err), "commodity");

    assert!(system.shipments.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn settling_an_unknown_shipment_is_a_no_op() {
    let system = HubSystem::start(&Seed::demo(), clock()).await.unwrap();

    let settlement = system
        .settle("ORD-9999".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(settlement, Settlement::NoOp(NoOpReason::UnknownShipment));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn shipments_list_newest_first() {
    let clock = clock();
    let system = HubSystem::start(&Seed::demo(), clock.clone()).await.unwrap();

    let mut placed = Vec::new();
    for destination in ["Pune Factory", "Delhi Hub", "Kolkata Yard"] {
        placed.push(
            system
                .place_order(destination, "Copper Wire", 40)
                .await
                .unwrap()
                .id,
        );
        clock.advance(TimeDelta::seconds(1));
    }

    let listed: Vec<_> = system
        .shipments
        .list_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    placed.reverse();
    assert_eq!(listed, placed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn settle_due_delivers_only_arrived_shipments() {
    let clock = clock();
    let system = HubSystem::start(&Seed::demo(), clock.clone()).await.unwrap();

    // Kolkata Yard is served by Chennai Port in the default 30 s; Delhi Hub takes 100 s.
    let quick = system.place_order("Kolkata Yard", "Copper Wire", 100).await.unwrap();
    let slow = system.place_order("Delhi Hub", "Copper Wire", 100).await.unwrap();

    clock.advance(TimeDelta::seconds(30));
    assert_eq!(settle_due(&system.shipments).await.unwrap(), 1);

    let quick = system.shipments.get(quick.id).await.unwrap().unwrap();
    let slow = system.shipments.get(slow.id).await.unwrap().unwrap();
    assert_eq!(quick.status, ShipmentStatus::Delivered);
    assert_eq!(slow.status, ShipmentStatus::InTransit);
    assert_eq!(stock_of(&system, "Kolkata Yard").await, 5700);

    assert_eq!(settle_due(&system.shipments).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn poller_settles_in_the_background() {
    let clock = clock();
    let system = HubSystem::start(&Seed::demo(), clock.clone()).await.unwrap();

    let shipment = system.place_order("Pune Factory", "Industrial Steel", 110).await.unwrap();
    clock.advance(TimeDelta::seconds(45));

    let poller = SettlementPoller::spawn(system.shipments.clone(), Duration::from_millis(10));
    let delivered = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let current = system.shipments.get(shipment.id).await.unwrap().unwrap();
            if current.status == ShipmentStatus::Delivered {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    poller.stop().await;

    assert!(delivered.is_ok(), "poller never settled {}", shipment.id);
    assert_eq!(stock_of(&system, "Pune Factory").await, 1000);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn inventory_adjustment() {
    let system = HubSystem::start(&Seed::demo(), clock()).await.unwrap();

    let added = system
        .adjust_stock("Pune Factory", 2500, Adjustment::Add)
        .await
        .unwrap();
    assert_eq!(added.location.stock, 3000);
    assert_eq!(added.applied, 2110);
    assert_eq!(added.excess, 390);

    let removed = system
        .adjust_stock("Pune Factory", 3500, Adjustment::Remove)
        .await
        .unwrap();
    assert_eq!(removed.location.stock, 0);
    assert_eq!(removed.applied, 3000);

    assert!(matches!(
        system.adjust_stock("Pune Factory", 0, Adjustment::Add).await,
        Err(LocationError::Invalid { field: "quantity", .. })
    ));
    assert!(matches!(
        system.adjust_stock("Atlantis", 5, Adjustment::Add).await,
        Err(LocationError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}
