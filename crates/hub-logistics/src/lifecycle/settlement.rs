use crate::clients::ShipmentClient;
use crate::shipment_actor::ShipmentError;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

/// Settles every in-transit shipment whose arrival time has passed. Returns how many were
/// delivered by this call.
///
/// A shipment that fails to settle is logged and left in transit for the next pass; only a
/// failure to list shipments is returned.
pub async fn settle_due(shipments: &ShipmentClient) -> Result<usize, ShipmentError> {
    let due = shipments.due_for_settlement().await?;
    let mut delivered = 0;
    for id in due {
        match shipments.settle(id).await {
            Ok(settlement) if settlement.is_delivered() => delivered += 1,
            Ok(settlement) => debug!(shipment = %id, outcome = settlement.code(), "Nothing to settle"),
            Err(e) => warn!(shipment = %id, error = %e, "Settlement failed"),
        }
    }
    Ok(delivered)
}

/// Background task running [`settle_due`] on a fixed period.
pub struct SettlementPoller {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SettlementPoller {
    pub fn spawn(shipments: ShipmentClient, period: Duration) -> Self {
        let (shutdown, mut stop) = watch::channel(false);
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            info!(period_ms = period.as_millis() as u64, "Settlement poller started");
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => match settle_due(&shipments).await {
                        Ok(0) => {}
                        Ok(delivered) => info!(delivered, "Settled arrivals"),
                        Err(e) => warn!(error = %e, "Settlement pass failed"),
                    },
                    changed = stop.changed() => {
                        if changed.is_err() || *stop.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("Settlement poller stopped");
        });

        Self { shutdown, handle }
    }

    /// Signals the task and waits for the pass in progress, if any, to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            error!("Settlement poller failed: {e:?}");
        }
    }
}
