//! A stocking point: hub, port, yard or factory.
//!
//! Stock is held in whole units and kept within `0..=capacity` by every constructor and
//! mutator on [`Location`].

use serde::{Deserialize, Serialize};

/// Health of a location's stock, derived from `stock / capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    Adequate,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub stock: u64,
    pub capacity: u64,
    pub daily_usage: u64,
}

/// Outcome of moving stock in or out of a location.
///
/// `applied` is what actually moved; `excess` is the part of the request that did not fit
/// (over capacity on the way in, below zero on the way out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMovement {
    pub location: Location,
    pub applied: u64,
    pub excess: u64,
}

impl Location {
    /// Builds a location, clamping `stock` to `capacity`.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        stock: u64,
        capacity: u64,
        daily_usage: u64,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            stock: stock.min(capacity),
            capacity,
            daily_usage,
        }
    }

    /// `< 30%` critical, `< 50%` warning. An empty-capacity location is always critical.
    pub fn status(&self) -> StockStatus {
        if self.capacity == 0 {
            return StockStatus::Critical;
        }
        let stock = u128::from(self.stock);
        let capacity = u128::from(self.capacity);
        if stock * 10 < capacity * 3 {
            StockStatus::Critical
        } else if stock * 2 < capacity {
            StockStatus::Warning
        } else {
            StockStatus::Adequate
        }
    }

    /// Days the current stock lasts at the configured daily usage.
    pub fn days_of_cover(&self) -> Option<f64> {
        (self.daily_usage > 0).then(|| self.stock as f64 / self.daily_usage as f64)
    }

    pub fn headroom(&self) -> u64 {
        self.capacity - self.stock
    }

    pub(crate) fn credit(&mut self, quantity: u64) -> StockMovement {
        let applied = quantity.min(self.headroom());
        self.stock += applied;
        StockMovement {
            location: self.clone(),
            applied,
            excess: quantity - applied,
        }
    }

    pub(crate) fn write_off(&mut self, quantity: u64) -> StockMovement {
        let applied = quantity.min(self.stock);
        self.stock -= applied;
        StockMovement {
            location: self.clone(),
            applied,
            excess: quantity - applied,
        }
    }
}

/// Seed record for a location. Field names follow the JSON seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCreate {
    pub name: String,
    pub region: String,
    pub stock: u64,
    pub capacity: u64,
    #[serde(default)]
    pub daily_usage: u64,
}
