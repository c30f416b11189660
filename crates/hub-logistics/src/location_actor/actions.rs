//! Stock movements on a [`Location`](crate::model::Location).

use crate::model::StockMovement;

#[derive(Debug, Clone)]
pub enum LocationAction {
    /// Credit stock, clamped at capacity.
    Receive(u64),
    /// Remove stock, clamped at zero.
    WriteOff(u64),
}

/// Results from LocationActions - variants match 1:1 with LocationAction
#[derive(Debug, Clone)]
pub enum LocationActionResult {
    Receive(StockMovement),
    WriteOff(StockMovement),
}
