//! # Commodity Actor
//!
//! Holds the commodity catalogue and prices order quantities. Commodities are reference data:
//! they are created once at startup and never updated.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Commodity;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Commodity actor and its client.
pub fn new() -> (ResourceActor<Commodity>, ResourceClient<Commodity>) {
    ResourceActor::new(32)
}
