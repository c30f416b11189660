//! Plain domain types. The actor implementations live next to their actors
//! (`location_actor`, `commodity_actor`, `shipment_actor`).

pub mod commodity;
pub mod location;
pub mod shipment;

pub use commodity::*;
pub use location::*;
pub use shipment::*;
