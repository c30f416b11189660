//! # Hub Logistics
//!
//! A procurement hub: orders are routed to a destination from a fixed network of shipping
//! points, travel for a known time, and are settled into the destination's stock when they
//! arrive. Every stateful part is an actor from [`actor_framework`]; [`lifecycle::HubSystem`]
//! wires them together and [`api`] serves them over HTTP.
//!
//! - [`model`] - Locations, commodities and shipments.
//! - [`routing`] - Origin policy and transit times.
//! - [`location_actor`], [`commodity_actor`], [`shipment_actor`] - The three actors.
//! - [`clients`] - Typed clients for each actor.
//! - [`clock`] - Time source, swappable in tests.
//! - [`config`] - Environment configuration and seed data.

pub mod api;
pub mod clients;
pub mod clock;
pub mod commodity_actor;
pub mod config;
pub mod lifecycle;
pub mod location_actor;
pub mod model;
pub mod routing;
pub mod shipment_actor;
