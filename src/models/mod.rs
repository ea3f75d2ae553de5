//! Domain model types for road-network analysis and delivery planning.
//!
//! Provides the core data shapes: road attribute bundles, parcels with
//! weights and destinations, capacity-bound delivery vehicles, and the
//! loader-facing network description.

mod network_data;
mod parcel;
mod road;
mod vehicle;

pub use network_data::{NetworkData, RoadRecord};
pub use parcel::Parcel;
pub use road::RoadAttrs;
pub use vehicle::Vehicle;
