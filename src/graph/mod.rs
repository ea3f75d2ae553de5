//! Directed road network storage.
//!
//! The [`RoadNetwork`] is built once from loader data, read by every
//! analysis pass, and dropped as a unit. All index validation happens
//! here; the algorithm modules trust in-range indices after that.

mod error;
mod network;

pub use error::GraphError;
pub use network::{Road, RoadNetwork};
