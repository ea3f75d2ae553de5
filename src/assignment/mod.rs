//! Greedy delivery assignment.
//!
//! - [`assign_parcels`] — nearest-feasible-vehicle single pass, O(p · v)
//! - [`AssignmentPlan`] — per-parcel outcomes for the reporter
//!
//! The heuristic routes on the standalone
//! [`DistanceMatrix`](crate::distance::DistanceMatrix), not on the road
//! network's shortest paths; the network is only consulted by reporters to
//! resolve city labels.

mod greedy;
mod plan;

pub use greedy::assign_parcels;
pub use plan::{AssignmentPlan, ParcelAssignment, ParcelOutcome};
