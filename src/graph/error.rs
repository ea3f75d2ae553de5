//! Error taxonomy for graph construction and queries.

use thiserror::Error;

/// Errors from building or querying a road network.
///
/// Out-of-range rejections carry the offending index and the network size
/// so the caller can report a precise diagnostic. Infeasibility (no path,
/// no feasible vehicle) is never an error; those are ordinary results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A network must contain at least one city.
    #[error("a road network needs at least one city")]
    EmptyNetwork,
    /// A city index fell outside `[0, count)`.
    #[error("city index {index} out of range (network has {count} cities)")]
    CityOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of cities in the network.
        count: usize,
    },
    /// A road endpoint fell outside `[0, count)`.
    #[error("road {src} -> {dest} has an endpoint out of range (network has {count} cities)")]
    RoadOutOfRange {
        /// Origin city index of the rejected road.
        src: usize,
        /// Destination city index of the rejected road.
        dest: usize,
        /// Number of cities in the network.
        count: usize,
    },
}
