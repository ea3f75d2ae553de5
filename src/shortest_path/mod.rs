//! Shortest-path engines.
//!
//! - [`floyd_warshall`] — all-pairs distances, O(V³)
//! - [`constrained_bellman_ford`] — single-source cheapest routes under an
//!   elapsed-time budget, with negative-cycle detection, O(V · E)
//! - [`CostPolicy`] — pluggable road pricing (plain cost, or cost plus a
//!   toll surcharge)
//!
//! Unreachable pairs are `None`, never a float sentinel.

mod bellman_ford;
mod floyd_warshall;
mod policy;

pub use bellman_ford::{constrained_bellman_ford, ConstrainedPaths, RouteSummary};
pub use floyd_warshall::{floyd_warshall, AllPairsDistances};
pub use policy::{CostPolicy, TOLL_GATE_SURCHARGE};
