//! # roadnet
//!
//! Road-network analysis and delivery planning: a directed, multi-attribute
//! graph of cities and roads, traversal and structural analysis, shortest
//! paths under different cost models, and a greedy parcel-assignment
//! heuristic.
//!
//! The crate is the algorithmic core only. An external loader supplies a
//! pre-parsed [`models::NetworkData`]; an external formatter renders the
//! structured results. No I/O happens here.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (road attributes, parcels, vehicles, loader input)
//! - [`graph`] — Directed road-network storage with per-city adjacency
//! - [`traversal`] — DFS/BFS visitation, cycle detection, components, reachability
//! - [`shortest_path`] — All-pairs distances and time-constrained cheapest routes
//! - [`distance`] — Standalone city-distance matrix for the assignment heuristic
//! - [`assignment`] — Greedy nearest-feasible-vehicle parcel assignment

pub mod assignment;
pub mod distance;
pub mod graph;
pub mod models;
pub mod shortest_path;
pub mod traversal;
