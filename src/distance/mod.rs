//! City-distance matrix for the assignment heuristic.
//!
//! Deliberately independent of the road network's edge list: the heuristic
//! routes on this matrix alone, whether it came from the loader or from
//! the synthetic generator.

mod matrix;

pub use matrix::DistanceMatrix;
