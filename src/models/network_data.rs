//! Loader-facing network description.
//!
//! The external loader parses its input (JSON or otherwise) into these
//! shapes; the core never touches files itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RoadAttrs;

/// One directed road record in a network description.
///
/// The attribute fields sit inline next to `src`/`dest`; any missing
/// numeric field defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadRecord {
    /// Origin city index.
    pub src: usize,
    /// Destination city index.
    pub dest: usize,
    /// Attribute bundle, flattened into the record.
    #[serde(flatten)]
    pub attrs: RoadAttrs,
}

/// A pre-parsed description of a road network.
///
/// # Examples
///
/// ```
/// use roadnet::models::NetworkData;
///
/// let data: NetworkData = serde_json::from_str(
///     r#"{
///         "vertex_count": 2,
///         "names": {"0": "Dakar"},
///         "roads": [{"src": 0, "dest": 1, "distance": 10.5, "base_time": 15.0, "cost": 5.0}]
///     }"#,
/// ).unwrap();
/// assert_eq!(data.vertex_count, 2);
/// assert_eq!(data.roads[0].attrs.toll, 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkData {
    /// Number of cities.
    pub vertex_count: usize,
    /// Sparse display-name map, index to name. May reference indices the
    /// network does not have; those entries are reported and skipped.
    #[serde(default)]
    pub names: BTreeMap<usize, String>,
    /// Edge list.
    #[serde(default)]
    pub roads: Vec<RoadRecord>,
}
