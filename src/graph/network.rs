//! Directed road network storage.

use log::{debug, warn};

use crate::models::{NetworkData, RoadAttrs};

use super::GraphError;

/// A directed road out of a city.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    /// Destination city index.
    pub dest: usize,
    /// Attribute bundle for this road.
    pub attrs: RoadAttrs,
}

/// A directed road network over a fixed set of cities.
///
/// Roads are kept per origin city and observed most-recently-added-first,
/// the order the original adjacency lists produced by prepending. Parallel
/// roads between the same ordered pair are kept as distinct entries and
/// never merged. The network is built once and read-only afterwards; it is
/// released as a unit when dropped.
///
/// # Examples
///
/// ```
/// use roadnet::graph::RoadNetwork;
/// use roadnet::models::RoadAttrs;
///
/// let mut net = RoadNetwork::new(3)?;
/// net.add_road(0, 1, RoadAttrs::new(10.5, 15.0, 5.0))?;
/// net.add_road(0, 2, RoadAttrs::new(7.2, 10.0, 3.5))?;
/// net.set_city_name(0, "Dakar")?;
///
/// let dests: Vec<usize> = net.outgoing(0)?.map(|r| r.dest).collect();
/// assert_eq!(dests, vec![2, 1]); // most recent first
/// assert_eq!(net.city_label(0), "Dakar");
/// assert_eq!(net.city_label(1), "city 1");
/// # Ok::<(), roadnet::graph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    roads: Vec<Vec<Road>>,
    names: Vec<Option<String>>,
}

impl RoadNetwork {
    /// Creates a network of `vertex_count` isolated cities.
    ///
    /// Rejects an empty network. A value that fails construction is never
    /// returned, so callers cannot observe a partially built store;
    /// whatever was allocated on the way is dropped with the error.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyNetwork);
        }
        Ok(Self {
            roads: vec![Vec::new(); vertex_count],
            names: vec![None; vertex_count],
        })
    }

    /// Builds a network from a loader-supplied description.
    ///
    /// Out-of-range name indices and road endpoints are reported through
    /// the `log` facade and skipped; only a bad vertex count is fatal.
    pub fn from_data(data: &NetworkData) -> Result<Self, GraphError> {
        let mut net = Self::new(data.vertex_count)?;
        for (&index, name) in &data.names {
            if net.set_city_name(index, name.clone()).is_err() {
                warn!("ignoring name {name:?} for out-of-range city index {index}");
            }
        }
        for record in &data.roads {
            if net.add_road(record.src, record.dest, record.attrs).is_err() {
                warn!(
                    "ignoring road {} -> {} with an endpoint out of range",
                    record.src, record.dest
                );
            }
        }
        debug!(
            "loaded road network: {} cities, {} roads",
            net.num_cities(),
            net.num_roads()
        );
        Ok(net)
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.roads.len()
    }

    /// Total number of roads across all cities.
    pub fn num_roads(&self) -> usize {
        self.roads.iter().map(Vec::len).sum()
    }

    /// Adds a directed road from `src` to `dest`.
    ///
    /// Rejects, with no state change, any endpoint outside the network.
    /// Parallel roads are allowed.
    pub fn add_road(&mut self, src: usize, dest: usize, attrs: RoadAttrs) -> Result<(), GraphError> {
        if src >= self.roads.len() || dest >= self.roads.len() {
            return Err(GraphError::RoadOutOfRange {
                src,
                dest,
                count: self.roads.len(),
            });
        }
        // Appended here, iterated in reverse: the observable order stays
        // most-recently-added-first without linked-list plumbing.
        self.roads[src].push(Road { dest, attrs });
        Ok(())
    }

    /// Records a display name for a city.
    ///
    /// Names need not be unique. An out-of-range index is rejected with no
    /// state change.
    pub fn set_city_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.check_city(index)?;
        self.names[index] = Some(name.into());
        Ok(())
    }

    /// Display label for a city: its recorded name, or a positional
    /// placeholder when none was set.
    pub fn city_label(&self, index: usize) -> String {
        match self.names.get(index).and_then(|n| n.as_deref()) {
            Some(name) => name.to_string(),
            None => format!("city {index}"),
        }
    }

    /// Roads leaving `city`, most recently added first.
    ///
    /// Each call returns a fresh iterator, so the sequence is restartable.
    pub fn outgoing(&self, city: usize) -> Result<impl Iterator<Item = &Road> + '_, GraphError> {
        self.check_city(city)?;
        Ok(self.roads[city].iter().rev())
    }

    /// Edge density `E / (V * (V - 1))`.
    ///
    /// Not applicable (`None`) for a single-city network.
    pub fn density(&self) -> Option<f64> {
        let v = self.roads.len();
        if v <= 1 {
            return None;
        }
        Some(self.num_roads() as f64 / (v * (v - 1)) as f64)
    }

    /// Validates a city index against this network.
    pub(crate) fn check_city(&self, index: usize) -> Result<(), GraphError> {
        if index < self.roads.len() {
            Ok(())
        } else {
            Err(GraphError::CityOutOfRange {
                index,
                count: self.roads.len(),
            })
        }
    }

    /// Roads leaving a known-valid `city` in adjacency order (most recent
    /// first). Algorithm modules use this after validating their inputs.
    pub(crate) fn roads_from(&self, city: usize) -> impl DoubleEndedIterator<Item = &Road> + '_ {
        self.roads[city].iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(distance: f64) -> RoadAttrs {
        RoadAttrs::new(distance, distance, 1.0)
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(RoadNetwork::new(0).unwrap_err(), GraphError::EmptyNetwork);
    }

    #[test]
    fn test_new_isolated_cities() {
        let net = RoadNetwork::new(4).expect("valid");
        assert_eq!(net.num_cities(), 4);
        assert_eq!(net.num_roads(), 0);
        for city in 0..4 {
            assert_eq!(net.outgoing(city).expect("in range").count(), 0);
        }
    }

    #[test]
    fn test_add_road_rejects_out_of_range() {
        let mut net = RoadNetwork::new(3).expect("valid");
        let err = net.add_road(0, 3, attrs(1.0)).unwrap_err();
        assert_eq!(
            err,
            GraphError::RoadOutOfRange {
                src: 0,
                dest: 3,
                count: 3
            }
        );
        assert!(net.add_road(5, 0, attrs(1.0)).is_err());
        // No state change from the rejected calls.
        assert_eq!(net.num_roads(), 0);
    }

    #[test]
    fn test_outgoing_most_recent_first() {
        let mut net = RoadNetwork::new(3).expect("valid");
        net.add_road(0, 1, attrs(1.0)).expect("in range");
        net.add_road(0, 2, attrs(2.0)).expect("in range");
        net.add_road(0, 1, attrs(3.0)).expect("in range");
        let seen: Vec<(usize, f64)> = net
            .outgoing(0)
            .expect("in range")
            .map(|r| (r.dest, r.attrs.distance))
            .collect();
        assert_eq!(seen, vec![(1, 3.0), (2, 2.0), (1, 1.0)]);
    }

    #[test]
    fn test_outgoing_restartable() {
        let mut net = RoadNetwork::new(2).expect("valid");
        net.add_road(0, 1, attrs(1.0)).expect("in range");
        let first: Vec<usize> = net.outgoing(0).expect("in range").map(|r| r.dest).collect();
        let second: Vec<usize> = net.outgoing(0).expect("in range").map(|r| r.dest).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_roads_kept() {
        let mut net = RoadNetwork::new(2).expect("valid");
        net.add_road(0, 1, attrs(5.0)).expect("in range");
        net.add_road(0, 1, attrs(7.0)).expect("in range");
        assert_eq!(net.num_roads(), 2);
    }

    #[test]
    fn test_city_names() {
        let mut net = RoadNetwork::new(2).expect("valid");
        net.set_city_name(0, "Dakar").expect("in range");
        assert_eq!(net.city_label(0), "Dakar");
        assert_eq!(net.city_label(1), "city 1");
        assert!(net.set_city_name(2, "Thies").is_err());
    }

    #[test]
    fn test_density() {
        let mut net = RoadNetwork::new(3).expect("valid");
        net.add_road(0, 1, attrs(1.0)).expect("in range");
        net.add_road(1, 2, attrs(1.0)).expect("in range");
        net.add_road(2, 0, attrs(1.0)).expect("in range");
        let d = net.density().expect("more than one city");
        assert!((d - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_density_single_city() {
        let net = RoadNetwork::new(1).expect("valid");
        assert!(net.density().is_none());
    }

    #[test]
    fn test_from_data_skips_bad_records() {
        let data: NetworkData = serde_json::from_str(
            r#"{
                "vertex_count": 2,
                "names": {"0": "Dakar", "9": "Nowhere"},
                "roads": [
                    {"src": 0, "dest": 1, "distance": 10.0},
                    {"src": 0, "dest": 5, "distance": 3.0}
                ]
            }"#,
        )
        .expect("valid json");
        let net = RoadNetwork::from_data(&data).expect("buildable");
        assert_eq!(net.num_cities(), 2);
        assert_eq!(net.num_roads(), 1);
        assert_eq!(net.city_label(0), "Dakar");
    }

    #[test]
    fn test_from_data_rejects_empty() {
        let data = NetworkData::default();
        assert_eq!(
            RoadNetwork::from_data(&data).unwrap_err(),
            GraphError::EmptyNetwork
        );
    }
}
