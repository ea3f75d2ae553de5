//! All-pairs shortest distances (Floyd-Warshall).

use crate::graph::RoadNetwork;

/// Dense all-pairs distance table, `None` marking an unreachable pair.
///
/// Unreachability is a tagged value rather than a float sentinel, so no
/// "infinity" can leak into comparisons or reports.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsDistances {
    data: Vec<Option<f64>>,
    size: usize,
}

impl AllPairsDistances {
    /// Shortest distance from `from` to `to`, or `None` if no path exists.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        assert!(from < self.size && to < self.size, "index out of bounds");
        self.data[from * self.size + to]
    }

    /// Number of cities covered by this table.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Computes shortest distances between every pair of cities, weighted by
/// road `distance`.
///
/// Initialization takes the *minimum* over parallel roads, so the result
/// does not depend on load order. The diagonal is zero; pairs with no
/// connecting path stay `None`.
///
/// O(V³) time, O(V²) space.
///
/// # Examples
///
/// ```
/// use roadnet::graph::RoadNetwork;
/// use roadnet::models::RoadAttrs;
/// use roadnet::shortest_path::floyd_warshall;
///
/// let mut net = RoadNetwork::new(3)?;
/// net.add_road(0, 1, RoadAttrs::new(10.0, 1.0, 1.0))?;
/// net.add_road(1, 2, RoadAttrs::new(5.0, 1.0, 1.0))?;
/// net.add_road(0, 2, RoadAttrs::new(20.0, 1.0, 1.0))?;
///
/// let dist = floyd_warshall(&net);
/// assert_eq!(dist.get(0, 2), Some(15.0)); // via city 1, not the direct road
/// assert_eq!(dist.get(2, 0), None);       // roads are directed
/// # Ok::<(), roadnet::graph::GraphError>(())
/// ```
pub fn floyd_warshall(net: &RoadNetwork) -> AllPairsDistances {
    let n = net.num_cities();
    let mut data: Vec<Option<f64>> = vec![None; n * n];

    for i in 0..n {
        data[i * n + i] = Some(0.0);
    }
    for i in 0..n {
        for road in net.roads_from(i) {
            let cell = &mut data[i * n + road.dest];
            // Minimum over parallel roads keeps the table deterministic.
            match *cell {
                Some(best) if best <= road.attrs.distance => {}
                _ => *cell = Some(road.attrs.distance),
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(via_k) = data[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(onward) = data[k * n + j] else {
                    continue;
                };
                let candidate = via_k + onward;
                let cell = &mut data[i * n + j];
                if cell.map_or(true, |current| candidate < current) {
                    *cell = Some(candidate);
                }
            }
        }
    }

    AllPairsDistances { data, size: n }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::RoadAttrs;

    fn dist(distance: f64) -> RoadAttrs {
        RoadAttrs::new(distance, 1.0, 1.0)
    }

    #[test]
    fn test_two_hop_beats_direct() {
        let mut net = RoadNetwork::new(3).expect("valid");
        net.add_road(0, 1, dist(10.0)).expect("in range");
        net.add_road(1, 2, dist(5.0)).expect("in range");
        net.add_road(0, 2, dist(20.0)).expect("in range");
        let table = floyd_warshall(&net);
        assert_eq!(table.get(0, 2), Some(15.0));
        assert_eq!(table.get(0, 1), Some(10.0));
    }

    #[test]
    fn test_diagonal_is_zero() {
        let mut net = RoadNetwork::new(3).expect("valid");
        net.add_road(0, 1, dist(4.0)).expect("in range");
        let table = floyd_warshall(&net);
        for i in 0..3 {
            assert_eq!(table.get(i, i), Some(0.0));
        }
    }

    #[test]
    fn test_unreachable_is_none() {
        let mut net = RoadNetwork::new(3).expect("valid");
        net.add_road(0, 1, dist(4.0)).expect("in range");
        let table = floyd_warshall(&net);
        assert_eq!(table.get(1, 0), None);
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, 2), None);
    }

    #[test]
    fn test_parallel_roads_take_minimum() {
        let mut net = RoadNetwork::new(2).expect("valid");
        net.add_road(0, 1, dist(9.0)).expect("in range");
        net.add_road(0, 1, dist(3.0)).expect("in range");
        net.add_road(0, 1, dist(6.0)).expect("in range");
        let table = floyd_warshall(&net);
        assert_eq!(table.get(0, 1), Some(3.0));
    }

    #[test]
    fn test_asymmetric_weights_stay_asymmetric() {
        let mut net = RoadNetwork::new(2).expect("valid");
        net.add_road(0, 1, dist(2.0)).expect("in range");
        net.add_road(1, 0, dist(7.0)).expect("in range");
        let table = floyd_warshall(&net);
        assert_eq!(table.get(0, 1), Some(2.0));
        assert_eq!(table.get(1, 0), Some(7.0));
    }

    #[test]
    fn test_self_loop_does_not_beat_zero_diagonal() {
        let mut net = RoadNetwork::new(2).expect("valid");
        net.add_road(0, 0, dist(5.0)).expect("in range");
        let table = floyd_warshall(&net);
        assert_eq!(table.get(0, 0), Some(0.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let net = RoadNetwork::new(2).expect("valid");
        floyd_warshall(&net).get(0, 2);
    }

    proptest! {
        #[test]
        fn prop_diagonal_always_zero(
            n in 1usize..7,
            edges in proptest::collection::vec((0usize..7, 0usize..7, 0.1f64..100.0), 0..20)
        ) {
            let mut net = RoadNetwork::new(n).expect("non-zero");
            for (src, dest, d) in edges {
                if src < n && dest < n {
                    net.add_road(src, dest, dist(d)).expect("in range");
                }
            }
            let table = floyd_warshall(&net);
            for i in 0..n {
                prop_assert_eq!(table.get(i, i), Some(0.0));
            }
        }

        #[test]
        fn prop_triangle_inequality(
            n in 2usize..6,
            edges in proptest::collection::vec((0usize..6, 0usize..6, 0.1f64..50.0), 1..15)
        ) {
            let mut net = RoadNetwork::new(n).expect("non-zero");
            for (src, dest, d) in edges {
                if src < n && dest < n {
                    net.add_road(src, dest, dist(d)).expect("in range");
                }
            }
            let table = floyd_warshall(&net);
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        if let (Some(ij), Some(ik), Some(kj)) =
                            (table.get(i, j), table.get(i, k), table.get(k, j))
                        {
                            prop_assert!(ij <= ik + kj + 1e-9);
                        }
                    }
                }
            }
        }
    }
}
