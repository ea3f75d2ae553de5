//! Structural analysis by graph traversal.
//!
//! - [`depth_first`] — DFS visitation order, explicit stack, O(V + E)
//! - [`breadth_first`] — BFS level-order visitation, O(V + E)
//! - [`is_accessible`] — reachability query, BFS with short-circuit
//! - [`has_cycle`] — directed cycle detection over every root
//! - [`connected_components`] — forward-reachability partition of the cities
//!
//! All of these read the network through its adjacency structure and never
//! mutate it.

mod bfs;
mod components;
mod cycle;
mod dfs;

pub use bfs::{breadth_first, is_accessible};
pub use components::connected_components;
pub use cycle::has_cycle;
pub use dfs::depth_first;

#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use crate::graph::RoadNetwork;
    use crate::models::RoadAttrs;

    use super::*;

    /// A small arbitrary network: 1..8 cities, up to 16 random roads.
    fn arb_network() -> impl Strategy<Value = RoadNetwork> {
        (1usize..8).prop_flat_map(|n| {
            let edges = proptest::collection::vec((0..n, 0..n), 0..16);
            edges.prop_map(move |edges| {
                let mut net = RoadNetwork::new(n).expect("non-zero");
                for (src, dest) in edges {
                    net.add_road(src, dest, RoadAttrs::new(1.0, 1.0, 1.0))
                        .expect("in range");
                }
                net
            })
        })
    }

    proptest! {
        #[test]
        fn prop_dfs_bfs_same_visited_set(net in arb_network()) {
            for start in 0..net.num_cities() {
                let mut dfs = depth_first(&net, start).expect("in range");
                let mut bfs = breadth_first(&net, start).expect("in range");
                prop_assert_eq!(dfs[0], start);
                prop_assert_eq!(bfs[0], start);
                dfs.sort_unstable();
                bfs.sort_unstable();
                prop_assert_eq!(dfs, bfs);
            }
        }

        #[test]
        fn prop_accessible_iff_in_bfs_order(net in arb_network()) {
            for src in 0..net.num_cities() {
                let order = breadth_first(&net, src).expect("in range");
                for dest in 0..net.num_cities() {
                    prop_assert_eq!(
                        is_accessible(&net, src, dest).expect("in range"),
                        order.contains(&dest)
                    );
                }
            }
        }

        #[test]
        fn prop_components_partition_cities(net in arb_network()) {
            let components = connected_components(&net);
            let total: usize = components.iter().map(Vec::len).sum();
            prop_assert_eq!(total, net.num_cities());
            let mut seen = vec![false; net.num_cities()];
            for component in &components {
                for &city in component {
                    prop_assert!(!seen[city]);
                    seen[city] = true;
                }
            }
        }
    }
}
