//! Breadth-first traversal and reachability.

use std::collections::VecDeque;

use crate::graph::{GraphError, RoadNetwork};

/// Visits every city reachable from `start` in level order, returning the
/// visitation sequence.
///
/// Same visitation contract as [`depth_first`](super::depth_first) — the
/// two agree on the visited set and on the first entry — but the order is
/// by increasing hop count. The queue is pre-sized to the city count; a
/// city enters it at most once.
///
/// Rejects an out-of-range `start` before touching the network.
///
/// # Examples
///
/// ```
/// use roadnet::graph::RoadNetwork;
/// use roadnet::models::RoadAttrs;
/// use roadnet::traversal::breadth_first;
///
/// let mut net = RoadNetwork::new(4)?;
/// net.add_road(0, 1, RoadAttrs::new(1.0, 1.0, 1.0))?;
/// net.add_road(0, 2, RoadAttrs::new(1.0, 1.0, 1.0))?;
/// net.add_road(1, 3, RoadAttrs::new(1.0, 1.0, 1.0))?;
///
/// assert_eq!(breadth_first(&net, 0)?, vec![0, 2, 1, 3]);
/// # Ok::<(), roadnet::graph::GraphError>(())
/// ```
pub fn breadth_first(net: &RoadNetwork, start: usize) -> Result<Vec<usize>, GraphError> {
    net.check_city(start)?;

    let n = net.num_cities();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(city) = queue.pop_front() {
        order.push(city);
        for road in net.roads_from(city) {
            if !visited[road.dest] {
                visited[road.dest] = true;
                queue.push_back(road.dest);
            }
        }
    }

    Ok(order)
}

/// Returns `true` if `dest` can be reached from `src` along directed roads.
///
/// Breadth-first search that short-circuits on the first sight of `dest`;
/// equivalent to asking whether `dest` appears in the visitation sequence
/// of [`breadth_first`]`(net, src)`. A city always reaches itself.
///
/// Both indices are validated up front; no traversal is attempted on a bad
/// index.
pub fn is_accessible(net: &RoadNetwork, src: usize, dest: usize) -> Result<bool, GraphError> {
    net.check_city(src)?;
    net.check_city(dest)?;

    if src == dest {
        return Ok(true);
    }

    let n = net.num_cities();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);

    visited[src] = true;
    queue.push_back(src);

    while let Some(city) = queue.pop_front() {
        for road in net.roads_from(city) {
            if road.dest == dest {
                return Ok(true);
            }
            if !visited[road.dest] {
                visited[road.dest] = true;
                queue.push_back(road.dest);
            }
        }
    }

    Ok(false)
}
