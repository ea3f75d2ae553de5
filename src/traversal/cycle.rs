//! Directed cycle detection.

use crate::graph::RoadNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the active DFS path.
    Active,
    /// Fully explored.
    Done,
}

/// Returns `true` if the network contains a directed cycle.
///
/// Depth-first search over every root with three-state marking: a road
/// into a city still on the active path closes a cycle. The roads are
/// treated as directed throughout — a reciprocal pair (A→B and B→A) is a
/// genuine two-city cycle and is reported as one, which can surprise
/// callers thinking of the pair as a single two-way street.
///
/// # Examples
///
/// ```
/// use roadnet::graph::RoadNetwork;
/// use roadnet::models::RoadAttrs;
/// use roadnet::traversal::has_cycle;
///
/// let mut net = RoadNetwork::new(2)?;
/// net.add_road(0, 1, RoadAttrs::new(1.0, 1.0, 1.0))?;
/// assert!(!has_cycle(&net));
///
/// net.add_road(1, 0, RoadAttrs::new(1.0, 1.0, 1.0))?;
/// assert!(has_cycle(&net)); // reciprocal pair = directed cycle
/// # Ok::<(), roadnet::graph::GraphError>(())
/// ```
pub fn has_cycle(net: &RoadNetwork) -> bool {
    let mut marks = vec![Mark::Unvisited; net.num_cities()];
    for root in 0..net.num_cities() {
        if marks[root] == Mark::Unvisited && cycle_from(net, root, &mut marks) {
            return true;
        }
    }
    false
}

/// DFS from `root` with an explicit stack of in-progress road iterators.
fn cycle_from(net: &RoadNetwork, root: usize, marks: &mut [Mark]) -> bool {
    marks[root] = Mark::Active;
    let mut stack = vec![(root, net.roads_from(root))];

    loop {
        let Some((city, roads)) = stack.last_mut() else {
            return false;
        };
        let city = *city;
        match roads.next().map(|road| road.dest) {
            Some(dest) => match marks[dest] {
                Mark::Active => return true,
                Mark::Done => {}
                Mark::Unvisited => {
                    marks[dest] = Mark::Active;
                    stack.push((dest, net.roads_from(dest)));
                }
            },
            None => {
                marks[city] = Mark::Done;
                stack.pop();
            }
        }
    }
}
