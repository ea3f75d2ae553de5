//! Time-constrained cheapest routes (Bellman-Ford).

use log::warn;
use serde::Serialize;

use crate::graph::{GraphError, RoadNetwork};

use super::CostPolicy;

/// One reconstructed route from the search source to a destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Cities along the route, source first, destination last.
    pub path: Vec<usize>,
    /// Total cost under the policy the search ran with.
    pub total_cost: f64,
    /// Total nominal travel time in minutes.
    pub total_time: f64,
}

/// Result of a [`constrained_bellman_ford`] run.
///
/// Holds per-destination best cost, elapsed time, and predecessor data,
/// and reconstructs routes on demand. Borrows the network it was computed
/// over.
#[derive(Debug)]
pub struct ConstrainedPaths<'a> {
    net: &'a RoadNetwork,
    source: usize,
    policy: CostPolicy,
    cost: Vec<Option<f64>>,
    time: Vec<f64>,
    pred: Vec<Option<usize>>,
    negative_cycle: bool,
}

impl ConstrainedPaths<'_> {
    /// The city the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The pricing rule the search ran with.
    pub fn policy(&self) -> CostPolicy {
        self.policy
    }

    /// `true` if the verification pass found a still-relaxable edge,
    /// meaning a negative-cost cycle is reachable and the reported costs
    /// are best-effort only.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Best known cost to `dest`, or `None` if no route fits the time
    /// budget.
    pub fn cost_to(&self, dest: usize) -> Result<Option<f64>, GraphError> {
        self.net.check_city(dest)?;
        Ok(self.cost[dest])
    }

    /// Elapsed nominal time along the best known route to `dest`, or
    /// `None` if no route fits the time budget.
    pub fn time_to(&self, dest: usize) -> Result<Option<f64>, GraphError> {
        self.net.check_city(dest)?;
        Ok(self.cost[dest].map(|_| self.time[dest]))
    }

    /// Reconstructs the best route to `dest` by walking predecessors back
    /// to the source.
    ///
    /// `Ok(None)` means no route fits the time budget. When parallel roads
    /// make a hop ambiguous, the first matching road in adjacency order
    /// prices that hop. The walk gives up (returning `Ok(None)`) if the
    /// predecessor chain does not reach the source within a city-count
    /// worth of hops, which can happen after a negative-cost cycle.
    pub fn route_to(&self, dest: usize) -> Result<Option<RouteSummary>, GraphError> {
        self.net.check_city(dest)?;
        if self.cost[dest].is_none() {
            return Ok(None);
        }

        let mut path = vec![dest];
        let mut city = dest;
        while city != self.source {
            if path.len() > self.net.num_cities() {
                return Ok(None);
            }
            let Some(prev) = self.pred[city] else {
                return Ok(None);
            };
            path.push(prev);
            city = prev;
        }
        path.reverse();

        let mut total_cost = 0.0;
        let mut total_time = 0.0;
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let Some(road) = self.net.roads_from(from).find(|road| road.dest == to) else {
                return Ok(None);
            };
            total_cost += self.policy.edge_cost(&road.attrs);
            total_time += road.attrs.base_time;
        }

        Ok(Some(RouteSummary {
            path,
            total_cost,
            total_time,
        }))
    }
}

/// Single-source cheapest routes under an elapsed-time budget.
///
/// Bellman-Ford over road costs (priced by `policy`) with a parallel
/// cumulative `base_time` track: a relaxation is admitted only when the
/// predecessor's elapsed time plus the road's `base_time` stays within
/// `max_time`, even if it would improve the cost. Passing
/// `f64::INFINITY` disables the budget and recovers plain Bellman-Ford on
/// the same weight function.
///
/// Runs at most `V - 1` relaxation rounds (stopping early once a round
/// changes nothing), then one verification pass under the same time gate;
/// an edge that still relaxes flags a negative-cost cycle. Detection only:
/// the best-effort results are returned either way, with a warning logged.
///
/// # Examples
///
/// ```
/// use roadnet::graph::RoadNetwork;
/// use roadnet::models::RoadAttrs;
/// use roadnet::shortest_path::{constrained_bellman_ford, CostPolicy};
///
/// let mut net = RoadNetwork::new(3)?;
/// net.add_road(0, 1, RoadAttrs::new(1.0, 10.0, 1.0))?;
/// net.add_road(1, 2, RoadAttrs::new(1.0, 10.0, 1.0))?;
/// net.add_road(0, 2, RoadAttrs::new(1.0, 5.0, 10.0))?;
///
/// // Budget 15: the cheap two-hop route needs 20 minutes, so the direct
/// // road wins despite its cost.
/// let paths = constrained_bellman_ford(&net, 0, 15.0, CostPolicy::Plain)?;
/// let route = paths.route_to(2)?.expect("within budget");
/// assert_eq!(route.path, vec![0, 2]);
/// assert_eq!(route.total_cost, 10.0);
/// # Ok::<(), roadnet::graph::GraphError>(())
/// ```
pub fn constrained_bellman_ford<'a>(
    net: &'a RoadNetwork,
    source: usize,
    max_time: f64,
    policy: CostPolicy,
) -> Result<ConstrainedPaths<'a>, GraphError> {
    net.check_city(source)?;

    let n = net.num_cities();
    let mut cost: Vec<Option<f64>> = vec![None; n];
    let mut time = vec![0.0; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    cost[source] = Some(0.0);

    for _ in 1..n {
        let mut updated = false;
        for src in 0..n {
            for road in net.roads_from(src) {
                let Some(src_cost) = cost[src] else {
                    break;
                };
                let arrival = time[src] + road.attrs.base_time;
                if arrival > max_time {
                    continue;
                }
                let candidate = src_cost + policy.edge_cost(&road.attrs);
                if cost[road.dest].map_or(true, |current| candidate < current) {
                    cost[road.dest] = Some(candidate);
                    time[road.dest] = arrival;
                    pred[road.dest] = Some(src);
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    // Verification pass under the same time gate: anything still
    // relaxable sits on a negative-cost cycle.
    let mut negative_cycle = false;
    'verify: for src in 0..n {
        for road in net.roads_from(src) {
            let Some(src_cost) = cost[src] else {
                break;
            };
            let arrival = time[src] + road.attrs.base_time;
            if arrival > max_time {
                continue;
            }
            let candidate = src_cost + policy.edge_cost(&road.attrs);
            if cost[road.dest].map_or(true, |current| candidate < current) {
                negative_cycle = true;
                break 'verify;
            }
        }
    }
    if negative_cycle {
        warn!("negative-cost cycle reachable from city {source}; costs are best-effort");
    }

    Ok(ConstrainedPaths {
        net,
        source,
        policy,
        cost,
        time,
        pred,
        negative_cycle,
    })
}
