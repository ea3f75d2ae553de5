//! Edge cost policies.

use serde::{Deserialize, Serialize};

use crate::models::RoadAttrs;

/// Flat surcharge applied per toll gate under
/// [`CostPolicy::TollSurcharge`].
pub const TOLL_GATE_SURCHARGE: f64 = 10.0;

/// How the cheapest-route search prices a road.
///
/// The data set carries both a plain monetary cost and a toll-gate count;
/// both pricing rules are in active use, so the choice is a parameter
/// rather than a fixed formula.
///
/// # Examples
///
/// ```
/// use roadnet::models::RoadAttrs;
/// use roadnet::shortest_path::CostPolicy;
///
/// let attrs = RoadAttrs::new(10.0, 15.0, 5.0).with_toll(2);
/// assert_eq!(CostPolicy::Plain.edge_cost(&attrs), 5.0);
/// assert_eq!(CostPolicy::TollSurcharge.edge_cost(&attrs), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostPolicy {
    /// Monetary cost only.
    #[default]
    Plain,
    /// Monetary cost plus [`TOLL_GATE_SURCHARGE`] per toll gate.
    TollSurcharge,
}

impl CostPolicy {
    /// Price of taking a road under this policy.
    pub fn edge_cost(&self, attrs: &RoadAttrs) -> f64 {
        match self {
            CostPolicy::Plain => attrs.cost,
            CostPolicy::TollSurcharge => attrs.cost + TOLL_GATE_SURCHARGE * f64::from(attrs.toll),
        }
    }
}
