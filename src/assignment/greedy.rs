//! Greedy nearest-feasible-vehicle assignment.
//!
//! Single pass over the parcels in input order: each parcel goes to the
//! vehicle with enough remaining capacity whose home city is nearest to
//! the parcel's destination. No backtracking, no reassignment.
//!
//! # Complexity
//!
//! O(p · v) for p parcels and v vehicles.

use crate::distance::DistanceMatrix;
use crate::graph::GraphError;
use crate::models::{Parcel, Vehicle};

use super::AssignmentPlan;

/// Assigns parcels to vehicles greedily.
///
/// For each parcel in input order, scans all vehicles with sufficient
/// remaining capacity and keeps the one whose home city is nearest to the
/// parcel's destination under `distances`. Only a strict improvement
/// replaces the incumbent, so ties stay with the lowest vehicle index. A
/// chosen vehicle has its remaining capacity drawn down and the
/// destination appended to its stop sequence.
///
/// Distances are always measured from each vehicle's *home* city: a
/// vehicle's position never advances as stops accumulate. That keeps the
/// scan cheap but ignores route chaining, so stop sequences are not
/// travel-optimal.
///
/// Parcels no vehicle can take are recorded as unassigned — an ordinary
/// outcome, not an error. Errors only arise from a parcel destination or
/// vehicle home city outside the matrix, checked before any assignment.
///
/// # Examples
///
/// ```
/// use roadnet::assignment::assign_parcels;
/// use roadnet::distance::DistanceMatrix;
/// use roadnet::models::{Parcel, Vehicle};
///
/// let distances = DistanceMatrix::from_data(2, vec![
///     0.0, 8.0,
///     3.0, 0.0,
/// ]).expect("square");
/// let parcels = vec![Parcel::new(0, 1, 30)];
/// let mut vehicles = vec![
///     Vehicle::new(0, 100).with_home_city(0), // 8.0 from destination
///     Vehicle::new(1, 100).with_home_city(1), // at the destination
/// ];
///
/// let plan = assign_parcels(&parcels, &mut vehicles, &distances)?;
/// assert_eq!(plan.num_assigned(), 1);
/// assert_eq!(vehicles[1].stops(), &[1]);
/// assert_eq!(vehicles[1].remaining_capacity(), 70);
/// # Ok::<(), roadnet::graph::GraphError>(())
/// ```
pub fn assign_parcels(
    parcels: &[Parcel],
    vehicles: &mut [Vehicle],
    distances: &DistanceMatrix,
) -> Result<AssignmentPlan, GraphError> {
    let count = distances.size();
    for vehicle in vehicles.iter() {
        if vehicle.home_city() >= count {
            return Err(GraphError::CityOutOfRange {
                index: vehicle.home_city(),
                count,
            });
        }
    }
    for parcel in parcels {
        if parcel.destination() >= count {
            return Err(GraphError::CityOutOfRange {
                index: parcel.destination(),
                count,
            });
        }
    }

    let mut plan = AssignmentPlan::new();

    for parcel in parcels {
        let mut best: Option<(usize, f64)> = None;
        for (idx, vehicle) in vehicles.iter().enumerate() {
            if !vehicle.can_carry(parcel.weight()) {
                continue;
            }
            let d = distances.get(vehicle.home_city(), parcel.destination());
            // Strict improvement only: ties stay with the earliest vehicle.
            if best.map_or(true, |(_, incumbent)| d < incumbent) {
                best = Some((idx, d));
            }
        }

        match best {
            Some((idx, d)) => {
                let vehicle = &mut vehicles[idx];
                vehicle.load(parcel.weight());
                vehicle.push_stop(parcel.destination());
                plan.record_assigned(parcel.id(), vehicle.id(), d, parcel.weight());
            }
            None => plan.record_unassigned(parcel.id()),
        }
    }

    Ok(plan)
}
