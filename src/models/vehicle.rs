//! Delivery vehicle type.

use serde::Serialize;

/// A delivery vehicle with a load capacity and an ordered stop sequence.
///
/// The remaining capacity is drawn down as parcels are assigned. The home
/// city is where candidate distances are measured from; the assignment
/// heuristic never advances it.
///
/// # Examples
///
/// ```
/// use roadnet::models::Vehicle;
///
/// let mut v = Vehicle::new(0, 200).with_home_city(3);
/// assert_eq!(v.remaining_capacity(), 200);
/// assert!(v.can_carry(150));
/// v.load(150);
/// v.push_stop(5);
/// assert_eq!(v.remaining_capacity(), 50);
/// assert_eq!(v.stops(), &[5]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    id: usize,
    max_capacity: i32,
    remaining_capacity: i32,
    home_city: usize,
    stops: Vec<usize>,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity, parked at city 0.
    ///
    /// Remaining capacity starts at the full capacity.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self {
            id,
            max_capacity: capacity,
            remaining_capacity: capacity,
            home_city: 0,
            stops: Vec::new(),
        }
    }

    /// Sets the home city this vehicle starts from.
    pub fn with_home_city(mut self, city: usize) -> Self {
        self.home_city = city;
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn max_capacity(&self) -> i32 {
        self.max_capacity
    }

    /// Capacity still available for assignment.
    pub fn remaining_capacity(&self) -> i32 {
        self.remaining_capacity
    }

    /// The city this vehicle starts from.
    pub fn home_city(&self) -> usize {
        self.home_city
    }

    /// Ordered delivery stops assigned so far.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Returns `true` if the remaining capacity covers `weight`.
    pub fn can_carry(&self, weight: i32) -> bool {
        self.remaining_capacity >= weight
    }

    /// Draws `weight` from the remaining capacity.
    ///
    /// Callers gate on [`can_carry`](Self::can_carry); the result must not
    /// go negative.
    pub fn load(&mut self, weight: i32) {
        debug_assert!(self.can_carry(weight));
        self.remaining_capacity -= weight;
    }

    /// Appends a delivery stop to this vehicle's sequence.
    pub fn push_stop(&mut self, city: usize) {
        self.stops.push(city);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(2, 120);
        assert_eq!(v.id(), 2);
        assert_eq!(v.max_capacity(), 120);
        assert_eq!(v.remaining_capacity(), 120);
        assert_eq!(v.home_city(), 0);
        assert!(v.stops().is_empty());
    }

    #[test]
    fn test_vehicle_home_city() {
        let v = Vehicle::new(0, 50).with_home_city(4);
        assert_eq!(v.home_city(), 4);
    }

    #[test]
    fn test_can_carry_boundary() {
        let v = Vehicle::new(0, 30);
        assert!(v.can_carry(30));
        assert!(!v.can_carry(31));
    }

    #[test]
    fn test_load_and_stops() {
        let mut v = Vehicle::new(1, 100);
        v.load(60);
        v.push_stop(2);
        v.load(40);
        v.push_stop(7);
        assert_eq!(v.remaining_capacity(), 0);
        assert_eq!(v.max_capacity(), 100);
        assert_eq!(v.stops(), &[2, 7]);
    }
}
