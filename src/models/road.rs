//! Road attribute bundle.

use serde::{Deserialize, Serialize};

/// Attributes carried by a directed road between two cities.
///
/// All numeric fields default to zero, matching the loader contract for
/// records with missing fields.
///
/// # Examples
///
/// ```
/// use roadnet::models::RoadAttrs;
///
/// let attrs = RoadAttrs::new(10.5, 15.0, 5.0)
///     .with_road_type(1)
///     .with_reliability(0.9)
///     .with_toll(2);
/// assert_eq!(attrs.distance, 10.5);
/// assert_eq!(attrs.toll, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadAttrs {
    /// Length in kilometers.
    pub distance: f64,
    /// Nominal travel time in minutes.
    pub base_time: f64,
    /// Monetary cost of taking this road.
    pub cost: f64,
    /// Surface/category code (0 = asphalt, 1 = laterite, ...).
    pub road_type: u8,
    /// Service-quality indicator in `[0, 1]`.
    pub reliability: f64,
    /// Access constraints encoded as a bit mask.
    pub restrictions: u32,
    /// Number of toll gates on this road.
    pub toll: u32,
}

impl RoadAttrs {
    /// Creates an attribute bundle from the three weight fields.
    ///
    /// Road type, reliability, restrictions, and toll default to zero.
    pub fn new(distance: f64, base_time: f64, cost: f64) -> Self {
        Self {
            distance,
            base_time,
            cost,
            ..Self::default()
        }
    }

    /// Sets the surface/category code.
    pub fn with_road_type(mut self, road_type: u8) -> Self {
        self.road_type = road_type;
        self
    }

    /// Sets the reliability indicator.
    pub fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = reliability;
        self
    }

    /// Sets the access-restriction bit mask.
    pub fn with_restrictions(mut self, restrictions: u32) -> Self {
        self.restrictions = restrictions;
        self
    }

    /// Sets the toll-gate count.
    pub fn with_toll(mut self, toll: u32) -> Self {
        self.toll = toll;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let attrs = RoadAttrs::new(12.0, 18.0, 2.5);
        assert_eq!(attrs.distance, 12.0);
        assert_eq!(attrs.base_time, 18.0);
        assert_eq!(attrs.cost, 2.5);
        assert_eq!(attrs.road_type, 0);
        assert_eq!(attrs.reliability, 0.0);
        assert_eq!(attrs.restrictions, 0);
        assert_eq!(attrs.toll, 0);
    }

    #[test]
    fn test_builder() {
        let attrs = RoadAttrs::new(8.0, 10.0, 1.5)
            .with_road_type(2)
            .with_reliability(0.85)
            .with_restrictions(0b101)
            .with_toll(1);
        assert_eq!(attrs.road_type, 2);
        assert_eq!(attrs.reliability, 0.85);
        assert_eq!(attrs.restrictions, 0b101);
        assert_eq!(attrs.toll, 1);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let attrs: RoadAttrs =
            serde_json::from_str(r#"{"distance": 7.2, "base_time": 10.0}"#).expect("valid json");
        assert_eq!(attrs.distance, 7.2);
        assert_eq!(attrs.base_time, 10.0);
        assert_eq!(attrs.cost, 0.0);
        assert_eq!(attrs.toll, 0);
    }
}
