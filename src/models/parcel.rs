//! Parcel type.

use serde::{Deserialize, Serialize};

/// A parcel awaiting delivery to a destination city.
///
/// # Examples
///
/// ```
/// use roadnet::models::Parcel;
///
/// let p = Parcel::new(0, 3, 25).with_volume(0.4).with_urgency();
/// assert_eq!(p.destination(), 3);
/// assert_eq!(p.weight(), 25);
/// assert!(p.is_urgent());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parcel {
    id: usize,
    destination: usize,
    weight: i32,
    #[serde(default)]
    volume: f64,
    #[serde(default)]
    urgent: bool,
}

impl Parcel {
    /// Creates a parcel with the given ID, destination city, and weight.
    ///
    /// Volume defaults to zero and the urgency flag to `false`.
    pub fn new(id: usize, destination: usize, weight: i32) -> Self {
        Self {
            id,
            destination,
            weight,
            volume: 0.0,
            urgent: false,
        }
    }

    /// Sets the parcel volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Marks this parcel as urgent.
    pub fn with_urgency(mut self) -> Self {
        self.urgent = true;
        self
    }

    /// Parcel ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Destination city index.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Weight in capacity units.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Volume in cubic meters.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Whether this parcel is flagged urgent.
    pub fn is_urgent(&self) -> bool {
        self.urgent
    }
}
