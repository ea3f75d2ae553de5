//! Dense city-distance matrix.

use rand::Rng;

/// A dense n×n distance matrix stored in row-major order.
///
/// Distances need not be symmetric; `get(i, j)` and `get(j, i)` are
/// independent cells.
///
/// # Examples
///
/// ```
/// use roadnet::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 8.0, 3.0, 0.0]).expect("square");
/// assert_eq!(dm.get(0, 1), 8.0);
/// assert_eq!(dm.get(1, 0), 3.0);
/// assert!(!dm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Fills a matrix with random off-diagonal distances in
    /// `[1, max_distance)`, zero on the diagonal.
    ///
    /// This is the matrix's own data source when the loader supplies none;
    /// the draws are independent, so the result is generally asymmetric.
    ///
    /// # Panics
    ///
    /// Panics if `max_distance` is not greater than 1.
    pub fn synthetic<R: Rng>(size: usize, max_distance: f64, rng: &mut R) -> Self {
        let mut dm = Self::new(size);
        for from in 0..size {
            for to in 0..size {
                if from != to {
                    dm.set(from, to, rng.random_range(1.0..max_distance));
                }
            }
        }
        dm
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
