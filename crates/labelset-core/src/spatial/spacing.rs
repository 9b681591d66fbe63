//! Spacing type for representing physical distances between pixels.

use super::Vector;

/// Spacing between adjacent pixels along each axis.
///
/// This is a type alias to Vector for semantic clarity.
pub type Spacing<const D: usize> = Vector<D>;

impl<const D: usize> Spacing<D> {
    /// Create uniform spacing (same value for all dimensions).
    pub fn uniform(value: f64) -> Self {
        let mut spacing = Vector::zeros();
        for i in 0..D {
            spacing[i] = value;
        }
        spacing
    }

    /// Check that every component is finite and non-zero.
    ///
    /// Negative spacing is accepted; it mirrors the axis.
    pub fn is_valid(&self) -> bool {
        (0..D).all(|i| self[i].is_finite() && self[i] != 0.0)
    }
}
