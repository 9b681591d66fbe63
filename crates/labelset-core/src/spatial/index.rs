//! Discrete image index and size types.
//!
//! Index component 0 is the fastest-varying axis (x), component 1 is y, and so
//! on. Indices are signed so that buffered regions may start anywhere in index
//! space.

use std::fmt;

use super::Point;

/// A discrete pixel index in D-dimensional index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index<const D: usize>(pub [i64; D]);

impl<const D: usize> Index<D> {
    /// Create an index from its components.
    pub fn new(components: [i64; D]) -> Self {
        Self(components)
    }

    /// Create an index with every component set to `value`.
    pub fn filled(value: i64) -> Self {
        Self([value; D])
    }

    /// The index as a continuous index, suitable for the physical transform.
    pub fn to_continuous(&self) -> Point<D> {
        let mut point = Point::origin();
        for i in 0..D {
            point[i] = self.0[i] as f64;
        }
        point
    }
}

impl<const D: usize> Default for Index<D> {
    fn default() -> Self {
        Self::filled(0)
    }
}

impl<const D: usize> From<[i64; D]> for Index<D> {
    fn from(components: [i64; D]) -> Self {
        Self(components)
    }
}

impl<const D: usize> std::ops::Index<usize> for Index<D> {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for Index<D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> fmt::Display for Index<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Extent of an image region, in pixels along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<const D: usize>(pub [usize; D]);

impl<const D: usize> Size<D> {
    /// Create a size from its components.
    pub fn new(components: [usize; D]) -> Self {
        Self(components)
    }

    /// Create a size with every component set to `value`.
    pub fn filled(value: usize) -> Self {
        Self([value; D])
    }

    /// Total number of pixels covered by this size.
    pub fn number_of_pixels(&self) -> usize {
        self.0.iter().product()
    }
}

impl<const D: usize> Default for Size<D> {
    fn default() -> Self {
        Self::filled(0)
    }
}

impl<const D: usize> From<[usize; D]> for Size<D> {
    fn from(components: [usize; D]) -> Self {
        Self(components)
    }
}

impl<const D: usize> std::ops::Index<usize> for Size<D> {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const D: usize> std::ops::IndexMut<usize> for Size<D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const D: usize> fmt::Display for Size<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
