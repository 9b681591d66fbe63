//! Sparse point set with per-point data and region bookkeeping.
//!
//! A point set is split into `number_of_regions` pieces for streaming; the
//! producer fills the requested piece and records it as buffered. When the
//! buffered region equals the requested region the contents are current and
//! need not be regenerated.

use crate::error::{ImageError, Result};
use crate::spatial::Point;

/// One piece of a point set partitioned into `number_of_regions` pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshRegion {
    pub region: usize,
    pub number_of_regions: usize,
}

impl MeshRegion {
    pub fn new(region: usize, number_of_regions: usize) -> Self {
        Self {
            region,
            number_of_regions,
        }
    }

    /// The single piece covering the whole point set.
    pub fn whole() -> Self {
        Self::new(0, 1)
    }
}

impl Default for MeshRegion {
    fn default() -> Self {
        Self::whole()
    }
}

/// Points in physical space with one data value per point.
///
/// `points` and `point_data` always have the same length; the k-th data value
/// belongs to the k-th point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T, const D: usize> {
    points: Vec<Point<D>>,
    point_data: Vec<T>,
    requested_region: MeshRegion,
    buffered_region: Option<MeshRegion>,
}

impl<T, const D: usize> PointSet<T, D> {
    /// Create an empty point set requesting the whole output.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            point_data: Vec::new(),
            requested_region: MeshRegion::whole(),
            buffered_region: None,
        }
    }

    /// Replace the contents with `points` and their `point_data`.
    ///
    /// Contents are left untouched if the lengths differ. Installing new
    /// contents invalidates the buffered region.
    pub fn install(&mut self, points: Vec<Point<D>>, point_data: Vec<T>) -> Result<()> {
        if points.len() != point_data.len() {
            return Err(ImageError::SizeMismatch {
                expected: points.len(),
                actual: point_data.len(),
            });
        }
        self.points = points;
        self.point_data = point_data;
        self.buffered_region = None;
        Ok(())
    }

    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    pub fn point_data(&self) -> &[T] {
        &self.point_data
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, k: usize) -> Option<&Point<D>> {
        self.points.get(k)
    }

    pub fn point_data_at(&self, k: usize) -> Option<&T> {
        self.point_data.get(k)
    }

    /// Iterate over `(point, data)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point<D>, &T)> {
        self.points.iter().zip(self.point_data.iter())
    }

    pub fn requested_region(&self) -> MeshRegion {
        self.requested_region
    }

    /// Request a different piece. The buffered contents stay, but are no
    /// longer current unless they already match.
    pub fn set_requested_region(&mut self, region: MeshRegion) {
        self.requested_region = region;
    }

    pub fn buffered_region(&self) -> Option<MeshRegion> {
        self.buffered_region
    }

    /// Record that the current contents satisfy the requested region.
    pub fn mark_buffered_as_requested(&mut self) {
        self.buffered_region = Some(self.requested_region);
    }

    /// Forget that the contents are current, forcing the next producer run.
    pub fn invalidate(&mut self) {
        self.buffered_region = None;
    }

    /// Whether the contents satisfy the requested region.
    pub fn is_up_to_date(&self) -> bool {
        self.buffered_region == Some(self.requested_region)
    }

    /// Release the points and their data.
    pub fn into_parts(self) -> (Vec<Point<D>>, Vec<T>) {
        (self.points, self.point_data)
    }
}

impl<T, const D: usize> Default for PointSet<T, D> {
    fn default() -> Self {
        Self::new()
    }
}
