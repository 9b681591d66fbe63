//! Rectangular index regions and raster-order iteration.
//!
//! Raster order visits index component 0 fastest, then component 1, and so
//! on. For a row-major buffer whose last storage axis is x this is exactly
//! memory order.

use std::fmt;

use crate::spatial::{Index, Size};

/// An inclusive hyper-rectangle of discrete indices: `size[d]` pixels starting
/// at `index[d]` along every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageRegion<const D: usize> {
    index: Index<D>,
    size: Size<D>,
}

impl<const D: usize> ImageRegion<D> {
    /// Create a region from its start index and size.
    pub fn new(index: Index<D>, size: Size<D>) -> Self {
        Self { index, size }
    }

    /// Create a region of the given size starting at index zero.
    pub fn from_size(size: Size<D>) -> Self {
        Self::new(Index::default(), size)
    }

    /// Start index of the region.
    pub fn index(&self) -> &Index<D> {
        &self.index
    }

    /// Extent of the region.
    pub fn size(&self) -> &Size<D> {
        &self.size
    }

    pub fn number_of_pixels(&self) -> usize {
        self.size.number_of_pixels()
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_pixels() == 0
    }

    /// Last index contained in the region, or `None` if it is empty.
    pub fn upper_index(&self) -> Option<Index<D>> {
        if self.is_empty() {
            return None;
        }
        let mut upper = self.index;
        for d in 0..D {
            upper[d] += self.size[d] as i64 - 1;
        }
        Some(upper)
    }

    /// Whether `index` lies inside the region.
    pub fn is_inside(&self, index: &Index<D>) -> bool {
        (0..D).all(|d| {
            index[d] >= self.index[d] && index[d] < self.index[d] + self.size[d] as i64
        })
    }

    /// Whether `other` is contained in this region. Empty regions are
    /// contained in every region.
    pub fn is_inside_region(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        (0..D).all(|d| {
            other.index[d] >= self.index[d]
                && other.index[d] + other.size[d] as i64 <= self.index[d] + self.size[d] as i64
        })
    }

    /// Raster-order offset of `index` relative to the start of the region.
    pub fn offset_of(&self, index: &Index<D>) -> Option<usize> {
        self.is_inside(index).then(|| self.raster_offset(index))
    }

    /// Raster-order offset of an index already known to lie in the region.
    pub(crate) fn raster_offset(&self, index: &Index<D>) -> usize {
        let mut offset = 0usize;
        let mut stride = 1usize;
        for d in 0..D {
            offset += (index[d] - self.index[d]) as usize * stride;
            stride *= self.size[d];
        }
        offset
    }

    /// Split into at most `max_slabs` contiguous slabs along the slowest axis.
    ///
    /// Slabs are returned in raster order, so visiting them one after the
    /// other visits the same indices in the same order as the whole region.
    pub fn split_slabs(&self, max_slabs: usize) -> Vec<Self> {
        if D == 0 || self.is_empty() {
            return vec![*self];
        }
        let axis = D - 1;
        let extent = self.size[axis];
        let count = max_slabs.clamp(1, extent);
        let base = extent / count;
        let remainder = extent % count;

        let mut slabs = Vec::with_capacity(count);
        let mut start = self.index[axis];
        for k in 0..count {
            let len = base + usize::from(k < remainder);
            let mut index = self.index;
            let mut size = self.size;
            index[axis] = start;
            size[axis] = len;
            slabs.push(Self::new(index, size));
            start += len as i64;
        }
        slabs
    }

    /// Iterate over every index of the region in raster order.
    pub fn iter(&self) -> ImageRegionIter<D> {
        ImageRegionIter {
            region: *self,
            current: self.index,
            remaining: self.number_of_pixels(),
        }
    }
}

impl<const D: usize> fmt::Display for ImageRegion<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{index: {}, size: {}}}", self.index, self.size)
    }
}

impl<const D: usize> IntoIterator for &ImageRegion<D> {
    type Item = Index<D>;
    type IntoIter = ImageRegionIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Raster-order iterator over the indices of an [`ImageRegion`].
#[derive(Debug, Clone)]
pub struct ImageRegionIter<const D: usize> {
    region: ImageRegion<D>,
    current: Index<D>,
    remaining: usize,
}

impl<const D: usize> Iterator for ImageRegionIter<D> {
    type Item = Index<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.current;
        self.remaining -= 1;

        for d in 0..D {
            self.current[d] += 1;
            if self.current[d] < self.region.index[d] + self.region.size[d] as i64 {
                break;
            }
            self.current[d] = self.region.index[d];
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const D: usize> ExactSizeIterator for ImageRegionIter<D> {}
