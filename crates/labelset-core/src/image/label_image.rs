//! Host-resident label images and validated read-only views.

use crate::error::{ImageError, Result};
use crate::spatial::{Index, Point, Size, Spacing, Direction};
use super::label::Label;
use super::metadata::ImageMetadata;
use super::region::ImageRegion;

/// A labeled N-dimensional image held in host memory.
///
/// Pixels are stored in raster order over the buffered region, which may
/// start at any index. Physical placement comes from the image metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelImage<L: Label, const D: usize> {
    region: ImageRegion<D>,
    data: Vec<L>,
    metadata: ImageMetadata<D>,
}

impl<L: Label, const D: usize> LabelImage<L, D> {
    /// Allocate a background-filled image of the given size starting at index zero.
    pub fn new(size: Size<D>, metadata: ImageMetadata<D>) -> Self {
        Self::with_region(ImageRegion::from_size(size), metadata)
    }

    /// Allocate a background-filled image covering `region`.
    pub fn with_region(region: ImageRegion<D>, metadata: ImageMetadata<D>) -> Self {
        Self {
            region,
            data: vec![L::default(); region.number_of_pixels()],
            metadata,
        }
    }

    /// Wrap an existing raster-order buffer.
    pub fn from_vec(region: ImageRegion<D>, data: Vec<L>, metadata: ImageMetadata<D>) -> Result<Self> {
        let expected = region.number_of_pixels();
        if data.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            region,
            data,
            metadata,
        })
    }

    /// The region actually held in memory.
    pub fn buffered_region(&self) -> &ImageRegion<D> {
        &self.region
    }

    pub fn metadata(&self) -> &ImageMetadata<D> {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: ImageMetadata<D>) {
        self.metadata = metadata;
    }

    pub fn origin(&self) -> &Point<D> {
        self.metadata.origin()
    }

    pub fn spacing(&self) -> &Spacing<D> {
        self.metadata.spacing()
    }

    pub fn direction(&self) -> &Direction<D> {
        self.metadata.direction()
    }

    /// Pixel buffer in raster order.
    pub fn data(&self) -> &[L] {
        &self.data
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: L) {
        self.data.fill(value);
    }

    pub fn get_pixel(&self, index: &Index<D>) -> Result<L> {
        let offset = self.offset_of(index)?;
        Ok(self.data[offset])
    }

    pub fn set_pixel(&mut self, index: &Index<D>, value: L) -> Result<()> {
        let offset = self.offset_of(index)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Number of pixels in the buffered region that are not background.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|label| !label.is_background()).count()
    }

    /// Physical position of the pixel at `index`.
    pub fn transform_index_to_physical_point(&self, index: &Index<D>) -> Point<D> {
        self.metadata.transform_index_to_physical_point(index)
    }

    /// Read-only view over `region`, which must lie inside the buffered region.
    pub fn view(&self, region: ImageRegion<D>) -> Result<LabelImageView<'_, L, D>> {
        if !self.region.is_inside_region(&region) {
            return Err(ImageError::RegionOutOfBounds {
                region: region.to_string(),
                buffered: self.region.to_string(),
            });
        }
        Ok(LabelImageView { image: self, region })
    }

    /// Read-only view over the whole buffered region.
    pub fn buffered_view(&self) -> LabelImageView<'_, L, D> {
        LabelImageView {
            image: self,
            region: self.region,
        }
    }

    fn offset_of(&self, index: &Index<D>) -> Result<usize> {
        self.region.offset_of(index).ok_or_else(|| {
            ImageError::index_out_of_bounds(format!(
                "index {} is outside the buffered region {}",
                index, self.region
            ))
        })
    }
}

/// A read-only window onto a [`LabelImage`] whose region is known to lie
/// inside the image's buffered region.
#[derive(Debug, Clone, Copy)]
pub struct LabelImageView<'a, L: Label, const D: usize> {
    image: &'a LabelImage<L, D>,
    region: ImageRegion<D>,
}

impl<'a, L: Label, const D: usize> LabelImageView<'a, L, D> {
    pub fn image(&self) -> &'a LabelImage<L, D> {
        self.image
    }

    pub fn region(&self) -> &ImageRegion<D> {
        &self.region
    }

    pub fn number_of_pixels(&self) -> usize {
        self.region.number_of_pixels()
    }

    /// Split into contiguous slab views along the slowest axis, in raster order.
    pub fn split_slabs(&self, max_slabs: usize) -> Vec<Self> {
        self.region
            .split_slabs(max_slabs)
            .into_iter()
            .map(|region| Self {
                image: self.image,
                region,
            })
            .collect()
    }

    /// Iterate over `(index, label)` pairs in raster order.
    pub fn iter(&self) -> impl Iterator<Item = (Index<D>, L)> + 'a {
        let image = self.image;
        let buffered = image.region;
        // The view region lies inside the buffered region.
        self.region
            .iter()
            .map(move |index| (index, image.data[buffered.raster_offset(&index)]))
    }
}
