//! Tensor-backed image type with physical metadata.
//!
//! This is the toolkit's dense image representation. Label scans run on host
//! memory, so the image is converted with [`Image::to_label_image`] first.

use burn::tensor::Tensor;
use burn::tensor::backend::Backend;
use num_traits::NumCast;

use crate::error::{ImageError, Result};
use crate::spatial::{Point, Spacing, Direction, Size};
use super::label::Label;
use super::label_image::LabelImage;
use super::metadata::ImageMetadata;
use super::region::ImageRegion;

/// Image with tensor data (potentially on GPU) and physical metadata.
///
/// # Type Parameters
/// * `B` - The backend (CPU or GPU) for tensor operations
/// * `D` - The dimensionality of the image
///
/// # Axis order
/// Tensor axes are stored slowest first (`[z, y, x]` for 3D), so index
/// component `i` corresponds to tensor axis `D - 1 - i`.
///
/// # Examples
/// ```rust
/// use labelset_core::Image;
/// use labelset_core::spatial::{Point, Spacing, Direction};
/// use burn::tensor::Tensor;
/// use burn_ndarray::NdArray;
///
/// type Backend = NdArray<f32>;
///
/// let device = Default::default();
/// let data = Tensor::<Backend, 2>::zeros([4, 6], &device);
/// let image = Image::new(data, Point::origin(), Spacing::uniform(1.0), Direction::identity());
/// assert_eq!(image.size().0, [6, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Image<B: Backend, const D: usize> {
    /// The pixel data.
    data: Tensor<B, D>,
    /// Physical coordinate of the first pixel (index 0, 0, ...).
    origin: Point<D>,
    /// Physical distance between pixels along each axis.
    spacing: Spacing<D>,
    /// Orientation of the image axes.
    direction: Direction<D>,
}

impl<B: Backend, const D: usize> Image<B, D> {
    /// Create a new image with the given data and metadata.
    pub fn new(
        data: Tensor<B, D>,
        origin: Point<D>,
        spacing: Spacing<D>,
        direction: Direction<D>,
    ) -> Self {
        Self {
            data,
            origin,
            spacing,
            direction,
        }
    }

    /// Get the image data tensor.
    pub fn data(&self) -> &Tensor<B, D> {
        &self.data
    }

    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Get the tensor shape, slowest axis first.
    pub fn shape(&self) -> [usize; D] {
        self.data.dims()
    }

    /// Get the image size in index order (x first).
    pub fn size(&self) -> Size<D> {
        let shape = self.shape();
        let mut size = Size::filled(0);
        for i in 0..D {
            size[i] = shape[D - 1 - i];
        }
        size
    }

    pub fn metadata(&self) -> ImageMetadata<D> {
        ImageMetadata::new(self.origin, self.spacing, self.direction)
    }

    /// Copy the tensor to host memory as a label image.
    ///
    /// Each value is cast with `NumCast`, so fractional values truncate toward
    /// zero for integer labels. Values outside the label type's range fail
    /// with [`ImageError::LabelConversion`].
    pub fn to_label_image<L: Label>(&self) -> Result<LabelImage<L, D>> {
        let values = self
            .data
            .to_data()
            .convert::<f64>()
            .to_vec::<f64>()
            .map_err(|e| ImageError::label_conversion(format!("{:?}", e)))?;

        let labels = values
            .into_iter()
            .map(|value| {
                <L as NumCast>::from(value).ok_or_else(|| {
                    ImageError::label_conversion(format!(
                        "value {} is not representable as {}",
                        value,
                        std::any::type_name::<L>()
                    ))
                })
            })
            .collect::<Result<Vec<L>>>()?;

        LabelImage::from_vec(ImageRegion::from_size(self.size()), labels, self.metadata())
    }
}
