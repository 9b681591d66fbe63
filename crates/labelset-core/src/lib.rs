pub mod error;
pub mod image;
pub mod pointset;
pub mod spatial;

pub use error::{ImageError, Result};
pub use image::{Image, ImageMetadata, ImageRegion, Label, LabelImage, LabelImageView};
pub use pointset::{MeshRegion, PointSet};
pub use spatial::{Direction, Index, Point, Size, Spacing, Vector};
