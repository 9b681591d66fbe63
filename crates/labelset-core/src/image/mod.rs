//! Image types and operations.
//!
//! Label pixels, index regions, host label images, and the tensor-backed
//! image they can be extracted from.

pub mod image;
pub mod label;
pub mod label_image;
pub mod metadata;
pub mod region;

pub use image::Image;
pub use label::Label;
pub use label_image::{LabelImage, LabelImageView};
pub use metadata::ImageMetadata;
pub use region::{ImageRegion, ImageRegionIter};
