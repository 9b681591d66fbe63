//! Image metadata types.
//!
//! This module provides the physical-space description of an image (origin,
//! spacing, direction) and the index to physical point mapping built on it.

use serde::{Serialize, Deserialize};

use crate::error::{ImageError, Result};
use crate::spatial::{Point, Spacing, Direction, Index};

/// Image metadata containing physical space information.
///
/// Maps a (continuous) index to physical space with
/// `point = origin + direction * (index * spacing)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata<const D: usize> {
    /// Physical coordinate of the pixel at index zero.
    origin: Point<D>,
    /// Physical distance between pixels along each axis.
    spacing: Spacing<D>,
    /// Orientation of the image axes.
    direction: Direction<D>,
}

impl<const D: usize> ImageMetadata<D> {
    /// Create new image metadata.
    pub fn new(origin: Point<D>, spacing: Spacing<D>, direction: Direction<D>) -> Self {
        Self {
            origin,
            spacing,
            direction,
        }
    }

    /// Get the origin.
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Get the spacing.
    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    /// Get the direction.
    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Set the origin.
    pub fn set_origin(&mut self, origin: Point<D>) {
        self.origin = origin;
    }

    /// Set the spacing.
    pub fn set_spacing(&mut self, spacing: Spacing<D>) {
        self.spacing = spacing;
    }

    /// Set the direction.
    pub fn set_direction(&mut self, direction: Direction<D>) {
        self.direction = direction;
    }

    /// Replace the origin, builder style.
    pub fn with_origin(mut self, origin: Point<D>) -> Self {
        self.origin = origin;
        self
    }

    /// Replace the spacing, builder style.
    pub fn with_spacing(mut self, spacing: Spacing<D>) -> Self {
        self.spacing = spacing;
        self
    }

    /// Replace the direction, builder style.
    pub fn with_direction(mut self, direction: Direction<D>) -> Self {
        self.direction = direction;
        self
    }

    /// Check that spacing is finite and non-zero and the direction matrix is
    /// invertible.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_valid() {
            return Err(ImageError::invalid_input(format!(
                "spacing must be finite and non-zero, got {:?}",
                self.spacing.to_vec()
            )));
        }
        if self.direction.try_inverse().is_none() {
            return Err(ImageError::invalid_input("direction matrix is singular"));
        }
        Ok(())
    }

    /// Map a discrete index to its physical point.
    pub fn transform_index_to_physical_point(&self, index: &Index<D>) -> Point<D> {
        self.transform_continuous_index_to_physical_point(&index.to_continuous())
    }

    /// Map a continuous index to a physical point.
    pub fn transform_continuous_index_to_physical_point(&self, index: &Point<D>) -> Point<D> {
        let scaled = (*index - Point::origin()).component_mul(&self.spacing);
        self.origin + self.direction * scaled
    }
}

impl<const D: usize> Default for ImageMetadata<D> {
    /// Identity direction, unit spacing, zero origin.
    fn default() -> Self {
        Self {
            origin: Point::origin(),
            spacing: Spacing::uniform(1.0),
            direction: Direction::identity(),
        }
    }
}
