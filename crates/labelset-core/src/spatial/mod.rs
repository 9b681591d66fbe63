//! Spatial types for representing points, vectors, spacing, direction matrices
//! and discrete image indices.
//!
//! Continuous types are based on nalgebra; discrete types are plain arrays.

pub mod point;
pub mod vector;
pub mod spacing;
pub mod direction;
pub mod index;

pub use point::Point;
pub use vector::Vector;
pub use spacing::Spacing;
pub use direction::Direction;
pub use index::{Index, Size};
