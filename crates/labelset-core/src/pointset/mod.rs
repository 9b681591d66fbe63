//! Point set container receiving scan results.

pub mod point_set;

pub use point_set::{MeshRegion, PointSet};
