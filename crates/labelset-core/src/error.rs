//! Error types for image and point set operations.

use thiserror::Error;

/// Main error type for image construction and access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Caller supplied an input that cannot be processed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A requested region does not lie inside the buffered region.
    #[error("Region {region} is outside the buffered region {buffered}")]
    RegionOutOfBounds {
        region: String,
        buffered: String,
    },

    /// A pixel index does not lie inside the buffered region.
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(String),

    /// Buffer length does not match the expected element count.
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
    },

    /// A pixel value cannot be represented in the label type.
    #[error("Label conversion error: {0}")]
    LabelConversion(String),
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

impl ImageError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an index out of bounds error.
    pub fn index_out_of_bounds(msg: impl Into<String>) -> Self {
        Self::IndexOutOfBounds(msg.into())
    }

    /// Create a label conversion error.
    pub fn label_conversion(msg: impl Into<String>) -> Self {
        Self::LabelConversion(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImageError::invalid_input("input image is not set");
        assert_eq!(err.to_string(), "Invalid input: input image is not set");
    }

    #[test]
    fn test_size_mismatch() {
        let err = ImageError::SizeMismatch { expected: 16, actual: 12 };
        assert_eq!(err.to_string(), "Size mismatch: expected 16, got 12");
    }
}
