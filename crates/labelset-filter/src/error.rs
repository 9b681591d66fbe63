//! Error types for label to point set conversion.
//!
//! The scan itself cannot fail; every error here is raised while checking the
//! filter's inputs and configuration before a scan starts.

use labelset_core::ImageError;
use thiserror::Error;

/// Main error type for filter execution.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The filter input is missing or unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error raised by the image or point set layer.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Whether this error is an input precondition violation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::Image(ImageError::InvalidInput(_))
                | Self::Image(ImageError::RegionOutOfBounds { .. })
        )
    }
}
