//! Scan configuration.

use serde::{Serialize, Deserialize};

use crate::error::{FilterError, Result};

/// Settings controlling how a label scan is executed.
///
/// None of these change the scan result; they only affect scheduling and
/// how often progress is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Split the region into slabs scanned on the rayon pool.
    pub parallel: bool,
    /// Number of slabs for a parallel scan. `None` uses the pool's thread count.
    pub number_of_work_units: Option<usize>,
    /// Approximate number of progress events per scan. `None` reports every pixel.
    pub progress_updates: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            number_of_work_units: None,
            progress_updates: None,
        }
    }
}

impl ScanConfig {
    /// Create a new config with default settings (sequential, per-pixel progress).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the ordered parallel scan.
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Disable the parallel scan.
    pub fn without_parallel(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the number of slabs used by a parallel scan.
    pub fn with_work_units(mut self, work_units: usize) -> Self {
        self.number_of_work_units = Some(work_units);
        self
    }

    /// Throttle progress reporting to about `updates` events.
    pub fn with_progress_updates(mut self, updates: usize) -> Self {
        self.progress_updates = Some(updates);
        self
    }

    /// Slab count to use for a parallel scan.
    pub fn work_units(&self) -> usize {
        self.number_of_work_units
            .unwrap_or_else(rayon::current_num_threads)
    }

    /// Reject zero work units or zero progress updates.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_work_units == Some(0) {
            return Err(FilterError::invalid_configuration(
                "number of work units must be positive",
            ));
        }
        if self.progress_updates == Some(0) {
            return Err(FilterError::invalid_configuration(
                "number of progress updates must be positive",
            ));
        }
        Ok(())
    }
}
