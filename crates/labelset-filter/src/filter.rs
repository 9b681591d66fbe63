//! Pipeline-facing front end of the label scan.

use std::sync::Arc;
use std::time::Instant;

use labelset_core::image::{Label, LabelImage};
use labelset_core::pointset::PointSet;

use crate::config::ScanConfig;
use crate::error::{FilterError, Result};
use crate::progress::{ProgressObserver, ProgressReporter};
use crate::scan::LabelScanner;

/// Converts a label image into a point set in physical space.
///
/// Every non-background pixel of the input's buffered region becomes one
/// point, placed with the input's index to physical transform and carrying
/// the pixel's label as point data.
///
/// # Examples
/// ```rust
/// use std::sync::Arc;
/// use labelset_core::image::{ImageMetadata, LabelImage};
/// use labelset_core::spatial::{Index, Size, Spacing};
/// use labelset_filter::LabelToPointSetFilter;
///
/// let metadata = ImageMetadata::default().with_spacing(Spacing::new([1.1, 0.87]));
/// let mut image = LabelImage::<u16, 2>::new(Size::new([128, 128]), metadata);
/// image.set_pixel(&Index::new([18, 19]), 2).unwrap();
///
/// let mut filter = LabelToPointSetFilter::new();
/// filter.set_input(Arc::new(image));
/// filter.update().unwrap();
///
/// assert_eq!(filter.output().number_of_points(), 1);
/// assert_eq!(filter.output().point_data(), &[2]);
/// ```
pub struct LabelToPointSetFilter<L: Label, const D: usize> {
    input: Option<Arc<LabelImage<L, D>>>,
    output: PointSet<L, D>,
    config: ScanConfig,
    observers: Vec<Arc<dyn ProgressObserver>>,
    progress: f64,
}

impl<L: Label, const D: usize> LabelToPointSetFilter<L, D> {
    pub fn new() -> Self {
        Self {
            input: None,
            output: PointSet::new(),
            config: ScanConfig::default(),
            observers: Vec::new(),
            progress: 0.0,
        }
    }

    /// Replace the scan configuration, builder style.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScanConfig) {
        self.config = config;
        self.output.invalidate();
    }

    /// Set the image to scan. The current output becomes stale.
    pub fn set_input(&mut self, image: Arc<LabelImage<L, D>>) {
        self.input = Some(image);
        self.output.invalidate();
    }

    pub fn input(&self) -> Option<&LabelImage<L, D>> {
        self.input.as_deref()
    }

    /// Register an observer for progress events of subsequent updates.
    pub fn add_observer(&mut self, observer: Arc<dyn ProgressObserver>) {
        self.observers.push(observer);
    }

    /// Progress of the most recent update, 1.0 once it has completed.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn output(&self) -> &PointSet<L, D> {
        &self.output
    }

    /// Take the output, leaving an empty point set in its place.
    pub fn take_output(&mut self) -> PointSet<L, D> {
        std::mem::take(&mut self.output)
    }

    /// Scan the input and replace the output with the result.
    ///
    /// Fails with [`FilterError::InvalidInput`] when no input is set or the
    /// input metadata cannot map indices to physical space. The output is
    /// left untouched on failure.
    pub fn update(&mut self) -> Result<()> {
        let image = self
            .input
            .clone()
            .ok_or_else(|| FilterError::invalid_input("input image is not set"))?;
        self.config.validate()?;
        image.metadata().validate()?;

        let region = *image.buffered_region();
        let view = image.view(region)?;
        let total = region.number_of_pixels();

        tracing::debug!(
            "Scanning region {} ({} pixels, parallel: {})",
            region,
            total,
            self.config.parallel
        );
        let started = Instant::now();

        let reporter = ProgressReporter::new(self.observers.clone(), total, self.config.progress_updates);
        reporter.start();
        self.progress = 0.0;

        let scanner = LabelScanner::new(self.config.clone());
        let output = scanner.scan(
            &view,
            |index| image.transform_index_to_physical_point(index),
            &reporter,
        );
        reporter.finish();
        self.progress = reporter.fraction();

        let (points, labels) = output.into_parts();
        self.output.install(points, labels)?;
        self.output.mark_buffered_as_requested();

        tracing::info!(
            "Emitted {} points from {} pixels in {:.3}s",
            self.output.number_of_points(),
            total,
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Run [`update`](Self::update) only when the output is not current.
    pub fn update_if_stale(&mut self) -> Result<()> {
        if self.output.is_up_to_date() && self.input.is_some() {
            tracing::trace!("Output is up to date, skipping scan");
            return Ok(());
        }
        self.update()
    }
}

impl<L: Label, const D: usize> Default for LabelToPointSetFilter<L, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label, const D: usize> std::fmt::Debug for LabelToPointSetFilter<L, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelToPointSetFilter")
            .field("input", &self.input.as_ref().map(|image| *image.buffered_region()))
            .field("points", &self.output.number_of_points())
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .field("progress", &self.progress)
            .finish()
    }
}
