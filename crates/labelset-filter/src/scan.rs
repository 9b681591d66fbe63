//! The label scan: turns every foreground pixel of a region into a point.
//!
//! Pixels are visited in raster order (index component 0 fastest). Background
//! pixels are skipped; every other pixel emits its physical point and its
//! label, so `points[k]` and `labels[k]` always describe the same pixel and
//! appear in the order their pixels were visited.

use labelset_core::image::{Label, LabelImageView};
use labelset_core::spatial::{Index, Point};
use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::progress::ProgressReporter;

/// Points and labels produced by one scan, positionally aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<L, const D: usize> {
    points: Vec<Point<D>>,
    labels: Vec<L>,
}

impl<L, const D: usize> ScanOutput<L, D> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consume the output, returning `(points, labels)`.
    pub fn into_parts(self) -> (Vec<Point<D>>, Vec<L>) {
        (self.points, self.labels)
    }

    fn push(&mut self, point: Point<D>, label: L) {
        self.points.push(point);
        self.labels.push(label);
    }

    fn append(&mut self, mut other: Self) {
        self.points.append(&mut other.points);
        self.labels.append(&mut other.labels);
    }
}

impl<L, const D: usize> Default for ScanOutput<L, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `view` sequentially, reporting one progress unit per pixel.
///
/// `transform` maps a pixel index to its physical point and must be pure.
pub fn scan_labels<L, T, const D: usize>(
    view: &LabelImageView<'_, L, D>,
    transform: T,
    reporter: &ProgressReporter,
) -> ScanOutput<L, D>
where
    L: Label,
    T: Fn(&Index<D>) -> Point<D>,
{
    let mut output = ScanOutput::new();
    for (index, label) in view.iter() {
        if !label.is_background() {
            output.push(transform(&index), label);
        }
        reporter.completed_pixel();
    }
    output
}

/// Scan `view` on the rayon pool, split into at most `work_units` slabs.
///
/// Slab outputs are concatenated in slab order, so the result is identical to
/// [`scan_labels`]. Progress advances by one unit per pixel, as in the
/// sequential scan.
pub fn scan_labels_parallel<L, T, const D: usize>(
    view: &LabelImageView<'_, L, D>,
    transform: T,
    reporter: &ProgressReporter,
    work_units: usize,
) -> ScanOutput<L, D>
where
    L: Label,
    T: Fn(&Index<D>) -> Point<D> + Sync,
{
    let slabs = view.split_slabs(work_units);

    let parts: Vec<ScanOutput<L, D>> = slabs
        .par_iter()
        .map(|slab| {
            let mut part = ScanOutput::new();
            for (index, label) in slab.iter() {
                if !label.is_background() {
                    part.push(transform(&index), label);
                }
                reporter.completed_pixel();
            }
            part
        })
        .collect();

    let mut output = ScanOutput::new();
    for part in parts {
        output.append(part);
    }
    output
}

/// Runs label scans according to a [`ScanConfig`].
#[derive(Debug, Clone, Default)]
pub struct LabelScanner {
    config: ScanConfig,
}

impl LabelScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `view`, sequentially or in parallel as configured.
    pub fn scan<L, T, const D: usize>(
        &self,
        view: &LabelImageView<'_, L, D>,
        transform: T,
        reporter: &ProgressReporter,
    ) -> ScanOutput<L, D>
    where
        L: Label,
        T: Fn(&Index<D>) -> Point<D> + Sync,
    {
        if self.config.parallel {
            scan_labels_parallel(view, transform, reporter, self.config.work_units())
        } else {
            scan_labels(view, transform, reporter)
        }
    }
}
