//! Progress reporting for label scans.
//!
//! Observers receive a stream of completion events that never decreases and
//! always ends with a fraction of exactly 1.0. Reporting is advisory: it has
//! no influence on the scan result.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// A single progress notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    /// Pixels processed so far.
    pub completed: usize,
    /// Pixels in the scanned region.
    pub total: usize,
    /// Time elapsed since the scan started.
    pub elapsed: Duration,
}

impl ProgressEvent {
    /// Completion fraction in `[0, 1]`. An empty region is complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// Receives progress notifications from a scan.
pub trait ProgressObserver: Send + Sync {
    /// Called whenever progress advances.
    fn on_progress(&self, event: &ProgressEvent);

    /// Called once before the first pixel is processed.
    fn on_start(&self, _total: usize) {}

    /// Called once after the final 1.0 event.
    fn on_complete(&self, _event: &ProgressEvent) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn on_progress(&self, event: &ProgressEvent) {
        self(event)
    }
}

/// Observer that logs progress through `tracing`.
#[derive(Debug)]
pub struct LoggingObserver {
    /// Minimum advance, in percent, between two log lines.
    pub log_interval_percent: f64,
    last_logged: Mutex<Option<f64>>,
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl LoggingObserver {
    pub fn new(log_interval_percent: f64) -> Self {
        Self {
            log_interval_percent,
            last_logged: Mutex::new(None),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, event: &ProgressEvent) {
        let percent = event.percent();
        let mut last = self.last_logged.lock().unwrap_or_else(PoisonError::into_inner);
        let due = match *last {
            None => true,
            Some(previous) => percent - previous >= self.log_interval_percent || percent >= 100.0,
        };
        if due && *last != Some(percent) {
            *last = Some(percent);
            tracing::info!(
                "Scanned {}/{} pixels ({:.1}%) in {:.3}s",
                event.completed,
                event.total,
                percent,
                event.elapsed.as_secs_f64()
            );
        }
    }

    fn on_start(&self, total: usize) {
        *self.last_logged.lock().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::debug!("Label scan started over {} pixels", total);
    }

    fn on_complete(&self, event: &ProgressEvent) {
        tracing::debug!(
            "Label scan completed in {:.3}s",
            event.elapsed.as_secs_f64()
        );
    }
}

/// Observer that records every event it receives.
#[derive(Debug, Clone, Default)]
pub struct HistoryObserver {
    history: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl HistoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in arrival order.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Recorded completion fractions in arrival order.
    pub fn fractions(&self) -> Vec<f64> {
        self.events().iter().map(ProgressEvent::fraction).collect()
    }

    pub fn clear(&self) {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl ProgressObserver for HistoryObserver {
    fn on_progress(&self, event: &ProgressEvent) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*event);
    }
}

/// Counts processed pixels for one scan and forwards events to observers.
///
/// Safe to share between scan workers. Counting and emitting happen under
/// one lock, so observers see a strictly increasing sequence even when
/// several workers report at once.
pub struct ProgressReporter {
    observers: Vec<Arc<dyn ProgressObserver>>,
    total: usize,
    pixels_per_update: usize,
    completed: AtomicUsize,
    last_emitted: Mutex<Option<usize>>,
    start: Instant,
}

impl ProgressReporter {
    /// Create a reporter for a scan over `total` pixels.
    ///
    /// With `updates == None` every processed pixel produces an event;
    /// otherwise an event fires every `total / updates` pixels.
    pub fn new(observers: Vec<Arc<dyn ProgressObserver>>, total: usize, updates: Option<usize>) -> Self {
        let pixels_per_update = match updates {
            Some(n) if n > 0 => (total / n).max(1),
            _ => 1,
        };
        Self {
            observers,
            total,
            pixels_per_update,
            completed: AtomicUsize::new(0),
            last_emitted: Mutex::new(None),
            start: Instant::now(),
        }
    }

    /// A reporter with no observers.
    pub fn silent(total: usize) -> Self {
        Self::new(Vec::new(), total, None)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    /// Fraction of pixels processed so far.
    pub fn fraction(&self) -> f64 {
        self.event(self.completed()).fraction()
    }

    /// Notify observers that the scan is starting.
    pub fn start(&self) {
        for observer in &self.observers {
            observer.on_start(self.total);
        }
    }

    pub fn completed_pixel(&self) {
        self.completed_pixels(1);
    }

    /// Advance the count by `count` pixels.
    ///
    /// The count and the event it triggers are published under one lock, so
    /// concurrent workers each produce their own event in count order.
    pub fn completed_pixels(&self, count: usize) {
        if count == 0 {
            return;
        }
        if self.observers.is_empty() {
            self.completed.fetch_add(count, Ordering::AcqRel);
            return;
        }
        let mut last = self.lock_last_emitted();
        let before = self.completed.fetch_add(count, Ordering::AcqRel);
        let after = before + count;
        if after / self.pixels_per_update > before / self.pixels_per_update {
            self.emit(&mut last, after);
        }
    }

    /// Force the count to the total, emit the final 1.0 event and notify
    /// completion.
    pub fn finish(&self) {
        if self.observers.is_empty() {
            self.completed.store(self.total, Ordering::Release);
            return;
        }
        let event = {
            let mut last = self.lock_last_emitted();
            self.completed.store(self.total, Ordering::Release);
            self.emit(&mut last, self.total)
        };
        for observer in &self.observers {
            observer.on_complete(&event);
        }
    }

    fn event(&self, completed: usize) -> ProgressEvent {
        ProgressEvent {
            completed: completed.min(self.total),
            total: self.total,
            elapsed: self.start.elapsed(),
        }
    }

    fn lock_last_emitted(&self) -> MutexGuard<'_, Option<usize>> {
        self.last_emitted.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, last: &mut Option<usize>, completed: usize) -> ProgressEvent {
        let event = self.event(completed);
        if last.map_or(true, |previous| event.completed > previous) {
            *last = Some(event.completed);
            for observer in &self.observers {
                observer.on_progress(&event);
            }
        }
        event
    }
}

impl std::fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("observers", &self.observers.len())
            .field("total", &self.total)
            .field("pixels_per_update", &self.pixels_per_update)
            .field("completed", &self.completed())
            .finish()
    }
}
