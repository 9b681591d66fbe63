//! Conversion of labeled images into point sets.
//!
//! [`LabelToPointSetFilter`] is the usual entry point; [`scan_labels`] and
//! [`scan_labels_parallel`] expose the underlying scan for callers that manage
//! their own output containers.

pub mod config;
pub mod error;
pub mod filter;
pub mod progress;
pub mod scan;

pub use config::ScanConfig;
pub use error::{FilterError, Result};
pub use filter::LabelToPointSetFilter;
pub use progress::{HistoryObserver, LoggingObserver, ProgressEvent, ProgressObserver, ProgressReporter};
pub use scan::{scan_labels, scan_labels_parallel, LabelScanner, ScanOutput};
