//! Converts a small synthetic label image into a point set and prints it.
//!
//! Run with `RUST_LOG=debug` to see scan logging.

use std::sync::Arc;

use labelset_core::image::{ImageMetadata, LabelImage};
use labelset_core::spatial::{Index, Size, Spacing};
use labelset_filter::{LabelToPointSetFilter, LoggingObserver, ProgressEvent, ScanConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let metadata = ImageMetadata::default().with_spacing(Spacing::new([1.1, 0.87]));
    let mut image = LabelImage::<u16, 2>::new(Size::filled(128), metadata);

    let ids = [[0, 2], [18, 19], [25, 25], [80, 45]];
    for (i, id) in ids.iter().enumerate() {
        image.set_pixel(&Index::new(*id), (i + 1) as u16)?;
    }

    let mut filter = LabelToPointSetFilter::new()
        .with_config(ScanConfig::new().with_progress_updates(10));
    filter.add_observer(Arc::new(LoggingObserver::new(25.0)));
    filter.add_observer(Arc::new(|event: &ProgressEvent| print!(" {:.1}", event.fraction())));
    filter.set_input(Arc::new(image));
    filter.update()?;
    println!();

    let point_set = filter.output();
    println!("{} points", point_set.number_of_points());
    for (point, label) in point_set.iter() {
        println!("  label {:>3} at ({:.3}, {:.3})", label, point[0], point[1]);
    }

    Ok(())
}
