use std::sync::Arc;

use labelset_core::image::{ImageMetadata, ImageRegion, LabelImage};
use labelset_core::spatial::{Direction, Index, Point, Size, Spacing};
use labelset_filter::{
    scan_labels, FilterError, HistoryObserver, LabelToPointSetFilter, ProgressReporter, ScanConfig,
};

fn seeded_image() -> (LabelImage<u16, 2>, Vec<Index<2>>) {
    let metadata = ImageMetadata::default().with_spacing(Spacing::new([1.1, 0.87]));
    let mut image = LabelImage::new(Size::filled(128), metadata);
    let ids = vec![
        Index::new([0, 2]),
        Index::new([18, 19]),
        Index::new([25, 25]),
        Index::new([80, 45]),
    ];
    for (i, index) in ids.iter().enumerate() {
        image.set_pixel(index, (i + 1) as u16).unwrap();
    }
    (image, ids)
}

#[test]
fn test_four_labels_in_scan_order() {
    let (image, ids) = seeded_image();
    let history = HistoryObserver::new();

    let mut filter = LabelToPointSetFilter::new();
    filter.add_observer(Arc::new(history.clone()));
    filter.set_input(Arc::new(image.clone()));
    filter.update().unwrap();

    let point_set = filter.output();
    assert_eq!(point_set.number_of_points(), 4);
    assert_eq!(point_set.point_data(), &[1, 2, 3, 4]);

    for (k, (point, label)) in point_set.iter().enumerate() {
        let index = ids[(*label - 1) as usize];
        assert_eq!(index, ids[k]);

        let expected = Point::new([index[0] as f64 * 1.1, index[1] as f64 * 0.87]);
        let diff = point.euclidean_distance_to(&expected);
        assert!(diff < 1e-6, "Point with pixel value {} has incorrect position", label);
        assert_eq!(*point, image.transform_index_to_physical_point(&index));
    }

    let fractions = history.fractions();
    assert_eq!(fractions.len(), 128 * 128);
    assert_eq!(fractions.last(), Some(&1.0));
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_all_background_yields_empty_output() {
    let image = LabelImage::<u8, 3>::new(Size::new([7, 5, 3]), ImageMetadata::default());
    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(image));
    filter.update().unwrap();

    assert!(filter.output().is_empty());
    assert!(filter.output().point_data().is_empty());
    assert!(filter.output().is_up_to_date());
}

#[test]
fn test_all_foreground_yields_one_point_per_pixel() {
    let region = ImageRegion::new(Index::new([2, -1, 4]), Size::new([3, 4, 2]));
    let metadata = ImageMetadata::default()
        .with_origin(Point::new([1.0, 2.0, 3.0]))
        .with_spacing(Spacing::new([0.5, 0.25, 2.0]));
    let labels: Vec<i32> = (1..=24).collect();
    let image = LabelImage::from_vec(region, labels.clone(), metadata).unwrap();

    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(image.clone()));
    filter.update().unwrap();

    let point_set = filter.output();
    assert_eq!(point_set.number_of_points(), region.number_of_pixels());
    assert_eq!(point_set.point_data(), labels.as_slice());
    for (point, index) in point_set.points().iter().zip(region.iter()) {
        assert_eq!(*point, image.transform_index_to_physical_point(&index));
    }
}

#[test]
fn test_repeated_updates_are_identical() {
    let (image, _) = seeded_image();
    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(image));

    filter.update().unwrap();
    let first = filter.take_output();
    filter.update().unwrap();
    let second = filter.take_output();

    let first_bits: Vec<Vec<u64>> = first.points().iter().map(|p| p.to_vec().iter().map(|c| c.to_bits()).collect()).collect();
    let second_bits: Vec<Vec<u64>> = second.points().iter().map(|p| p.to_vec().iter().map(|c| c.to_bits()).collect()).collect();
    assert_eq!(first_bits, second_bits);
    assert_eq!(first.point_data(), second.point_data());
}

#[test]
fn test_parallel_filter_matches_sequential() {
    let (image, _) = seeded_image();
    let image = Arc::new(image);

    let mut sequential = LabelToPointSetFilter::new();
    sequential.set_input(Arc::clone(&image));
    sequential.update().unwrap();

    let history = HistoryObserver::new();
    let mut parallel = LabelToPointSetFilter::new()
        .with_config(ScanConfig::new().with_parallel().with_work_units(5));
    parallel.add_observer(Arc::new(history.clone()));
    parallel.set_input(image);
    parallel.update().unwrap();

    assert_eq!(parallel.output().points(), sequential.output().points());
    assert_eq!(parallel.output().point_data(), sequential.output().point_data());

    let fractions = history.fractions();
    assert_eq!(fractions.len(), 128 * 128);
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(fractions.last(), Some(&1.0));
}

#[test]
fn test_negative_spacing_mirrors_points() {
    let metadata = ImageMetadata::default().with_spacing(Spacing::new([-1.0, 1.0]));
    let mut image = LabelImage::<u16, 2>::new(Size::new([4, 4]), metadata);
    image.set_pixel(&Index::new([2, 1]), 7).unwrap();

    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(image));
    filter.update().unwrap();

    assert_eq!(filter.output().points(), &[Point::new([-2.0, 1.0])]);
    assert_eq!(filter.output().point_data(), &[7]);
}

#[test]
fn test_zero_spacing_is_rejected() {
    let metadata = ImageMetadata::default().with_spacing(Spacing::new([1.0, 0.0]));
    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(LabelImage::<u8, 2>::new(Size::new([2, 2]), metadata)));

    let err = filter.update().unwrap_err();
    assert!(err.is_invalid_input());
    assert!(!filter.output().is_up_to_date());
}

#[test]
fn test_throttled_progress_ends_at_one() {
    let (image, _) = seeded_image();
    let history = HistoryObserver::new();
    let mut filter = LabelToPointSetFilter::new()
        .with_config(ScanConfig::new().with_progress_updates(100));
    filter.add_observer(Arc::new(history.clone()));
    filter.set_input(Arc::new(image));
    filter.update().unwrap();

    let fractions = history.fractions();
    assert!(fractions.len() <= 101);
    assert_eq!(fractions.last(), Some(&1.0));
}

#[test]
fn test_rotated_direction_places_points() {
    let mut direction = Direction::<2>::identity();
    direction[(0, 0)] = 0.0;
    direction[(0, 1)] = -1.0;
    direction[(1, 0)] = 1.0;
    direction[(1, 1)] = 0.0;
    let metadata = ImageMetadata::new(Point::new([5.0, 5.0]), Spacing::new([2.0, 1.0]), direction);
    let mut image = LabelImage::<u8, 2>::new(Size::new([4, 4]), metadata);
    image.set_pixel(&Index::new([1, 3]), 9).unwrap();

    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(image));
    filter.update().unwrap();

    // (1, 3) scaled to (2, 3), rotated to (-3, 2), shifted by the origin
    let point = filter.output().point(0).copied().unwrap();
    assert!((point[0] - 2.0).abs() < 1e-12);
    assert!((point[1] - 7.0).abs() < 1e-12);
}

#[test]
fn test_missing_input_is_rejected() {
    let mut filter = LabelToPointSetFilter::<u16, 2>::new();
    let err = filter.update().unwrap_err();
    assert!(err.is_invalid_input());
    assert!(filter.output().is_empty());
}

#[test]
fn test_singular_direction_is_rejected() {
    let mut direction = Direction::<2>::identity();
    direction[(1, 1)] = 0.0;
    let metadata = ImageMetadata::default().with_direction(direction);
    let image = LabelImage::<u16, 2>::new(Size::new([2, 2]), metadata);

    let mut filter = LabelToPointSetFilter::new();
    filter.set_input(Arc::new(image));
    assert!(matches!(filter.update(), Err(FilterError::Image(_))));
}

#[test]
fn test_sub_region_scan() {
    let (image, _) = seeded_image();
    let region = ImageRegion::new(Index::new([10, 10]), Size::new([20, 20]));
    let view = image.view(region).unwrap();
    let reporter = ProgressReporter::silent(region.number_of_pixels());

    let output = scan_labels(&view, |i| image.transform_index_to_physical_point(i), &reporter);
    assert_eq!(output.labels(), &[2, 3]);
    assert_eq!(reporter.completed(), 400);
}

#[test]
fn test_region_outside_image_is_rejected() {
    let (image, _) = seeded_image();
    let region = ImageRegion::new(Index::new([100, 100]), Size::new([40, 10]));
    assert!(image.view(region).is_err());
}
