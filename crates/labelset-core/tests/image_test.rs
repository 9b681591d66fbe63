use std::f64::consts::PI;

use labelset_core::image::{ImageMetadata, ImageRegion, LabelImage};
use labelset_core::spatial::{Direction, Index, Point, Size, Spacing};
use nalgebra::{Rotation3, Vector3};

type Point3 = Point<3>;

#[test]
fn test_rotated_image_transform() {
    // Rotate 90 degrees around Z: X -> Y, Y -> -X, Z -> Z
    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), PI / 2.0);
    let direction = Direction(rotation.into_inner());
    let metadata = ImageMetadata::new(Point3::origin(), Spacing::new([2.0, 1.0, 1.0]), direction);

    let image = LabelImage::<u8, 3>::new(Size::new([4, 4, 4]), metadata);
    let point = image.transform_index_to_physical_point(&Index::new([1, 0, 0]));

    // Index (1, 0, 0) scales to (2, 0, 0) and rotates onto the Y axis
    assert!((point[0] - 0.0).abs() < 1e-9, "Expected x to be 0.0, got {}", point[0]);
    assert!((point[1] - 2.0).abs() < 1e-9, "Expected y to be 2.0, got {}", point[1]);
    assert!((point[2] - 0.0).abs() < 1e-9, "Expected z to be 0.0, got {}", point[2]);
}

#[test]
fn test_shifted_buffered_region_uses_absolute_index() {
    let region = ImageRegion::new(Index::new([5, -3]), Size::new([2, 2]));
    let metadata = ImageMetadata::<2>::default()
        .with_origin(Point::new([100.0, 0.0]))
        .with_spacing(Spacing::new([0.5, 0.25]));
    let image = LabelImage::from_vec(region, vec![1u32, 2, 3, 4], metadata).unwrap();

    let view = image.buffered_view();
    let first = view.iter().next().unwrap();
    assert_eq!(first, (Index::new([5, -3]), 1));

    let point = image.transform_index_to_physical_point(&first.0);
    assert!((point[0] - 102.5).abs() < 1e-12);
    assert!((point[1] + 0.75).abs() < 1e-12);
}

#[test]
fn test_slab_views_cover_view_in_order() {
    let metadata = ImageMetadata::<3>::default();
    let mut image = LabelImage::<i32, 3>::new(Size::new([3, 2, 5]), metadata);
    let region = *image.buffered_region();
    for (k, index) in region.iter().enumerate() {
        image.set_pixel(&index, k as i32).unwrap();
    }

    let view = image.buffered_view();
    let whole: Vec<_> = view.iter().collect();
    let slabbed: Vec<_> = view
        .split_slabs(4)
        .iter()
        .flat_map(|slab| slab.iter().collect::<Vec<_>>())
        .collect();

    assert_eq!(view.split_slabs(4).len(), 4);
    assert_eq!(whole, slabbed);
    assert_eq!(whole.iter().map(|(_, l)| *l).collect::<Vec<_>>(), (0..30).collect::<Vec<_>>());
}
