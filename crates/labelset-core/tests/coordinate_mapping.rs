use labelset_core::image::ImageMetadata;
use labelset_core::spatial::{Direction, Index, Point, Spacing};
use proptest::prelude::*;

const D: usize = 3;

fn make_rotation(angle_x: f64, angle_y: f64, angle_z: f64) -> Direction<D> {
    let (sx, cx) = angle_x.sin_cos();
    let (sy, cy) = angle_y.sin_cos();
    let (sz, cz) = angle_z.sin_cos();

    let rz = nalgebra::SMatrix::<f64, 3, 3>::new(
        cz, -sz, 0.0,
        sz, cz, 0.0,
        0.0, 0.0, 1.0,
    );
    let ry = nalgebra::SMatrix::<f64, 3, 3>::new(
        cy, 0.0, sy,
        0.0, 1.0, 0.0,
        -sy, 0.0, cy,
    );
    let rx = nalgebra::SMatrix::<f64, 3, 3>::new(
        1.0, 0.0, 0.0,
        0.0, cx, -sx,
        0.0, sx, cx,
    );

    Direction(rx * ry * rz)
}

proptest! {
    #[test]
    fn test_index_roundtrip(
        ox in -100.0f64..100.0, oy in -100.0f64..100.0, oz in -100.0f64..100.0,
        sx in 0.1f64..5.0, sy in 0.1f64..5.0, sz in 0.1f64..5.0,
        ax in -3.14f64..3.14, ay in -3.14f64..3.14, az in -3.14f64..3.14,
        ix in -50i64..50, iy in -50i64..50, iz in -50i64..50
    ) {
        let direction = make_rotation(ax, ay, az);
        let metadata = ImageMetadata::new(
            Point::<D>::new([ox, oy, oz]),
            Spacing::<D>::new([sx, sy, sz]),
            direction,
        );
        let index = Index::new([ix, iy, iz]);

        let point = metadata.transform_index_to_physical_point(&index);
        let inverse = direction.inner().try_inverse().unwrap();
        let rotated = inverse * (point - *metadata.origin()).0;
        let recovered = [rotated[0] / sx, rotated[1] / sy, rotated[2] / sz];

        prop_assert!((recovered[0] - ix as f64).abs() < 1e-6, "X mismatch: {} vs {}", recovered[0], ix);
        prop_assert!((recovered[1] - iy as f64).abs() < 1e-6, "Y mismatch: {} vs {}", recovered[1], iy);
        prop_assert!((recovered[2] - iz as f64).abs() < 1e-6, "Z mismatch: {} vs {}", recovered[2], iz);
    }

    #[test]
    fn test_negative_spacing_mirrors_index(
        sx in 0.1f64..5.0, ix in -50i64..50, iy in -50i64..50
    ) {
        let metadata = ImageMetadata::<2>::default().with_spacing(Spacing::new([-sx, 1.0]));
        prop_assert!(metadata.validate().is_ok());
        let point = metadata.transform_index_to_physical_point(&Index::new([ix, iy]));

        prop_assert!((point[0] + ix as f64 * sx).abs() < 1e-9);
        prop_assert!((point[1] - iy as f64).abs() < 1e-9);
    }

    #[test]
    fn test_identity_direction_is_scaled_index(
        sx in 0.1f64..5.0, sy in 0.1f64..5.0,
        ix in 0i64..200, iy in 0i64..200
    ) {
        let metadata = ImageMetadata::<2>::default().with_spacing(Spacing::new([sx, sy]));
        let point = metadata.transform_index_to_physical_point(&Index::new([ix, iy]));

        prop_assert!((point[0] - ix as f64 * sx).abs() < 1e-9);
        prop_assert!((point[1] - iy as f64 * sy).abs() < 1e-9);
    }
}
