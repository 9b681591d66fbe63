//! Pixel types that can be carried through a label scan.

use std::fmt::Debug;

use num_traits::NumCast;

/// A scalar label value.
///
/// The zero value (`Default::default()` for every primitive numeric type) is
/// the background label and is never turned into a point.
pub trait Label: Copy + PartialEq + Default + Send + Sync + Debug + NumCast + 'static {
    /// Whether this value marks background.
    fn is_background(&self) -> bool {
        *self == Self::default()
    }
}

macro_rules! impl_label {
    ($($t:ty),* $(,)?) => {
        $(impl Label for $t {})*
    };
}

impl_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
