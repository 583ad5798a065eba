//! Scalar types a level-set field may be sampled with.

use crate::float_types::Real;
use std::fmt::Debug;

/// A field sample type.
///
/// Samples are converted to [`Real`] before any arithmetic so integer fields
/// interpolate the same way floating point fields do. [`LevelSetPixel::MAX`]
/// is the "no crossing found" sentinel for a field of this type.
pub trait LevelSetPixel: Copy + Debug + PartialOrd + Send + Sync + 'static {
    /// Maximum representable value of the type.
    const MAX: Self;

    fn to_real(self) -> Real;

    /// The sentinel distance for fields of this type, expressed as [`Real`].
    #[inline]
    fn large_value() -> Real {
        Self::MAX.to_real()
    }
}

macro_rules! impl_level_set_pixel {
    ($($t:ty),* $(,)?) => {
        $(
            impl LevelSetPixel for $t {
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn to_real(self) -> Real {
                    self as Real
                }
            }
        )*
    };
}

impl_level_set_pixel!(f32, f64, u8, u16, u32, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sentinels_match_type_max() {
        assert_eq!(u8::large_value(), 255.0);
        assert_eq!(i16::large_value(), 32767.0);
    }

    #[test]
    fn float_conversion_is_exact_for_small_values() {
        assert_eq!((-0.5_f32).to_real(), -0.5);
        assert_eq!(3_i32.to_real(), 3.0);
    }
}
