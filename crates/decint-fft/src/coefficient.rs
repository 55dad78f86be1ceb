//! Numeric element types accepted by the convolution API.

use std::ops::Mul;

use num_traits::Zero;

/// A numeric sequence element usable as convolution input or output.
///
/// Integral implementations round to the nearest integer when converting
/// back from the floating transform domain; floating implementations keep
/// the raw value.
pub trait Coefficient: Copy + PartialEq + Zero + Mul<Output = Self> + 'static {
    /// Widen to the transform element type.
    fn to_f64(self) -> f64;

    /// Narrow a transform-domain value back to this type.
    fn from_f64(value: f64) -> Self;
}

macro_rules! integral_coefficient {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_f64(value: f64) -> Self {
                value.round() as $t
            }
        }
    )*};
}

macro_rules! float_coefficient {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

integral_coefficient!(u16, u32, u64, i32, i64);
float_coefficient!(f32, f64);
