pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;

    /// `self != other`
    fn not_eq(self, other: Self) -> bool;

    /// `self / other`, or `0.0` if `other` is too close to zero for the
    /// quotient to be meaningful.
    fn safe_div(self, other: Self) -> Self;
}

macro_rules! impl_float_ext {
    ( $ty:ty ) => {
        impl FloatExt for $ty {
            fn eq(self, other: Self) -> bool {
                (self - other).abs() < <$ty>::EPSILON
            }

            fn not_eq(self, other: Self) -> bool {
                (self - other).abs() >= <$ty>::EPSILON
            }

            fn safe_div(self, other: Self) -> Self {
                if other.abs() < <$ty>::EPSILON {
                    0.0
                } else {
                    self / other
                }
            }
        }
    };
}

impl_float_ext!(f32);
impl_float_ext!(f64);
