//! Conversion of selected values to the `f64` the aggregates work in.

/// A numeric value the aggregates can fold.
///
/// Unlike `Into<f64>` this covers the 64 and 128 bit integers as well. Those
/// round to the nearest representable `f64` once they exceed 2^53.
pub trait AsF64 {
    fn as_f64(self) -> f64;
}

macro_rules! as_f64 {
    ($($t:ty),*) => {
        $(
            impl AsF64 for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_are_exact() {
        assert_eq!(7u8.as_f64(), 7.0);
        assert_eq!((-3i16).as_f64(), -3.0);
        assert_eq!(0.5f32.as_f64(), 0.5);
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(i64::MIN.as_f64(), -9_223_372_036_854_775_808.0);
        assert_eq!((1u64 << 53).as_f64(), 9_007_199_254_740_992.0);
        assert_eq!(usize::MAX.as_f64(), usize::MAX as f64);
    }
}
