use crate::Float;

/// Helpers that differ between `f32` and `f64`.
pub(crate) trait FloatExt {
    /// The power of ten to scale by before rounding when testing for
    /// equality, i.e., the number of digits kept after the decimal point.
    const ROUNDING_FACTOR: Self;

    /// Determine the sign of this number as -1, 0, or +1.
    ///
    /// Unlike the standard library's `signum`, this method maps both zeros to
    /// zero. A color with exactly the pivot lightness keeps the pivot as its
    /// adaptive anchor.
    fn sign(self) -> Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[inline]
    fn sign(self) -> f64 {
        (0.0 < self) as u8 as f64 - (self < 0.0) as u8 as f64
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    #[inline]
    fn sign(self) -> f32 {
        (0.0 < self) as u8 as f32 - (self < 0.0) as u8 as f32
    }
}

/// Determine the largest of the three coordinates.
#[inline]
pub(crate) fn max3(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *coordinates;
    c1.max(c2).max(c3)
}

#[cfg(test)]
mod test {
    use super::{max3, FloatExt};
    use crate::Float;

    #[test]
    fn test_sign() {
        for (number, sign) in [(-0.25, -1.0), (0.0, 0.0), (-0.0, 0.0), (1e-20, 1.0)] {
            assert_eq!((number as Float).sign(), sign, "wrong sign for {}", number);
        }
    }

    #[test]
    fn test_max3() {
        assert_eq!(max3(&[0.1, -4.0, 0.3]), 0.3, "last coordinate is largest");
        assert_eq!(max3(&[-1.0, -2.0, -3.0]), -1.0, "first coordinate is largest");
    }
}
