use super::{ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting that two floating point numbers agree at the
/// resolution of [`Float`](crate::Float).
///
/// Both numbers pass through [`to_eq_bits`](crate::to_eq_bits) before
/// comparison. With `f32`, that keeps four digits after the decimal point.
///
/// # Panics
///
/// This macro panics if the two numbers differ at that resolution.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (n1, n2) = ($f1, $f2);
        assert_eq!(
            $crate::to_eq_bits(n1),
            $crate::to_eq_bits(n2),
            "numbers are not close enough:\n{:?}\n{:?}",
            n1,
            n2
        );
    };
}

/// Test macro for asserting that two coordinate arrays differ by no more than
/// the given tolerance in every coordinate.
///
/// Gamut clipping refines its results with a fixed number of Halley steps and
/// hence is only accurate to a known tolerance. Comparing its results by bits
/// is too strict, so this macro compares the absolute difference instead.
///
/// # Panics
///
/// This macro panics if any coordinate differs by more than the tolerance or
/// is not-a-number.
#[cfg(test)]
macro_rules! assert_within {
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance): (&[$crate::Float; 3], &[$crate::Float; 3], $crate::Float) =
            ($cs1, $cs2, $tolerance);
        for index in 0..3 {
            let difference = (cs1[index] - cs2[index]).abs();
            assert!(
                difference <= tolerance,
                "coordinates differ by more than {}:\n{:?}\n{:?}",
                tolerance,
                cs1,
                cs2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_within;

/// Test macro for asserting that two coordinate arrays in the same color
/// space denote the same color.
///
/// The conversion tests use this macro. It compares coordinates after
/// [`to_eq_coordinates`], which also treats Oklch hues modulo 360.
///
/// # Panics
///
/// This macro panics if any normalized coordinate differs.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        assert_eq!(
            $crate::core::to_eq_coordinates(space, cs1),
            $crate::core::to_eq_coordinates(space, cs2),
            "coordinates in {} differ:\n{:?}\n{:?}",
            space,
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Make the coordinates well-formed.
///
/// Not-a-number becomes zero in every color space. An Oklch color without hue
/// also loses its chroma. Oklab and Oklch lightness is clamped to `0..=1` and
/// Oklch chroma is kept non-negative. Linear sRGB coordinates only lose their
/// not-a-numbers, so that gamut clipping's fallback can clamp them.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
        if space.is_polar() {
            c2 = 0.0;
        }
    }

    if space.is_ok() {
        c1 = c1.clamp(0.0, 1.0);
        if space.is_polar() {
            c2 = c2.max(0.0);
        }
    }

    [c1, c2, c3]
}

/// Turn the coordinates into bit strings for equality testing.
#[cfg(test)]
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [c1, c2, mut c3] = normalize(space, coordinates);

    // Hues are angles.
    if space.is_polar() {
        c3 = c3.rem_euclid(360.0) / 360.0;
    }

    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Turn the floating point number into a bit string for equality testing.
///
/// Not-a-number compares equal to zero, negative zero equal to positive zero,
/// and precision is reduced by a factor that depends on [`Float`]. This
/// function is public for the
/// [`assert_close_enough`](crate::assert_close_enough) macro.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let f = if f.is_nan() { 0.0 } else { f };
    let rounded = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Adding zero turns negative zero into positive zero.
    (rounded + 0.0).to_bits()
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the chroma is gray-ish.
///
/// This function treats chroma as gray-ish if it is not-a-number or smaller
/// than the given threshold.
#[inline]
pub(crate) fn is_achromatic(chroma: Float, threshold: Float) -> bool {
    chroma.is_nan() || chroma < threshold
}
