use super::{normalize, ColorSpace};
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = *matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearize gamma-corrected sRGB coordinates.
///
/// Negative coordinates are mirrored through the origin, so that
/// out-of-gamut colors survive a round trip.
pub fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Apply sRGB's gamma to linear sRGB coordinates.
///
/// Like [`srgb_to_linear_srgb`], this function is odd-symmetric and accepts
/// coordinates outside the unit range.
pub fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/#converting-from-linear-srgb-to-oklab
//
// These are the direct linear sRGB to Oklab matrices, without a detour through
// XYZ, with the published coefficients. The gamut boundary computations use the
// very same coefficients, so that the boundary lines up with the conversions.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// The matrix from Oklab to the cube roots of LMS.
///
/// Its first column is all ones. The other two columns are the coefficients
/// that turn a hue direction into a per-cone rate of change.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

/// The matrix from LMS to linear sRGB.
///
/// Each row yields one of red, green, and blue and thereby also describes one
/// pair of faces of the RGB cube.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const OKLMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

/// Convert coordinates for linear sRGB to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise cube root.
///
/// Since the cube root preserves the sign, the conversion is well-defined for
/// out-of-gamut colors with negative coordinates.
pub fn linear_srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert coordinates for Oklab to linear sRGB. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
///
/// The result is *not* clipped. Keeping it within the unit cube is the job of
/// gamut clipping.
pub fn oklab_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_LINEAR_SRGB, &[l.powi(3), m.powi(3), s.powi(3)])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
pub fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        [L, 0.0, 0.0]
    } else {
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }
}

const EPSILON: Float = 0.0002;

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion.
///
/// Colors with a/b coordinates close to zero are achromatic and have
/// not-a-number as hue.
#[allow(non_snake_case)]
pub fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let a_m = a.abs();
    if a_m < EPSILON && b.abs() < EPSILON {
        return [L, 0.0, Float::NAN];
    }

    // per herbie 2.1
    let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

    let h = b.atan2(a).to_degrees();
    let h = if h.is_sign_negative() { h + 360.0 } else { h };

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates between color spaces.
///
/// Not-a-number coordinates become zero first. Conversions between sRGB and
/// its linear form, or between Oklab and Oklch, take one hop. All others pass
/// through linear sRGB and Oklab. The result may well be out of gamut.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn convert(from_space: ColorSpace, to_space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    // Same space: only normalize.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // One hop within the RGB or the Oklab branch
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return srgb_to_linear_srgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_srgb_to_srgb(&coordinates),
        (Oklch, Oklab) => return oklch_to_oklab(&coordinates),
        (Oklab, Oklch) => return oklab_to_oklch(&coordinates),
        _ => (),
    };

    // Across branches: first to Oklab...
    let intermediate = match from_space {
        Srgb => linear_srgb_to_oklab(&srgb_to_linear_srgb(&coordinates)),
        LinearSrgb => linear_srgb_to_oklab(&coordinates),
        Oklab => coordinates,
        Oklch => oklch_to_oklab(&coordinates),
    };

    // ...then on to the target.
    match to_space {
        Srgb => linear_srgb_to_srgb(&oklab_to_linear_srgb(&intermediate)),
        LinearSrgb => oklab_to_linear_srgb(&intermediate),
        Oklab => intermediate,
        Oklch => oklab_to_oklch(&intermediate),
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, assert_within, ColorSpace::*};
    use crate::Float;

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        oklab: [Float; 3],
        oklch: [Float; 3],
    }

    const RED: Representations = Representations {
        srgb: [1.0, 0.0, 0.0],
        linear_srgb: [1.0, 0.0, 0.0],
        oklab: [0.6279553606145516, 0.22486306106597398, 0.1258462985307351],
        oklch: [0.6279553606145516, 0.2576833077361567, 29.233885192342633],
    };

    const GREEN: Representations = Representations {
        srgb: [0.0, 1.0, 0.0],
        linear_srgb: [0.0, 1.0, 0.0],
        oklab: [0.8664396115356694, -0.23388757418790818, 0.17949847989672985],
        oklch: [0.8664396115356694, 0.2948272403370166, 142.49533888780996],
    };

    const BLUE: Representations = Representations {
        srgb: [0.0, 0.0, 1.0],
        linear_srgb: [0.0, 0.0, 1.0],
        oklab: [0.4520137183853429, -0.03245698416876397, -0.3115281476783751],
        oklch: [0.4520137183853429, 0.31321437166460114, 264.052020638055],
    };

    const LAVENDER: Representations = Representations {
        srgb: [0.7353569830524495, 0.5370987304831942, 0.8808250210902997],
        linear_srgb: [0.5, 0.25, 0.75],
        oklab: [0.7116810623931232, 0.08614059790136841, -0.10325681519418384],
        oklch: [0.7116810623931232, 0.13446996873224545, 309.8360950891227],
    };

    #[test]
    fn test_conversions() {
        for &color in [&RED, &GREEN, &BLUE, &LAVENDER].iter() {
            let linear_srgb = srgb_to_linear_srgb(&color.srgb);
            assert_same_coordinates!(LinearSrgb, &linear_srgb, &color.linear_srgb);

            let srgb = linear_srgb_to_srgb(&linear_srgb);
            assert_same_coordinates!(Srgb, &srgb, &color.srgb);

            let oklab = linear_srgb_to_oklab(&color.linear_srgb);
            assert_same_coordinates!(Oklab, &oklab, &color.oklab);

            let also_linear_srgb = oklab_to_linear_srgb(&oklab);
            assert_same_coordinates!(LinearSrgb, &also_linear_srgb, &color.linear_srgb);

            let oklch = oklab_to_oklch(&oklab);
            assert_same_coordinates!(Oklch, &oklch, &color.oklch);

            let also_oklab = oklch_to_oklab(&oklch);
            assert_same_coordinates!(Oklab, &also_oklab, &oklab);

            assert_same_coordinates!(Oklch, &convert(Srgb, Oklch, &color.srgb), &color.oklch);
            assert_same_coordinates!(Srgb, &convert(Oklab, Srgb, &color.oklab), &color.srgb);
        }
    }

    #[test]
    fn test_out_of_gamut() {
        // The transfer functions and the cube root preserve sign.
        let srgb = linear_srgb_to_srgb(&[-0.5, 0.002, 1.0]);
        assert_same_coordinates!(Srgb, &srgb, &[-0.7353569830524495, 0.02584, 1.0]);

        let oklab = linear_srgb_to_oklab(&[1.5, -0.2, 0.1]);
        let rgb = oklab_to_linear_srgb(&oklab);
        assert_same_coordinates!(LinearSrgb, &rgb, &[1.5, -0.2, 0.1]);
    }

    #[test]
    fn test_round_trip_of_primaries_and_secondaries() {
        for rgb in [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
        ] {
            let oklab = linear_srgb_to_oklab(&rgb);
            assert_within!(&oklab_to_linear_srgb(&oklab), &rgb, 1e-5);
        }

        // The white point maps to Oklab's neutral axis and back.
        let [l, a, b] = linear_srgb_to_oklab(&[1.0, 1.0, 1.0]);
        assert!((l - 1.0).abs() < 1e-4, "white has lightness {}", l);
        assert!(a.hypot(b) < 1e-4, "white has chroma {}", a.hypot(b));
        assert_within!(&oklab_to_linear_srgb(&[1.0, 0.0, 0.0]), &[1.0, 1.0, 1.0], 1e-4);
    }

    #[test]
    fn test_achromatic_hue() {
        let [l, c, h] = oklab_to_oklch(&linear_srgb_to_oklab(&[0.2, 0.2, 0.2]));
        assert!(0.0 < l && l < 1.0, "gray has lightness {}", l);
        assert_eq!(c, 0.0, "gray has chroma");
        assert!(h.is_nan(), "gray has hue {}", h);

        assert_eq!(
            oklch_to_oklab(&[0.5, 0.3, Float::NAN]),
            [0.5, 0.0, 0.0],
            "color without hue has no chroma"
        );
    }
}
