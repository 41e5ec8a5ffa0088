//! The geometry of sRGB's gamut boundary in Oklab.
//!
//! For a fixed hue, sRGB's gamut in the lightness/chroma half-plane of Oklab
//! is a curved triangle. Its corners are black, white, and the *cusp*, i.e.,
//! the most saturated color of that hue. This module locates the cusp. It does
//! so by first computing the maximum saturation `S = C / L`, at which one of
//! the linear sRGB channels drops below zero, and then scaling lightness until
//! the largest channel reaches one.
//!
//! The coefficients are from Björn Ottosson's [sRGB gamut clipping
//! article](https://bottosson.github.io/posts/gamutclipping/).

use super::conversion::{oklab_to_linear_srgb, OKLAB_TO_OKLMS, OKLMS_TO_LINEAR_SRGB};
use super::{is_achromatic, max3};
use crate::error::AchromaticError;
use crate::Float;

/// The chroma below which a color is considered achromatic.
///
/// Gamut clipping clamps colors with smaller chroma instead of clipping them
/// along a line of constant hue.
pub const ACHROMATIC_THRESHOLD: Float = 1e-5;

/// A hue direction.
///
/// A hue direction is the unit vector of a color's a/b coordinates in Oklab,
/// i.e., `a / C` and `b / C` for chroma `C`. It identifies a hue independent
/// of chroma. The gamut boundary computations require `a² + b² == 1` (within
/// floating point tolerance) but do not check that invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueDirection {
    pub a: Float,
    pub b: Float,
}

impl HueDirection {
    /// Create a new hue direction from the given, already normalized
    /// components.
    pub const fn new(a: Float, b: Float) -> Self {
        Self { a, b }
    }

    /// Create a new hue direction by normalizing the given a/b coordinates.
    ///
    /// # Errors
    ///
    /// This method returns an [`AchromaticError`] if the coordinates' chroma
    /// is below [`ACHROMATIC_THRESHOLD`] (or not-a-number) and hence too small
    /// to determine a hue.
    pub fn try_from_chroma(a: Float, b: Float) -> Result<Self, AchromaticError> {
        let chroma = a.hypot(b);
        if is_achromatic(chroma, ACHROMATIC_THRESHOLD) {
            return Err(AchromaticError::new(chroma));
        }

        Ok(Self::new(a / chroma, b / chroma))
    }

    /// Create a new hue direction for the given Oklch hue in degrees.
    pub fn from_degrees(hue: Float) -> Self {
        let (b, a) = hue.to_radians().sin_cos();
        Self::new(a, b)
    }

    /// Get the hue in degrees `0..360`.
    pub fn hue(&self) -> Float {
        let h = self.b.atan2(self.a).to_degrees();
        if h.is_sign_negative() {
            h + 360.0
        } else {
            h
        }
    }

    /// Get the rate of change of the cube roots of L, M, and S per unit of
    /// chroma along this hue.
    #[inline]
    pub(crate) fn cone_rates(&self) -> [Float; 3] {
        let [row1, row2, row3] = OKLAB_TO_OKLMS;
        [
            row1[1].mul_add(self.a, row1[2] * self.b),
            row2[1].mul_add(self.a, row2[2] * self.b),
            row3[1].mul_add(self.a, row3[2] * self.b),
        ]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// One of the three linear sRGB channels, considered as a boundary of the RGB
/// cube.
///
/// Increasing saturation for a given hue eventually drives one channel below
/// zero. Which channel that is depends on the hue and determines the
/// polynomial approximating maximum saturation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryChannel {
    Red,
    Green,
    Blue,
}

impl BoundaryChannel {
    /// All three channels in RGB order.
    pub const ALL: [BoundaryChannel; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Determine the channel that first goes negative when increasing
    /// saturation along the given hue.
    ///
    /// The two lines separating the three regions run through the hues of the
    /// primaries. Blue is the fallback.
    #[allow(clippy::excessive_precision)]
    pub fn first_to_clip(hue: HueDirection) -> Self {
        let HueDirection { a, b } = hue;

        if (-1.88170328 as Float).mul_add(a, -0.80936493 * b) > 1.0 {
            Self::Red
        } else if (1.81444104 as Float).mul_add(a, -1.19445276 * b) > 1.0 {
            Self::Green
        } else {
            Self::Blue
        }
    }

    /// Get the coefficients of the quadratic polynomial approximating the
    /// maximum saturation. They are for `1`, `a`, `b`, `a²`, and `ab`.
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const fn saturation_coefficients(&self) -> [Float; 5] {
        match *self {
            Self::Red   => [ 1.19086277,  1.76576728,  0.59662641,  0.75515197, 0.56771245 ],
            Self::Green => [ 0.73956515, -0.45954404,  0.08285427,  0.12541070, 0.14503204 ],
            Self::Blue  => [ 1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167 ],
        }
    }

    /// Compute this channel's value for the given LMS coordinates.
    #[inline]
    pub(crate) fn of(&self, lms: &[Float; 3]) -> Float {
        let [wl, wm, ws] = OKLMS_TO_LINEAR_SRGB[*self as usize];
        wl.mul_add(lms[0], wm.mul_add(lms[1], ws * lms[2]))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The LMS coordinates along a line through Oklab, with their first and
/// second derivatives with respect to the line's parameter.
///
/// Along any line through Oklab, the cube roots of L, M, and S change
/// linearly. Given their values and rates of change at a point, the cubes and
/// their derivatives follow directly. Halley's method needs all three.
#[derive(Debug)]
pub(crate) struct ConeCurve {
    pub value: [Float; 3],
    pub first: [Float; 3],
    pub second: [Float; 3],
}

impl ConeCurve {
    /// Create a new cone curve from the cube roots and their rates of change.
    pub fn new(roots: &[Float; 3], rates: &[Float; 3]) -> Self {
        let mut value = [0.0; 3];
        let mut first = [0.0; 3];
        let mut second = [0.0; 3];

        for index in 0..3 {
            let (root, rate) = (roots[index], rates[index]);
            value[index] = root * root * root;
            first[index] = 3.0 * rate * root * root;
            second[index] = 6.0 * rate * rate * root;
        }

        Self {
            value,
            first,
            second,
        }
    }

    /// Evaluate the channel along this curve, returning the value and its
    /// first and second derivatives.
    #[inline]
    pub fn channel(&self, channel: BoundaryChannel) -> [Float; 3] {
        [
            channel.of(&self.value),
            channel.of(&self.first),
            channel.of(&self.second),
        ]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the maximum saturation `S = C / L` for the given hue that still
/// fits into sRGB.
///
/// The result starts out as a polynomial approximation, which is then refined
/// with exactly one step of Halley's method. The error is below 1e-6, except
/// for some blue hues where the derivative of saturation with respect to hue
/// grows large.
///
/// The hue direction must be normalized.
#[must_use = "function returns new saturation and has no side effects"]
pub fn compute_max_saturation(hue: HueDirection) -> Float {
    let channel = BoundaryChannel::first_to_clip(hue);
    let [k0, k1, k2, k3, k4] = channel.saturation_coefficients();
    let HueDirection { a, b } = hue;

    let saturation = k4.mul_add(a * b, k3.mul_add(a * a, k2.mul_add(b, k1.mul_add(a, k0))));

    // Along the hue, the LMS cube roots are 1 + S * rate.
    let rates = hue.cone_rates();
    let roots = rates.map(|rate| saturation.mul_add(rate, 1.0));
    let [f, f1, f2] = ConeCurve::new(&roots, &rates).channel(channel);

    saturation - f * f1 / f1.mul_add(f1, -0.5 * f * f2)
}

/// The cusp of sRGB's gamut for some hue.
///
/// The cusp is the most saturated color of that hue that still fits into
/// sRGB, given by its Oklab lightness and chroma.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cusp {
    pub lightness: Float,
    pub chroma: Float,
}

impl Cusp {
    /// Get the cusp's saturation `S = C / L`.
    pub fn saturation(&self) -> Float {
        self.chroma / self.lightness
    }
}

/// Find the cusp of sRGB's gamut for the given hue.
///
/// The hue direction must be normalized. For such hue directions, the
/// maximally saturated color at lightness one always has a positive channel.
/// This function does not guard against the degenerate case of a hue whose
/// largest channel is zero or negative.
#[must_use = "function returns new cusp and has no side effects"]
pub fn find_cusp(hue: HueDirection) -> Cusp {
    let saturation = compute_max_saturation(hue);

    // Scale lightness so that the largest channel becomes one.
    let rgb = oklab_to_linear_srgb(&[1.0, saturation * hue.a, saturation * hue.b]);
    let lightness = max3(&rgb).recip().cbrt();

    Cusp {
        lightness,
        chroma: lightness * saturation,
    }
}
