#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::boundary::{BoundaryChannel, ConeCurve};
use super::{
    find_cusp, is_achromatic, linear_srgb_to_oklab, normalize, oklab_to_linear_srgb, ColorSpace,
    Cusp, FloatExt, HueDirection, ACHROMATIC_THRESHOLD,
};
use crate::error::{NameKind, UnknownNameError};
use crate::Float;

/// Determine whether the linear sRGB coordinates are in gamut.
pub fn in_gamut(coordinates: &[Float; 3]) -> bool {
    coordinates.iter().all(|c| 0.0 <= *c && *c <= 1.0)
}

/// Clip the linear sRGB coordinates to the gamut by clamping each coordinate.
pub fn clip(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

// ====================================================================================================================

/// Find the intersection of a line with sRGB's gamut boundary.
///
/// For a fixed hue, the line runs through the lightness/chroma half-plane from
/// the anchor `(L0, 0)` to the target `(L1, C1)`:
///
/// ```text
/// L = L0 * (1 - t) + t * L1
/// C = t * C1
/// ```
///
/// This function returns the parameter `t` where the line leaves the gamut.
/// For targets outside the gamut, `t` is in `0..=1`. The hue direction must be
/// normalized.
#[must_use = "function returns new line parameter and has no side effects"]
pub fn find_gamut_intersection(
    hue: HueDirection,
    lightness: Float,
    chroma: Float,
    anchor: Float,
) -> Float {
    find_gamut_intersection_with_cusp(hue, lightness, chroma, anchor, find_cusp(hue))
}

/// Find the intersection of a line with sRGB's gamut boundary, reusing the
/// hue's cusp.
///
/// This function is [`find_gamut_intersection`] for callers that already know
/// the hue's cusp, e.g., because the anchor depends on it.
///
/// Below the line from the anchor to the cusp, the gamut boundary is the
/// straight edge from black to the cusp and the intersection has a closed
/// form. Above that line, the boundary is curved. The line is first
/// intersected with the straight edge from the cusp to white and then refined
/// with one step of Halley's method against each of the three RGB channels.
#[allow(non_snake_case)]
#[must_use = "function returns new line parameter and has no side effects"]
pub fn find_gamut_intersection_with_cusp(
    hue: HueDirection,
    L1: Float,
    C1: Float,
    L0: Float,
    cusp: Cusp,
) -> Float {
    let Cusp {
        lightness: L_cusp,
        chroma: C_cusp,
    } = cusp;

    if (L1 - L0).mul_add(C_cusp, -(L_cusp - L0) * C1) <= 0.0 {
        // Lower half
        return C_cusp * L0 / C1.mul_add(L_cusp, C_cusp * (L0 - L1));
    }

    // Upper half: First intersect with the triangle's upper edge.
    let t = C_cusp * (L0 - 1.0) / C1.mul_add(L_cusp - 1.0, C_cusp * (L0 - L1));

    // Then take one Halley step towards the actual boundary.
    let dL = L1 - L0;
    let dC = C1;
    let k = hue.cone_rates();
    let rates = k.map(|k| dC.mul_add(k, dL));

    let L = L0.mul_add(1.0 - t, t * L1);
    let C = t * C1;
    let roots = k.map(|k| C.mul_add(k, L));
    let curve = ConeCurve::new(&roots, &rates);

    // The boundary surfaces are r = 1, g = 1, and b = 1. A channel moving
    // away from its surface does not bound the step.
    let step = BoundaryChannel::ALL
        .iter()
        .map(|&channel| {
            let [value, first, second] = curve.channel(channel);
            let value = value - 1.0;
            let u = first / first.mul_add(first, -0.5 * value * second);
            if 0.0 <= u {
                -value * u
            } else {
                Float::INFINITY
            }
        })
        .fold(Float::INFINITY, Float::min);

    t + step
}

// ====================================================================================================================

/// The default strength of chroma's pull on the adaptive anchors.
pub const DEFAULT_ALPHA: Float = 0.05;

/// The strength of chroma's pull on the adaptive anchor used by
/// [`to_srgb_gamut`](crate::to_srgb_gamut) and the default
/// [`GamutClipper`](crate::GamutClipper).
pub const SRGB_MAPPING_ALPHA: Float = 0.5;

/// The strategy for clipping out-of-gamut colors.
///
/// All strategies preserve hue and move the color along a straight line in
/// the lightness/chroma half-plane towards an *anchor*, a gray of some
/// lightness, until the line meets the gamut boundary. They differ in their
/// choice of anchor:
///
///   * `PreserveChroma` uses the color's own lightness, clamped to `0..=1`.
///     It keeps as much chroma as possible but may change lightness a lot for
///     very saturated colors.
///   * `ProjectToMidGray` always uses a lightness of 0.5.
///   * `ProjectToCusp` uses the lightness of the hue's cusp.
///   * `AdaptiveToMidGray` picks an anchor between 0.5 and the color's own
///     lightness. Dark colors get anchors close to black and light colors get
///     anchors close to white, with chroma pulling the anchor back towards
///     0.5. The alpha parameter controls that pull.
///   * `AdaptiveToCusp` is the same as `AdaptiveToMidGray`, but pivots around
///     the lightness of the hue's cusp instead of 0.5.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyclip.gamut")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipStrategy {
    PreserveChroma,
    ProjectToMidGray,
    ProjectToCusp,
    #[default]
    AdaptiveToMidGray,
    AdaptiveToCusp,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ClipStrategy {
    /// Determine whether this strategy uses an adaptive anchor, i.e., depends
    /// on the alpha parameter.
    pub const fn is_adaptive(&self) -> bool {
        matches!(*self, Self::AdaptiveToMidGray | Self::AdaptiveToCusp)
    }

    /// Get this strategy's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::PreserveChroma => "preserve-chroma",
            Self::ProjectToMidGray => "project-to-mid-gray",
            Self::ProjectToCusp => "project-to-cusp",
            Self::AdaptiveToMidGray => "adaptive-to-mid-gray",
            Self::AdaptiveToCusp => "adaptive-to-cusp",
        }
    }

    /// Create a human-readable representation for this strategy. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_owned()
    }
}

impl core::fmt::Display for ClipStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for ClipStrategy {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ClipStrategy::*;

        [
            PreserveChroma,
            ProjectToMidGray,
            ProjectToCusp,
            AdaptiveToMidGray,
            AdaptiveToCusp,
        ]
        .into_iter()
        .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| UnknownNameError::new(NameKind::ClipStrategy, s))
    }
}

/// Compute the adaptive anchor pivoting around a lightness of 0.5.
#[allow(non_snake_case)]
#[inline]
fn adaptive_mid_gray_anchor(L: Float, C: Float, alpha: Float) -> Float {
    let Ld = L - 0.5;
    let e1 = alpha.mul_add(C, 0.5 + Ld.abs());
    0.5 * Ld.sign().mul_add(e1 - e1.mul_add(e1, -2.0 * Ld.abs()).sqrt(), 1.0)
}

/// Compute the adaptive anchor pivoting around the cusp's lightness.
#[allow(non_snake_case)]
#[inline]
fn adaptive_cusp_anchor(L: Float, C: Float, alpha: Float, cusp: &Cusp) -> Float {
    let Ld = L - cusp.lightness;
    let k = 2.0
        * if 0.0 < Ld {
            1.0 - cusp.lightness
        } else {
            cusp.lightness
        };

    let e1 = k.mul_add(0.5, Ld.abs() + alpha * C / k);
    (0.5 * Ld.sign()).mul_add(
        e1 - e1.mul_add(e1, -2.0 * k * Ld.abs()).sqrt(),
        cusp.lightness,
    )
}

/// Clip the out-of-gamut linear sRGB coordinates along a line of constant hue
/// towards the strategy's anchor.
///
/// The result is *not* clamped and may exceed the unit cube by the remaining
/// error of the Halley step, about 2e-4. This function returns `None` for
/// gray-ish colors, with chroma below [`ACHROMATIC_THRESHOLD`], and for colors
/// whose clipped coordinates are not finite.
#[allow(non_snake_case)]
fn clip_along_hue(strategy: ClipStrategy, alpha: Float, rgb: &[Float; 3]) -> Option<[Float; 3]> {
    use ClipStrategy::*;

    let [L, a, b] = linear_srgb_to_oklab(rgb);
    let C = a.hypot(b);
    if is_achromatic(C, ACHROMATIC_THRESHOLD) {
        return None;
    }

    let hue = HueDirection::new(a / C, b / C);
    let cusp = find_cusp(hue);

    let L0 = match strategy {
        PreserveChroma => L.clamp(0.0, 1.0),
        ProjectToMidGray => 0.5,
        ProjectToCusp => cusp.lightness,
        AdaptiveToMidGray => adaptive_mid_gray_anchor(L, C, alpha),
        AdaptiveToCusp => adaptive_cusp_anchor(L, C, alpha, &cusp),
    };

    let t = find_gamut_intersection_with_cusp(hue, L, C, L0, cusp);
    let L_clipped = L0.mul_add(1.0 - t, t * L);
    let C_clipped = t * C;

    let clipped = oklab_to_linear_srgb(&[L_clipped, C_clipped * hue.a, C_clipped * hue.b]);
    clipped.iter().all(|c| c.is_finite()).then_some(clipped)
}

/// Map the linear sRGB coordinates into gamut with the given strategy.
///
/// In-gamut coordinates are returned unchanged. Out-of-gamut coordinates are
/// clipped along a line of constant hue towards the strategy's anchor.
///
/// Gray-ish colors, with chroma below [`ACHROMATIC_THRESHOLD`], have no hue
/// and are clamped. So are colors for which clipping yields non-finite
/// coordinates. Finally, since one Halley step only gets within about 2e-4 of
/// the boundary, the result is clamped as well. Hence the result always is in
/// gamut.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_gamut(strategy: ClipStrategy, alpha: Float, rgb: &[Float; 3]) -> [Float; 3] {
    if in_gamut(rgb) {
        return *rgb;
    }

    let clipped = clip_along_hue(strategy, alpha, rgb)
        .unwrap_or_else(|| normalize(ColorSpace::LinearSrgb, rgb));
    clip(&clipped)
}
