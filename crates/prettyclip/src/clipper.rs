#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    convert, in_gamut, to_gamut, ClipStrategy, ColorSpace, DEFAULT_ALPHA, SRGB_MAPPING_ALPHA,
};
use crate::Float;

/// A gamut clipper.
///
/// A gamut clipper combines a [`ClipStrategy`] with the alpha parameter of
/// the adaptive strategies. It is an immutable value. [`GamutClipper::new`]
/// uses [`DEFAULT_ALPHA`] and [`GamutClipper::with_alpha`] returns an updated
/// copy. The default clipper is the one used for mapping into sRGB, i.e.,
/// [`ClipStrategy::AdaptiveToMidGray`] with [`SRGB_MAPPING_ALPHA`].
///
/// ```
/// # use prettyclip::{ClipStrategy, ColorSpace, GamutClipper};
/// let clipper = GamutClipper::default();
/// assert_eq!(clipper.strategy(), ClipStrategy::AdaptiveToMidGray);
///
/// let pink = clipper.map(ColorSpace::Srgb, &[1.2, 0.3, 0.7]);
/// assert!(pink.iter().all(|c| (0.0..=1.0).contains(c)));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "prettyclip.gamut"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GamutClipper {
    strategy: ClipStrategy,
    alpha: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl GamutClipper {
    /// Create a new gamut clipper with the given strategy and the default
    /// alpha.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(strategy: ClipStrategy) -> Self {
        Self {
            strategy,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Create a new gamut clipper with the given strategy and the default
    /// alpha.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(strategy: ClipStrategy) -> Self {
        Self {
            strategy,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Create a copy of this gamut clipper with the given alpha.
    ///
    /// Alpha only affects the adaptive strategies. Larger values pull the
    /// anchor towards mid-gray (or the cusp's lightness) for saturated colors.
    #[must_use = "method returns a new gamut clipper and does not mutate the original"]
    pub const fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            strategy: self.strategy,
            alpha,
        }
    }

    /// Get this gamut clipper's strategy.
    pub const fn strategy(&self) -> ClipStrategy {
        self.strategy
    }

    /// Get this gamut clipper's alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Clip the linear sRGB coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "clip")]
    pub fn py_clip(&self, coordinates: [Float; 3]) -> [Float; 3] {
        self.clip(&coordinates)
    }

    /// Map the coordinates in the given color space into sRGB's gamut. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "map")]
    pub fn py_map(&self, space: ColorSpace, coordinates: [Float; 3]) -> [Float; 3] {
        self.map(space, &coordinates)
    }

    /// Convert this gamut clipper to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl GamutClipper {
    /// Clip the linear sRGB coordinates into gamut.
    ///
    /// In-gamut coordinates are returned unchanged. For all other
    /// coordinates, including not-a-number, the result is in gamut. <i
    /// class=rust-only>Rust only!</i>
    #[must_use = "method returns new color coordinates and does not mutate original value"]
    pub fn clip(&self, coordinates: &[Float; 3]) -> [Float; 3] {
        to_gamut(self.strategy, self.alpha, coordinates)
    }

    /// Map the coordinates in the given color space into sRGB's gamut.
    ///
    /// The result uses the same color space as the input. sRGB coordinates
    /// are linearized before clipping, and Oklab/Oklch coordinates are
    /// converted to linear sRGB. In-gamut sRGB coordinates are returned
    /// unchanged. <i class=rust-only>Rust only!</i>
    #[must_use = "method returns new color coordinates and does not mutate original value"]
    pub fn map(&self, space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
        if space.is_rgb() && in_gamut(coordinates) {
            return *coordinates;
        }

        let linear = convert(space, ColorSpace::LinearSrgb, coordinates);
        convert(ColorSpace::LinearSrgb, space, &self.clip(&linear))
    }
}

impl Default for GamutClipper {
    fn default() -> Self {
        Self::new(ClipStrategy::AdaptiveToMidGray).with_alpha(SRGB_MAPPING_ALPHA)
    }
}

// ====================================================================================================================

/// Clip the linear sRGB coordinates with an adaptive anchor pivoting around
/// mid-gray.
///
/// Alpha controls how strongly chroma pulls the anchor towards a lightness
/// of 0.5. In-gamut coordinates are returned unchanged.
///
/// ```
/// # use prettyclip::{gamut_clip_adaptive, DEFAULT_ALPHA};
/// let red = gamut_clip_adaptive(&[1.5, -0.2, 0.1], DEFAULT_ALPHA);
/// assert!(red.iter().all(|c| (0.0..=1.0).contains(c)));
///
/// let gray = [0.5, 0.5, 0.5];
/// assert_eq!(gamut_clip_adaptive(&gray, DEFAULT_ALPHA), gray);
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn gamut_clip_adaptive(coordinates: &[Float; 3], alpha: Float) -> [Float; 3] {
    to_gamut(ClipStrategy::AdaptiveToMidGray, alpha, coordinates)
}

/// Map the linear sRGB coordinates into gamut.
///
/// This function is [`gamut_clip_adaptive`] with [`SRGB_MAPPING_ALPHA`]. It
/// is the same as clipping with the default [`GamutClipper`].
///
/// ```
/// # use prettyclip::to_srgb_gamut;
/// let [r, g, b] = to_srgb_gamut(&[1.5, -0.2, 0.1]);
/// assert!((r - 0.8495).abs() < 1e-3);
/// assert!(g.abs() < 1e-3);
/// assert!((b - 0.1387).abs() < 1e-3);
/// ```
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn to_srgb_gamut(coordinates: &[Float; 3]) -> [Float; 3] {
    gamut_clip_adaptive(coordinates, SRGB_MAPPING_ALPHA)
}

#[cfg(feature = "pyffi")]
pub(crate) mod py {
    use pyo3::prelude::*;

    use crate::Float;

    /// Clip the linear sRGB coordinates with an adaptive anchor. <i
    /// class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(name = "gamut_clip_adaptive", signature = (coordinates, alpha=crate::DEFAULT_ALPHA))]
    pub fn gamut_clip_adaptive(coordinates: [Float; 3], alpha: Float) -> [Float; 3] {
        super::gamut_clip_adaptive(&coordinates, alpha)
    }

    /// Map the linear sRGB coordinates into gamut. <i
    /// class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(name = "to_srgb_gamut")]
    pub fn to_srgb_gamut(coordinates: [Float; 3]) -> [Float; 3] {
        super::to_srgb_gamut(&coordinates)
    }

    /// Determine whether the linear sRGB coordinates are in gamut. <i
    /// class=python-only>Python only!</i>
    #[pyfunction]
    #[pyo3(name = "in_gamut")]
    pub fn in_gamut(coordinates: [Float; 3]) -> bool {
        crate::in_gamut(&coordinates)
    }
}
