#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{NameKind, UnknownNameError};

/// The color spaces prettyclip converts between.
///
/// # sRGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) is the only RGB color space
/// supported by this crate, in its gamma-corrected and its linear form. For
/// both, in-gamut coordinates range from 0 to 1, inclusive. Gamut clipping
/// operates on linear sRGB, since the boundary of the RGB cube is easiest to
/// describe in linear light.
///
/// # Oklab and Oklch
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) are two coordinate
/// systems for the same perceptually uniform color space. Oklab uses Cartesian
/// coordinates L, a, b, whereas Oklch uses polar coordinates L, C, hº. Both are
/// unbounded. But well-formed coordinates have a lightness L in `0..=1` and, for
/// Oklch, a non-negative chroma C. The hue of an achromatic color may be
/// not-a-number.
///
/// Since hue and lightness are directly accessible in these spaces, the gamut
/// clipping algorithms express the geometry of sRGB's gamut in them: For a
/// fixed hue, the gamut forms a (slightly curved) triangle in the lightness and
/// chroma half-plane, spanned by black, white, and the hue's cusp.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettyclip.gamut")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Oklab,
    Oklch,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether coordinates are polar, i.e., Oklch.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Oklch)
    }

    /// Determine whether this color space is sRGB, with or without gamma.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is Oklab or Oklch.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// Oklab and Oklch are *unbounded* and hence can model any color. By
    /// contrast, RGB color spaces are *bounded*, with coordinates of in-gamut
    /// colors ranging `0..=1`.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb()
    }

    /// Get this color space's display name. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorSpace::*;

        let s = match *self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Oklab => "Oklab",
            Oklch => "Oklch",
        };

        f.write_str(s)
    }
}

impl core::str::FromStr for ColorSpace {
    type Err = UnknownNameError;

    /// Parse the color space's CSS name, i.e., `srgb`, `srgb-linear`, `oklab`,
    /// or `oklch`. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ColorSpace::*;

        match s.to_ascii_lowercase().as_str() {
            "srgb" => Ok(Srgb),
            "srgb-linear" | "linear-srgb" => Ok(LinearSrgb),
            "oklab" => Ok(Oklab),
            "oklch" => Ok(Oklch),
            _ => Err(UnknownNameError::new(NameKind::ColorSpace, s)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace::{self, *};

    #[test]
    fn test_properties() {
        assert!(Srgb.is_rgb() && Srgb.is_bounded(), "sRGB is a bounded RGB space");
        assert!(
            LinearSrgb.is_rgb() && !LinearSrgb.is_polar(),
            "linear sRGB is a Cartesian RGB space"
        );
        assert!(Oklab.is_ok() && !Oklab.is_bounded(), "Oklab is unbounded");
        assert!(Oklch.is_ok() && Oklch.is_polar(), "Oklch is polar");
    }

    #[test]
    fn test_parse() {
        for (name, space) in [("sRGB", Srgb), ("srgb-linear", LinearSrgb), ("OkLch", Oklch)] {
            assert_eq!(name.parse::<ColorSpace>(), Ok(space), "{} does not parse", name);
        }
        assert!(
            "display-p3".parse::<ColorSpace>().is_err(),
            "display-p3 is not supported"
        );
        assert_eq!(
            format!("{}", LinearSrgb),
            "linear sRGB",
            "wrong display name"
        );
    }
}
