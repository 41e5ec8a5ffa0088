//! # Pretty ✂️ Clip
//!
//! Prettyclip maps out-of-gamut colors back into sRGB's gamut while
//! preserving their hue.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Colors computed in wide-gamut or perceptual color spaces, e.g., by
//! interpolation or when adjusting lightness, often end up with linear sRGB
//! coordinates outside the unit cube. Clamping each coordinate fixes that but
//! also shifts hue and lightness, sometimes drastically. Prettyclip instead
//! uses Björn Ottosson's [gamut
//! clipping](https://bottosson.github.io/posts/gamutclipping/) in the
//! perceptually uniform Oklab color space: It moves an out-of-gamut color
//! along a straight line of constant hue towards a gray *anchor* until it
//! meets the gamut boundary.
//!
//!   * [`to_srgb_gamut`] is the entry point for mapping colors into sRGB. It
//!     uses an adaptive anchor that keeps dark colors dark and light colors
//!     light, unless they are very saturated.
//!   * [`GamutClipper`] combines one of five [`ClipStrategy`]s with the
//!     adaptive strategies' alpha parameter. Its [`GamutClipper::map`] method
//!     also accepts coordinates in any of the [`ColorSpace`]s.
//!   * The [`gamut`] module exposes the underlying geometry, i.e., the cusp of
//!     a hue and the intersection of a line with the gamut boundary.
//!
//! ```
//! # use prettyclip::{in_gamut, to_srgb_gamut};
//! let too_red = [1.5, -0.2, 0.1];
//! assert!(!in_gamut(&too_red));
//!
//! let red = to_srgb_gamut(&too_red);
//! assert!(in_gamut(&red));
//! ```
//!
//! All functions are pure and total. Colors that are already in gamut are
//! returned unchanged, and gray or not-a-number coordinates are clamped
//! instead of clipped.
//!
//!
//! ## 2. Optional Features
//!
//! Prettyclip supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is disabled by default.
//!   - **`pyffi`** controls prettyclip's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod clipper;
mod core;
pub mod error;

pub mod gamut {
    //! The geometry of sRGB's gamut in Oklab.
    //!
    //! For a fixed hue, the gamut is a curved triangle in the lightness/chroma
    //! half-plane, spanned by black, white, and the hue's [`Cusp`]. The
    //! functions in this module locate the cusp and intersect lines with the
    //! triangle's boundary.
    //!
    //! ```
    //! # use prettyclip::gamut::{find_cusp, find_gamut_intersection, HueDirection};
    //! let hue = HueDirection::try_from_chroma(0.2, 0.1).unwrap();
    //! let cusp = find_cusp(hue);
    //! assert!(0.0 < cusp.lightness && cusp.lightness < 1.0);
    //!
    //! // From mid-gray towards a color with twice the cusp's chroma
    //! let t = find_gamut_intersection(hue, cusp.lightness, 2.0 * cusp.chroma, 0.5);
    //! assert!(0.0 < t && t < 1.0);
    //! ```
    pub use crate::core::{
        compute_max_saturation, find_cusp, find_gamut_intersection,
        find_gamut_intersection_with_cusp, BoundaryChannel, Cusp, HueDirection,
        ACHROMATIC_THRESHOLD,
    };
}

#[doc(hidden)]
pub use core::to_eq_bits;

pub use clipper::{gamut_clip_adaptive, to_srgb_gamut, GamutClipper};
pub use core::{
    clip, convert, in_gamut, linear_srgb_to_oklab, linear_srgb_to_srgb, oklab_to_linear_srgb,
    oklab_to_oklch, oklch_to_oklab, srgb_to_linear_srgb, ClipStrategy, ColorSpace,
    DEFAULT_ALPHA, SRGB_MAPPING_ALPHA,
};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
#[pyo3(name = "gamut")]
pub fn pygamut(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clipper::py::gamut_clip_adaptive, m)?)?;
    m.add_function(wrap_pyfunction!(clipper::py::in_gamut, m)?)?;
    m.add_function(wrap_pyfunction!(clipper::py::to_srgb_gamut, m)?)?;

    m.add_class::<ClipStrategy>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<GamutClipper>()?;

    m.add("DEFAULT_ALPHA", DEFAULT_ALPHA)?;
    m.add("SRGB_MAPPING_ALPHA", SRGB_MAPPING_ALPHA)?;

    Ok(())
}
