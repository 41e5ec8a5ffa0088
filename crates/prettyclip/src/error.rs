//! Utility module with prettyclip's errors.
//!
//! Gamut clipping itself is total and never fails. Errors only arise at the
//! crate's edges, when validating a hue or parsing a name.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// An achromatic color where a hue is required.
///
/// A hue direction is the unit vector of a color's a/b coordinates in Oklab.
/// It is undefined for gray tones, i.e., colors whose chroma is zero or close
/// to zero. This error reports the chroma of such a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AchromaticError {
    pub chroma: Float,
}

impl AchromaticError {
    /// Create a new achromatic error.
    pub fn new(chroma: Float) -> Self {
        Self { chroma }
    }
}

impl core::fmt::Display for AchromaticError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "chroma {} is too small to determine a hue",
            self.chroma
        ))
    }
}

impl std::error::Error for AchromaticError {}

#[cfg(feature = "pyffi")]
impl From<AchromaticError> for PyErr {
    fn from(value: AchromaticError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of names parsed by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    /// The name of a [`ClipStrategy`](crate::ClipStrategy).
    ClipStrategy,
    /// The name of a [`ColorSpace`](crate::ColorSpace).
    ColorSpace,
}

/// An unknown name.
///
/// Both [`ClipStrategy`](crate::ClipStrategy) and
/// [`ColorSpace`](crate::ColorSpace) can be parsed from their names. This error
/// indicates a name that matches none of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownNameError {
    pub kind: NameKind,
    pub name: String,
}

impl UnknownNameError {
    /// Create a new unknown name error.
    pub fn new(kind: NameKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
        }
    }
}

impl core::fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (what, expected) = match self.kind {
            NameKind::ClipStrategy => (
                "clip strategy",
                "preserve-chroma, project-to-mid-gray, project-to-cusp, \
                adaptive-to-mid-gray, or adaptive-to-cusp",
            ),
            NameKind::ColorSpace => ("color space", "srgb, srgb-linear, oklab, or oklch"),
        };

        f.write_fmt(format_args!(
            "{} should be one of {} but is \"{}\"",
            what, expected, self.name
        ))
    }
}

impl std::error::Error for UnknownNameError {}

#[cfg(feature = "pyffi")]
impl From<UnknownNameError> for PyErr {
    fn from(value: UnknownNameError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{AchromaticError, NameKind, UnknownNameError};

    #[test]
    fn test_display() {
        assert_eq!(
            AchromaticError::new(0.0).to_string(),
            "chroma 0 is too small to determine a hue",
            "wrong message for achromatic error"
        );

        let error = UnknownNameError::new(NameKind::ColorSpace, "p3");
        assert_eq!(
            error.to_string(),
            "color space should be one of srgb, srgb-linear, oklab, or oklch but is \"p3\"",
            "wrong message for unknown name"
        );
    }
}
