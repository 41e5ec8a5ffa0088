mod boundary;
mod conversion;
mod equality;
mod gamut;
mod math;
mod space;

// boundary
pub use boundary::{
    compute_max_saturation, find_cusp, BoundaryChannel, Cusp, HueDirection, ACHROMATIC_THRESHOLD,
};

// conversion
pub use conversion::{
    convert, linear_srgb_to_oklab, linear_srgb_to_srgb, oklab_to_linear_srgb, oklab_to_oklch,
    oklch_to_oklab, srgb_to_linear_srgb,
};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, assert_within, to_eq_coordinates};
pub use equality::to_eq_bits;
pub(crate) use equality::{is_achromatic, normalize};

// gamut
pub(crate) use gamut::to_gamut;
pub use gamut::{
    clip, find_gamut_intersection, find_gamut_intersection_with_cusp, in_gamut, ClipStrategy,
    DEFAULT_ALPHA, SRGB_MAPPING_ALPHA,
};

// math
pub(crate) use math::{max3, FloatExt};

// space
pub use space::ColorSpace;
