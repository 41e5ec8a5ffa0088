use prettyclip::gamut::{
    compute_max_saturation, find_cusp, find_gamut_intersection, BoundaryChannel, HueDirection,
};
use prettyclip::{
    assert_close_enough, in_gamut, linear_srgb_to_oklab, oklab_to_linear_srgb, to_srgb_gamut,
    ClipStrategy, ColorSpace, Float, GamutClipper,
};

#[test]
fn test_strongly_out_of_range() {
    let [r, g, b] = to_srgb_gamut(&[1.5, -0.2, 0.1]);
    assert!(in_gamut(&[r, g, b]), "{:?} is out of gamut", [r, g, b]);
    assert!((r - 0.8495).abs() < 1e-3, "red is {}", r);
    assert!(g.abs() < 1e-3, "green is {}", g);
    assert!((b - 0.1387).abs() < 1e-3, "blue is {}", b);
}

#[test]
fn test_boundary_colors_are_unchanged() {
    for rgb in [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
    ] {
        assert_eq!(to_srgb_gamut(&rgb), rgb, "{:?} is not on the boundary", rgb);
    }
}

#[test]
fn test_out_of_range_grays_are_clamped() {
    for strategy in [
        ClipStrategy::PreserveChroma,
        ClipStrategy::ProjectToMidGray,
        ClipStrategy::ProjectToCusp,
        ClipStrategy::AdaptiveToMidGray,
        ClipStrategy::AdaptiveToCusp,
    ] {
        let clipper = GamutClipper::new(strategy);

        let [r, g, b] = clipper.clip(&[1.5, 1.5, 1.5]);
        assert_close_enough!(r, 1.0);
        assert_close_enough!(g, 1.0);
        assert_close_enough!(b, 1.0);

        let [r, g, b] = clipper.clip(&[-0.5, -0.5, -0.5]);
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 0.0);
        assert_close_enough!(b, 0.0);
    }
}

#[test]
fn test_cusps_are_on_boundary() {
    for step in 0..36 {
        let hue = HueDirection::from_degrees(10.0 * step as Float);
        let cusp = find_cusp(hue);
        let rgb = oklab_to_linear_srgb(&[
            cusp.lightness,
            cusp.chroma * hue.a,
            cusp.chroma * hue.b,
        ]);

        let max = rgb.iter().copied().fold(Float::NEG_INFINITY, Float::max);
        let min = rgb.iter().copied().fold(Float::INFINITY, Float::min);
        assert!((max - 1.0).abs() < 1e-3, "cusp {:?} for hue {}", rgb, hue.hue());
        assert!(-1e-3 <= min, "cusp {:?} for hue {}", rgb, hue.hue());

        // The channel that clips first is the one that reaches zero.
        let channel = BoundaryChannel::first_to_clip(hue);
        assert!(
            rgb[channel as usize].abs() < 1e-3,
            "{:?} channel of cusp {:?} is not zero",
            channel,
            rgb
        );
        assert!(
            (cusp.saturation() - compute_max_saturation(hue)).abs() < 1e-4,
            "cusp {:?} disagrees with maximum saturation",
            cusp
        );
    }
}

#[test]
fn test_intersection_of_primaries() {
    // Lines from mid-gray through a primary exit the gamut at the primary.
    for rgb in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
        let [l, a, b] = linear_srgb_to_oklab(&rgb);
        let chroma = a.hypot(b);
        let hue = HueDirection::try_from_chroma(a, b).expect("primaries have a hue");

        let t = find_gamut_intersection(hue, l, chroma, 0.5);
        assert!((t - 1.0).abs() < 1e-3, "t is {} for {:?}", t, rgb);
    }
}

#[test]
fn test_map_in_all_spaces() {
    let clipper = GamutClipper::default();
    let too_red = [1.5, -0.2, 0.1];
    let expected = clipper.clip(&too_red);

    for space in [ColorSpace::Srgb, ColorSpace::Oklab, ColorSpace::Oklch] {
        let coordinates = prettyclip::convert(ColorSpace::LinearSrgb, space, &too_red);
        let mapped = clipper.map(space, &coordinates);
        let actual = prettyclip::convert(space, ColorSpace::LinearSrgb, &mapped);

        for index in 0..3 {
            assert!(
                (actual[index] - expected[index]).abs() < 1e-3,
                "{} mapping yields {:?} instead of {:?}",
                space,
                actual,
                expected
            );
        }
    }
}

#[test]
fn test_parse_names() {
    let strategy = "project-to-cusp".parse().expect("name is valid");
    let clipper = GamutClipper::new(strategy);
    assert_eq!(
        clipper.strategy(),
        ClipStrategy::ProjectToCusp,
        "wrong strategy for project-to-cusp"
    );

    let error = "nearest"
        .parse::<ClipStrategy>()
        .expect_err("nearest is not a strategy");
    assert_eq!(error.name, "nearest", "error has wrong name");
    assert!(
        error.to_string().starts_with("clip strategy should be one of"),
        "error message is {}",
        error
    );
}
