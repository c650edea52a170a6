use viewcrop_core::geometry::{
    axis_limit, clamp_axis, clamp_offset, parse_offset, Offset, Point, Size,
};

// ---------------------------------------------------------------------------
// clamp_axis / axis_limit
// ---------------------------------------------------------------------------

#[test]
fn test_clamp_bounded_and_sign_preserving() {
    let limits = [0.0, 0.5, 10.0, 75.0, 1234.5];
    let values = [-5000.0, -75.0, -12.25, -0.1, 0.0, 0.1, 12.25, 75.0, 5000.0];

    for &limit in &limits {
        for &value in &values {
            let clamped = clamp_axis(value, limit);
            assert!(
                clamped.abs() <= limit,
                "clamp_axis({value}, {limit}) = {clamped} exceeds limit"
            );
            if clamped != 0.0 {
                assert_eq!(
                    clamped.signum(),
                    value.signum(),
                    "clamp_axis({value}, {limit}) flipped sign"
                );
            }
        }
    }
}

#[test]
fn test_clamp_inside_limit_is_identity() {
    assert_eq!(clamp_axis(-20.0, 75.0), -20.0);
    assert_eq!(clamp_axis(74.9, 75.0), 74.9);
}

#[test]
fn test_clamp_at_limit_returns_signed_limit() {
    assert_eq!(clamp_axis(75.0, 75.0), 75.0);
    assert_eq!(clamp_axis(-75.0, 75.0), -75.0);
    assert_eq!(clamp_axis(-300.0, 75.0), -75.0);
}

#[test]
fn test_clamp_nan_is_zero() {
    assert_eq!(clamp_axis(f64::NAN, 10.0), 0.0);
}

#[test]
fn test_axis_limit_half_overflow() {
    assert_eq!(axis_limit(450.0, 300.0), 75.0);
    assert_eq!(axis_limit(300.0, 300.0), 0.0);
}

#[test]
fn test_axis_limit_smaller_than_frame_is_zero() {
    assert_eq!(axis_limit(200.0, 300.0), 0.0);
    assert_eq!(clamp_axis(40.0, axis_limit(200.0, 300.0)), 0.0);
}

#[test]
fn test_clamp_offset_per_axis() {
    let clamped = clamp_offset(
        Offset::new(-20.0, 30.0),
        Size::new(450.0, 300.0),
        Size::new(300.0, 300.0),
    );
    assert_eq!(clamped.x, -20.0);
    assert_eq!(clamped.y, 0.0);
}

#[test]
fn test_point_difference_is_offset() {
    let delta = Point::new(80.0, 130.0) - Point::new(100.0, 100.0);
    assert_eq!(delta, Offset::new(-20.0, 30.0));
}

// ---------------------------------------------------------------------------
// parse_offset
// ---------------------------------------------------------------------------

#[test]
fn test_parse_offset_untransformed_is_origin() {
    assert_eq!(parse_offset(None).unwrap(), Offset::ZERO);
    assert_eq!(parse_offset(Some("")).unwrap(), Offset::ZERO);
    assert_eq!(parse_offset(Some("none")).unwrap(), Offset::ZERO);
}

#[test]
fn test_parse_offset_translate3d_floats_and_negatives() {
    let offset = parse_offset(Some("translate3d(-12.5px, 40.25px, 0)")).unwrap();
    assert_eq!(offset, Offset::new(-12.5, 40.25));
}

#[test]
fn test_parse_offset_translate_without_units() {
    let offset = parse_offset(Some("translate(3, -4)")).unwrap();
    assert_eq!(offset, Offset::new(3.0, -4.0));
}

#[test]
fn test_parse_offset_single_component() {
    let offset = parse_offset(Some("translate(7px)")).unwrap();
    assert_eq!(offset, Offset::new(7.0, 0.0));
}

#[test]
fn test_parse_offset_rejects_garbage() {
    assert!(parse_offset(Some("rotate(45deg)")).is_err());
    assert!(parse_offset(Some("translate3d(a, b, 0)")).is_err());
    assert!(parse_offset(Some("translate3d(1px, 2px, 3px, 4px)")).is_err());
    assert!(parse_offset(Some("translate(1px, 2px")).is_err());
}

#[test]
fn test_css_transform_parses_back() {
    let offset = Offset::new(-75.0, 12.5);
    let css = offset.to_css_transform();
    assert_eq!(css, "translate3d(-75px, 12.5px, 0)");
    assert_eq!(parse_offset(Some(&css)).unwrap(), offset);
}
