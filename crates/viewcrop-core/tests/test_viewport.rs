mod common;

use approx::assert_abs_diff_eq;

use common::{landscape_viewport, LANDSCAPE, SQUARE_FRAME};
use viewcrop_core::error::ViewcropError;
use viewcrop_core::geometry::{Offset, Size};
use viewcrop_core::viewport::{cover_fit, ViewportState};

// ---------------------------------------------------------------------------
// Cover fit
// ---------------------------------------------------------------------------

#[test]
fn test_reset_landscape_into_square_matches_height() {
    let viewport = landscape_viewport();
    assert_eq!(viewport.base_size(), Size::new(450.0, 300.0));
    assert_eq!(viewport.rendered_size(), Size::new(450.0, 300.0));
    assert_eq!(viewport.offset(), Offset::ZERO);
    assert_eq!(viewport.scale(), 1.0);
    assert!(viewport.is_ready());
}

#[test]
fn test_reset_portrait_into_square_matches_width() {
    let fitted = cover_fit(Size::new(800.0, 1200.0), SQUARE_FRAME);
    assert_eq!(fitted, Size::new(300.0, 450.0));
}

#[test]
fn test_reset_into_tall_frame() {
    // 9:16 frame at 45% of an 800px container.
    let frame = Size::new(360.0, 640.0);
    let fitted = cover_fit(LANDSCAPE, frame);
    assert_abs_diff_eq!(fitted.width, 960.0, epsilon = 1e-9);
    assert_eq!(fitted.height, 640.0);
}

#[test]
fn test_cover_fit_invariant() {
    let naturals = [
        Size::new(1200.0, 800.0),
        Size::new(800.0, 1200.0),
        Size::new(37.0, 1999.0),
        Size::new(4000.0, 3.0),
        Size::new(300.0, 300.0),
        Size::new(10.0, 10.0),
    ];
    let frames = [
        Size::new(300.0, 300.0),
        Size::new(360.0, 640.0),
        Size::new(640.0, 360.0),
        Size::new(1.0, 999.0),
    ];

    for natural in naturals {
        for frame in frames {
            let fitted = cover_fit(natural, frame);
            assert!(fitted.width >= frame.width, "{natural:?} in {frame:?} -> {fitted:?}");
            assert!(fitted.height >= frame.height, "{natural:?} in {frame:?} -> {fitted:?}");
            assert!(
                fitted.width == frame.width || fitted.height == frame.height,
                "{natural:?} in {frame:?} -> {fitted:?} touches neither axis"
            );
            // Aspect ratio preserved.
            assert_abs_diff_eq!(
                fitted.width / fitted.height,
                natural.width / natural.height,
                epsilon = 1e-6 * natural.width / natural.height
            );
        }
    }
}

#[test]
fn test_reset_rejects_degenerate_frame() {
    let mut viewport = ViewportState::default();
    let err = viewport.reset(LANDSCAPE, Size::new(0.0, 300.0)).unwrap_err();
    assert!(matches!(err, ViewcropError::DegenerateFrame { .. }));
    assert!(!viewport.is_ready());
}

#[test]
fn test_reset_rejects_unloaded_picture() {
    let mut viewport = ViewportState::default();
    let err = viewport.reset(Size::ZERO, SQUARE_FRAME).unwrap_err();
    assert!(matches!(err, ViewcropError::ImageNotReady));
    assert!(!viewport.is_ready());
    assert_eq!(viewport.frame_size(), SQUARE_FRAME);
}

#[test]
fn test_reset_clears_pan_and_zoom() {
    let mut viewport = landscape_viewport();
    viewport.set_offset(Offset::new(-50.0, 0.0));
    viewport.set_scale(40.0);

    viewport.reset(LANDSCAPE, SQUARE_FRAME).unwrap();
    assert_eq!(viewport.offset(), Offset::ZERO);
    assert_eq!(viewport.committed_offset(), Offset::ZERO);
    assert_eq!(viewport.scale(), 1.0);
}

// ---------------------------------------------------------------------------
// set_offset
// ---------------------------------------------------------------------------

#[test]
fn test_set_offset_clamps_to_limits() {
    let mut viewport = landscape_viewport();
    assert_eq!(viewport.limits(), Offset::new(75.0, 0.0));

    let stored = viewport.set_offset(Offset::new(100.0, 10.0));
    assert_eq!(stored, Offset::new(75.0, 0.0));
    assert_eq!(viewport.offset(), stored);
    assert_eq!(viewport.committed_offset(), stored);
}

#[test]
fn test_set_offset_on_unready_viewport_stays_centred() {
    let mut viewport = ViewportState::default();
    assert_eq!(viewport.set_offset(Offset::new(40.0, -40.0)), Offset::ZERO);
}

// ---------------------------------------------------------------------------
// set_scale
// ---------------------------------------------------------------------------

#[test]
fn test_set_scale_grows_rendered_size() {
    let mut viewport = landscape_viewport();
    assert!(viewport.set_scale(50.0));
    assert_eq!(viewport.scale(), 1.5);
    assert_eq!(viewport.rendered_size(), Size::new(675.0, 450.0));
    assert_eq!(viewport.limits(), Offset::new(187.5, 75.0));
    assert_abs_diff_eq!(viewport.zoom_percent(), 50.0, epsilon = 1e-9);
    // Base size is untouched by zoom.
    assert_eq!(viewport.base_size(), Size::new(450.0, 300.0));
}

#[test]
fn test_set_scale_rejects_bounds() {
    let mut viewport = landscape_viewport();
    viewport.set_scale(30.0);

    for pct in [0.0, 100.0, -5.0, 150.0, f64::NAN] {
        assert!(!viewport.set_scale(pct), "pct {pct} accepted");
        assert_abs_diff_eq!(viewport.scale(), 1.3, epsilon = 1e-12);
    }
}

#[test]
fn test_zoom_monotonic() {
    let mut viewport = landscape_viewport();
    viewport.set_offset(Offset::new(-40.0, 0.0));

    let mut previous = viewport.rendered_size();
    for step in 1..100 {
        assert!(viewport.set_scale(step as f64));
        let rendered = viewport.rendered_size();
        assert!(rendered.width >= previous.width);
        assert!(rendered.height >= previous.height);
        previous = rendered;
    }
    assert!(previous.width < 2.0 * 450.0);
}

#[test]
fn test_zoom_scales_committed_pan() {
    let mut viewport = landscape_viewport();
    viewport.set_offset(Offset::new(-60.0, 0.0));

    viewport.set_scale(50.0);
    assert_eq!(viewport.offset(), Offset::new(-90.0, 0.0));
}

#[test]
fn test_zoom_round_trip_restores_pan() {
    let mut viewport = landscape_viewport();
    let before = viewport.set_offset(Offset::new(-60.0, 25.0));

    viewport.set_scale(80.0);
    assert_ne!(viewport.offset(), before);

    viewport.reset_scale();
    assert_eq!(viewport.offset(), before);
    assert_eq!(viewport.scale(), 1.0);
}

#[test]
fn test_repeated_zoom_is_idempotent() {
    let mut viewport = landscape_viewport();
    viewport.set_offset(Offset::new(-60.0, 0.0));

    viewport.set_scale(50.0);
    let first = viewport.offset();
    viewport.set_scale(50.0);
    assert_eq!(viewport.offset(), first);
}

#[test]
fn test_pan_while_zoomed_reclamps_on_unzoom() {
    let mut viewport = landscape_viewport();
    viewport.set_scale(50.0);
    let stored = viewport.set_offset(Offset::new(150.0, 60.0));
    assert_eq!(stored, Offset::new(150.0, 60.0));

    // Baseline limits are (75, 0).
    viewport.reset_scale();
    assert_eq!(viewport.offset(), Offset::new(75.0, 0.0));
}

#[test]
fn test_zoom_after_zoomed_pan_rescales_committed_offset() {
    let mut viewport = landscape_viewport();
    viewport.set_scale(50.0);
    assert_eq!(viewport.set_offset(Offset::new(60.0, 0.0)), Offset::new(60.0, 0.0));

    viewport.set_scale(60.0);
    assert_abs_diff_eq!(viewport.offset().x, 96.0, epsilon = 1e-9);
    assert_eq!(viewport.offset().y, 0.0);

    viewport.reset_scale();
    assert_eq!(viewport.offset(), Offset::new(60.0, 0.0));
    assert_eq!(viewport.committed_offset(), Offset::new(60.0, 0.0));
}
