#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage};

use viewcrop_core::config::SessionConfig;
use viewcrop_core::frame::FrameConfig;
use viewcrop_core::geometry::Size;
use viewcrop_core::viewport::ViewportState;

/// Landscape picture used throughout the scenarios.
pub const LANDSCAPE: Size = Size::new(1200.0, 800.0);

/// Square 300x300 crop frame.
pub const SQUARE_FRAME: Size = Size::new(300.0, 300.0);

/// Build an RGB picture whose red channel encodes `x / 5` and green
/// channel encodes `y / 4`, so any pixel can be traced back to its source.
pub fn traceable_picture(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x / 5 % 256) as u8, (y / 4 % 256) as u8, 0])
    });
    DynamicImage::ImageRgb8(img)
}

/// Viewport over a 1200x800 picture through a 300x300 frame.
/// Cover fit gives a 450x300 display size.
pub fn landscape_viewport() -> ViewportState {
    let mut viewport = ViewportState::default();
    viewport.reset(LANDSCAPE, SQUARE_FRAME).unwrap();
    viewport
}

/// Session config with a fixed-size square frame.
pub fn square_session_config(side_px: u32) -> SessionConfig {
    SessionConfig {
        frame: FrameConfig::from_strs(&format!("{side_px}px"), None, "1 / 1").unwrap(),
        ..SessionConfig::default()
    }
}
