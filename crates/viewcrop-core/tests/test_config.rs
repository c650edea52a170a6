use approx::assert_abs_diff_eq;

use viewcrop_core::config::{ContainerConfig, OutputConfig, OutputFormat, SessionConfig};
use viewcrop_core::error::ViewcropError;
use viewcrop_core::frame::{AspectRatio, Dimension, FrameConfig};
use viewcrop_core::geometry::Size;

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

#[test]
fn test_dimension_parse() {
    assert_eq!("45%".parse::<Dimension>().unwrap(), Dimension::Percent(45.0));
    assert_eq!("300px".parse::<Dimension>().unwrap(), Dimension::Pixels(300.0));
    assert_eq!(" 12.5 ".parse::<Dimension>().unwrap(), Dimension::Pixels(12.5));
}

#[test]
fn test_dimension_parse_rejects_invalid() {
    for bad in ["", "%", "px", "abc", "-5px", "NaN%", "10em"] {
        assert!(bad.parse::<Dimension>().is_err(), "{bad:?} parsed");
    }
}

#[test]
fn test_dimension_display() {
    assert_eq!(Dimension::Percent(45.0).to_string(), "45%");
    assert_eq!(Dimension::Pixels(300.0).to_string(), "300px");
}

#[test]
fn test_dimension_resolve() {
    assert_eq!(Dimension::Percent(45.0).resolve(800.0), 360.0);
    assert_eq!(Dimension::Pixels(300.0).resolve(800.0), 300.0);
}

// ---------------------------------------------------------------------------
// AspectRatio
// ---------------------------------------------------------------------------

#[test]
fn test_aspect_ratio_parse_forms() {
    assert_abs_diff_eq!("9 / 16".parse::<AspectRatio>().unwrap().ratio(), 0.5625);
    assert_abs_diff_eq!("16:9".parse::<AspectRatio>().unwrap().ratio(), 16.0 / 9.0);
    assert_abs_diff_eq!("1.5".parse::<AspectRatio>().unwrap().ratio(), 1.5);
}

#[test]
fn test_aspect_ratio_rejects_invalid() {
    for bad in ["", "0 / 5", "3 / 0", "a / b", "-1:2", "16 / 9 / 4"] {
        assert!(bad.parse::<AspectRatio>().is_err(), "{bad:?} parsed");
    }
}

#[test]
fn test_aspect_ratio_display_keeps_terms() {
    assert_eq!("9/16".parse::<AspectRatio>().unwrap().to_string(), "9 / 16");
}

// ---------------------------------------------------------------------------
// FrameConfig
// ---------------------------------------------------------------------------

#[test]
fn test_default_frame_resolves_from_aspect_ratio() {
    let frame = FrameConfig::default();
    let size = frame.resolve(Size::new(800.0, 600.0)).unwrap();
    assert_abs_diff_eq!(size.width, 360.0);
    assert_abs_diff_eq!(size.height, 640.0);
}

#[test]
fn test_explicit_height_overrides_aspect_ratio() {
    let frame = FrameConfig::from_strs("45%", Some("50%"), "9 / 16").unwrap();
    let size = frame.resolve(Size::new(800.0, 600.0)).unwrap();
    assert_eq!(size, Size::new(360.0, 300.0));
}

#[test]
fn test_blank_height_is_absent() {
    let frame = FrameConfig::from_strs("300px", Some("  "), "1 / 1").unwrap();
    assert!(frame.height.is_none());
}

#[test]
fn test_zero_frame_is_degenerate() {
    let frame = FrameConfig::from_strs("0%", None, "1 / 1").unwrap();
    let err = frame.resolve(Size::new(800.0, 600.0)).unwrap_err();
    assert!(matches!(err, ViewcropError::DegenerateFrame { .. }));

    let frame = FrameConfig::from_strs("45%", None, "1 / 1").unwrap();
    assert!(frame.resolve(Size::ZERO).is_err());
}

// ---------------------------------------------------------------------------
// SessionConfig TOML
// ---------------------------------------------------------------------------

#[test]
fn test_default_session_config_toml_round_trip() {
    let config = SessionConfig::default();
    let text = config.to_toml_string().unwrap();
    assert!(text.contains("width = \"45%\""), "{text}");
    assert!(text.contains("aspect_ratio = \"9 / 16\""), "{text}");

    let parsed = SessionConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let text = r#"
[frame]
width = "300px"
aspect_ratio = "1 / 1"

[output]
format = "Png"
quality = 80
"#;
    let config = SessionConfig::from_toml_str(text).unwrap();
    assert_eq!(config.frame_size().unwrap(), Size::new(300.0, 300.0));
    assert_eq!(config.container, ContainerConfig::default());
    assert_eq!(
        config.output,
        OutputConfig {
            format: OutputFormat::Png,
            quality: 80
        }
    );
}

#[test]
fn test_invalid_dimension_in_toml_is_config_error() {
    let text = r#"
[frame]
width = "wide"
aspect_ratio = "1 / 1"
"#;
    let err = SessionConfig::from_toml_str(text).unwrap_err();
    assert!(matches!(err, ViewcropError::Config(_)));
}

#[test]
fn test_session_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewcrop.toml");

    let mut config = SessionConfig::default();
    config.frame = FrameConfig::from_strs("250px", Some("125px"), "2 / 1").unwrap();
    config.save(&path).unwrap();

    let loaded = SessionConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_output_format_display() {
    assert_eq!(format!("{}", OutputFormat::Jpeg), "JPEG");
    assert_eq!(format!("{}", OutputFormat::Png), "PNG");
    assert_eq!(OutputFormat::default(), OutputFormat::Jpeg);
    assert_eq!(OutputConfig::default().quality, 92);
}
