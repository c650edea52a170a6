/// Lower bound (exclusive) of the zoom control, in percent.
pub const ZOOM_MIN_PERCENT: f64 = 0.0;

/// Upper bound (exclusive) of the zoom control, in percent.
pub const ZOOM_MAX_PERCENT: f64 = 100.0;

/// Scale of a freshly reset viewport (no zoom).
pub const BASELINE_SCALE: f64 = 1.0;

/// JPEG quality used when none is configured. Matches the usual browser
/// default for lossy canvas export (0.92).
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Default crop frame width relative to the container.
pub const DEFAULT_FRAME_WIDTH: &str = "45%";

/// Default crop frame aspect ratio (width / height).
pub const DEFAULT_ASPECT_RATIO: &str = "9 / 16";

/// Default container size used to resolve percentage dimensions.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 800.0;
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 600.0;

/// Default zoom track length and knob diameter, in display units.
pub const DEFAULT_TRACK_EXTENT: f64 = 200.0;
pub const DEFAULT_KNOB_WIDTH: f64 = 16.0;
