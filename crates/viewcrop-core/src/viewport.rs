use tracing::{debug, info, warn};

use crate::consts::{BASELINE_SCALE, ZOOM_MAX_PERCENT, ZOOM_MIN_PERCENT};
use crate::error::{Result, ViewcropError};
use crate::geometry::{axis_limit, clamp_offset, Offset, Size};

/// Scale `natural` so that it covers `frame` on both axes, matching it
/// exactly on the axis that needs the larger scale factor.
pub fn cover_fit(natural: Size, frame: Size) -> Size {
    let width_ratio = frame.width / natural.width;
    let height_ratio = frame.height / natural.height;

    if width_ratio >= height_ratio {
        Size::new(frame.width, (natural.height * width_ratio).max(frame.height))
    } else {
        Size::new((natural.width * height_ratio).max(frame.width), frame.height)
    }
}

/// Pan and zoom state of the picture behind a fixed crop frame.
///
/// Offsets are measured from the centred position, so `(0, 0)` means the
/// picture centre sits under the frame centre. Every mutation keeps
/// `|offset| <= (rendered - frame) / 2` per axis.
#[derive(Clone, Debug)]
pub struct ViewportState {
    natural_size: Size,
    frame_size: Size,
    base_size: Size,
    scale: f64,
    offset: Offset,
    /// Last panned offset, as stored. Zoom rescales from here.
    anchor: Offset,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            natural_size: Size::ZERO,
            frame_size: Size::ZERO,
            base_size: Size::ZERO,
            scale: BASELINE_SCALE,
            offset: Offset::ZERO,
            anchor: Offset::ZERO,
        }
    }
}

impl ViewportState {
    /// Re-initialise for a new picture or frame: cover-fit the picture,
    /// drop any zoom and centre it.
    ///
    /// On failure the viewport is left cleared (not ready).
    pub fn reset(&mut self, natural: Size, frame: Size) -> Result<()> {
        *self = Self::default();

        if !frame.is_positive() {
            warn!(width = frame.width, height = frame.height, "Degenerate crop frame");
            return Err(ViewcropError::DegenerateFrame {
                width: frame.width,
                height: frame.height,
            });
        }
        self.frame_size = frame;

        if !natural.is_positive() {
            warn!("Viewport reset before picture dimensions are known");
            return Err(ViewcropError::ImageNotReady);
        }

        self.natural_size = natural;
        self.base_size = cover_fit(natural, frame);
        info!(
            natural_w = natural.width,
            natural_h = natural.height,
            display_w = self.base_size.width,
            display_h = self.base_size.height,
            "Viewport reset"
        );
        Ok(())
    }

    /// Picture and frame dimensions are known and non-zero.
    pub fn is_ready(&self) -> bool {
        self.base_size.is_positive() && self.frame_size.is_positive()
    }

    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    pub fn frame_size(&self) -> Size {
        self.frame_size
    }

    /// Cover-fit display size, before zoom.
    pub fn base_size(&self) -> Size {
        self.base_size
    }

    /// Display size after zoom.
    pub fn rendered_size(&self) -> Size {
        self.base_size.scaled(self.scale)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Zoom control percentage equivalent to the current scale.
    pub fn zoom_percent(&self) -> f64 {
        (self.scale - BASELINE_SCALE) * 100.0
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The pan baseline zoom re-derives its offset from.
    pub fn committed_offset(&self) -> Offset {
        self.anchor
    }

    /// Per-axis movement limits at the current scale.
    pub fn limits(&self) -> Offset {
        let rendered = self.rendered_size();
        Offset::new(
            axis_limit(rendered.width, self.frame_size.width),
            axis_limit(rendered.height, self.frame_size.height),
        )
    }

    /// Store `raw` clamped against the current rendered size and make it the
    /// new pan baseline. Returns the stored offset.
    pub fn set_offset(&mut self, raw: Offset) -> Offset {
        self.offset = clamp_offset(raw, self.rendered_size(), self.frame_size);
        self.anchor = self.offset;
        debug!(x = self.offset.x, y = self.offset.y, "Offset updated");
        self.offset
    }

    /// Zoom to `1 + pct / 100` times the base size, scaling the committed
    /// pan with it. Percentages outside the open range `(0, 100)` are
    /// ignored and `false` is returned.
    pub fn set_scale(&mut self, pct: f64) -> bool {
        if !(pct > ZOOM_MIN_PERCENT && pct < ZOOM_MAX_PERCENT) {
            return false;
        }
        self.apply_scale(BASELINE_SCALE + pct / 100.0);
        true
    }

    /// Return to the unzoomed size, restoring the committed pan.
    pub fn reset_scale(&mut self) {
        self.apply_scale(BASELINE_SCALE);
    }

    fn apply_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.offset = clamp_offset(self.anchor * scale, self.rendered_size(), self.frame_size);
        debug!(
            scale,
            x = self.offset.x,
            y = self.offset.y,
            "Scale updated"
        );
    }
}
