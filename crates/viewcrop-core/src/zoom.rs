use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_KNOB_WIDTH, DEFAULT_TRACK_EXTENT};
use crate::viewport::ViewportState;

/// Geometry of the linear zoom control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomTrack {
    /// Length of the track in display units.
    pub extent: f64,
    /// Width of the draggable knob.
    pub knob_width: f64,
}

impl Default for ZoomTrack {
    fn default() -> Self {
        Self {
            extent: DEFAULT_TRACK_EXTENT,
            knob_width: DEFAULT_KNOB_WIDTH,
        }
    }
}

impl ZoomTrack {
    /// Percentage of the track covered by `position`, or `None` for an
    /// empty track.
    pub fn percent_at(&self, position: f64) -> Option<f64> {
        if self.extent > 0.0 {
            Some(position * 100.0 / self.extent)
        } else {
            None
        }
    }

    /// Left edge of the knob centred on `position`, kept on the track.
    pub fn marker_for(&self, position: f64) -> f64 {
        let radius = self.knob_width / 2.0;
        if position <= radius {
            0.0
        } else if position >= self.extent - radius {
            (self.extent - self.knob_width).max(0.0)
        } else {
            position - radius
        }
    }

    /// Travel available to the knob's left edge.
    pub fn max_marker(&self) -> f64 {
        (self.extent - self.knob_width).max(0.0)
    }
}

/// Outcome of a zoom control event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomUpdate {
    /// The viewport was rescaled to `percent`.
    Scaled { percent: f64 },
    /// Only the knob moved; the position was at or past a track end.
    MarkerOnly,
}

/// Maps the zoom control's position onto the viewport scale.
#[derive(Clone, Debug, Default)]
pub struct ZoomController {
    track: ZoomTrack,
    marker: f64,
    active: bool,
}

impl ZoomController {
    pub fn new(track: ZoomTrack) -> Self {
        Self {
            track,
            marker: 0.0,
            active: false,
        }
    }

    pub fn track(&self) -> ZoomTrack {
        self.track
    }

    /// Knob position (left edge) along the track. Echoes the last accepted
    /// or rejected input; not authoritative for the scale.
    pub fn marker(&self) -> f64 {
        self.marker
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn press(&mut self, position: f64, viewport: &mut ViewportState) -> ZoomUpdate {
        self.active = true;
        self.set_position(position, viewport)
    }

    /// Follow a drag on the track. Ignored unless the track was pressed.
    pub fn drag(&mut self, position: f64, viewport: &mut ViewportState) -> Option<ZoomUpdate> {
        if !self.active {
            return None;
        }
        Some(self.set_position(position, viewport))
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    /// Move the knob to `position` and rescale the viewport when the
    /// position maps strictly inside `(0%, 100%)`.
    pub fn set_position(&mut self, position: f64, viewport: &mut ViewportState) -> ZoomUpdate {
        if position.is_nan() {
            return ZoomUpdate::MarkerOnly;
        }
        self.marker = self.track.marker_for(position);

        match self.track.percent_at(position) {
            Some(percent) if viewport.set_scale(percent) => {
                debug!(percent, "Zoom applied");
                ZoomUpdate::Scaled { percent }
            }
            _ => ZoomUpdate::MarkerOnly,
        }
    }

    /// Put the knob back at the start of the track.
    pub fn reset(&mut self) {
        self.marker = 0.0;
        self.active = false;
    }

    pub fn set_track(&mut self, track: ZoomTrack) {
        self.track = track;
        self.marker = self.marker.min(track.max_marker());
    }
}
