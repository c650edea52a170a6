use tracing::debug;

use crate::geometry::{Offset, Point};
use crate::viewport::ViewportState;

/// Whether a drag gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanState {
    Idle,
    Dragging,
}

/// Transient state of one drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position where the gesture started.
    pub anchor_start: Point,
    /// Viewport offset captured when the gesture started.
    pub committed_offset: Offset,
}

/// Turns drag gestures into viewport offset updates.
///
/// Each move sets the offset to `committed + (pointer - anchor_start)`, so
/// the picture follows the pointer from wherever the previous drag left it.
#[derive(Clone, Debug, Default)]
pub struct PanController {
    session: Option<DragSession>,
    committed: Offset,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanState {
        if self.session.is_some() {
            PanState::Dragging
        } else {
            PanState::Idle
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Offset the next drag will start from.
    pub fn committed_offset(&self) -> Offset {
        self.committed
    }

    /// Begin a drag at `point`. A start while already dragging replaces the
    /// current gesture.
    pub fn start(&mut self, point: Point, viewport: &ViewportState) {
        self.committed = viewport.offset();
        self.session = Some(DragSession {
            anchor_start: point,
            committed_offset: self.committed,
        });
        debug!(x = point.x, y = point.y, "Drag started");
    }

    /// Follow the pointer to `point`. Returns the clamped offset, or `None`
    /// when no drag is active.
    pub fn drag(&mut self, point: Point, viewport: &mut ViewportState) -> Option<Offset> {
        let session = self.session?;
        let delta = point - session.anchor_start;
        Some(viewport.set_offset(session.committed_offset + delta))
    }

    /// Finish the gesture (pointer released or left the target). The
    /// viewport offset becomes the baseline for the next drag. Ending
    /// without a started drag does nothing.
    pub fn end(&mut self, viewport: &ViewportState) {
        if self.session.take().is_some() {
            self.committed = viewport.offset();
            debug!(x = self.committed.x, y = self.committed.y, "Drag committed");
        }
    }

    /// Forget any gesture and baseline, e.g. after the viewport was reset.
    pub fn reset(&mut self) {
        self.session = None;
        self.committed = Offset::ZERO;
    }
}
