//! Rectangle interaction engine.
//!
//! Turns a pointer-down / pointer-move / pointer-up sequence on one part of a
//! rectangle (an edge, a corner, or the body) into new rectangle coordinates.
//! The engine works in whatever space the anchor rectangle and pointer are
//! given in; callers convert to image space afterwards.
//!
//! [`drag_rect`] is the pure reducer. [`RectBox`] wraps it in the
//! Idle/Dragging state machine and holds at most one [`DragSession`].

#[cfg(test)]
#[path = "rect_box_test.rs"]
mod rect_box_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// One of the eight resize handles around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::TopLeftCorner,
        Handle::TopRightCorner,
        Handle::BottomLeftCorner,
        Handle::BottomRightCorner,
        Handle::TopEdge,
        Handle::BottomEdge,
        Handle::LeftEdge,
        Handle::RightEdge,
    ];
}

/// Which part of a rectangle a drag gesture manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragSource {
    Resize(Handle),
    Move,
}

/// What a rectangle lets the pointer do to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectMode {
    /// Handles visible; resize and move allowed.
    #[default]
    Resize,
    /// Body drag only.
    Move,
    /// Read-only.
    None,
}

impl RectMode {
    /// Whether a gesture from `source` may start on a rectangle in this mode.
    #[must_use]
    pub fn permits(self, source: DragSource) -> bool {
        match self {
            Self::Resize => true,
            Self::Move => source == DragSource::Move,
            Self::None => false,
        }
    }
}

/// Apply a pointer delta to the coordinates `source` controls.
///
/// Edges move one coordinate, corners two, `Move` shifts all four. No
/// clamping: an edge may be dragged past its opposite edge.
#[must_use]
pub fn drag_rect(anchor: Rect, source: DragSource, delta: Point) -> Rect {
    let mut r = anchor;
    match source {
        DragSource::Move => return anchor.translated(delta),
        DragSource::Resize(handle) => match handle {
            Handle::TopEdge => r.y1 += delta.y,
            Handle::BottomEdge => r.y2 += delta.y,
            Handle::LeftEdge => r.x1 += delta.x,
            Handle::RightEdge => r.x2 += delta.x,
            Handle::TopLeftCorner => {
                r.x1 += delta.x;
                r.y1 += delta.y;
            }
            Handle::TopRightCorner => {
                r.x2 += delta.x;
                r.y1 += delta.y;
            }
            Handle::BottomLeftCorner => {
                r.x1 += delta.x;
                r.y2 += delta.y;
            }
            Handle::BottomRightCorner => {
                r.x2 += delta.x;
                r.y2 += delta.y;
            }
        },
    }
    r
}

/// A gesture in progress, from pointer-down until pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    /// Rectangle as it was at pointer-down.
    pub anchor_rect: Rect,
    /// Pointer position at pointer-down.
    pub anchor_pointer: Point,
    /// Latest rectangle produced by the session.
    pub current: Rect,
}

impl DragSession {
    #[must_use]
    pub fn begin(rect: Rect, source: DragSource, pointer: Point) -> Self {
        Self { source, anchor_rect: rect, anchor_pointer: pointer, current: rect }
    }

    /// Rectangle for the pointer at `pointer`, always relative to the anchor.
    #[must_use]
    pub fn rect_at(&self, pointer: Point) -> Rect {
        drag_rect(self.anchor_rect, self.source, pointer.delta_from(self.anchor_pointer))
    }
}

/// Whether a transform is an in-progress preview or the gesture's commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformPhase {
    Preview,
    Commit,
}

/// Rectangle emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectTransform {
    pub rect: Rect,
    pub phase: TransformPhase,
}

/// Idle/Dragging state machine for one shared drag slot.
///
/// Only one session exists at a time: a pointer-down while dragging replaces
/// the running session without committing it.
#[derive(Debug, Clone, Default)]
pub struct RectBox {
    session: Option<DragSession>,
}

impl RectBox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session. `source == None` marks a disabled rectangle and is
    /// ignored. Returns whether a session started.
    pub fn on_pointer_down(&mut self, rect: Rect, source: Option<DragSource>, pointer: Point) -> bool {
        let Some(source) = source else {
            return false;
        };
        if let Some(prev) = self.session.take() {
            tracing::debug!(previous = ?prev.source, next = ?source, "drag session replaced");
        }
        tracing::debug!(?source, ?rect, "drag session started");
        self.session = Some(DragSession::begin(rect, source, pointer));
        true
    }

    /// Recompute the rectangle for a pointer move. `None` when idle.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Option<RectTransform> {
        let session = self.session.as_mut()?;
        session.current = session.rect_at(pointer);
        Some(RectTransform { rect: session.current, phase: TransformPhase::Preview })
    }

    /// End the session and return its final rectangle. `None` when idle.
    pub fn on_pointer_up(&mut self) -> Option<RectTransform> {
        let session = self.session.take()?;
        tracing::debug!(source = ?session.source, rect = ?session.current, "drag session committed");
        Some(RectTransform { rect: session.current, phase: TransformPhase::Commit })
    }

    /// Drop the session without committing.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}
