#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::annotation::Annotation;
use crate::consts::{CORNER_HANDLE_HALF_PX, EDGE_BAND_HALF_PX};
use crate::geometry::{Point, Rect, ViewTransform};
use crate::rect_box::{DragSource, Handle};

/// Which part of a rectangle was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Handle(Handle),
}

impl HitPart {
    /// The drag source a pointer-down on this part starts.
    #[must_use]
    pub fn drag_source(self) -> DragSource {
        match self {
            Self::Body => DragSource::Move,
            Self::Handle(h) => DragSource::Resize(h),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub annotation: &'a Annotation,
    /// The annotation's rectangle in container space.
    pub rect: Rect,
    pub part: HitPart,
}

/// Test which rect annotation (if any) is under the container-space point.
///
/// Precedence: handles of the selected rectangle, then its body, then the
/// topmost body in list order (the last matching element wins). Only the
/// selected rectangle exposes handles. Point annotations are never hit.
#[must_use]
pub fn hit_test<'a>(
    pointer: Point,
    annotations: &'a [Annotation],
    transform: &ViewTransform,
    selected_id: Option<&str>,
) -> Option<Hit<'a>> {
    if let Some(selected) = selected_id.and_then(|id| annotations.iter().find(|a| a.id == id)) {
        if let Some(image_rect) = selected.as_rect() {
            let rect = transform.rect_image_to_container(image_rect);
            if let Some(handle) = handle_at(pointer, rect) {
                return Some(Hit { annotation: selected, rect, part: HitPart::Handle(handle) });
            }
            if rect.contains(pointer) {
                return Some(Hit { annotation: selected, rect, part: HitPart::Body });
            }
        }
    }

    annotations.iter().rev().find_map(|anno| {
        let rect = transform.rect_image_to_container(anno.as_rect()?);
        rect.contains(pointer).then_some(Hit { annotation: anno, rect, part: HitPart::Body })
    })
}

/// The resize handle of `rect` under `pointer`, corners before edges.
///
/// Handles follow the raw corner coordinates: the top-left corner is always
/// at `(x1, y1)` even while the rectangle is inverted.
#[must_use]
pub fn handle_at(pointer: Point, rect: Rect) -> Option<Handle> {
    Handle::ALL.into_iter().find(|&h| handle_zone(rect, h).contains(pointer))
}

/// Container-space hit zone of one handle.
#[must_use]
pub fn handle_zone(rect: Rect, handle: Handle) -> Rect {
    let c = CORNER_HANDLE_HALF_PX;
    let e = EDGE_BAND_HALF_PX;
    let corner = |x: f64, y: f64| Rect::new(x - c, y - c, x + c, y + c);
    match handle {
        Handle::TopLeftCorner => corner(rect.x1, rect.y1),
        Handle::TopRightCorner => corner(rect.x2, rect.y1),
        Handle::BottomLeftCorner => corner(rect.x1, rect.y2),
        Handle::BottomRightCorner => corner(rect.x2, rect.y2),
        Handle::TopEdge => Rect::new(rect.x1, rect.y1 - e, rect.x2, rect.y1 + e),
        Handle::BottomEdge => Rect::new(rect.x1, rect.y2 - e, rect.x2, rect.y2 + e),
        Handle::LeftEdge => Rect::new(rect.x1 - e, rect.y1, rect.x1 + e, rect.y2),
        Handle::RightEdge => Rect::new(rect.x2 - e, rect.y1, rect.x2 + e, rect.y2),
    }
}
