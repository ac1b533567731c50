//! Annotation model: host-owned labelled regions and the change events the
//! editor proposes for them.
//!
//! The editor never owns annotation storage. It reads the list the host last
//! supplied and emits [`AnnotationChangedEvent`]s; the host decides whether to
//! apply them (see [`apply_change`] for the straightforward way to do so).
//!
//! On the wire an annotation looks like
//! `{"id": "...", "type": "rect", "data": {"x1": 0, "y1": 0, "x2": 5, "y2": 5}}`
//! with an optional `"tip"` label.

#[cfg(test)]
#[path = "annotation_test.rs"]
mod annotation_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Rect};

/// Opaque unique identifier for an annotation.
pub type AnnotationId = String;

/// Fresh random identifier for a newly drawn annotation.
#[must_use]
pub fn new_annotation_id() -> AnnotationId {
    Uuid::new_v4().to_string()
}

/// Geometry of an annotation, tagged by its `type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Rectangular region in image space.
    Rect { data: Rect },
    /// Single image-space pixel.
    Point { data: Point },
}

/// Discriminant of [`Shape`], used in change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Rect,
    Point,
}

/// A labelled region of interest on the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    #[serde(flatten)]
    pub shape: Shape,
    /// Display label shown above the box while hovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Annotation {
    #[must_use]
    pub fn rect(id: impl Into<AnnotationId>, data: Rect) -> Self {
        Self { id: id.into(), shape: Shape::Rect { data }, tip: None }
    }

    #[must_use]
    pub fn point(id: impl Into<AnnotationId>, data: Point) -> Self {
        Self { id: id.into(), shape: Shape::Point { data }, tip: None }
    }

    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        match self.shape {
            Shape::Rect { .. } => AnnotationKind::Rect,
            Shape::Point { .. } => AnnotationKind::Point,
        }
    }

    /// Image-space rectangle, if this is a rect annotation.
    #[must_use]
    pub fn as_rect(&self) -> Option<Rect> {
        match self.shape {
            Shape::Rect { data } => Some(data),
            Shape::Point { .. } => None,
        }
    }

    /// Image-space point, if this is a point annotation.
    #[must_use]
    pub fn as_point(&self) -> Option<Point> {
        match self.shape {
            Shape::Point { data } => Some(data),
            Shape::Rect { .. } => None,
        }
    }

    /// Copy of this annotation with its rectangle replaced. Keeps id and tip.
    #[must_use]
    pub fn with_rect(&self, data: Rect) -> Self {
        Self { id: self.id.clone(), shape: Shape::Rect { data }, tip: self.tip.clone() }
    }
}

/// Which mutation a change event proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Update,
    Remove,
}

/// Proposed mutation of the host's annotation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationChangedEvent {
    /// Name of the tool that was active when the change happened.
    pub tool: String,
    #[serde(rename = "type")]
    pub change: ChangeKind,
    pub annotation_type: AnnotationKind,
    pub annotation: Annotation,
}

impl AnnotationChangedEvent {
    #[must_use]
    pub fn new(tool: &str, change: ChangeKind, annotation: Annotation) -> Self {
        Self {
            tool: tool.to_owned(),
            change,
            annotation_type: annotation.kind(),
            annotation,
        }
    }
}

/// Find an annotation by id. Absent ids are not an error; callers treat
/// `None` as "deselect".
#[must_use]
pub fn find<'a>(annotations: &'a [Annotation], id: &str) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.id == id)
}

/// Apply a change event to a host-owned list.
///
/// `add` appends (or replaces an existing entry with the same id), `update`
/// replaces in place, `remove` deletes. Returns `false` when an `update` or
/// `remove` names an id that is not in the list.
pub fn apply_change(annotations: &mut Vec<Annotation>, event: &AnnotationChangedEvent) -> bool {
    let position = annotations.iter().position(|a| a.id == event.annotation.id);
    match (event.change, position) {
        (ChangeKind::Add, Some(i)) | (ChangeKind::Update, Some(i)) => {
            annotations[i] = event.annotation.clone();
            true
        }
        (ChangeKind::Add, None) => {
            annotations.push(event.annotation.clone());
            true
        }
        (ChangeKind::Remove, Some(i)) => {
            annotations.remove(i);
            true
        }
        (ChangeKind::Update | ChangeKind::Remove, None) => false,
    }
}
