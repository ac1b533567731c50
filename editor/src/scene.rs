//! Scene description: a plain value listing what a renderer should draw.
//!
//! The editor never touches a drawing surface. [`build`] reads the view,
//! annotations and tool/overlay state and returns a [`Scene`] in container
//! space; any renderer (DOM, canvas, test assertions) can consume it.
//!
//! Layering: the base scene shows every rect annotation as a read-only box
//! and every point annotation as a marker. The active tool then decorates
//! it (modes, line styles, drafts), and overlays are stacked last in
//! ascending z order.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::annotation::{Annotation, AnnotationId, Shape};
use crate::config::EditorConfig;
use crate::geometry::{Point, Rect, Size, ViewTransform};
use crate::input::Cursor;
use crate::overlay::Overlay;
use crate::rect_box::RectMode;
use crate::tool::{Focus, Tool};

/// Read-only inputs for building a scene.
pub struct SceneContext<'a> {
    pub transform: &'a ViewTransform,
    pub annotations: &'a [Annotation],
    pub config: &'a EditorConfig,
    /// Last known pointer position, `None` once it left the surface.
    pub pointer: Option<Point>,
    pub image_size: Option<Size>,
    /// Active tool's focus with stale ids already dropped.
    pub focus: Focus<'a>,
    pub tool: &'a dyn Tool,
}

impl SceneContext<'_> {
    #[must_use]
    pub fn image_bounds(&self) -> Option<Rect> {
        self.image_size.map(|size| self.transform.image_bounds(size))
    }
}

/// Outline emphasis of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Normal,
    Dimmed,
}

/// Outline style for annotation `id` given the focus: everything is normal
/// until something is hovered, after which only the hovered and selected
/// boxes stay normal.
#[must_use]
pub fn line_style(id: &str, focus: Focus<'_>) -> LineStyle {
    match focus.hovered {
        None => LineStyle::Normal,
        Some(hovered) if hovered == id || focus.selected == Some(id) => LineStyle::Normal,
        Some(_) => LineStyle::Dimmed,
    }
}

/// One rectangle to draw, in container space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxView {
    /// `None` for drafts that are not annotations yet.
    pub id: Option<AnnotationId>,
    pub rect: Rect,
    pub mode: RectMode,
    pub line: LineStyle,
    /// Label to show above the box; `None` when hidden.
    pub tip: Option<String>,
}

/// One point marker, in container space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointView {
    pub id: AnnotationId,
    pub at: Point,
}

/// Dimming layer with undimmed cut-outs, in container space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskLayer {
    pub opacity: f64,
    /// Image bounds; `None` until the host reports the image size.
    pub bounds: Option<Rect>,
    pub cutouts: Vec<Rect>,
}

/// Overlay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layer {
    Mask(MaskLayer),
    Crosshair { at: Point },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub transform: ViewTransform,
    pub tool: &'static str,
    pub cursor: Cursor,
    pub image_bounds: Option<Rect>,
    pub boxes: Vec<BoxView>,
    pub points: Vec<PointView>,
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Undecorated scene: read-only boxes and markers for all annotations.
    #[must_use]
    pub fn base(ctx: &SceneContext<'_>) -> Self {
        let mut boxes = Vec::new();
        let mut points = Vec::new();
        for anno in ctx.annotations {
            match anno.shape {
                Shape::Rect { data } => boxes.push(BoxView {
                    id: Some(anno.id.clone()),
                    rect: ctx.transform.rect_image_to_container(data),
                    mode: RectMode::None,
                    line: LineStyle::Normal,
                    tip: None,
                }),
                Shape::Point { data } => points.push(PointView {
                    id: anno.id.clone(),
                    at: ctx.transform.image_to_container(data),
                }),
            }
        }
        Self {
            transform: *ctx.transform,
            tool: ctx.tool.name(),
            cursor: ctx.tool.cursor(),
            image_bounds: ctx.image_bounds(),
            boxes,
            points,
            layers: Vec::new(),
        }
    }
}

/// Base scene, decorated by the active tool, with overlay layers on top.
#[must_use]
pub fn build(ctx: &SceneContext<'_>, overlays: &[Box<dyn Overlay>]) -> Scene {
    let mut scene = Scene::base(ctx);
    ctx.tool.decorate(ctx, &mut scene);
    scene.layers = overlays.iter().filter_map(|overlay| overlay.layer(ctx)).collect();
    scene
}
