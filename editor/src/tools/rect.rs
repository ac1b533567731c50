#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

use crate::annotation::{Annotation, new_annotation_id};
use crate::geometry::{Point, Rect};
use crate::input::Cursor;
use crate::rect_box::RectMode;
use crate::scene::{BoxView, LineStyle, Scene, SceneContext};
use crate::tool::{Tool, ToolContext};

/// Draw a new rectangle by dragging on the canvas.
///
/// The draft lives in container space. On release it is normalized, dropped
/// if narrower or shorter than `min_draw_size`, and otherwise converted to
/// image space and proposed as a new annotation, which is then selected.
#[derive(Debug, Default)]
pub struct RectTool {
    /// Anchor and current corner of the gesture.
    draft: Option<(Point, Point)>,
}

impl RectTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw (unnormalized) draft rectangle in container space.
    #[must_use]
    pub fn draft(&self) -> Option<Rect> {
        self.draft.map(|(a, b)| Rect::new(a.x, a.y, b.x, b.y))
    }
}

impl Tool for RectTool {
    fn name(&self) -> &'static str {
        "rect"
    }

    fn cursor(&self) -> Cursor {
        Cursor::Crosshair
    }

    fn shows_crosshair(&self) -> bool {
        true
    }

    fn on_deactivate(&mut self, _ctx: &mut ToolContext<'_>) {
        self.draft = None;
    }

    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        self.draft = Some((pos, pos));
        ctx.request_render();
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        if let Some((_, end)) = self.draft.as_mut() {
            *end = pos;
            ctx.request_render();
        }
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        let Some((start, _)) = self.draft.take() else {
            return;
        };
        ctx.request_render();

        let rect = Rect::from_corners(start, pos);
        let min = ctx.config.min_draw_size;
        if rect.width() < min || rect.height() < min {
            tracing::debug!(width = rect.width(), height = rect.height(), "rect too small, skipping");
            return;
        }

        let annotation = Annotation::rect(new_annotation_id(), ctx.rect_to_image(rect));
        ctx.add_annotation(annotation.clone());
        ctx.select(Some(annotation));
    }

    fn decorate(&self, _ctx: &SceneContext<'_>, scene: &mut Scene) {
        if let Some(rect) = self.draft() {
            scene.boxes.push(BoxView { id: None, rect, mode: RectMode::None, line: LineStyle::Normal, tip: None });
        }
    }
}
