#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::annotation::AnnotationId;
use crate::config::UpdatePolicy;
use crate::geometry::{Point, Rect};
use crate::hit::{HitPart, hit_test};
use crate::input::{Cursor, Key};
use crate::rect_box::{RectBox, RectMode};
use crate::scene::{Scene, SceneContext, line_style};
use crate::tool::{Focus, Tool, ToolContext};

/// Pan the image, and hover / select / move / resize existing rectangles.
///
/// The selected rectangle is in resize mode, every other one in move mode.
/// A pointer-down on empty canvas pans, but only while nothing is hovered or
/// selected.
#[derive(Debug, Default)]
pub struct DragTool {
    hovered: Option<AnnotationId>,
    hovered_part: Option<HitPart>,
    selected: Option<AnnotationId>,
    /// Previous pointer position of an active pan.
    pan_last: Option<Point>,
    /// Annotation the running rect session belongs to.
    target: Option<AnnotationId>,
    rect_box: RectBox,
}

impl DragTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_last.is_some()
    }

    #[must_use]
    pub fn is_transforming(&self) -> bool {
        self.rect_box.is_dragging()
    }

    fn mode_for(&self, id: &str) -> RectMode {
        if self.selected.as_deref() == Some(id) { RectMode::Resize } else { RectMode::Move }
    }

    /// Forget ids the host no longer supplies.
    fn prune(&mut self, ctx: &ToolContext<'_>) {
        if self.selected.as_deref().is_some_and(|id| ctx.query(id).is_none()) {
            tracing::debug!(id = ?self.selected, "selected annotation vanished");
            self.selected = None;
        }
        if self.hovered.as_deref().is_some_and(|id| ctx.query(id).is_none()) {
            self.hovered = None;
            self.hovered_part = None;
        }
    }

    fn clear_hover(&mut self) {
        self.hovered = None;
        self.hovered_part = None;
    }

    /// Report the session rectangle (container space) as an update of the
    /// target annotation. A target that vanished mid-drag ends the session
    /// and counts as a deselect.
    fn emit_rect(&mut self, ctx: &mut ToolContext<'_>, container: Rect) {
        let Some(id) = self.target.clone() else {
            return;
        };
        let Some(anno) = ctx.query(&id) else {
            tracing::debug!(%id, "drag target vanished, cancelling");
            self.rect_box.cancel();
            self.target = None;
            if self.selected.as_deref() == Some(id.as_str()) {
                self.selected = None;
                ctx.select(None);
            }
            return;
        };
        let rect = ctx.rect_to_image(container);
        ctx.update_annotation(anno.with_rect(rect));
    }
}

impl Tool for DragTool {
    fn name(&self) -> &'static str {
        "drag"
    }

    fn cursor(&self) -> Cursor {
        if self.is_panning() {
            return Cursor::Grabbing;
        }
        if let Some(session) = self.rect_box.session() {
            return Cursor::for_drag_source(session.source);
        }
        match self.hovered_part {
            Some(part) => Cursor::for_drag_source(part.drag_source()),
            None => Cursor::Grab,
        }
    }

    fn on_deactivate(&mut self, ctx: &mut ToolContext<'_>) {
        self.rect_box.cancel();
        self.target = None;
        self.pan_last = None;
        self.clear_hover();
        if self.selected.take().is_some() {
            ctx.select(None);
        }
    }

    fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        self.prune(ctx);
        let transform = *ctx.transform;
        if let Some(hit) = hit_test(pos, ctx.annotations, &transform, self.selected.as_deref()) {
            let id = hit.annotation.id.clone();
            let source = hit.part.drag_source();
            let source = self.mode_for(&id).permits(source).then_some(source);
            if self.rect_box.on_pointer_down(hit.rect, source, pos) {
                self.target = Some(id.clone());
            }
            self.hovered = Some(id);
            self.hovered_part = Some(hit.part);
            return;
        }
        if self.rect_box.is_dragging() {
            tracing::debug!(id = ?self.target, "background press ends rect session");
            self.rect_box.cancel();
            self.target = None;
        }
        if self.selected.is_none() && self.hovered.is_none() {
            tracing::trace!(?pos, "pan started");
            self.pan_last = Some(pos);
        }
    }

    fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        if let Some(last) = self.pan_last {
            *ctx.transform = ctx.transform.panned(pos.delta_from(last));
            self.pan_last = Some(pos);
            ctx.request_render();
            return;
        }

        if let Some(preview) = self.rect_box.on_pointer_move(pos) {
            if ctx.config.update_policy == UpdatePolicy::Live {
                self.emit_rect(ctx, preview.rect);
            }
            ctx.request_render();
            return;
        }

        self.prune(ctx);
        let transform = *ctx.transform;
        let hit = hit_test(pos, ctx.annotations, &transform, self.selected.as_deref());
        let hovered = hit.map(|h| h.annotation.id.clone());
        if hovered != self.hovered {
            ctx.request_render();
        }
        self.hovered = hovered;
        self.hovered_part = hit.map(|h| h.part);
    }

    fn on_pointer_up(&mut self, ctx: &mut ToolContext<'_>, _pos: Point) {
        if self.pan_last.take().is_some() {
            tracing::trace!(offset = ?ctx.transform.offset, "pan finished");
        }
        if let Some(commit) = self.rect_box.on_pointer_up() {
            self.emit_rect(ctx, commit.rect);
            self.target = None;
            ctx.request_render();
        }
    }

    fn on_pointer_leave(&mut self, ctx: &mut ToolContext<'_>, last: Point) {
        self.on_pointer_up(ctx, last);
        if self.hovered.is_some() {
            self.clear_hover();
            ctx.request_render();
        }
    }

    fn on_click(&mut self, ctx: &mut ToolContext<'_>, pos: Point) {
        self.prune(ctx);
        let transform = *ctx.transform;
        match hit_test(pos, ctx.annotations, &transform, self.selected.as_deref()) {
            Some(hit) => {
                self.selected = Some(hit.annotation.id.clone());
                ctx.select(Some(hit.annotation.clone()));
            }
            None => {
                self.clear_hover();
                if self.selected.take().is_some() {
                    ctx.select(None);
                }
            }
        }
        ctx.request_render();
    }

    fn on_key_down(&mut self, ctx: &mut ToolContext<'_>, key: &Key) {
        if key.is("Escape") && self.selected.take().is_some() {
            ctx.select(None);
            ctx.request_render();
        }
    }

    fn on_annotation_removed(&mut self, id: &str) {
        if self.target.as_deref() == Some(id) {
            self.rect_box.cancel();
            self.target = None;
        }
        if self.hovered.as_deref() == Some(id) {
            self.clear_hover();
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    fn focus(&self) -> Focus<'_> {
        Focus { hovered: self.hovered.as_deref(), selected: self.selected.as_deref() }
    }

    fn decorate(&self, ctx: &SceneContext<'_>, scene: &mut Scene) {
        let live = self.target.as_deref().zip(self.rect_box.session());
        for view in &mut scene.boxes {
            let Some(id) = view.id.as_deref() else {
                continue;
            };
            view.mode = self.mode_for(id);
            view.line = line_style(id, ctx.focus);
            let show_tip = ctx.focus.hovered == Some(id) && ctx.focus.selected.is_none();
            if show_tip {
                view.tip = ctx.annotations.iter().find(|a| a.id == id).and_then(|a| a.tip.clone());
            }
            if let Some((target, session)) = live {
                if target == id {
                    view.rect = session.current;
                }
            }
        }
    }
}
