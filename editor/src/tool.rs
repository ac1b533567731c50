//! The tool seam: what every interaction mode implements, and the context
//! it receives for each event.
//!
//! Tools own their gesture state (hover, selection, in-progress drags). They
//! read annotations and the view through [`ToolContext`] and report results
//! by emitting [`Action`]s on it; the engine hands those back to the host.
//! New tools register with [`crate::registry::ToolRegistry`] without any
//! change to the engine or to other tools.

use crate::annotation::{Annotation, AnnotationChangedEvent, ChangeKind, find};
use crate::config::EditorConfig;
use crate::engine::Action;
use crate::geometry::{Point, Rect, ViewTransform};
use crate::input::{Cursor, Key};
use crate::scene::{Scene, SceneContext};

/// Hover and selection a tool exposes to overlays and the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus<'a> {
    pub hovered: Option<&'a str>,
    pub selected: Option<&'a str>,
}

impl<'a> Focus<'a> {
    /// Drop ids that no longer name an annotation.
    #[must_use]
    pub fn resolved(self, annotations: &[Annotation]) -> Self {
        let known = |id: Option<&'a str>| id.filter(|id| find(annotations, id).is_some());
        Self { hovered: known(self.hovered), selected: known(self.selected) }
    }
}

/// Per-event view of the editor handed to the active tool.
pub struct ToolContext<'a> {
    pub transform: &'a mut ViewTransform,
    pub annotations: &'a [Annotation],
    pub config: &'a EditorConfig,
    tool: &'static str,
    actions: &'a mut Vec<Action>,
}

impl<'a> ToolContext<'a> {
    pub fn new(
        tool: &'static str,
        transform: &'a mut ViewTransform,
        annotations: &'a [Annotation],
        config: &'a EditorConfig,
        actions: &'a mut Vec<Action>,
    ) -> Self {
        Self { transform, annotations, config, tool, actions }
    }

    /// Name of the tool this context was built for.
    #[must_use]
    pub fn tool_name(&self) -> &'static str {
        self.tool
    }

    #[must_use]
    pub fn query(&self, id: &str) -> Option<&'a Annotation> {
        find(self.annotations, id)
    }

    #[must_use]
    pub fn to_image(&self, container: Point) -> Point {
        self.transform.container_to_image(container)
    }

    #[must_use]
    pub fn rect_to_image(&self, container: Rect) -> Rect {
        self.transform.rect_container_to_image(container)
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.change(ChangeKind::Add, annotation);
    }

    pub fn update_annotation(&mut self, annotation: Annotation) {
        self.change(ChangeKind::Update, annotation);
    }

    pub fn remove_annotation(&mut self, annotation: Annotation) {
        self.change(ChangeKind::Remove, annotation);
    }

    /// Tell the host the selection changed.
    pub fn select(&mut self, annotation: Option<Annotation>) {
        self.actions.push(Action::AnnotationSelected { annotation });
    }

    /// Ask for a redraw; repeated requests within one event collapse.
    pub fn request_render(&mut self) {
        if !self.actions.contains(&Action::RenderNeeded) {
            self.actions.push(Action::RenderNeeded);
        }
    }

    fn change(&mut self, change: ChangeKind, annotation: Annotation) {
        tracing::debug!(tool = self.tool, ?change, id = %annotation.id, "annotation changed");
        self.actions
            .push(Action::AnnotationChanged(AnnotationChangedEvent::new(self.tool, change, annotation)));
        self.request_render();
    }
}

/// An interaction mode that owns pointer input while active.
///
/// Every handler has a no-op default so a tool implements only the events it
/// cares about.
pub trait Tool {
    /// Registry key, also reported in change events.
    fn name(&self) -> &'static str;

    /// Cursor for the tool's current state.
    fn cursor(&self) -> Cursor;

    /// Whether the crosshair overlay should follow the pointer.
    fn shows_crosshair(&self) -> bool {
        false
    }

    fn on_activate(&mut self, _ctx: &mut ToolContext<'_>) {}

    /// Drop in-flight gestures and focus.
    fn on_deactivate(&mut self, _ctx: &mut ToolContext<'_>) {}

    fn on_pointer_down(&mut self, _ctx: &mut ToolContext<'_>, _pos: Point) {}

    fn on_pointer_move(&mut self, _ctx: &mut ToolContext<'_>, _pos: Point) {}

    fn on_pointer_up(&mut self, _ctx: &mut ToolContext<'_>, _pos: Point) {}

    /// The pointer left the surface at `last`. Ends any gesture there.
    fn on_pointer_leave(&mut self, ctx: &mut ToolContext<'_>, last: Point) {
        self.on_pointer_up(ctx, last);
    }

    fn on_click(&mut self, _ctx: &mut ToolContext<'_>, _pos: Point) {}

    fn on_key_down(&mut self, _ctx: &mut ToolContext<'_>, _key: &Key) {}

    /// The host deleted `id`; forget any state that refers to it.
    fn on_annotation_removed(&mut self, _id: &str) {}

    fn focus(&self) -> Focus<'_> {
        Focus::default()
    }

    /// Adjust the scene before overlays are layered on top.
    fn decorate(&self, _ctx: &SceneContext<'_>, _scene: &mut Scene) {}
}
