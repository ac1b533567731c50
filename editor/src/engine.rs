use serde::Serialize;

use crate::annotation::{Annotation, AnnotationChangedEvent, find};
use crate::config::{EditorConfig, ScaleMode};
use crate::error::EditorError;
use crate::geometry::{Point, Size, ViewTransform, clamp_scale};
use crate::input::{Button, Cursor, Key, Modifiers, WheelDelta};
use crate::registry::ToolRegistry;
use crate::scene::{self, Scene, SceneContext};
use crate::tool::{Focus, Tool, ToolContext};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// A tool proposes adding, updating or removing an annotation. The host
    /// applies it (or not) and re-supplies the list.
    AnnotationChanged(AnnotationChangedEvent),
    /// Selection changed; `None` means deselected.
    AnnotationSelected { annotation: Option<Annotation> },
    SetCursor { cursor: Cursor },
    RenderNeeded,
}

/// The editor: view transform, the host's annotation list, and the tools.
///
/// Every input handler runs to completion and returns the actions it
/// produced. The active tool is held outside the registry so there is always
/// exactly one.
pub struct EditorCore {
    config: EditorConfig,
    registry: ToolRegistry,
    tool: Box<dyn Tool>,
    transform: ViewTransform,
    annotations: Vec<Annotation>,
    image_size: Option<Size>,
    /// Last pointer position over the surface.
    pointer: Option<Point>,
    cursor: Cursor,
}

impl EditorCore {
    /// Build an editor from a validated config and a tool registry.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] if the config fails validation
    /// and [`EditorError::UnknownTool`] if `default_tool` is not registered.
    pub fn new(config: EditorConfig, mut registry: ToolRegistry) -> Result<Self, EditorError> {
        config.validate()?;
        let tool = registry
            .take_tool(&config.default_tool)
            .ok_or_else(|| EditorError::UnknownTool(config.default_tool.clone()))?;
        let cursor = tool.cursor();
        Ok(Self {
            transform: ViewTransform::new(config.initial_scale, Point::default()),
            config,
            registry,
            tool,
            annotations: Vec::new(),
            image_size: None,
            pointer: None,
            cursor,
        })
    }

    /// Editor with the built-in tools and overlays.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        Self::new(config, ToolRegistry::with_defaults())
    }

    // --- Data inputs ---

    /// Replace the annotation list. The host calls this after applying
    /// changes, and whenever its own list changes.
    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
    }

    /// Natural size of the image, used for the mask bounds.
    pub fn set_image_size(&mut self, size: Size) {
        self.image_size = Some(size);
    }

    /// Host-triggered deletion: emit a `remove` event and drop all state
    /// that refers to `id`. Unknown ids are ignored.
    pub fn remove_annotation(&mut self, id: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(annotation) = find(&self.annotations, id).cloned() else {
            tracing::debug!(%id, "remove of unknown annotation ignored");
            return actions;
        };
        let was_selected = self.focus().selected == Some(id);

        self.run(&mut actions, |_, ctx| ctx.remove_annotation(annotation));
        self.tool.on_annotation_removed(id);
        for tool in self.registry.tools_mut() {
            tool.on_annotation_removed(id);
        }
        if was_selected {
            actions.push(Action::AnnotationSelected { annotation: None });
        }
        self.annotations.retain(|a| a.id != id);
        self.finish(actions)
    }

    // --- Tools ---

    /// Switch the active tool. The old tool drops its gesture and focus.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownTool`] if `name` is not registered.
    pub fn set_tool(&mut self, name: &str) -> Result<Vec<Action>, EditorError> {
        if self.tool.name() == name {
            return Ok(Vec::new());
        }
        let next = self.registry.take_tool(name).ok_or_else(|| EditorError::UnknownTool(name.to_owned()))?;
        tracing::debug!(from = self.tool.name(), to = name, "switching tool");

        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_deactivate(ctx));
        let previous = std::mem::replace(&mut self.tool, next);
        self.registry.register_tool(previous);
        self.run(&mut actions, |tool, ctx| {
            tool.on_activate(ctx);
            ctx.request_render();
        });
        Ok(self.finish(actions))
    }

    /// Name of the active tool.
    #[must_use]
    pub fn tool(&self) -> &'static str {
        self.tool.name()
    }

    /// Names of all tools, active one first.
    #[must_use]
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names = vec![self.tool.name()];
        names.extend(self.registry.tool_names());
        names
    }

    // --- View ---

    /// Back to `initial_scale` with no offset.
    pub fn reset(&mut self) -> Vec<Action> {
        self.set_transform(ViewTransform::new(self.config.initial_scale, Point::default()))
    }

    /// Set the scale, clamped to the configured bounds. The offset is kept.
    pub fn set_scale(&mut self, scale: f64) -> Vec<Action> {
        let scale = clamp_scale(scale, self.config.min_scale, self.config.max_scale);
        self.set_transform(ViewTransform::new(scale, self.transform.offset))
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    fn set_transform(&mut self, transform: ViewTransform) -> Vec<Action> {
        if transform == self.transform {
            return Vec::new();
        }
        self.transform = transform;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Only the primary button starts gestures.
    pub fn on_pointer_down(&mut self, pos: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.pointer = Some(pos);
        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_pointer_down(ctx, pos));
        self.finish(actions)
    }

    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<Action> {
        self.pointer = Some(pos);
        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_pointer_move(ctx, pos));
        if self.crosshair_visible() {
            push_render(&mut actions);
        }
        self.finish(actions)
    }

    pub fn on_pointer_up(&mut self, pos: Point) -> Vec<Action> {
        self.pointer = Some(pos);
        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_pointer_up(ctx, pos));
        self.finish(actions)
    }

    /// The pointer left the surface: the tool ends any gesture at the last
    /// known position and drops its hover.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let Some(pos) = self.pointer.take() else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_pointer_leave(ctx, pos));
        if self.crosshair_wanted() {
            push_render(&mut actions);
        }
        self.finish(actions)
    }

    pub fn on_click(&mut self, pos: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_click(ctx, pos));
        self.finish(actions)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let mut actions = Vec::new();
        self.run(&mut actions, |tool, ctx| tool.on_key_down(ctx, key));
        self.finish(actions)
    }

    /// Zoom around the pointer. Scrolling up zooms in by `zoom_step`, down
    /// zooms out by its inverse. In `ctrl_wheel` mode a wheel without Ctrl
    /// is left to the host (page scroll).
    pub fn on_wheel(&mut self, pos: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        if self.config.scale_mode == ScaleMode::CtrlWheel && !modifiers.ctrl {
            return Vec::new();
        }
        let factor = if delta.dy < 0.0 { self.config.zoom_step } else { self.config.zoom_step.recip() };
        let next = self.transform.zoomed(factor, pos, self.config.min_scale, self.config.max_scale);
        if (next.scale - self.transform.scale).abs() < f64::EPSILON {
            tracing::trace!(scale = self.transform.scale, "zoom clamped at bound");
            return Vec::new();
        }
        tracing::trace!(scale = next.scale, "zoom");
        self.transform = next;
        vec![Action::RenderNeeded]
    }

    // --- Render ---

    /// Everything a renderer needs for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let ctx = SceneContext {
            transform: &self.transform,
            annotations: &self.annotations,
            config: &self.config,
            pointer: self.pointer,
            image_size: self.image_size,
            focus: self.focus(),
            tool: &*self.tool,
        };
        scene::build(&ctx, self.registry.overlays())
    }

    // --- Queries ---

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Cursor last reported to the host.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Active tool's hover and selection, ignoring ids the host removed.
    #[must_use]
    pub fn focus(&self) -> Focus<'_> {
        self.tool.focus().resolved(&self.annotations)
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.focus().selected
    }

    #[must_use]
    pub fn hovered_id(&self) -> Option<&str> {
        self.focus().hovered
    }

    // --- Dispatch ---

    fn run<F>(&mut self, actions: &mut Vec<Action>, f: F)
    where
        F: FnOnce(&mut dyn Tool, &mut ToolContext<'_>),
    {
        let mut ctx =
            ToolContext::new(self.tool.name(), &mut self.transform, &self.annotations, &self.config, actions);
        f(&mut *self.tool, &mut ctx);
    }

    /// Append a cursor change if the tool's cursor moved.
    fn finish(&mut self, mut actions: Vec<Action>) -> Vec<Action> {
        let cursor = self.tool.cursor();
        if cursor != self.cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor { cursor });
        }
        actions
    }

    fn crosshair_wanted(&self) -> bool {
        self.config.show_crosshair && self.tool.shows_crosshair()
    }

    fn crosshair_visible(&self) -> bool {
        self.crosshair_wanted() && self.pointer.is_some()
    }
}

fn push_render(actions: &mut Vec<Action>) {
    if !actions.contains(&Action::RenderNeeded) {
        actions.push(Action::RenderNeeded);
    }
}
