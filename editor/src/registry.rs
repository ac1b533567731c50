//! Tool and overlay registry.
//!
//! Tools are looked up by name, overlays are kept sorted by z index. Both
//! are open sets: anything implementing [`Tool`] or [`Overlay`] can be
//! registered, and registering a name that already exists replaces it.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::overlay::{CrosshairOverlay, Overlay, RectMaskOverlay};
use crate::tool::Tool;
use crate::tools::{DragTool, PointTool, RectTool};

#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
    overlays: Vec<Box<dyn Overlay>>,
}

impl ToolRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in tools (`drag`, `rect`, `point`) and overlays (mask, crosshair).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_tool(Box::new(DragTool::new()));
        registry.register_tool(Box::new(RectTool::new()));
        registry.register_tool(Box::new(PointTool::new()));
        registry.register_overlay(Box::new(RectMaskOverlay));
        registry.register_overlay(Box::new(CrosshairOverlay));
        registry
    }

    /// Add a tool, returning the one it replaced.
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> Option<Box<dyn Tool>> {
        let name = tool.name();
        if let Some(slot) = self.tools.iter_mut().find(|t| t.name() == name) {
            tracing::debug!(name, "replacing tool");
            return Some(std::mem::replace(slot, tool));
        }
        self.tools.push(tool);
        None
    }

    /// Add an overlay, keeping z order. Returns the one it replaced.
    pub fn register_overlay(&mut self, overlay: Box<dyn Overlay>) -> Option<Box<dyn Overlay>> {
        let name = overlay.name();
        let replaced = self
            .overlays
            .iter()
            .position(|o| o.name() == name)
            .map(|idx| self.overlays.remove(idx));
        // Stable: equal z keeps registration order.
        let at = self.overlays.partition_point(|o| o.z_index() <= overlay.z_index());
        self.overlays.insert(at, overlay);
        replaced
    }

    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| &**t)
    }

    /// Remove and return the tool named `name`.
    pub fn take_tool(&mut self, name: &str) -> Option<Box<dyn Tool>> {
        let idx = self.tools.iter().position(|t| t.name() == name)?;
        Some(self.tools.remove(idx))
    }

    pub fn tools_mut(&mut self) -> impl Iterator<Item = &mut (dyn Tool + 'static)> {
        self.tools.iter_mut().map(|t| &mut **t)
    }

    #[must_use]
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Overlays in ascending z order.
    #[must_use]
    pub fn overlays(&self) -> &[Box<dyn Overlay>] {
        &self.overlays
    }
}
