use super::*;
use crate::input::Cursor;
use crate::scene::{Layer, SceneContext};

struct Named(&'static str, Cursor);

impl Tool for Named {
    fn name(&self) -> &'static str {
        self.0
    }

    fn cursor(&self) -> Cursor {
        self.1
    }
}

struct Z(&'static str, i32);

impl Overlay for Z {
    fn name(&self) -> &'static str {
        self.0
    }

    fn z_index(&self) -> i32 {
        self.1
    }

    fn layer(&self, _ctx: &SceneContext<'_>) -> Option<Layer> {
        None
    }
}

fn overlay_names(registry: &ToolRegistry) -> Vec<&'static str> {
    registry.overlays().iter().map(|o| o.name()).collect()
}

#[test]
fn defaults_register_builtin_tools() {
    let registry = ToolRegistry::with_defaults();
    assert_eq!(registry.tool_names(), vec!["drag", "rect", "point"]);
    assert_eq!(overlay_names(&registry), vec!["rect_mask", "crosshair"]);
}

#[test]
fn lookup_by_name() {
    let registry = ToolRegistry::with_defaults();
    assert_eq!(registry.tool("rect").map(|t| t.cursor()), Some(Cursor::Crosshair));
    assert!(registry.tool("lasso").is_none());
}

#[test]
fn custom_tool_registers_without_engine_changes() {
    let mut registry = ToolRegistry::with_defaults();
    assert!(registry.register_tool(Box::new(Named("lasso", Cursor::Crosshair))).is_none());
    assert_eq!(registry.tool_names(), vec!["drag", "rect", "point", "lasso"]);
}

#[test]
fn same_name_replaces_in_place() {
    let mut registry = ToolRegistry::with_defaults();
    let old = registry.register_tool(Box::new(Named("rect", Cursor::Default)));
    assert_eq!(old.map(|t| t.cursor()), Some(Cursor::Crosshair));
    assert_eq!(registry.tool_names(), vec!["drag", "rect", "point"]);
    assert_eq!(registry.tool("rect").map(|t| t.cursor()), Some(Cursor::Default));
}

#[test]
fn overlays_sorted_by_z() {
    let mut registry = ToolRegistry::new();
    registry.register_overlay(Box::new(Z("top", 30)));
    registry.register_overlay(Box::new(Z("bottom", 1)));
    registry.register_overlay(Box::new(Z("middle", 15)));
    registry.register_overlay(Box::new(Z("middle-late", 15)));
    assert_eq!(overlay_names(&registry), vec!["bottom", "middle", "middle-late", "top"]);
}

#[test]
fn overlay_replacement_moves_to_new_z() {
    let mut registry = ToolRegistry::with_defaults();
    let old = registry.register_overlay(Box::new(Z("rect_mask", 99)));
    assert_eq!(old.map(|o| o.z_index()), Some(10));
    assert_eq!(overlay_names(&registry), vec!["crosshair", "rect_mask"]);
}

#[test]
fn take_removes_tool() {
    let mut registry = ToolRegistry::with_defaults();
    let drag = registry.take_tool("drag");
    assert_eq!(drag.map(|t| t.name()), Some("drag"));
    assert!(registry.take_tool("drag").is_none());
    assert_eq!(registry.tools_mut().count(), 2);
}
