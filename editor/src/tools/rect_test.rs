#![allow(clippy::float_cmp)]

use super::*;
use crate::annotation::ChangeKind;
use crate::config::EditorConfig;
use crate::engine::Action;
use crate::geometry::ViewTransform;

fn gesture(tool: &mut RectTool, transform: &mut ViewTransform, from: Point, to: Point) -> Vec<Action> {
    let config = EditorConfig::default();
    let mut actions = Vec::new();
    let mut ctx = ToolContext::new("rect", transform, &[], &config, &mut actions);
    tool.on_pointer_down(&mut ctx, from);
    tool.on_pointer_move(&mut ctx, to);
    tool.on_pointer_up(&mut ctx, to);
    actions
}

fn added(actions: &[Action]) -> Vec<Annotation> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::AnnotationChanged(e) if e.change == ChangeKind::Add => Some(e.annotation.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn draw_normalizes_and_adds() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::default();
    let actions = gesture(&mut tool, &mut t, Point::new(120.0, 90.0), Point::new(20.0, 10.0));
    let added = added(&actions);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].as_rect(), Some(Rect::new(20.0, 10.0, 120.0, 90.0)));
    assert!(tool.draft().is_none());
}

#[test]
fn add_is_followed_by_selection_of_same_annotation() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::default();
    let actions = gesture(&mut tool, &mut t, Point::new(0.0, 0.0), Point::new(50.0, 50.0));
    let add_pos = actions.iter().position(|a| matches!(a, Action::AnnotationChanged(_))).unwrap();
    let sel_pos = actions.iter().position(|a| matches!(a, Action::AnnotationSelected { .. })).unwrap();
    assert!(add_pos < sel_pos);
    let Action::AnnotationSelected { annotation: Some(selected) } = &actions[sel_pos] else {
        panic!("expected a selection");
    };
    assert_eq!(selected.id, added(&actions)[0].id);
}

#[test]
fn narrow_draw_is_discarded() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::default();
    let actions = gesture(&mut tool, &mut t, Point::new(0.0, 0.0), Point::new(9.0, 100.0));
    assert!(added(&actions).is_empty());
    assert!(!actions.iter().any(|a| matches!(a, Action::AnnotationSelected { .. })));
}

#[test]
fn short_draw_is_discarded() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::default();
    let actions = gesture(&mut tool, &mut t, Point::new(0.0, 0.0), Point::new(100.0, 9.5));
    assert!(added(&actions).is_empty());
}

#[test]
fn threshold_is_in_container_space() {
    let mut tool = RectTool::new();
    // 12px on screen is only 1.2 image pixels at scale 10, still a draw.
    let mut t = ViewTransform::new(10.0, Point::default());
    let actions = gesture(&mut tool, &mut t, Point::new(0.0, 0.0), Point::new(12.0, 12.0));
    let added = added(&actions);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].as_rect(), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
}

#[test]
fn result_is_in_image_space() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::new(2.0, Point::new(10.0, 20.0));
    let actions = gesture(&mut tool, &mut t, Point::new(10.0, 20.0), Point::new(110.0, 220.0));
    assert_eq!(added(&actions)[0].as_rect(), Some(Rect::new(0.0, 0.0, 50.0, 100.0)));
}

#[test]
fn up_without_down_is_noop() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::default();
    let config = EditorConfig::default();
    let mut actions = Vec::new();
    let mut ctx = ToolContext::new("rect", &mut t, &[], &config, &mut actions);
    tool.on_pointer_up(&mut ctx, Point::new(5.0, 5.0));
    assert!(actions.is_empty());
}

#[test]
fn draft_follows_pointer() {
    let mut tool = RectTool::new();
    let mut t = ViewTransform::default();
    let config = EditorConfig::default();
    let mut actions = Vec::new();
    let mut ctx = ToolContext::new("rect", &mut t, &[], &config, &mut actions);
    tool.on_pointer_down(&mut ctx, Point::new(30.0, 30.0));
    tool.on_pointer_move(&mut ctx, Point::new(10.0, 5.0));
    assert_eq!(tool.draft(), Some(Rect::new(30.0, 30.0, 10.0, 5.0)));
}

#[test]
fn draw_tool_requests_crosshair() {
    let tool = RectTool::new();
    assert!(tool.shows_crosshair());
    assert_eq!(tool.cursor(), Cursor::Crosshair);
}
