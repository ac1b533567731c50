use super::*;
use crate::engine::Action;
use crate::overlay::RectMaskOverlay;
use crate::tool::ToolContext;
use crate::tools::{DragTool, RectTool};

fn annos() -> Vec<Annotation> {
    vec![
        Annotation { tip: Some("cat".to_owned()), ..Annotation::rect("a", Rect::new(10.0, 10.0, 50.0, 50.0)) },
        Annotation::rect("b", Rect::new(100.0, 100.0, 150.0, 150.0)),
        Annotation::point("p", Point::new(5.0, 7.0)),
    ]
}

fn box_for<'s>(scene: &'s Scene, id: &str) -> Option<&'s BoxView> {
    scene.boxes.iter().find(|b| b.id.as_deref() == Some(id))
}

fn ctx<'a>(
    transform: &'a ViewTransform,
    annotations: &'a [Annotation],
    config: &'a EditorConfig,
    tool: &'a dyn Tool,
) -> SceneContext<'a> {
    SceneContext {
        transform,
        annotations,
        config,
        pointer: None,
        image_size: None,
        focus: tool.focus().resolved(annotations),
        tool,
    }
}

/// Feed one event to a drag tool outside the engine.
fn drive(tool: &mut DragTool, annotations: &[Annotation], f: impl FnOnce(&mut DragTool, &mut ToolContext<'_>)) {
    let mut transform = ViewTransform::default();
    let config = EditorConfig::default();
    let mut actions: Vec<Action> = Vec::new();
    let mut ctx = ToolContext::new("drag", &mut transform, annotations, &config, &mut actions);
    f(tool, &mut ctx);
}

#[test]
fn line_style_rules() {
    let none = Focus::default();
    assert_eq!(line_style("a", none), LineStyle::Normal);

    let hover_a = Focus { hovered: Some("a"), selected: None };
    assert_eq!(line_style("a", hover_a), LineStyle::Normal);
    assert_eq!(line_style("b", hover_a), LineStyle::Dimmed);

    let hover_a_select_b = Focus { hovered: Some("a"), selected: Some("b") };
    assert_eq!(line_style("b", hover_a_select_b), LineStyle::Normal);
    assert_eq!(line_style("c", hover_a_select_b), LineStyle::Dimmed);

    let select_only = Focus { hovered: None, selected: Some("b") };
    assert_eq!(line_style("a", select_only), LineStyle::Normal);
}

#[test]
fn base_scene_converts_to_container_space() {
    let transform = ViewTransform::new(2.0, Point::new(1.0, 1.0));
    let list = annos();
    let config = EditorConfig::default();
    let tool = DragTool::new();
    let scene = Scene::base(&ctx(&transform, &list, &config, &tool));

    assert_eq!(scene.boxes.len(), 2);
    assert_eq!(box_for(&scene, "a").map(|b| b.rect), Some(Rect::new(21.0, 21.0, 101.0, 101.0)));
    assert_eq!(box_for(&scene, "a").map(|b| b.mode), Some(RectMode::None));
    assert_eq!(scene.points, vec![PointView { id: "p".into(), at: Point::new(11.0, 15.0) }]);
    assert_eq!(scene.tool, "drag");
    assert_eq!(scene.image_bounds, None);
}

#[test]
fn image_bounds_follow_transform() {
    let transform = ViewTransform::new(0.5, Point::new(20.0, 0.0));
    let config = EditorConfig::default();
    let tool = DragTool::new();
    let mut c = ctx(&transform, &[], &config, &tool);
    c.image_size = Some(Size { width: 400.0, height: 200.0 });
    assert_eq!(Scene::base(&c).image_bounds, Some(Rect::new(20.0, 0.0, 220.0, 100.0)));
}

#[test]
fn drag_tool_sets_modes_and_dims_unhovered() {
    let transform = ViewTransform::default();
    let list = annos();
    let config = EditorConfig::default();
    let mut tool = DragTool::new();
    drive(&mut tool, &list, |t, c| t.on_click(c, Point::new(120.0, 120.0)));
    drive(&mut tool, &list, |t, c| t.on_pointer_move(c, Point::new(20.0, 20.0)));

    let scene = build(&ctx(&transform, &list, &config, &tool), &[]);
    let a = box_for(&scene, "a").unwrap();
    let b = box_for(&scene, "b").unwrap();
    assert_eq!(a.mode, RectMode::Move);
    assert_eq!(b.mode, RectMode::Resize);
    assert_eq!(a.line, LineStyle::Normal);
    assert_eq!(b.line, LineStyle::Normal);
    // Something is selected, so the hovered tip stays hidden.
    assert_eq!(a.tip, None);
}

#[test]
fn tip_shows_for_hover_without_selection() {
    let transform = ViewTransform::default();
    let list = annos();
    let config = EditorConfig::default();
    let mut tool = DragTool::new();
    drive(&mut tool, &list, |t, c| t.on_pointer_move(c, Point::new(20.0, 20.0)));

    let scene = build(&ctx(&transform, &list, &config, &tool), &[]);
    assert_eq!(box_for(&scene, "a").and_then(|b| b.tip.clone()), Some("cat".to_owned()));
    assert_eq!(box_for(&scene, "b").map(|b| b.line), Some(LineStyle::Dimmed));
}

#[test]
fn live_session_rect_shown_while_dragging() {
    let transform = ViewTransform::default();
    let list = annos();
    let config = EditorConfig::default();
    let mut tool = DragTool::new();
    drive(&mut tool, &list, |t, c| t.on_pointer_down(c, Point::new(120.0, 120.0)));
    drive(&mut tool, &list, |t, c| t.on_pointer_move(c, Point::new(125.0, 130.0)));

    let scene = build(&ctx(&transform, &list, &config, &tool), &[]);
    assert_eq!(box_for(&scene, "b").map(|b| b.rect), Some(Rect::new(105.0, 110.0, 155.0, 160.0)));
}

#[test]
fn rect_tool_draft_is_an_unnamed_box() {
    let mut transform = ViewTransform::default();
    let config = EditorConfig::default();
    let mut tool = RectTool::new();
    let mut actions = Vec::new();
    let mut tc = ToolContext::new("rect", &mut transform, &[], &config, &mut actions);
    tool.on_pointer_down(&mut tc, Point::new(40.0, 40.0));
    tool.on_pointer_move(&mut tc, Point::new(10.0, 20.0));

    let transform = ViewTransform::default();
    let scene = build(&ctx(&transform, &[], &config, &tool), &[]);
    assert_eq!(scene.boxes.len(), 1);
    assert_eq!(scene.boxes[0].id, None);
    assert_eq!(scene.boxes[0].rect, Rect::new(40.0, 40.0, 10.0, 20.0));
    assert_eq!(scene.cursor, Cursor::Crosshair);
}

#[test]
fn overlays_append_layers() {
    let transform = ViewTransform::default();
    let list = annos();
    let config = EditorConfig { enable_mask: true, ..EditorConfig::default() };
    let tool = DragTool::new();
    let overlays: Vec<Box<dyn Overlay>> = vec![Box::new(RectMaskOverlay)];
    let scene = build(&ctx(&transform, &list, &config, &tool), &overlays);
    assert_eq!(scene.layers.len(), 1);
    assert!(matches!(scene.layers[0], Layer::Mask(_)));
}

#[test]
fn scene_serializes_for_renderers() {
    let transform = ViewTransform::default();
    let list = annos();
    let config = EditorConfig::default();
    let tool = DragTool::new();
    let scene = Scene::base(&ctx(&transform, &list, &config, &tool));
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["cursor"], "grab");
    assert_eq!(json["boxes"][0]["mode"], "none");
    assert_eq!(json["boxes"][0]["line"], "normal");
}
