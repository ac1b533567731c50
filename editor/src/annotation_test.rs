#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn sample_rect() -> Annotation {
    Annotation::rect("a", Rect::new(1.0, 2.0, 30.0, 40.0))
}

fn tipped(tip: &str) -> Annotation {
    Annotation { tip: Some(tip.to_owned()), ..sample_rect() }
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn rect_annotation_serializes_with_type_and_data() {
    let value = serde_json::to_value(tipped("button")).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "a",
            "type": "rect",
            "data": { "x1": 1.0, "y1": 2.0, "x2": 30.0, "y2": 40.0 },
            "tip": "button",
        })
    );
}

#[test]
fn tip_is_omitted_when_absent() {
    let value = serde_json::to_value(sample_rect()).unwrap();
    assert!(value.get("tip").is_none());
}

#[test]
fn point_annotation_deserializes() {
    let anno: Annotation = serde_json::from_value(json!({
        "id": "p1",
        "type": "point",
        "data": { "x": 5.0, "y": 6.0 },
    }))
    .unwrap();
    assert_eq!(anno.kind(), AnnotationKind::Point);
    assert_eq!(anno.as_point(), Some(Point::new(5.0, 6.0)));
    assert!(anno.as_rect().is_none());
    assert!(anno.tip.is_none());
}

#[test]
fn unknown_type_is_rejected() {
    let res: Result<Annotation, _> = serde_json::from_value(json!({
        "id": "x",
        "type": "polygon",
        "data": [],
    }));
    assert!(res.is_err());
}

#[test]
fn change_event_serializes_type_field() {
    let event = AnnotationChangedEvent::new("rect", ChangeKind::Add, sample_rect());
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "add");
    assert_eq!(value["tool"], "rect");
    assert_eq!(value["annotation_type"], "rect");
    assert_eq!(value["annotation"]["id"], "a");
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn with_rect_keeps_id_and_tip() {
    let anno = tipped("t");
    let moved = anno.with_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(moved.id, "a");
    assert_eq!(moved.tip.as_deref(), Some("t"));
    assert_eq!(moved.as_rect(), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
}

#[test]
fn new_ids_are_unique() {
    let a = new_annotation_id();
    let b = new_annotation_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}

#[test]
fn find_returns_none_for_missing_id() {
    let list = vec![sample_rect()];
    assert!(find(&list, "a").is_some());
    assert!(find(&list, "missing").is_none());
}

// =============================================================
// apply_change
// =============================================================

#[test]
fn apply_add_appends() {
    let mut list = Vec::new();
    let event = AnnotationChangedEvent::new("rect", ChangeKind::Add, sample_rect());
    assert!(apply_change(&mut list, &event));
    assert_eq!(list.len(), 1);
}

#[test]
fn apply_add_with_existing_id_replaces() {
    let mut list = vec![sample_rect()];
    let replacement = Annotation::rect("a", Rect::new(0.0, 0.0, 9.0, 9.0));
    let event = AnnotationChangedEvent::new("rect", ChangeKind::Add, replacement.clone());
    assert!(apply_change(&mut list, &event));
    assert_eq!(list, vec![replacement]);
}

#[test]
fn apply_update_replaces_in_place() {
    let mut list = vec![Annotation::rect("first", Rect::default()), sample_rect()];
    let updated = sample_rect().with_rect(Rect::new(5.0, 5.0, 6.0, 6.0));
    let event = AnnotationChangedEvent::new("drag", ChangeKind::Update, updated.clone());
    assert!(apply_change(&mut list, &event));
    assert_eq!(list[1], updated);
    assert_eq!(list[0].id, "first");
}

#[test]
fn apply_update_of_missing_id_is_rejected() {
    let mut list = vec![sample_rect()];
    let other = Annotation::rect("zzz", Rect::default());
    let event = AnnotationChangedEvent::new("drag", ChangeKind::Update, other);
    assert!(!apply_change(&mut list, &event));
    assert_eq!(list.len(), 1);
}

#[test]
fn apply_remove_deletes() {
    let mut list = vec![sample_rect()];
    let event = AnnotationChangedEvent::new("drag", ChangeKind::Remove, sample_rect());
    assert!(apply_change(&mut list, &event));
    assert!(list.is_empty());
    assert!(!apply_change(&mut list, &event));
}
