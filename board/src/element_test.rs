use super::*;

fn style() -> ElementStyle {
    ElementStyle::stroke("#000000", 2.0)
}

#[test]
fn stroke_elements_carry_points_only() {
    let el = DrawingElement::stroke("a", ElementKind::Freehand, 1.0, 2.0, style(), 0);
    assert_eq!(el.points, vec![1.0, 2.0]);
    assert!(el.bounds.is_none());
    assert!(el.text.is_none());
}

#[test]
fn shape_elements_carry_bounds_only() {
    let el = DrawingElement::shape("a", ElementKind::Circle, 5.0, 6.0, style(), 0);
    assert!(el.points.is_empty());
    assert_eq!(el.bounds, Some(Bounds { x: 5.0, y: 6.0, width: 0.0, height: 0.0 }));
    assert!(el.text.is_none());
}

#[test]
fn text_elements_carry_text_and_an_anchor() {
    let el = DrawingElement::text("a", 3.0, 4.0, "hello", style(), 0);
    assert!(el.points.is_empty());
    assert_eq!(el.text.as_deref(), Some("hello"));
    assert_eq!(el.bounds.map(|b| (b.x, b.y)), Some((3.0, 4.0)));
}

#[test]
fn stroke_constructor_coerces_non_point_kinds() {
    let el = DrawingElement::stroke("a", ElementKind::Rectangle, 0.0, 0.0, style(), 0);
    assert_eq!(el.kind, ElementKind::Freehand);
}

#[test]
fn shape_constructor_coerces_non_bounds_kinds() {
    let el = DrawingElement::shape("a", ElementKind::Freehand, 0.0, 0.0, style(), 0);
    assert_eq!(el.kind, ElementKind::Rectangle);
}

#[test]
fn kind_families_partition_all_kinds() {
    let kinds = [
        ElementKind::Freehand,
        ElementKind::Rectangle,
        ElementKind::Circle,
        ElementKind::Triangle,
        ElementKind::Line,
        ElementKind::Arrow,
        ElementKind::Text,
        ElementKind::Highlight,
    ];
    for kind in kinds {
        let families =
            [kind.is_point_based(), kind.is_bounds_based(), kind.is_text()].iter().filter(|&&f| f).count();
        assert_eq!(families, 1, "{kind:?} must belong to exactly one family");
    }
}

#[test]
fn drawing_tools_map_to_their_kind() {
    use wire::Tool;
    assert_eq!(ElementKind::from_tool(Tool::Pen), Some(ElementKind::Freehand));
    assert_eq!(ElementKind::from_tool(Tool::Highlighter), Some(ElementKind::Highlight));
    assert_eq!(ElementKind::from_tool(Tool::Circle), Some(ElementKind::Circle));
    assert_eq!(ElementKind::from_tool(Tool::Eraser), None);
    assert_eq!(ElementKind::from_tool(Tool::Select), None);
    assert_eq!(ElementKind::from_tool(Tool::Hand), None);
}

#[test]
fn extend_appends_points_to_strokes() {
    let mut el = DrawingElement::stroke("a", ElementKind::Freehand, 0.0, 0.0, style(), 0);
    el.extend_to(1.0, 1.0);
    el.extend_to(2.0, 3.0);
    assert_eq!(el.points, vec![0.0, 0.0, 1.0, 1.0, 2.0, 3.0]);
}

#[test]
fn extend_skips_repeated_positions() {
    let mut el = DrawingElement::stroke("a", ElementKind::Freehand, 1.0, 1.0, style(), 0);
    el.extend_to(1.0, 1.0);
    assert_eq!(el.points, vec![1.0, 1.0]);
}

#[test]
fn extend_leaves_shape_bounds_to_the_gesture_owner() {
    let mut el = DrawingElement::shape("a", ElementKind::Rectangle, 10.0, 10.0, style(), 0);
    el.extend_to(4.0, 16.0);
    assert_eq!(el.bounds, Some(Bounds::anchored(10.0, 10.0)));
}

#[test]
fn bounds_between_normalizes_any_corner_pair() {
    let b = Bounds::between(10.0, 10.0, 4.0, 16.0);
    assert_eq!(b, Bounds { x: 4.0, y: 10.0, width: 6.0, height: 6.0 });

    // Dragging back across the anchor keeps the anchor corner fixed.
    let b = Bounds::between(10.0, 10.0, 18.0, 2.0);
    assert_eq!(b, Bounds { x: 10.0, y: 2.0, width: 8.0, height: 8.0 });
}

#[test]
fn extend_moves_a_text_anchor() {
    let mut el = DrawingElement::text("a", 0.0, 0.0, "hi", style(), 0);
    el.extend_to(7.0, 8.0);
    assert_eq!(el.bounds.map(|b| (b.x, b.y)), Some((7.0, 8.0)));
}

#[test]
fn retransmit_requires_same_id_and_near_time() {
    let a = DrawingElement::stroke("a", ElementKind::Freehand, 0.0, 0.0, style(), 1000);
    let near = DrawingElement::stroke("a", ElementKind::Freehand, 0.0, 0.0, style(), 1040);
    let far = DrawingElement::stroke("a", ElementKind::Freehand, 0.0, 0.0, style(), 2000);
    let other = DrawingElement::stroke("b", ElementKind::Freehand, 0.0, 0.0, style(), 1000);

    assert!(a.is_retransmit_of(&near));
    assert!(!a.is_retransmit_of(&far));
    assert!(!a.is_retransmit_of(&other));
}

#[test]
fn element_serde_round_trip() {
    let el = DrawingElement::shape("shape-1", ElementKind::Triangle, 1.0, 2.0, style(), 99);
    let json = serde_json::to_string(&el).expect("serialize");
    let back: DrawingElement = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, el);
}

#[test]
fn absent_optional_fields_are_not_serialized() {
    let el = DrawingElement::stroke("a", ElementKind::Freehand, 0.0, 0.0, style(), 0);
    let json = serde_json::to_string(&el).expect("serialize");
    assert!(!json.contains("bounds"));
    assert!(!json.contains("text"));
    assert!(!json.contains("fill"));
}
