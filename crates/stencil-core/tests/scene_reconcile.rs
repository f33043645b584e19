//! Integration tests: stored blob → scene → canvas reconciliation.
//!
//! Exercises the `stencil-core` pipeline end to end: a JSON blob as written
//! by a previous session, switched to a smaller canvas preset.

use pretty_assertions::assert_eq;
use stencil_core::layout::{FLYER, POSTER, SOCIAL};
use stencil_core::*;

fn load_fixture() -> Scene {
    scene_from_blob(include_str!("fixtures/saved_scene.json")).expect("fixture should parse")
}

fn position_of(scene: &Scene, id: &str) -> Position {
    scene
        .element(ElementId::intern(id))
        .unwrap_or_else(|| panic!("#{id} not found"))
        .position
}

#[test]
fn fixture_loads_all_kinds() {
    let scene = load_fixture();
    assert_eq!(scene.canvas, SOCIAL);
    assert_eq!(scene.len(), 3);

    let kinds: Vec<ElementType> = scene
        .elements()
        .iter()
        .map(|e| e.kind.element_type())
        .collect();
    assert_eq!(
        kinds,
        vec![ElementType::Text, ElementType::Shape, ElementType::Image]
    );

    let headline = scene.element(ElementId::intern("text_0")).unwrap();
    assert_eq!(headline.text(), Some("Summer Sale"));
    assert_eq!(headline.font_size(), Some(32.0));
    assert_eq!(headline.style.color.unwrap().to_hex(), "#FF0000");
}

#[test]
fn social_to_flyer_keeps_everything_on_canvas() {
    let mut scene = load_fixture();
    let moved = reconcile(&mut scene, resolve_canvas_size("flyer"));

    // The headline already fits; the shape and the image do not.
    assert_eq!(moved, 2);
    assert_eq!(position_of(&scene, "text_0"), Position::new(40.0, 60.0));
    assert_eq!(position_of(&scene, "shape_1"), Position::new(512.0, 692.0));
    assert_eq!(position_of(&scene, "image_2"), Position::new(412.0, 200.0));

    for element in scene.elements() {
        assert!(
            element.bounds().fits_within(FLYER),
            "{} overflows the flyer canvas",
            element.id
        );
    }
}

#[test]
fn growing_canvas_moves_nothing() {
    let mut scene = load_fixture();
    let before = scene.clone();

    assert_eq!(reconcile(&mut scene, POSTER), 0);
    assert_eq!(scene.elements, before.elements);
    assert_eq!(scene.canvas, POSTER);
}

#[test]
fn blob_roundtrip_preserves_scene() {
    let scene = load_fixture();
    let blob = scene_to_blob(&scene).unwrap();
    assert_eq!(scene_from_blob(&blob).unwrap(), scene);
}
