//! Integration tests: saving, restoring, canvas presets and export.

use pretty_assertions::assert_eq;
use stencil_core::*;
use stencil_editor::{BlobStore, DEFAULT_STORAGE_KEY, EditorConfig, EditorSession, MemoryStore};
use stencil_render::DrawCmd;

fn store_with(blob: &str) -> MemoryStore {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut store = MemoryStore::new();
    store.set(DEFAULT_STORAGE_KEY, blob.to_string());
    store
}

fn restored() -> EditorSession {
    let store = store_with(include_str!("fixtures/social_template.json"));
    EditorSession::restore(EditorConfig::default(), &store).unwrap()
}

#[test]
fn restore_uses_saved_scene_as_baseline() {
    let s = restored();
    assert_eq!(s.scene().len(), 3);
    assert_eq!(s.scene().canvas, CanvasSize::new(1080.0, 1080.0));
    assert_eq!(s.history().depth(), 1);
    assert!(!s.has_unsaved_edits());
    assert_eq!(s.selected(), None);
}

#[test]
fn ids_minted_after_restore_are_fresh() {
    let mut s = restored();
    let id = s.add_element(ElementType::Shape);
    assert_eq!(id.as_str(), "shape_3");
}

#[test]
fn save_then_restore() {
    let mut store = store_with("");
    let mut s = EditorSession::new(EditorConfig::default()).unwrap();
    s.add_element(ElementType::Text);
    s.add_element(ElementType::Image);
    s.save(&mut store).unwrap();

    let reopened = EditorSession::restore(EditorConfig::default(), &store).unwrap();
    assert_eq!(reopened.scene(), s.scene());
}

#[test]
fn corrupt_blob_starts_empty() {
    let store = store_with("{not json");
    let s = EditorSession::restore(EditorConfig::default(), &store).unwrap();
    assert!(s.scene().is_empty());
    assert_eq!(s.scene().canvas, CanvasSize::new(612.0, 792.0));
}

#[test]
fn missing_blob_uses_configured_preset() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EditorConfig::from_json(r#"{"initialCanvas":"poster"}"#).unwrap();
    let s = EditorSession::restore(config, &MemoryStore::new()).unwrap();
    assert!(s.scene().is_empty());
    assert_eq!(s.scene().canvas, CanvasSize::new(1296.0, 1728.0));
}

#[test]
fn shrinking_canvas_pulls_elements_back() {
    let mut s = restored();
    let moved = s.set_canvas_size("flyer");
    assert_eq!(moved, 1);
    assert_eq!(s.history().depth(), 2);

    let shape = s.scene().element(ElementId::intern("shape_1")).unwrap();
    assert_eq!(shape.position, Position::new(462.0, 692.0));
    for element in s.scene().elements() {
        assert!(element.bounds().fits_within(s.scene().canvas));
    }
}

#[test]
fn unknown_preset_falls_back_to_flyer() {
    let mut s = restored();
    s.set_canvas_size("billboard");
    assert_eq!(s.scene().canvas, CanvasSize::new(612.0, 792.0));
}

#[test]
fn export_has_no_editing_chrome() {
    let mut s = restored();
    assert!(s.select(ElementId::intern("shape_1")));

    let display = s.display_list();
    assert!(display.iter().any(|c| matches!(c, DrawCmd::SelectionOutline { .. })));

    let html = s.export_preview();
    assert!(html.contains("<title>Template Export Preview</title>"));
    assert!(html.contains("Grand &lt;Opening&gt;"));
    assert!(html.contains("/img/banner.png"));
    assert!(!html.contains("outline"));
}
