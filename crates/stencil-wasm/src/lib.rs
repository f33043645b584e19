//! WASM bridge for Stencil: exposes the template editing session to
//! JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the DOM:
//! it forwards pointer and key events here and draws from the display list
//! returned by `get_display_list_json`.

mod console;
mod local_storage;

pub use local_storage::LocalStorage;

use serde::Serialize;
use std::str::FromStr;
use stencil_core::{ElementId, ElementType};
use stencil_editor::{
    EditorConfig, EditorSession, InputEvent, InputResponse, Modifiers, PointerButton,
    PropertyUpdate,
};
use wasm_bindgen::prelude::*;

/// The main WASM-facing editor controller.
///
/// Holds the editing session and the `localStorage` store it saves into.
/// All interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct TemplateCanvas {
    session: EditorSession,
    store: LocalStorage,
}

#[wasm_bindgen]
impl TemplateCanvas {
    /// Create a controller, restoring the saved template if there is one.
    ///
    /// `config_json` is an optional `EditorConfig` object; an unparseable
    /// config falls back to the defaults. `log_level` is a `log` level name
    /// (`"debug"`, `"trace"`, ...), default `"warn"`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, log_level: Option<String>) -> Result<TemplateCanvas, JsValue> {
        console::init(console::parse_level(log_level.as_deref()));

        let config = parse_config(config_json.as_deref());
        let store = LocalStorage;
        let session = EditorSession::restore(config, &store)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { session, store })
    }

    // ─── Scene editing ───────────────────────────────────────────────────

    /// Add an element (`"text"`, `"shape"` or `"image"`). Returns the new
    /// element id, or an empty string for an unknown type.
    pub fn add_element(&mut self, kind: &str) -> String {
        match ElementType::from_str(kind) {
            Ok(ty) => self.session.add_element(ty).as_str().to_string(),
            Err(e) => {
                log::warn!("{e}");
                String::new()
            }
        }
    }

    /// Apply a sidebar edit (`"text"`, `"fontSize"`, `"color"`) to the
    /// selected element. Returns `true` if anything changed.
    pub fn update_property(&mut self, property: &str, value: &str) -> bool {
        match PropertyUpdate::parse(property, value) {
            Some(update) => self.session.update_element(update),
            None => {
                log::debug!("ignoring {property}={value:?}");
                false
            }
        }
    }

    /// Select an element by id. Returns `true` if it exists.
    pub fn select_by_id(&mut self, element_id: &str) -> bool {
        self.session.select(ElementId::intern(element_id))
    }

    /// Commit the text typed during in-place editing.
    pub fn finish_inline_edit(&mut self, content: &str) -> bool {
        self.session.finish_inline_edit(content)
    }

    /// Switch the canvas preset. Returns how many elements were moved back
    /// inside the new bounds.
    pub fn set_canvas_size(&mut self, name: &str) -> u32 {
        self.session.set_canvas_size(name) as u32
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle pointer down. Returns a JSON string:
    /// `{"changed":bool, "committed":bool, "preventDefault":bool}`
    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        button: i16,
        pointer_id: i32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let event = InputEvent::PointerDown {
            x,
            y,
            button: PointerButton::from_index(button),
            pointer_id,
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.dispatch(&event)
    }

    /// Handle pointer move. Same JSON shape as `handle_pointer_down`.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        pointer_id: i32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let event = InputEvent::PointerMove {
            x,
            y,
            pointer_id,
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.dispatch(&event)
    }

    /// Handle pointer up. Same JSON shape as `handle_pointer_down`.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_up(
        &mut self,
        x: f32,
        y: f32,
        pointer_id: i32,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let event = InputEvent::PointerUp {
            x,
            y,
            pointer_id,
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.dispatch(&event)
    }

    /// Handle a double click. Returns `true` if in-place text editing
    /// started; the host then shows its editor over `get_editing_id()`.
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> bool {
        self.session
            .handle_input(&InputEvent::DoubleClick { x, y })
            .changed
    }

    /// Handle a keyboard event. Same JSON shape as `handle_pointer_down`;
    /// the host calls `preventDefault()` when `preventDefault` is set.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> String {
        let response = self.session.handle_key(key, modifiers(shift, ctrl, alt, meta));
        response_json(&response)
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Draw commands for the editing surface as a JSON array.
    pub fn get_display_list_json(&self) -> String {
        to_json(&self.session.display_list(), "[]")
    }

    /// Property-panel values as JSON:
    /// `{"text":string|null, "fontSize":number|null, "activeColor":...}`
    pub fn get_panel_json(&self) -> String {
        let panel = self.session.panel();
        let view = PanelView {
            text: panel.text.as_deref(),
            font_size: panel.font_size,
            active_color: panel.active_color.map(|c| c.to_hex()),
        };
        to_json(&view, "{}")
    }

    /// The whole scene as JSON, in the storage format.
    pub fn get_scene_json(&self) -> String {
        stencil_core::scene_to_blob(self.session.scene()).unwrap_or_else(|e| {
            log::error!("scene encode failed: {e}");
            "{}".to_string()
        })
    }

    /// Currently selected element id, or empty string if none.
    pub fn get_selected_id(&self) -> String {
        self.session
            .selected()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// Element in in-place editing, or empty string if none.
    pub fn get_editing_id(&self) -> String {
        self.session
            .editing()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn get_canvas_width(&self) -> f32 {
        self.session.scene().canvas.width
    }

    pub fn get_canvas_height(&self) -> f32 {
        self.session.scene().canvas.height
    }

    /// Standalone HTML preview of the template without editing chrome.
    pub fn export_preview(&self) -> String {
        self.session.export_preview()
    }

    /// Write the template to `localStorage`. Returns `false` on failure.
    pub fn save(&mut self) -> bool {
        match self.session.save(&mut self.store) {
            Ok(()) => true,
            Err(e) => {
                log::error!("save failed: {e}");
                false
            }
        }
    }

    /// Whether leaving the page would lose edits (for `beforeunload`).
    pub fn has_unsaved_edits(&self) -> bool {
        self.session.has_unsaved_edits()
    }
}

impl TemplateCanvas {
    fn dispatch(&mut self, event: &InputEvent) -> String {
        response_json(&self.session.handle_input(event))
    }
}

/// Panel state as the page sees it: colors as hex strings.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PanelView<'a> {
    text: Option<&'a str>,
    font_size: Option<f32>,
    active_color: Option<String>,
}

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

fn parse_config(json: Option<&str>) -> EditorConfig {
    let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
        return EditorConfig::default();
    };
    EditorConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("invalid editor config, using defaults: {e}");
        EditorConfig::default()
    })
}

fn response_json(response: &InputResponse) -> String {
    to_json(response, r#"{"changed":false,"committed":false,"preventDefault":false}"#)
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stencil_core::CanvasPreset;

    #[test]
    fn config_fallbacks() {
        assert_eq!(parse_config(None), EditorConfig::default());
        assert_eq!(parse_config(Some("  ")), EditorConfig::default());
        assert_eq!(parse_config(Some("[1, 2]")), EditorConfig::default());
        assert_eq!(
            parse_config(Some(r#"{"initialCanvas":"poster"}"#)).initial_canvas,
            CanvasPreset::Poster
        );
    }

    #[test]
    fn response_shape() {
        let json = response_json(&InputResponse {
            changed: true,
            committed: false,
            prevent_default: true,
        });
        assert_eq!(
            json,
            r#"{"changed":true,"committed":false,"preventDefault":true}"#
        );
    }

    #[test]
    fn panel_view_uses_hex_colors() {
        let view = PanelView {
            text: Some("Hi"),
            font_size: Some(16.0),
            active_color: stencil_core::Color::from_hex("#ff0000").map(|c| c.to_hex()),
        };
        assert_eq!(
            to_json(&view, "{}"),
            r##"{"text":"Hi","fontSize":16.0,"activeColor":"#FF0000"}"##
        );
    }
}
