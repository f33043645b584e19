//! Selection and property-panel binding.
//!
//! Exactly one element is selected once anything has been selected. The
//! panel mirrors what the sidebar widgets should show; the host reads it
//! after every change rather than being called back.

use serde::Serialize;
use stencil_core::{Color, ElementId, Scene};

/// One property edit coming from the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyUpdate {
    /// Replace the text content (text elements only).
    Text(String),
    /// Set the font size in pixels (text elements only).
    FontSize(f32),
    /// Foreground for text, fill for shapes and images.
    Color(Color),
}

impl PropertyUpdate {
    /// Parse a sidebar `(property, value)` pair. Returns `None` for unknown
    /// properties and unparseable values.
    pub fn parse(property: &str, value: &str) -> Option<Self> {
        match property {
            "text" | "content" => Some(Self::Text(value.to_string())),
            "fontSize" => value.trim().parse::<f32>().ok().map(Self::FontSize),
            "color" => Color::from_hex(value).map(Self::Color),
            _ => None,
        }
    }
}

/// Values shown in the sidebar widgets.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPanel {
    /// Text-content field.
    pub text: Option<String>,
    /// Font-size field.
    pub font_size: Option<f32>,
    /// The color option currently marked active.
    pub active_color: Option<Color>,
}

#[derive(Debug, Default)]
pub struct SelectionBinder {
    selected: Option<ElementId>,
    /// Text element being edited in place, if any.
    editing: Option<ElementId>,
    panel: PropertyPanel,
}

impl SelectionBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn editing(&self) -> Option<ElementId> {
        self.editing
    }

    pub fn panel(&self) -> &PropertyPanel {
        &self.panel
    }

    /// Select `id`, replacing any previous selection, and push its values
    /// into the panel. Returns `false` if the element does not exist.
    pub fn select(&mut self, scene: &Scene, id: ElementId) -> bool {
        if !scene.contains(id) {
            return false;
        }
        if self.selected != Some(id) {
            log::debug!("select {id} (was {:?})", self.selected);
            self.editing = None;
        }
        self.selected = Some(id);
        self.refresh(scene);
        true
    }

    /// Re-read the selected element into the panel. Only text elements
    /// feed the text and font-size fields; other kinds leave them as is.
    pub fn refresh(&mut self, scene: &Scene) {
        let Some(element) = self.selected.and_then(|id| scene.element(id)) else {
            return;
        };
        if let Some(text) = element.text() {
            self.panel.text = Some(text.to_string());
            self.panel.font_size = element.font_size();
        }
    }

    /// Double activation: text elements enter in-place editing, other kinds
    /// ignore it. Returns whether editing started.
    pub fn double_activate(&mut self, scene: &Scene, id: ElementId) -> bool {
        match scene.element(id) {
            Some(element) if element.kind.is_text() => {
                self.select(scene, id);
                self.editing = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Leave in-place editing, returning the element that was being edited.
    pub fn end_editing(&mut self) -> Option<ElementId> {
        self.editing.take()
    }

    /// Mark `color` as the active color option.
    pub fn mark_color(&mut self, color: Color) {
        self.panel.active_color = Some(color);
    }

    /// Drop references to elements that no longer exist in `scene` (after
    /// undo, redo or load) and refresh the panel from what remains.
    pub fn reconcile(&mut self, scene: &Scene) {
        if let Some(id) = self.selected
            && !scene.contains(id)
        {
            log::debug!("selection {id} no longer exists, clearing");
            self.selected = None;
            self.panel = PropertyPanel::default();
        }
        if self.editing.is_some_and(|id| !scene.contains(id)) {
            self.editing = None;
        }
        self.refresh(scene);
    }
}
