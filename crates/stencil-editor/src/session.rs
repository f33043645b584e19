//! The editing session.
//!
//! `EditorSession` owns the scene, its history, the selection binder, the
//! gesture controller and the hit regions derived from the scene. Hosts
//! feed it events and read back state; nothing lives in globals, so any
//! number of sessions can coexist.
//!
//! Control flow for every committed change is the same: mutate the scene,
//! push a history snapshot, rebuild hit regions, refresh the panel.

use crate::config::EditorConfig;
use crate::gestures::{GestureController, GestureEffect};
use crate::history::History;
use crate::input::{InputEvent, Modifiers};
use crate::selection::{PropertyPanel, PropertyUpdate, SelectionBinder};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::storage::BlobStore;
use serde::Serialize;
use stencil_core::model::FONT_SIZE_RANGE;
use stencil_core::*;
use stencil_render::{DrawCmd, HitRegions, HitTarget};

/// What handling one event did, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputResponse {
    /// The scene or selection changed; redraw.
    pub changed: bool,
    /// A history entry was committed.
    pub committed: bool,
    /// The host should suppress the browser's default action.
    pub prevent_default: bool,
}

pub struct EditorSession {
    scene: Scene,
    history: History,
    selection: SelectionBinder,
    gestures: GestureController,
    hit_regions: HitRegions,
    config: EditorConfig,
}

impl EditorSession {
    /// Start a session on an empty canvas of the configured preset.
    pub fn new(config: EditorConfig) -> Result<Self, SceneError> {
        let scene = Scene::new(config.initial_canvas.size());
        Self::with_scene(scene, config)
    }

    /// Start a session from `scene`, which becomes the history baseline.
    pub fn with_scene(scene: Scene, config: EditorConfig) -> Result<Self, SceneError> {
        let history = History::new(&scene, config.history_limit)?;
        let hit_regions = HitRegions::build(&scene, config.handle_size);
        Ok(Self {
            scene,
            history,
            selection: SelectionBinder::new(),
            gestures: GestureController::new(),
            hit_regions,
            config,
        })
    }

    /// Start a session from the saved template in `store`, if there is a
    /// readable one; otherwise start fresh.
    pub fn restore(config: EditorConfig, store: &dyn BlobStore) -> Result<Self, SceneError> {
        let Some(blob) = store.get(&config.storage_key) else {
            return Self::new(config);
        };
        match scene_from_blob(&blob) {
            Ok(scene) => {
                log::debug!(
                    "restored {} element(s) from {:?}",
                    scene.len(),
                    config.storage_key
                );
                Self::with_scene(scene, config)
            }
            Err(e) => {
                log::warn!("ignoring saved template: {e}");
                Self::new(config)
            }
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn hit_regions(&self) -> &HitRegions {
        &self.hit_regions
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected().and_then(|id| self.scene.element(id))
    }

    /// Element currently in in-place text editing, if any.
    pub fn editing(&self) -> Option<ElementId> {
        self.selection.editing()
    }

    pub fn panel(&self) -> &PropertyPanel {
        self.selection.panel()
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        self.hit_regions.hit_test(x, y)
    }

    // ─── Scene editing ───────────────────────────────────────────────────

    /// Add an element of type `ty` with its defaults at the default
    /// position, on top of everything else. Commits and selects it.
    pub fn add_element(&mut self, ty: ElementType) -> ElementId {
        let id = self.scene.mint_id(ty);
        self.scene.push(Element::with_defaults(id, ty));
        log::debug!("add {} {id}", ty.name());
        self.commit();
        self.selection.select(&self.scene, id);
        id
    }

    /// Select an element. Returns `false` if it does not exist.
    pub fn select(&mut self, id: ElementId) -> bool {
        self.selection.select(&self.scene, id)
    }

    /// Apply one sidebar edit to the selected element and commit. Returns
    /// `false` (and commits nothing) when nothing is selected or the edit
    /// does not apply to the element's kind.
    pub fn update_element(&mut self, update: PropertyUpdate) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        let Some(element) = self.scene.element_mut(id) else {
            return false;
        };
        if !apply_property(element, &update) {
            log::debug!("{update:?} does not apply to {id}");
            return false;
        }
        if let PropertyUpdate::Color(color) = update {
            self.selection.mark_color(color);
        }
        self.commit();
        self.selection.refresh(&self.scene);
        true
    }

    /// Double activation on an element: text enters in-place editing.
    pub fn double_activate(&mut self, id: ElementId) -> bool {
        self.selection.double_activate(&self.scene, id)
    }

    /// Finish in-place editing with the edited text. Commits if the text
    /// element still exists.
    pub fn finish_inline_edit(&mut self, content: &str) -> bool {
        let Some(id) = self.selection.end_editing() else {
            return false;
        };
        if !self.selection.select(&self.scene, id) {
            return false;
        }
        self.update_element(PropertyUpdate::Text(content.to_string()))
    }

    /// Switch the canvas to a named preset, pull overflowing elements back
    /// on canvas, and commit. Returns how many elements moved.
    pub fn set_canvas_size(&mut self, name: &str) -> usize {
        let moved = reconcile(&mut self.scene, resolve_canvas_size(name));
        self.commit();
        moved
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Undo one step. Returns `false` at the baseline.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Ok(Some(scene)) => {
                self.replace_scene(scene);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::error!("undo failed: {e}");
                false
            }
        }
    }

    /// Redo one step. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Ok(Some(scene)) => {
                self.replace_scene(scene);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::error!("redo failed: {e}");
                false
            }
        }
    }

    /// Whether leaving now would lose edits (anything beyond the baseline).
    pub fn has_unsaved_edits(&self) -> bool {
        self.history.has_edits()
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle one input event in arrival order.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        match event {
            InputEvent::Key { key, modifiers } => self.handle_key(key, *modifiers),
            InputEvent::DoubleClick { x, y } => {
                let changed = self
                    .hit_test(*x, *y)
                    .is_some_and(|target| self.double_activate(target.element()));
                InputResponse {
                    changed,
                    ..InputResponse::default()
                }
            }
            _ => {
                let hit = match event {
                    InputEvent::PointerDown { x, y, .. } => self.hit_test(*x, *y),
                    _ => None,
                };
                let effects = self.gestures.handle(event, hit, &self.scene);
                self.apply_effects(effects)
            }
        }
    }

    /// Handle a key press. Bound shortcuts suppress the default action
    /// even when they turn out to be no-ops.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> InputResponse {
        let Some(action) = ShortcutMap::resolve(key, modifiers) else {
            return InputResponse::default();
        };
        log::debug!("shortcut {}", action.name());
        let changed = match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
        };
        InputResponse {
            changed,
            committed: false,
            prevent_default: true,
        }
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Draw commands for the editing surface.
    pub fn display_list(&self) -> Vec<DrawCmd> {
        stencil_render::build_display_list(
            &self.scene,
            self.selection.selected(),
            self.config.handle_size,
        )
    }

    /// Standalone preview document of the cleaned scene.
    pub fn export_preview(&self) -> String {
        stencil_render::export_preview_html(&self.scene)
    }

    /// Write the scene to `store` under the configured key.
    pub fn save(&self, store: &mut dyn BlobStore) -> Result<(), SceneError> {
        let blob = scene_to_blob(&self.scene)?;
        store.set(&self.config.storage_key, blob);
        log::debug!("saved {} element(s)", self.scene.len());
        Ok(())
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn apply_effects(&mut self, effects: Vec<GestureEffect>) -> InputResponse {
        let mut response = InputResponse::default();
        for effect in effects {
            match effect {
                GestureEffect::Select(id) => {
                    response.changed |= self.selection.select(&self.scene, id);
                }
                GestureEffect::Move { id, position } => {
                    if let Some(element) = self.scene.element_mut(id) {
                        element.position = position;
                        response.changed = true;
                    }
                }
                GestureEffect::Resize { id, size } => {
                    if let Some(element) = self.scene.element_mut(id) {
                        element.size = size;
                        response.changed = true;
                    }
                }
                GestureEffect::Commit => {
                    self.commit();
                    response.committed = true;
                }
            }
        }
        if response.changed {
            self.rebuild_hit_regions();
        }
        response
    }

    fn commit(&mut self) {
        if let Err(e) = self.history.commit(&self.scene) {
            log::error!("history commit failed: {e}");
        }
        self.rebuild_hit_regions();
    }

    fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.selection.reconcile(&self.scene);
        self.rebuild_hit_regions();
    }

    fn rebuild_hit_regions(&mut self) {
        self.hit_regions = HitRegions::build(&self.scene, self.config.handle_size);
    }
}

/// Apply `update` to `element`. Returns whether anything was applied.
fn apply_property(element: &mut Element, update: &PropertyUpdate) -> bool {
    match update {
        PropertyUpdate::Text(text) => match &mut element.kind {
            ElementKind::Text { content } => {
                *content = text.clone();
                true
            }
            _ => false,
        },
        PropertyUpdate::FontSize(size) => {
            if !element.kind.is_text() || !size.is_finite() {
                return false;
            }
            let (min, max) = FONT_SIZE_RANGE;
            element.style.font_size = Some(size.clamp(min, max));
            true
        }
        PropertyUpdate::Color(color) => {
            element.style.color = Some(*color);
            true
        }
    }
}
