//! Editor configuration.

use serde::{Deserialize, Serialize};
use stencil_core::CanvasPreset;
use stencil_render::DEFAULT_HANDLE_SIZE;

/// Storage key the saved template lives under.
pub const DEFAULT_STORAGE_KEY: &str = "savedTemplate";

/// Session settings. Every field has a default, so a partial JSON object
/// (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Key of the saved-template blob.
    pub storage_key: String,
    /// Canvas preset for a fresh session.
    pub initial_canvas: CanvasPreset,
    /// Maximum undo depth, baseline included. `None` keeps every entry.
    pub history_limit: Option<usize>,
    /// Side length of the resize handle in canvas pixels.
    pub handle_size: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            initial_canvas: CanvasPreset::default(),
            history_limit: None,
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
