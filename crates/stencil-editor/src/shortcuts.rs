//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The command
//! modifier is either Ctrl or ⌘, so the same map serves every platform.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

impl ShortcutAction {
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
        }
    }
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`). With Shift held
    /// browsers may report `"Z"`, so both cases match. Returns `None` if
    /// the combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        if !modifiers.command() {
            return None;
        }
        match key {
            "z" | "Z" if modifiers.shift => Some(ShortcutAction::Redo),
            "z" | "Z" => Some(ShortcutAction::Undo),
            _ => None,
        }
    }
}
