//! Input abstraction layer.
//!
//! Normalizes browser pointer and keyboard events into a unified
//! `InputEvent` enum consumed by the gesture controller and the session.
//! Coordinates are canvas-local: the host subtracts the canvas origin.

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Either of the two "command" modifiers (Ctrl, or ⌘ on macOS).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Which pointer button was pressed. Mirrors `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_index(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Identifies one physical pointer (mouse, finger, pen).
/// Mirrors `PointerEvent.pointerId`.
pub type PointerId = i32;

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
        pointer_id: PointerId,
        modifiers: Modifiers,
    },

    /// Pointer moved.
    PointerMove {
        x: f32,
        y: f32,
        pointer_id: PointerId,
        modifiers: Modifiers,
    },

    /// Pointer released.
    PointerUp {
        x: f32,
        y: f32,
        pointer_id: PointerId,
        modifiers: Modifiers,
    },

    /// Double activation (double-click / double-tap).
    DoubleClick { x: f32, y: f32 },

    /// Keyboard shortcut candidate.
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    /// Primary-button press from the mouse (pointer id 1 in browsers).
    pub fn mouse_down(x: f32, y: f32) -> Self {
        Self::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
            pointer_id: 1,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn mouse_move(x: f32, y: f32) -> Self {
        Self::PointerMove {
            x,
            y,
            pointer_id: 1,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn mouse_up(x: f32, y: f32) -> Self {
        Self::PointerUp {
            x,
            y,
            pointer_id: 1,
            modifiers: Modifiers::NONE,
        }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y, .. }
            | Self::PointerUp { x, y, .. }
            | Self::DoubleClick { x, y } => Some((*x, *y)),
            Self::Key { .. } => None,
        }
    }

    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::PointerDown { pointer_id, .. }
            | Self::PointerMove { pointer_id, .. }
            | Self::PointerUp { pointer_id, .. } => Some(*pointer_id),
            _ => None,
        }
    }
}
