//! Drag and resize gestures.
//!
//! A single-active-gesture state machine: the controller is idle, dragging
//! one element, or resizing one element. It never touches the scene
//! itself; it turns input into `GestureEffect`s that the session applies.
//!
//! A gesture belongs to the pointer that started it. Events from any other
//! pointer are ignored until that pointer is released.

use crate::input::{InputEvent, PointerButton, PointerId};
use stencil_core::{ElementId, Position, Scene, Size, clamp_to_canvas};
use stencil_render::HitTarget;

/// What the controller is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        id: ElementId,
        pointer_id: PointerId,
        /// Cursor minus element top-left, fixed at gesture start.
        offset_x: f32,
        offset_y: f32,
    },
    Resizing {
        id: ElementId,
        pointer_id: PointerId,
        start_x: f32,
        start_y: f32,
        start_size: Size,
    },
}

impl GestureState {
    fn owner(&self) -> Option<PointerId> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { pointer_id, .. } | GestureState::Resizing { pointer_id, .. } => {
                Some(*pointer_id)
            }
        }
    }
}

/// A change requested by a gesture step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    /// Make this element the selection.
    Select(ElementId),
    /// Place the element's top-left corner here.
    Move { id: ElementId, position: Position },
    /// Set the element's size.
    Resize { id: ElementId, size: Size },
    /// The gesture ended; capture a history entry.
    Commit,
}

#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, GestureState::Resizing { .. })
    }

    /// Handle a pointer event. `hit` is the target under a pointer-down;
    /// it is ignored for other events.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        hit: Option<HitTarget>,
        scene: &Scene,
    ) -> Vec<GestureEffect> {
        match *event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                pointer_id,
                ..
            } => {
                let mut effects = Vec::new();
                match self.state.owner() {
                    Some(owner) if owner != pointer_id => {
                        log::trace!("pointer {pointer_id} ignored, gesture owned by {owner}");
                        return effects;
                    }
                    // Same pointer pressed again without a release reaching
                    // us: close the stale gesture before starting over.
                    Some(_) => {
                        self.state = GestureState::Idle;
                        effects.push(GestureEffect::Commit);
                    }
                    None => {}
                }
                if button != PointerButton::Primary {
                    return effects;
                }
                if let Some(target) = hit {
                    effects.extend(self.begin(target, x, y, pointer_id, scene));
                }
                effects
            }
            InputEvent::PointerMove { x, y, pointer_id, .. } => {
                if self.state.owner() != Some(pointer_id) {
                    return vec![];
                }
                self.track(x, y, scene)
            }
            InputEvent::PointerUp { pointer_id, .. } => {
                if self.state.owner() != Some(pointer_id) {
                    return vec![];
                }
                self.state = GestureState::Idle;
                vec![GestureEffect::Commit]
            }
            InputEvent::DoubleClick { .. } | InputEvent::Key { .. } => vec![],
        }
    }

    fn begin(
        &mut self,
        target: HitTarget,
        x: f32,
        y: f32,
        pointer_id: PointerId,
        scene: &Scene,
    ) -> Option<GestureEffect> {
        let element = scene.element(target.element())?;
        self.state = match target {
            HitTarget::Body(id) => GestureState::Dragging {
                id,
                pointer_id,
                offset_x: x - element.position.x,
                offset_y: y - element.position.y,
            },
            HitTarget::ResizeHandle(id) => GestureState::Resizing {
                id,
                pointer_id,
                start_x: x,
                start_y: y,
                start_size: element.size,
            },
        };
        log::debug!("gesture start {:?}", self.state);
        Some(GestureEffect::Select(element.id))
    }

    fn track(&mut self, x: f32, y: f32, scene: &Scene) -> Vec<GestureEffect> {
        match self.state {
            GestureState::Idle => vec![],
            GestureState::Dragging {
                id,
                offset_x,
                offset_y,
                ..
            } => {
                let Some(element) = scene.element(id) else {
                    // Element vanished mid-gesture (e.g. undo): drop it.
                    self.state = GestureState::Idle;
                    return vec![];
                };
                let target = Position::new(x - offset_x, y - offset_y);
                let position = clamp_to_canvas(target, element.size, scene.canvas);
                vec![GestureEffect::Move { id, position }]
            }
            GestureState::Resizing {
                id,
                start_x,
                start_y,
                start_size,
                ..
            } => {
                if !scene.contains(id) {
                    self.state = GestureState::Idle;
                    return vec![];
                }
                let size = Size::new(
                    start_size.width + (x - start_x),
                    start_size.height + (y - start_y),
                )
                .floored();
                vec![GestureEffect::Resize { id, size }]
            }
        }
    }
}
