pub mod error;
pub mod id;
pub mod layout;
pub mod model;
pub mod snapshot;

pub use error::SceneError;
pub use id::ElementId;
pub use layout::{CanvasPreset, clamp_to_canvas, reconcile, resolve_canvas_size};
pub use model::*;
pub use snapshot::{Snapshot, scene_from_blob, scene_to_blob};
