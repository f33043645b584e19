pub mod config;
pub mod gestures;
pub mod history;
pub mod input;
pub mod selection;
pub mod session;
pub mod shortcuts;
pub mod storage;

pub use config::{DEFAULT_STORAGE_KEY, EditorConfig};
pub use gestures::{GestureController, GestureEffect, GestureState};
pub use history::History;
pub use input::{InputEvent, Modifiers, PointerButton, PointerId};
pub use selection::{PropertyPanel, PropertyUpdate, SelectionBinder};
pub use session::{EditorSession, InputResponse};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use storage::{BlobStore, MemoryStore};
