//! Inkmark Core Library
//!
//! Platform-agnostic state model for the Inkmark text-annotation canvas:
//! immutable snapshots of text labels, a linear undo/redo history, and the
//! edit-session state machine that turns gestures into committed snapshots.
//! Rendering and toolbar widgets live in the embedding application; this
//! crate is the single source of truth they draw from.

pub mod canvas;
pub mod history;
pub mod hooks;
pub mod input;
pub mod session;
pub mod shapes;

pub use canvas::Snapshot;
pub use history::{History, MAX_HISTORY};
pub use hooks::{RegistryError, TriggerHooks, TriggerRegistry};
pub use input::Gesture;
pub use session::{EditSession, InputMode, PendingInput};
pub use shapes::{
    FontFamily, SerializableColor, ShapeId, ShapeIdGen, StyleDelta, TextAlign, TextShape,
    TextStyle,
};
