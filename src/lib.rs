//! Graphboard - interaction core for node-graph editors.
//!
//! Recognizes pointer and keyboard gestures, arbitrates them through a stack
//! of editor states and applies the result to an observable graph
//! view-model that a render host draws.
//!
//! ## Modules
//!
//! - `input` - Input events, modifier sets, viewport coordinates
//! - `gestures` - Composable gesture predicates and the rebindable action table
//! - `editor` - The state machine: panning, selecting, dragging, connecting
//! - `graph` - Nodes, connectors, connections, selection and commands
//! - `settings` / `settings_watcher` - JSON settings with hot reload
//! - `spatial_index` - R-tree for hit testing and box selection
//! - `perf` - Hot-path timing behind the `profiling` feature

pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod gestures;
pub mod graph;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;

pub use editor::{Editor, EditorContext, EditorState, StateHandler, StateKind};
pub use error::{ConnectionError, EditorError, EditorResult};
pub use geometry::{Point, Rect, Size, Vector, point, size, vector};
pub use gestures::{EditorAction, Gesture, GestureBindings, GestureRef, ModifierMatch};
pub use graph::{
    CommandOutcome, ConnectionTarget, ConnectorFlow, Graph, GraphChange, GraphCommand, HitTarget,
    NodeId, SelectionMode,
};
pub use input::{InputEvent, Key, Modifiers, MouseButton, Viewport};
pub use settings::{EditorSettings, SettingsProvider, SharedSettings};
