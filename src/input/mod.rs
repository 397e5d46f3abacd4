//! Input model for the editor.
//!
//! ## Modules
//!
//! - `event` - Raw and composite input events, buttons, keys and modifiers
//! - `coords` - Viewport and screen/content coordinate conversion

pub mod coords;
mod event;

pub use coords::Viewport;
pub use event::{DeviceId, InputEvent, InputKind, Key, Modifiers, MouseButton};
