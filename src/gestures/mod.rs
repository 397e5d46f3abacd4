//! Gesture matching engine.
//!
//! ## Modules
//!
//! - `gesture` - Leaf gestures (mouse, wheel, key), the `Gesture` enum and
//!   the `InputGesture` extension trait
//! - `multi` - `All` / `Any` combinations
//! - `bindings` - `EditorAction` keys, `GestureRef` handles and the
//!   rebindable `GestureBindings` table

mod bindings;
mod gesture;
mod multi;

pub use bindings::{EditorAction, GestureBindings, GestureRef};
pub use gesture::{
    Gesture, GestureContext, InputGesture, KeyGesture, ModifierMatch, MouseGesture, WheelGesture,
};
pub use multi::{MatchStrategy, MultiGesture};
