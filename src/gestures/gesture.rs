//! Gesture predicates.
//!
//! A `Gesture` decides whether a logical input chord occurred for a given hit
//! target and event. Leaf gestures look at one raw event; when handed a
//! composite bundle they succeed if any sub-event satisfies them. Composite
//! gestures (`Multi`) recurse structurally instead of flattening the bundle.

use super::bindings::{GestureBindings, GestureRef};
use super::multi::{MatchStrategy, MultiGesture};
use crate::constants::MAX_GESTURE_DEPTH;
use crate::graph::HitTarget;
use crate::input::{InputEvent, InputKind, Key, Modifiers, MouseButton};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Everything a gesture may consult besides the event itself.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    /// What the pointer was over when the event arrived
    pub target: HitTarget,
    /// Table used to resolve `Gesture::Ref`
    pub bindings: &'a GestureBindings,
    depth: u8,
}

impl<'a> GestureContext<'a> {
    pub fn new(target: HitTarget, bindings: &'a GestureBindings) -> Self {
        Self {
            target,
            bindings,
            depth: 0,
        }
    }

    /// Context for resolving one more level of indirection, or `None` once
    /// the nesting limit is reached.
    pub(crate) fn nested(&self) -> Option<Self> {
        (self.depth < MAX_GESTURE_DEPTH).then(|| Self {
            depth: self.depth + 1,
            ..*self
        })
    }
}

/// Embedder-defined gesture logic.
pub trait InputGesture: fmt::Debug + Send + Sync {
    /// Must be free of side effects on editor state.
    fn matches(&self, cx: &GestureContext<'_>, event: &InputEvent) -> bool;
}

/// How the held modifier set is compared with the required one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierMatch {
    /// Held modifiers must equal the required set
    #[default]
    Exact,
    /// Held modifiers must include the required set; extra keys are ignored
    Contains,
}

impl ModifierMatch {
    #[inline]
    pub fn satisfied(self, required: Modifiers, held: Modifiers) -> bool {
        match self {
            ModifierMatch::Exact => held == required,
            ModifierMatch::Contains => held.contains(required),
        }
    }
}

fn contains_match() -> ModifierMatch {
    ModifierMatch::Contains
}

fn yes() -> bool {
    true
}

/// A mouse button pressed or released with a modifier chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseGesture {
    pub button: MouseButton,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub strictness: ModifierMatch,
    /// Match releases on the button alone
    #[serde(default = "yes")]
    pub ignore_modifiers_on_release: bool,
}

impl MouseGesture {
    fn matches_single(&self, event: &InputEvent) -> bool {
        match event.kind {
            InputKind::ButtonDown { button, .. } => {
                button == self.button && self.strictness.satisfied(self.modifiers, event.modifiers)
            }
            InputKind::ButtonUp { button, .. } => {
                button == self.button
                    && (self.ignore_modifiers_on_release
                        || self.strictness.satisfied(self.modifiers, event.modifiers))
            }
            _ => false,
        }
    }
}

/// A wheel tick with a modifier chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelGesture {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default = "contains_match")]
    pub strictness: ModifierMatch,
}

impl WheelGesture {
    fn matches_single(&self, event: &InputEvent) -> bool {
        matches!(event.kind, InputKind::Wheel { .. })
            && self.strictness.satisfied(self.modifiers, event.modifiers)
    }
}

/// A key press with a modifier chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGesture {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub strictness: ModifierMatch,
}

impl KeyGesture {
    fn matches_single(&self, event: &InputEvent) -> bool {
        match event.kind {
            InputKind::KeyDown { key } => {
                key == self.key && self.strictness.satisfied(self.modifiers, event.modifiers)
            }
            _ => false,
        }
    }
}

/// A logical input chord.
///
/// Built through the explicit factory functions (`Gesture::mouse`,
/// `Gesture::wheel`, `Gesture::any`, ...). `Gesture::None` is the inert
/// placeholder for unmapped slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// Never matches
    #[default]
    None,
    Mouse(MouseGesture),
    Wheel(WheelGesture),
    Key(KeyGesture),
    Multi(MultiGesture),
    /// Resolves the current binding of an action at match time
    Ref(GestureRef),
    #[serde(skip)]
    Custom(Arc<dyn InputGesture>),
}

impl Gesture {
    /// Button chord with exactly `modifiers` held
    pub fn mouse(button: MouseButton, modifiers: Modifiers) -> Self {
        Gesture::Mouse(MouseGesture {
            button,
            modifiers,
            strictness: ModifierMatch::Exact,
            ignore_modifiers_on_release: true,
        })
    }

    /// Wheel chord with at least `modifiers` held
    pub fn wheel(modifiers: Modifiers) -> Self {
        Gesture::Wheel(WheelGesture {
            modifiers,
            strictness: ModifierMatch::Contains,
        })
    }

    /// Key chord with exactly `modifiers` held
    pub fn key(key: Key, modifiers: Modifiers) -> Self {
        Gesture::Key(KeyGesture {
            key,
            modifiers,
            strictness: ModifierMatch::Exact,
        })
    }

    /// Matches iff every child matches
    pub fn all(gestures: Vec<Gesture>) -> Self {
        Gesture::Multi(MultiGesture::new(MatchStrategy::All, gestures))
    }

    /// Matches iff at least one child matches
    pub fn any(gestures: Vec<Gesture>) -> Self {
        Gesture::Multi(MultiGesture::new(MatchStrategy::Any, gestures))
    }

    /// Follows whatever is bound to `action` when matched
    pub fn binding(action: super::EditorAction) -> Self {
        Gesture::Ref(GestureRef::new(action))
    }

    pub fn custom(gesture: impl InputGesture + 'static) -> Self {
        Gesture::Custom(Arc::new(gesture))
    }

    /// Override how modifiers are compared. No effect on non-leaf gestures.
    pub fn with_strictness(mut self, strictness: ModifierMatch) -> Self {
        match &mut self {
            Gesture::Mouse(g) => g.strictness = strictness,
            Gesture::Wheel(g) => g.strictness = strictness,
            Gesture::Key(g) => g.strictness = strictness,
            _ => {}
        }
        self
    }

    pub fn matches(&self, cx: &GestureContext<'_>, event: &InputEvent) -> bool {
        match self {
            Gesture::None => false,
            Gesture::Multi(multi) => multi.matches(cx, event),
            Gesture::Ref(reference) => reference.matches(cx, event),
            leaf => match event.bundle() {
                Some(events) => events.iter().any(|e| leaf.matches(cx, e)),
                None => leaf.matches_single(cx, event),
            },
        }
    }

    fn matches_single(&self, cx: &GestureContext<'_>, event: &InputEvent) -> bool {
        match self {
            Gesture::Mouse(g) => g.matches_single(event),
            Gesture::Wheel(g) => g.matches_single(event),
            Gesture::Key(g) => g.matches_single(event),
            Gesture::Custom(g) => g.matches(cx, event),
            Gesture::None | Gesture::Multi(_) | Gesture::Ref(_) => false,
        }
    }
}
