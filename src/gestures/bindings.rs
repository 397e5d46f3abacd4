//! Rebindable gesture table.
//!
//! Logical editor actions are keys into a `GestureBindings` table. A
//! `GestureRef` is a stable handle naming an action; it holds no gesture of
//! its own and looks the current binding up every time it is matched, so
//! rebinding an action is visible on the very next match to every holder of
//! the handle (including composite gestures that embed it).

use super::gesture::{Gesture, GestureContext};
use crate::graph::HitTarget;
use crate::input::{InputEvent, Key, Modifiers, MouseButton};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static UNBOUND: Gesture = Gesture::None;

/// Logical actions the editor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorAction {
    /// Drag the viewport
    Pan,
    /// Any selection chord
    Select,
    /// Selection replaces the current one
    SelectReplace,
    /// Selection is added to the current one
    SelectAppend,
    /// Selection toggles membership
    SelectInvert,
    /// Selection is removed from the current one
    SelectRemove,
    /// Drag selected nodes
    Drag,
    /// Start a connection from a connector
    Connect,
    /// Wheel panning along the vertical axis
    PanVertical,
    /// Wheel panning along the horizontal axis
    PanHorizontal,
    /// Wheel zoom around the pointer
    Zoom,
    DeleteSelection,
    CommentSelection,
    /// Abort the active interaction
    Cancel,
}

impl EditorAction {
    pub const ALL: [EditorAction; 14] = [
        EditorAction::Pan,
        EditorAction::Select,
        EditorAction::SelectReplace,
        EditorAction::SelectAppend,
        EditorAction::SelectInvert,
        EditorAction::SelectRemove,
        EditorAction::Drag,
        EditorAction::Connect,
        EditorAction::PanVertical,
        EditorAction::PanHorizontal,
        EditorAction::Zoom,
        EditorAction::DeleteSelection,
        EditorAction::CommentSelection,
        EditorAction::Cancel,
    ];

    /// Binding shipped with the editor
    pub fn default_gesture(self) -> Gesture {
        let none = Modifiers::empty();
        match self {
            EditorAction::Pan => Gesture::mouse(MouseButton::Secondary, none),
            EditorAction::Select => Gesture::any(vec![
                Gesture::binding(EditorAction::SelectReplace),
                Gesture::binding(EditorAction::SelectAppend),
                Gesture::binding(EditorAction::SelectInvert),
                Gesture::binding(EditorAction::SelectRemove),
            ]),
            EditorAction::SelectReplace => Gesture::mouse(MouseButton::Primary, none),
            EditorAction::SelectAppend => Gesture::mouse(MouseButton::Primary, Modifiers::SHIFT),
            EditorAction::SelectInvert => Gesture::mouse(MouseButton::Primary, Modifiers::CONTROL),
            EditorAction::SelectRemove => Gesture::mouse(MouseButton::Primary, Modifiers::ALT),
            EditorAction::Drag => Gesture::binding(EditorAction::Select),
            EditorAction::Connect => Gesture::mouse(MouseButton::Primary, none),
            EditorAction::PanVertical => Gesture::wheel(none),
            EditorAction::PanHorizontal => Gesture::wheel(Modifiers::SHIFT),
            EditorAction::Zoom => Gesture::wheel(Modifiers::CONTROL),
            EditorAction::DeleteSelection => Gesture::key(Key::Delete, none),
            EditorAction::CommentSelection => Gesture::key(Key::Char('g'), Modifiers::CONTROL),
            EditorAction::Cancel => Gesture::key(Key::Escape, none),
        }
    }
}

/// Stable handle to whatever gesture is currently bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestureRef {
    pub action: EditorAction,
}

impl GestureRef {
    pub fn new(action: EditorAction) -> Self {
        Self { action }
    }

    /// Matches with the binding current at call time. Self-referential
    /// chains deeper than the nesting limit never match.
    pub fn matches(&self, cx: &GestureContext<'_>, event: &InputEvent) -> bool {
        match cx.nested() {
            Some(nested) => cx.bindings.get(self.action).matches(&nested, event),
            None => {
                tracing::warn!(action = ?self.action, "gesture binding nests too deeply, ignoring");
                false
            }
        }
    }
}

/// Action -> gesture table.
///
/// Deserializing a partial table keeps the default binding for every action
/// the input does not mention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BTreeMap<EditorAction, Gesture>", into = "BTreeMap<EditorAction, Gesture>")]
pub struct GestureBindings {
    map: BTreeMap<EditorAction, Gesture>,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            map: EditorAction::ALL
                .iter()
                .map(|&action| (action, action.default_gesture()))
                .collect(),
        }
    }
}

impl From<BTreeMap<EditorAction, Gesture>> for GestureBindings {
    fn from(overrides: BTreeMap<EditorAction, Gesture>) -> Self {
        let mut bindings = Self::default();
        bindings.map.extend(overrides);
        bindings
    }
}

impl From<GestureBindings> for BTreeMap<EditorAction, Gesture> {
    fn from(bindings: GestureBindings) -> Self {
        bindings.map
    }
}

impl GestureBindings {
    /// A table where nothing is bound
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Current binding, or the inert placeholder when unbound
    pub fn get(&self, action: EditorAction) -> &Gesture {
        self.map.get(&action).unwrap_or(&UNBOUND)
    }

    /// Rebind `action`, returning the previous gesture
    pub fn set(&mut self, action: EditorAction, gesture: Gesture) -> Option<Gesture> {
        tracing::debug!(?action, "rebinding gesture");
        self.map.insert(action, gesture)
    }

    /// Drop the binding; the action becomes inert
    pub fn unbind(&mut self, action: EditorAction) -> Option<Gesture> {
        self.map.remove(&action)
    }

    pub fn reset(&mut self, action: EditorAction) {
        self.map.insert(action, action.default_gesture());
    }

    /// Whether `action` is triggered by `event` over `target`
    pub fn matches(&self, action: EditorAction, target: HitTarget, event: &InputEvent) -> bool {
        GestureRef::new(action).matches(&GestureContext::new(target, self), event)
    }

    /// Replace every binding with those of `other`
    pub fn replace_with(&mut self, other: &GestureBindings) {
        self.map.clone_from(&other.map);
    }

    pub fn iter(&self) -> impl Iterator<Item = (EditorAction, &Gesture)> {
        self.map.iter().map(|(action, gesture)| (*action, gesture))
    }
}
