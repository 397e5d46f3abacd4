//! Everything a state hook may read or mutate.
//!
//! The editor splits itself into a [`StateStack`](super::StateStack) and an
//! `EditorContext`, and lends the context to the active state's hooks. States
//! request transitions through [`EditorContext::push_state`] and
//! [`EditorContext::pop_state`]; the editor applies them in request order
//! once the hook returns.

use super::state::{EditorState, StateKind};
use crate::constants::{RIGHT_CLICK_PAN_THRESHOLD, WHEEL_PAN_SPEED};
use crate::geometry::{Point, Rect};
use crate::gestures::{EditorAction, GestureBindings};
use crate::graph::{Graph, HitTarget};
use crate::input::{InputEvent, Viewport};
use crate::settings::EditorSettings;
use std::collections::VecDeque;

#[derive(Debug)]
pub(crate) enum Transition {
    Push(EditorState),
    Pop,
}

#[derive(Debug)]
pub struct EditorContext {
    pub viewport: Viewport,
    pub graph: Graph,
    pub bindings: GestureBindings,

    // Interaction flags, maintained by the states' enter/exit hooks
    is_panning: bool,
    is_selecting: bool,
    is_dragging: bool,
    is_connecting: bool,

    pub disable_panning: bool,
    pub right_click_pan_threshold: f64,
    pub wheel_pan_speed: f64,

    /// Last known pointer position, screen space
    pointer: Point,
    /// What was under the pointer when the current event arrived
    target: HitTarget,
    /// Kind of the state beneath the one whose hook is running
    below: Option<StateKind>,
    /// Content-space rubber band of an active box selection
    selection_rect: Option<Rect>,

    transitions: VecDeque<Transition>,
}

impl EditorContext {
    pub fn new(graph: Graph) -> Self {
        Self {
            viewport: Viewport::default(),
            graph,
            bindings: GestureBindings::default(),
            is_panning: false,
            is_selecting: false,
            is_dragging: false,
            is_connecting: false,
            disable_panning: false,
            right_click_pan_threshold: RIGHT_CLICK_PAN_THRESHOLD,
            wheel_pan_speed: WHEEL_PAN_SPEED,
            pointer: Point::ORIGIN,
            target: HitTarget::Canvas,
            below: None,
            selection_rect: None,
            transitions: VecDeque::new(),
        }
    }

    pub(crate) fn apply_settings(&mut self, settings: &EditorSettings) {
        self.disable_panning = settings.disable_panning;
        self.right_click_pan_threshold = settings.right_click_pan_threshold;
        self.wheel_pan_speed = settings.wheel_pan_speed;
        self.bindings.replace_with(&settings.gestures);
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Request `state` be pushed once the current hook returns
    pub fn push_state(&mut self, state: EditorState) {
        self.transitions.push_back(Transition::Push(state));
    }

    /// Request the active state be popped once the current hook returns
    pub fn pop_state(&mut self) {
        self.transitions.push_back(Transition::Pop);
    }

    pub(crate) fn next_transition(&mut self) -> Option<Transition> {
        self.transitions.pop_front()
    }

    pub(crate) fn discard_transitions(&mut self) {
        self.transitions.clear();
    }

    /// Kind of the state directly beneath the one being run
    pub fn state_below(&self) -> Option<StateKind> {
        self.below
    }

    pub(crate) fn set_state_below(&mut self, below: Option<StateKind>) {
        self.below = below;
    }

    // ========================================================================
    // Pointer and gestures
    // ========================================================================

    pub fn pointer_position(&self) -> Point {
        self.pointer
    }

    pub fn content_pointer(&self) -> Point {
        self.viewport.screen_to_content(self.pointer)
    }

    pub(crate) fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn target(&self) -> HitTarget {
        self.target
    }

    pub(crate) fn set_target(&mut self, target: HitTarget) {
        self.target = target;
    }

    /// Whether `event` over the current target triggers `action`
    pub fn matches(&self, action: EditorAction, event: &InputEvent) -> bool {
        self.bindings.matches(action, self.target, event)
    }

    // ========================================================================
    // Flags
    // ========================================================================

    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    pub fn set_panning(&mut self, value: bool) {
        self.is_panning = value;
    }

    pub fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    pub fn set_selecting(&mut self, value: bool) {
        self.is_selecting = value;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn set_dragging(&mut self, value: bool) {
        self.is_dragging = value;
    }

    pub fn is_connecting(&self) -> bool {
        self.is_connecting
    }

    pub fn set_connecting(&mut self, value: bool) {
        self.is_connecting = value;
    }

    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect
    }

    pub fn set_selection_rect(&mut self, rect: Option<Rect>) {
        self.selection_rect = rect;
    }
}
