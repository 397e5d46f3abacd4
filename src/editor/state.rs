//! Editor states.
//!
//! A state is one entry of the editor's state stack. Every state exposes the
//! same four hooks; the built-in states are enum variants and embedders can
//! add their own through [`StateHandler`].
//!
//! ## Lifecycle
//!
//! ```text
//! constructed -> enter(previous) -> pointer move / button up ... -> exit() -> dropped
//! ```
//!
//! A push suspends the state below without exiting it. A pop exits the top
//! state; the state that resurfaces gets no second `enter`.

use super::connecting::ConnectingState;
use super::context::EditorContext;
use super::dragging::DraggingState;
use super::panning::{HorizontalPanningState, PanningState, VerticalPanningState};
use super::selecting::SelectingState;
use crate::graph::{ConnectorId, SelectionMode};
use crate::input::InputEvent;
use std::fmt;

/// Hooks implemented by every state. Unimplemented hooks do nothing.
///
/// States never hold a reference to the editor; the editor lends its
/// context to each hook call instead. Transitions requested through
/// `cx.push_state` / `cx.pop_state` run after the hook returns.
pub trait StateHandler: fmt::Debug {
    /// Name reported through [`StateKind::Custom`]
    fn name(&self) -> &'static str {
        "custom"
    }

    fn enter(&mut self, _cx: &mut EditorContext, _from: Option<StateKind>) {}

    fn exit(&mut self, _cx: &mut EditorContext) {}

    fn on_pointer_move(&mut self, _cx: &mut EditorContext, _event: &mut InputEvent) {}

    fn on_button_up(&mut self, _cx: &mut EditorContext, _event: &mut InputEvent) {}
}

/// Discriminant of an [`EditorState`], cheap to copy and compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Panning,
    VerticalPanning,
    HorizontalPanning,
    Selecting,
    Dragging,
    Connecting,
    Custom(&'static str),
}

/// One entry of the state stack
#[derive(Debug)]
pub enum EditorState {
    Panning(PanningState),
    VerticalPanning(VerticalPanningState),
    HorizontalPanning(HorizontalPanningState),
    Selecting(SelectingState),
    Dragging(DraggingState),
    Connecting(ConnectingState),
    Custom(Box<dyn StateHandler>),
}

impl EditorState {
    pub fn panning() -> Self {
        EditorState::Panning(PanningState::default())
    }

    pub fn vertical_panning(wheel_delta: f64) -> Self {
        EditorState::VerticalPanning(VerticalPanningState::new(wheel_delta))
    }

    pub fn horizontal_panning(wheel_delta: f64) -> Self {
        EditorState::HorizontalPanning(HorizontalPanningState::new(wheel_delta))
    }

    pub fn selecting(mode: SelectionMode) -> Self {
        EditorState::Selecting(SelectingState::new(mode))
    }

    pub fn dragging() -> Self {
        EditorState::Dragging(DraggingState::default())
    }

    pub fn connecting(source: ConnectorId) -> Self {
        EditorState::Connecting(ConnectingState::new(source))
    }

    pub fn custom(handler: impl StateHandler + 'static) -> Self {
        EditorState::Custom(Box::new(handler))
    }

    pub fn kind(&self) -> StateKind {
        match self {
            EditorState::Panning(_) => StateKind::Panning,
            EditorState::VerticalPanning(_) => StateKind::VerticalPanning,
            EditorState::HorizontalPanning(_) => StateKind::HorizontalPanning,
            EditorState::Selecting(_) => StateKind::Selecting,
            EditorState::Dragging(_) => StateKind::Dragging,
            EditorState::Connecting(_) => StateKind::Connecting,
            EditorState::Custom(handler) => StateKind::Custom(handler.name()),
        }
    }

    fn handler(&mut self) -> &mut dyn StateHandler {
        match self {
            EditorState::Panning(s) => s,
            EditorState::VerticalPanning(s) => s,
            EditorState::HorizontalPanning(s) => s,
            EditorState::Selecting(s) => s,
            EditorState::Dragging(s) => s,
            EditorState::Connecting(s) => s,
            EditorState::Custom(s) => s.as_mut(),
        }
    }

    pub(crate) fn enter(&mut self, cx: &mut EditorContext, from: Option<StateKind>) {
        self.handler().enter(cx, from);
    }

    pub(crate) fn exit(&mut self, cx: &mut EditorContext) {
        self.handler().exit(cx);
    }

    pub(crate) fn on_pointer_move(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        self.handler().on_pointer_move(cx, event);
    }

    pub(crate) fn on_button_up(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        self.handler().on_button_up(cx, event);
    }
}
