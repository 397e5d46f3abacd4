//! Push/pop discipline for editor states.

use super::state::{EditorState, StateKind};
use crate::error::{EditorError, EditorResult};

/// Ordered states, last = active
#[derive(Debug, Default)]
pub struct StateStack {
    states: Vec<EditorState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: EditorState) {
        self.states.push(state);
    }

    /// Remove the active state. Popping an empty stack is an error: it means
    /// some state was exited twice.
    pub fn pop(&mut self) -> EditorResult<EditorState> {
        self.states.pop().ok_or(EditorError::StackUnderflow)
    }

    pub fn top(&self) -> Option<&EditorState> {
        self.states.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut EditorState> {
        self.states.last_mut()
    }

    pub fn top_kind(&self) -> Option<StateKind> {
        self.top().map(EditorState::kind)
    }

    /// Kind of the state directly beneath the active one
    pub fn below_top(&self) -> Option<StateKind> {
        self.states
            .len()
            .checked_sub(2)
            .map(|i| self.states[i].kind())
    }

    /// Kinds from bottom to top
    pub fn kinds(&self) -> Vec<StateKind> {
        self.states.iter().map(EditorState::kind).collect()
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, kind: StateKind) -> bool {
        self.states.iter().any(|s| s.kind() == kind)
    }
}
