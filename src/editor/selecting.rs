//! Rubber-band selection.
//!
//! The band is kept in content space so that panning underneath an active
//! selection keeps its anchor on the content. The selection is only applied
//! when the select chord is released; popping the state any other way
//! discards it.

use super::context::EditorContext;
use super::state::{StateHandler, StateKind};
use crate::geometry::{Point, Rect};
use crate::gestures::EditorAction;
use crate::graph::SelectionMode;
use crate::input::InputEvent;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SelectingState {
    mode: SelectionMode,
    start: Point,
    end: Point,
}

impl SelectingState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            start: Point::ORIGIN,
            end: Point::ORIGIN,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

impl StateHandler for SelectingState {
    fn enter(&mut self, cx: &mut EditorContext, _from: Option<StateKind>) {
        self.start = cx.content_pointer();
        self.end = self.start;
        cx.set_selecting(true);
        cx.set_selection_rect(Some(self.rect()));
    }

    fn exit(&mut self, cx: &mut EditorContext) {
        cx.set_selecting(false);
        cx.set_selection_rect(None);
    }

    fn on_pointer_move(&mut self, cx: &mut EditorContext, _event: &mut InputEvent) {
        self.end = cx.content_pointer();
        cx.set_selection_rect(Some(self.rect()));
    }

    fn on_button_up(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        if !cx.matches(EditorAction::Select, event) {
            return;
        }

        self.end = cx.content_pointer();
        let hits = cx.graph.nodes_in_rect(&self.rect());
        debug!(mode = ?self.mode, hits = hits.len(), "applying box selection");
        cx.graph.apply_selection(self.mode, &hits);
        cx.pop_state();
    }
}
