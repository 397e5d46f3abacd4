//! Moving the selected nodes.

use super::context::EditorContext;
use super::state::{StateHandler, StateKind};
use crate::geometry::Point;
use crate::gestures::EditorAction;
use crate::graph::NodeId;
use crate::input::InputEvent;

#[derive(Debug, Clone, Default)]
pub struct DraggingState {
    /// Last pointer position (screen space)
    previous: Point,
}

impl StateHandler for DraggingState {
    fn enter(&mut self, cx: &mut EditorContext, _from: Option<StateKind>) {
        self.previous = cx.pointer_position();
        cx.set_dragging(true);
    }

    fn exit(&mut self, cx: &mut EditorContext) {
        cx.set_dragging(false);
    }

    fn on_pointer_move(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        let current = event.position().unwrap_or_else(|| cx.pointer_position());
        let delta = cx.viewport.delta_screen_to_content(current - self.previous);
        self.previous = current;

        let selected: Vec<NodeId> = cx.graph.selected_nodes().iter().copied().collect();
        cx.graph.move_nodes(&selected, delta);
    }

    fn on_button_up(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        if cx.matches(EditorAction::Drag, event) {
            cx.pop_state();
        }
    }
}
