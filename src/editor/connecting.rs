//! Dragging a pending connection out of a connector.
//!
//! While active, the graph's pending connection follows the pointer. On
//! release the drop target is handed to the graph's `CreateConnection`
//! command; whatever the outcome, the pending connection is gone once the
//! state exits.

use super::context::EditorContext;
use super::state::{StateHandler, StateKind};
use crate::gestures::EditorAction;
use crate::graph::{CommandOutcome, ConnectionTarget, ConnectorId, GraphCommand};
use crate::input::InputEvent;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ConnectingState {
    source: ConnectorId,
}

impl ConnectingState {
    pub fn new(source: ConnectorId) -> Self {
        Self { source }
    }

    pub fn source(&self) -> ConnectorId {
        self.source
    }
}

impl StateHandler for ConnectingState {
    fn enter(&mut self, cx: &mut EditorContext, _from: Option<StateKind>) {
        let position = cx.content_pointer();
        cx.graph.pending_mut().start(self.source, position);
        cx.set_connecting(true);
    }

    fn exit(&mut self, cx: &mut EditorContext) {
        cx.graph.pending_mut().clear();
        cx.set_connecting(false);
    }

    fn on_pointer_move(&mut self, cx: &mut EditorContext, _event: &mut InputEvent) {
        let position = cx.content_pointer();
        let target = cx.target();
        cx.graph.pending_mut().update(position, target);
    }

    fn on_button_up(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        if !cx.matches(EditorAction::Connect, event) {
            return;
        }

        let target = ConnectionTarget::from_hit(cx.target());
        match cx.graph.execute(GraphCommand::CreateConnection(target)) {
            CommandOutcome::Connected(id) => info!(connection = %id, "connection created"),
            outcome => debug!(?outcome, "pending connection dropped"),
        }
        cx.pop_state();
    }
}
