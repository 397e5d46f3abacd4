//! Commands exposed to the state machine and the host UI.
//!
//! `Graph::can_execute` is the only place read-only mode is enforced; the
//! mutating operations themselves do not check it.

use super::model::{ConnectionId, ConnectionTarget, ConnectorId, NodeId};
use crate::error::ConnectionError;

/// A user-level graph operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphCommand {
    DeleteSelection,
    CommentSelection,
    DisconnectConnector(ConnectorId),
    /// Commit the pending connection onto the drop target, if any
    CreateConnection(Option<ConnectionTarget>),
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The enablement predicate failed; nothing changed
    Disabled,
    /// Nodes were removed
    Deleted(usize),
    /// A comment node wraps the selection
    Commented(NodeId),
    /// Connections were removed from a connector
    Disconnected(usize),
    Connected(ConnectionId),
    /// The schema refused the connection; the pending connection was cleared
    Rejected(ConnectionError),
}

impl CommandOutcome {
    pub fn is_disabled(&self) -> bool {
        matches!(self, CommandOutcome::Disabled)
    }
}
