//! Error types for editor operations
//!
//! Stack underflow and malformed input bundles are programmer errors and are
//! surfaced as `EditorError`. Schema rejections are recoverable and reported
//! as `ConnectionError` without disturbing the dispatch loop.

use crate::graph::{ConnectorId, NodeId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while dispatching input or mutating the editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// A pop was requested while no state was active
    #[error("state stack underflow: pop requested on an empty stack")]
    StackUnderflow,

    /// A composite input event was built without any sub-events
    #[error("composite input event must contain at least one event")]
    EmptyComposite,

    /// IO error while reading or writing settings
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher failure
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Reasons a connection request can be refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// No pending connection source was set
    #[error("no pending connection source")]
    NoSource,

    /// Referenced connector does not exist
    #[error("unknown connector {0}")]
    UnknownConnector(ConnectorId),

    /// Referenced node does not exist
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Source and target resolve to the same connector
    #[error("cannot connect a connector to itself")]
    SameConnector,

    /// Source and target belong to the same node
    #[error("cannot connect two connectors of node {0}")]
    SameNode(NodeId),

    /// Both endpoints are inputs, or both are outputs
    #[error("connectors {0} and {1} have the same direction")]
    SameDirection(ConnectorId, ConnectorId),

    /// The endpoints are already linked
    #[error("connectors {0} and {1} are already connected")]
    AlreadyConnected(ConnectorId, ConnectorId),

    /// A node target had no free connector facing the source
    #[error("node {0} has no compatible connector")]
    NoCompatibleConnector(NodeId),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
