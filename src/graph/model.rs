//! Entities stored in the graph arena.
//!
//! Cross references are ids, never pointers: a connector names its node, a
//! connection names its two connectors, and each connector keeps the ids of
//! the connections attached to it.

use crate::constants::{CONNECTOR_HEADER_OFFSET, CONNECTOR_SPACING};
use crate::geometry::{Point, Rect, Size, Vector, vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a node
    NodeId,
    "node"
);
entity_id!(
    /// Identifies a connector (port)
    ConnectorId,
    "connector"
);
entity_id!(
    /// Identifies a connection
    ConnectionId,
    "connection"
);

/// Which way data flows through a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorFlow {
    Input,
    Output,
    /// Knot connectors accept either side
    Both,
}

impl ConnectorFlow {
    /// Whether a connection may run from `self` to `other`
    pub fn is_compatible(self, other: ConnectorFlow) -> bool {
        !matches!(
            (self, other),
            (ConnectorFlow::Input, ConnectorFlow::Input)
                | (ConnectorFlow::Output, ConnectorFlow::Output)
        )
    }
}

/// A port on a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: ConnectorId,
    pub node: NodeId,
    pub title: String,
    pub flow: ConnectorFlow,
    /// Anchor relative to the owning node's position
    pub offset: Vector,
    /// Connections attached to this connector
    pub connections: BTreeSet<ConnectionId>,
}

impl Connector {
    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }
}

/// A link between an output and an input connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub output: ConnectorId,
    pub input: ConnectorId,
}

impl Connection {
    pub fn touches(&self, connector: ConnectorId) -> bool {
        self.output == connector || self.input == connector
    }

    /// The endpoint opposite `connector`
    pub fn other_end(&self, connector: ConnectorId) -> Option<ConnectorId> {
        if self.output == connector {
            Some(self.input)
        } else if self.input == connector {
            Some(self.output)
        } else {
            None
        }
    }
}

/// Node variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Regular node with input and output connectors
    Flow {
        title: String,
        inputs: Vec<ConnectorId>,
        outputs: Vec<ConnectorId>,
    },
    /// Pass-through node with a single connector
    Knot { connector: ConnectorId },
    /// Group frame drawn behind other nodes
    Comment { title: String },
}

/// A node in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point,
    pub size: Size,
    pub kind: NodeKind,
}

impl Node {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Every connector owned by this node
    pub fn connectors(&self) -> Vec<ConnectorId> {
        match &self.kind {
            NodeKind::Flow { inputs, outputs, .. } => {
                inputs.iter().chain(outputs.iter()).copied().collect()
            }
            NodeKind::Knot { connector } => vec![*connector],
            NodeKind::Comment { .. } => Vec::new(),
        }
    }

    pub fn is_flow(&self) -> bool {
        matches!(self.kind, NodeKind::Flow { .. })
    }

    pub fn is_knot(&self) -> bool {
        matches!(self.kind, NodeKind::Knot { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, NodeKind::Comment { .. })
    }
}

/// Anchor of the `index`-th connector on one side of a flow node
pub(crate) fn flow_connector_offset(node_size: Size, flow: ConnectorFlow, index: usize) -> Vector {
    let y = CONNECTOR_HEADER_OFFSET + CONNECTOR_SPACING * index as f64;
    match flow {
        ConnectorFlow::Output => vector(node_size.width, y),
        ConnectorFlow::Input | ConnectorFlow::Both => vector(0.0, y),
    }
}

/// Anchor of a knot's connector, the node centre
pub(crate) fn knot_connector_offset(node_size: Size) -> Vector {
    vector(node_size.width / 2.0, node_size.height / 2.0)
}

/// What lies under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitTarget {
    /// Empty canvas
    #[default]
    Canvas,
    Node(NodeId),
    Connector(ConnectorId),
}

impl HitTarget {
    pub fn node(self) -> Option<NodeId> {
        match self {
            HitTarget::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn connector(self) -> Option<ConnectorId> {
        match self {
            HitTarget::Connector(id) => Some(id),
            _ => None,
        }
    }
}

/// Where a pending connection was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionTarget {
    Connector(ConnectorId),
    /// Resolved by the schema to one of the node's connectors
    Node(NodeId),
}

impl ConnectionTarget {
    pub fn from_hit(hit: HitTarget) -> Option<Self> {
        match hit {
            HitTarget::Connector(id) => Some(ConnectionTarget::Connector(id)),
            HitTarget::Node(id) => Some(ConnectionTarget::Node(id)),
            HitTarget::Canvas => None,
        }
    }
}
