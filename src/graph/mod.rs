//! Graph view-model.
//!
//! Owns the node, connector and connection arenas, the selection and the
//! pending connection. Structural invariants:
//!
//! - a connection always has both endpoints present, and is listed in both
//!   endpoints' connection sets
//! - removing a connection unregisters it from both endpoints
//! - removing a node first disconnects every connection touching its
//!   connectors, so connections never outlive their endpoints
//!
//! Cascading operations iterate over snapshots of id lists, never over the
//! collection being mutated.

mod commands;
mod model;
mod pending;
mod schema;

pub use commands::{CommandOutcome, GraphCommand};
pub use model::{
    Connection, ConnectionId, ConnectionTarget, Connector, ConnectorFlow, ConnectorId, HitTarget,
    Node, NodeId, NodeKind,
};
pub use pending::PendingConnection;
pub use schema::{DefaultSchema, GraphSchema};

use crate::constants::{
    COMMENT_PADDING, CONNECTOR_HIT_RADIUS, DEFAULT_COMMENT_TITLE, DEFAULT_NODE_SIZE, KNOT_SIZE,
};
use crate::error::ConnectionError;
use crate::geometry::{Point, Rect, Vector, size, vector};
use crate::settings::{SettingsProvider, SharedSettings};
use crate::spatial_index::SpatialIndex;
use model::{flow_connector_offset, knot_connector_offset};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a box selection combines with the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The hit nodes become the selection
    #[default]
    Replace,
    /// The hit nodes are added
    Append,
    /// Membership of each hit node is toggled
    Invert,
    /// The hit nodes are removed
    Remove,
}

/// Structural change notification, drained by the render host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum GraphChange {
    NodeAdded { id: NodeId },
    NodeRemoved { id: NodeId },
    NodesMoved { ids: Vec<NodeId> },
    ConnectionAdded { id: ConnectionId, output: ConnectorId, input: ConnectorId },
    ConnectionRemoved { id: ConnectionId, output: ConnectorId, input: ConnectorId },
    SelectionChanged { selected: Vec<NodeId> },
    Reset,
}

/// The graph view-model
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    connectors: BTreeMap<ConnectorId, Connector>,
    connections: BTreeMap<ConnectionId, Connection>,
    selected: BTreeSet<NodeId>,
    pending: PendingConnection,
    index: SpatialIndex,
    schema: Box<dyn GraphSchema>,
    settings: Arc<dyn SettingsProvider>,
    changes: Vec<GraphChange>,
    next_id: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("connections", &self.connections.len())
            .field("selected", &self.selected)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_parts(Box::new(DefaultSchema), Arc::new(SharedSettings::default()))
    }

    pub fn with_parts(schema: Box<dyn GraphSchema>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self {
            nodes: BTreeMap::new(),
            connectors: BTreeMap::new(),
            connections: BTreeMap::new(),
            selected: BTreeSet::new(),
            pending: PendingConnection::default(),
            index: SpatialIndex::new(),
            schema,
            settings,
            changes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn set_schema(&mut self, schema: Box<dyn GraphSchema>) {
        self.schema = schema;
    }

    pub fn set_settings(&mut self, settings: Arc<dyn SettingsProvider>) {
        self.settings = settings;
    }

    pub fn is_read_only(&self) -> bool {
        self.settings.is_read_only()
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Nodes in creation (z) order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.get(&id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connections attached to `connector`
    pub fn connections_of(&self, connector: ConnectorId) -> Vec<ConnectionId> {
        self.connectors
            .get(&connector)
            .map(|c| c.connections.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn are_connected(&self, a: ConnectorId, b: ConnectorId) -> bool {
        self.connectors.get(&a).is_some_and(|c| {
            c.connections
                .iter()
                .filter_map(|id| self.connections.get(id))
                .any(|conn| conn.other_end(a) == Some(b))
        })
    }

    /// Content-space position of a connector's anchor
    pub fn connector_anchor(&self, id: ConnectorId) -> Option<Point> {
        let connector = self.connectors.get(&id)?;
        let node = self.nodes.get(&connector.node)?;
        Some(node.position + connector.offset)
    }

    /// Nodes whose bounds intersect `rect`
    pub fn nodes_in_rect(&self, rect: &Rect) -> Vec<NodeId> {
        self.index.query_rect(rect)
    }

    /// Topmost thing under a content-space point. Connectors win over nodes,
    /// regular nodes win over comments.
    pub fn hit_test(&self, p: Point) -> HitTarget {
        crate::profile_scope!("hit_test");

        let reach = vector(CONNECTOR_HIT_RADIUS, CONNECTOR_HIT_RADIUS);
        let near = Rect::from_corners(p - reach, p + reach);
        let radius_sq = CONNECTOR_HIT_RADIUS * CONNECTOR_HIT_RADIUS;

        for node_id in self.index.query_rect(&near).into_iter().rev() {
            let Some(node) = self.nodes.get(&node_id) else {
                continue;
            };
            let hit = node.connectors().into_iter().find(|&id| {
                self.connector_anchor(id)
                    .is_some_and(|anchor| (anchor - p).length_squared() <= radius_sq)
            });
            if let Some(id) = hit {
                return HitTarget::Connector(id);
            }
        }

        let under = self.index.query_point(p);
        under
            .iter()
            .rev()
            .find(|id| self.nodes.get(*id).is_some_and(|n| !n.is_comment()))
            .or_else(|| under.last())
            .map(|&id| HitTarget::Node(id))
            .unwrap_or(HitTarget::Canvas)
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    fn insert_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.index.insert(id, node.bounds());
        self.nodes.insert(id, node);
        self.changes.push(GraphChange::NodeAdded { id });
        debug!(node = %id, "node added");
        id
    }

    fn insert_connector(
        &mut self,
        node: NodeId,
        title: &str,
        flow: ConnectorFlow,
        offset: Vector,
    ) -> ConnectorId {
        let id = ConnectorId(self.allocate());
        self.connectors.insert(
            id,
            Connector {
                id,
                node,
                title: title.to_string(),
                flow,
                offset,
                connections: BTreeSet::new(),
            },
        );
        id
    }

    /// Add a flow node with one connector per title
    pub fn add_flow_node(
        &mut self,
        title: impl Into<String>,
        position: Point,
        inputs: &[&str],
        outputs: &[&str],
    ) -> NodeId {
        let id = NodeId(self.allocate());
        let node_size = size(DEFAULT_NODE_SIZE.0, DEFAULT_NODE_SIZE.1);

        let inputs = inputs
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let offset = flow_connector_offset(node_size, ConnectorFlow::Input, i);
                self.insert_connector(id, t, ConnectorFlow::Input, offset)
            })
            .collect();
        let outputs = outputs
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let offset = flow_connector_offset(node_size, ConnectorFlow::Output, i);
                self.insert_connector(id, t, ConnectorFlow::Output, offset)
            })
            .collect();

        self.insert_node(Node {
            id,
            position,
            size: node_size,
            kind: NodeKind::Flow {
                title: title.into(),
                inputs,
                outputs,
            },
        })
    }

    /// Add a knot (reroute) node
    pub fn add_knot_node(&mut self, position: Point) -> NodeId {
        let id = NodeId(self.allocate());
        let node_size = size(KNOT_SIZE.0, KNOT_SIZE.1);
        let connector =
            self.insert_connector(id, "", ConnectorFlow::Both, knot_connector_offset(node_size));

        self.insert_node(Node {
            id,
            position,
            size: node_size,
            kind: NodeKind::Knot { connector },
        })
    }

    /// Add a comment frame covering `bounds`
    pub fn add_comment(&mut self, title: impl Into<String>, bounds: Rect) -> NodeId {
        let id = NodeId(self.allocate());
        self.insert_node(Node {
            id,
            position: bounds.origin,
            size: bounds.size,
            kind: NodeKind::Comment {
                title: title.into(),
            },
        })
    }

    /// Remove a node, cascading to its connections and connectors
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        // Flow nodes lose every connection, knots their single connector's.
        let connectors = self.nodes.get(&id)?.connectors();

        for connector in &connectors {
            self.disconnect_connector(*connector);
        }
        for connector in &connectors {
            self.connectors.remove(connector);
            if self.pending.source() == Some(*connector) {
                self.pending.clear();
            }
        }

        let node = self.nodes.remove(&id)?;
        self.index.remove(id);
        if self.selected.remove(&id) {
            self.record_selection();
        }
        self.changes.push(GraphChange::NodeRemoved { id });
        debug!(node = %id, "node removed");
        Some(node)
    }

    /// Remove everything. Connections are cleared first.
    pub fn clear_nodes(&mut self) {
        for connector in self.connectors.values_mut() {
            connector.connections.clear();
        }
        self.connections.clear();
        self.connectors.clear();
        self.nodes.clear();
        self.selected.clear();
        self.pending.clear();
        self.index.clear();
        self.changes.push(GraphChange::Reset);
        debug!("graph reset");
    }

    /// Translate nodes by a content-space delta
    pub fn move_nodes(&mut self, ids: &[NodeId], delta: Vector) {
        let mut moved = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(node) = self.nodes.get_mut(id) {
                node.position += delta;
                self.index.insert(*id, node.bounds());
                moved.push(*id);
            }
        }
        if !moved.is_empty() {
            self.changes.push(GraphChange::NodesMoved { ids: moved });
        }
    }

    // ========================================================================
    // Connections
    // ========================================================================

    /// Link two existing connectors without consulting the schema
    pub fn add_connection(
        &mut self,
        output: ConnectorId,
        input: ConnectorId,
    ) -> Result<ConnectionId, ConnectionError> {
        if !self.connectors.contains_key(&output) {
            return Err(ConnectionError::UnknownConnector(output));
        }
        if !self.connectors.contains_key(&input) {
            return Err(ConnectionError::UnknownConnector(input));
        }

        let id = ConnectionId(self.allocate());
        self.connections.insert(id, Connection { id, output, input });
        for end in [output, input] {
            if let Some(connector) = self.connectors.get_mut(&end) {
                connector.connections.insert(id);
            }
        }
        self.changes
            .push(GraphChange::ConnectionAdded { id, output, input });
        debug!(connection = %id, %output, %input, "connection added");
        Ok(id)
    }

    /// Remove a connection and unregister it from both endpoints
    pub fn remove_connection(&mut self, id: ConnectionId) -> Option<Connection> {
        let connection = self.connections.remove(&id)?;
        for end in [connection.output, connection.input] {
            if let Some(connector) = self.connectors.get_mut(&end) {
                connector.connections.remove(&id);
            }
        }
        self.changes.push(GraphChange::ConnectionRemoved {
            id,
            output: connection.output,
            input: connection.input,
        });
        Some(connection)
    }

    /// Remove every connection attached to `connector`
    pub fn disconnect_connector(&mut self, connector: ConnectorId) -> usize {
        let attached = self.connections_of(connector);
        attached
            .into_iter()
            .filter(|id| self.remove_connection(*id).is_some())
            .count()
    }

    pub fn pending(&self) -> &PendingConnection {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut PendingConnection {
        &mut self.pending
    }

    /// Commit the pending connection onto `target`.
    ///
    /// The pending connection is cleared whether or not the schema accepts.
    pub fn create_connection(
        &mut self,
        target: ConnectionTarget,
    ) -> Result<ConnectionId, ConnectionError> {
        let result = self
            .pending
            .source()
            .ok_or(ConnectionError::NoSource)
            .and_then(|source| self.schema.resolve_connection(self, source, target));
        self.pending.clear();

        let (output, input) = result?;
        self.add_connection(output, input)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selected_nodes(&self) -> &BTreeSet<NodeId> {
        &self.selected
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    fn record_selection(&mut self) {
        self.changes.push(GraphChange::SelectionChanged {
            selected: self.selected.iter().copied().collect(),
        });
    }

    pub fn select(&mut self, id: NodeId) -> bool {
        let added = self.nodes.contains_key(&id) && self.selected.insert(id);
        if added {
            self.record_selection();
        }
        added
    }

    pub fn deselect(&mut self, id: NodeId) -> bool {
        let removed = self.selected.remove(&id);
        if removed {
            self.record_selection();
        }
        removed
    }

    pub fn select_only(&mut self, id: NodeId) {
        self.apply_selection(SelectionMode::Replace, &[id]);
    }

    pub fn clear_selection(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.record_selection();
        }
    }

    /// Combine `ids` with the current selection
    pub fn apply_selection(&mut self, mode: SelectionMode, ids: &[NodeId]) {
        let before = self.selected.clone();
        let live = ids.iter().copied().filter(|id| self.nodes.contains_key(id));

        match mode {
            SelectionMode::Replace => self.selected = live.collect(),
            SelectionMode::Append => self.selected.extend(live),
            SelectionMode::Invert => {
                for id in live.collect::<Vec<_>>() {
                    if !self.selected.remove(&id) {
                        self.selected.insert(id);
                    }
                }
            }
            SelectionMode::Remove => {
                for id in live.collect::<Vec<_>>() {
                    self.selected.remove(&id);
                }
            }
        }

        if self.selected != before {
            self.record_selection();
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub fn can_delete_selection(&self) -> bool {
        !self.is_read_only() && !self.selected.is_empty()
    }

    /// Remove every selected node
    pub fn delete_selection(&mut self) -> usize {
        let snapshot: Vec<NodeId> = self.selected.iter().copied().collect();
        snapshot
            .into_iter()
            .filter(|id| self.remove_node(*id).is_some())
            .count()
    }

    pub fn can_comment_selection(&self) -> bool {
        !self.is_read_only() && !self.selected.is_empty()
    }

    /// Wrap the selection bounds in a comment node
    pub fn comment_selection(&mut self) -> Option<NodeId> {
        let bounds = self
            .selected
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(Node::bounds)
            .reduce(|acc, b| acc.union(&b))?;
        Some(self.add_comment(DEFAULT_COMMENT_TITLE, bounds.inflate(COMMENT_PADDING)))
    }

    pub fn can_create_connection(&self, target: Option<ConnectionTarget>) -> bool {
        !self.is_read_only() && self.pending.is_active() && target.is_some()
    }

    pub fn can_execute(&self, command: &GraphCommand) -> bool {
        match command {
            GraphCommand::DeleteSelection => self.can_delete_selection(),
            GraphCommand::CommentSelection => self.can_comment_selection(),
            GraphCommand::DisconnectConnector(_) => !self.is_read_only(),
            GraphCommand::CreateConnection(target) => self.can_create_connection(*target),
        }
    }

    /// Run a command if its enablement predicate holds
    pub fn execute(&mut self, command: GraphCommand) -> CommandOutcome {
        if !self.can_execute(&command) {
            debug!(?command, "command disabled");
            return CommandOutcome::Disabled;
        }

        debug!(?command, "executing command");
        match command {
            GraphCommand::DeleteSelection => CommandOutcome::Deleted(self.delete_selection()),
            GraphCommand::CommentSelection => match self.comment_selection() {
                Some(id) => CommandOutcome::Commented(id),
                None => CommandOutcome::Disabled,
            },
            GraphCommand::DisconnectConnector(id) => {
                CommandOutcome::Disconnected(self.disconnect_connector(id))
            }
            GraphCommand::CreateConnection(target) => {
                let Some(target) = target else {
                    return CommandOutcome::Disabled;
                };
                match self.create_connection(target) {
                    Ok(id) => CommandOutcome::Connected(id),
                    Err(e) => {
                        warn!(error = %e, "connection rejected");
                        CommandOutcome::Rejected(e)
                    }
                }
            }
        }
    }

    /// Drain the change log
    pub fn take_changes(&mut self) -> Vec<GraphChange> {
        std::mem::take(&mut self.changes)
    }
}
