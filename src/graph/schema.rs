//! Connection rules.
//!
//! The graph asks its schema whether a pending source may be linked to a
//! drop target and, if so, which connector ends up as output and which as
//! input. The schema never mutates the graph.

use super::Graph;
use super::model::{ConnectionTarget, Connector, ConnectorFlow, ConnectorId};
use crate::error::ConnectionError;

/// Validation / resolution rule consulted by `Graph::create_connection`
pub trait GraphSchema: Send + Sync {
    /// Resolve `target` against `source`, returning `(output, input)`.
    fn resolve_connection(
        &self,
        graph: &Graph,
        source: ConnectorId,
        target: ConnectionTarget,
    ) -> Result<(ConnectorId, ConnectorId), ConnectionError>;
}

/// Rules used when no schema is supplied:
///
/// - a connector cannot connect to itself or to a sibling on the same node
/// - inputs only pair with outputs (knots pair with anything)
/// - a pair can be connected once
/// - dropping on a node picks its first compatible connector
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSchema;

impl DefaultSchema {
    fn check_pair(
        graph: &Graph,
        source: &Connector,
        target: &Connector,
    ) -> Result<(ConnectorId, ConnectorId), ConnectionError> {
        if source.id == target.id {
            return Err(ConnectionError::SameConnector);
        }
        if source.node == target.node {
            return Err(ConnectionError::SameNode(source.node));
        }
        if !source.flow.is_compatible(target.flow) {
            return Err(ConnectionError::SameDirection(source.id, target.id));
        }
        if graph.are_connected(source.id, target.id) {
            return Err(ConnectionError::AlreadyConnected(source.id, target.id));
        }

        let pair = match (source.flow, target.flow) {
            (ConnectorFlow::Input, _) | (_, ConnectorFlow::Output) => (target.id, source.id),
            _ => (source.id, target.id),
        };
        Ok(pair)
    }
}

impl GraphSchema for DefaultSchema {
    fn resolve_connection(
        &self,
        graph: &Graph,
        source: ConnectorId,
        target: ConnectionTarget,
    ) -> Result<(ConnectorId, ConnectorId), ConnectionError> {
        let source = graph
            .connector(source)
            .ok_or(ConnectionError::UnknownConnector(source))?;

        match target {
            ConnectionTarget::Connector(id) => {
                let target = graph
                    .connector(id)
                    .ok_or(ConnectionError::UnknownConnector(id))?;
                Self::check_pair(graph, source, target)
            }
            ConnectionTarget::Node(node_id) => {
                let node = graph
                    .node(node_id)
                    .ok_or(ConnectionError::UnknownNode(node_id))?;
                if node_id == source.node {
                    return Err(ConnectionError::SameNode(node_id));
                }
                node.connectors()
                    .into_iter()
                    .filter_map(|id| graph.connector(id))
                    .find_map(|candidate| Self::check_pair(graph, source, candidate).ok())
                    .ok_or(ConnectionError::NoCompatibleConnector(node_id))
            }
        }
    }
}
