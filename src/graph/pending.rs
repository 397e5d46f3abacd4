//! In-progress connection preview.

use super::model::{ConnectorId, HitTarget};
use crate::geometry::Point;

/// Connector-to-pointer link shown while the user drags out a connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingConnection {
    source: Option<ConnectorId>,
    /// Content-space position of the dragged end
    pub target_position: Point,
    /// What the dragged end is hovering
    pub target: HitTarget,
}

impl PendingConnection {
    pub fn source(&self) -> Option<ConnectorId> {
        self.source
    }

    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    pub fn start(&mut self, source: ConnectorId, position: Point) {
        self.source = Some(source);
        self.target_position = position;
        self.target = HitTarget::Canvas;
    }

    pub fn update(&mut self, position: Point, target: HitTarget) {
        self.target_position = position;
        self.target = target;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
