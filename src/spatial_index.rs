//! Spatial Index Module
//!
//! R-tree over node bounds in content space. Used for pointer hit testing and
//! for resolving the nodes covered by a selection rectangle.

use crate::geometry::{Point, Rect};
use crate::graph::NodeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A node's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node: NodeId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(node: NodeId, bounds: Rect) -> Self {
        Self { node, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        AABB::from_corners([min.x, min.y], [max.x, max.y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

/// Spatial index for graph nodes.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bounds of `node`.
    pub fn insert(&mut self, node: NodeId, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&node) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node, bounds);
        self.tree.insert(entry);
        self.entries.insert(node, entry);
    }

    pub fn remove(&mut self, node: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Nodes whose bounds contain `p`, in ascending id order.
    pub fn query_point(&self, p: Point) -> Vec<NodeId> {
        let envelope = AABB::from_point([p.x, p.y]);

        let mut hits: Vec<NodeId> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.contains(p))
            .map(|entry| entry.node)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Nodes whose bounds intersect `rect`, in ascending id order.
    pub fn query_rect(&self, rect: &Rect) -> Vec<NodeId> {
        let (min, max) = (rect.min(), rect.max());
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        let mut hits: Vec<NodeId> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn bounds(&self, node: NodeId) -> Option<Rect> {
        self.entries.get(&node).map(|e| e.bounds)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
