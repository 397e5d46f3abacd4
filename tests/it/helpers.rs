//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestGraphBuilder` - Builder pattern for creating editors over small graphs
//! - Input helpers like `press()`, `release()`, `move_to()` that dispatch
//!   one event and hand it back for inspecting the handled flag
//! - Connector lookups and screen-space anchors

#![allow(dead_code)]

use graphboard::graph::{ConnectorId, NodeKind};
use graphboard::{
    Editor, EditorSettings, Graph, InputEvent, Key, Modifiers, MouseButton, NodeId, Point,
    SharedSettings, point, vector,
};

// ============================================================================
// TestGraphBuilder - Builder pattern for creating test editors
// ============================================================================

/// Builder for editors over a small graph.
///
/// Flow nodes get one `"in"` and one `"out"` connector.
///
/// # Example
/// ```ignore
/// let (editor, nodes) = TestGraphBuilder::new()
///     .with_flow_node("A", (0.0, 0.0))
///     .with_flow_node("B", (300.0, 0.0))
///     .with_zoom(2.0)
///     .build();
/// ```
pub struct TestGraphBuilder {
    graph: Graph,
    nodes: Vec<NodeId>,
    settings: EditorSettings,
    zoom: f64,
}

impl Default for TestGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            nodes: Vec::new(),
            settings: EditorSettings::default(),
            zoom: 1.0,
        }
    }

    pub fn with_flow_node(mut self, title: &str, at: (f64, f64)) -> Self {
        let id = self
            .graph
            .add_flow_node(title, point(at.0, at.1), &["in"], &["out"]);
        self.nodes.push(id);
        self
    }

    pub fn with_knot(mut self, at: (f64, f64)) -> Self {
        let id = self.graph.add_knot_node(point(at.0, at.1));
        self.nodes.push(id);
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.settings.read_only = true;
        self
    }

    pub fn panning_disabled(mut self) -> Self {
        self.settings.disable_panning = true;
        self
    }

    /// Build the editor. The change log of the initial graph is drained.
    pub fn build(self) -> (Editor, Vec<NodeId>) {
        let mut editor = Editor::with_settings(self.graph, SharedSettings::new(self.settings));
        editor.viewport_mut().zoom = self.zoom;
        editor.graph_mut().take_changes();
        (editor, self.nodes)
    }
}

/// Editor with no nodes
pub fn empty_editor() -> Editor {
    TestGraphBuilder::new().build().0
}

// ============================================================================
// Graph lookups
// ============================================================================

pub fn input_of(graph: &Graph, node: NodeId) -> ConnectorId {
    match &graph.node(node).expect("node exists").kind {
        NodeKind::Flow { inputs, .. } => inputs[0],
        other => panic!("expected a flow node, got {:?}", other),
    }
}

pub fn output_of(graph: &Graph, node: NodeId) -> ConnectorId {
    match &graph.node(node).expect("node exists").kind {
        NodeKind::Flow { outputs, .. } => outputs[0],
        other => panic!("expected a flow node, got {:?}", other),
    }
}

pub fn knot_connector(graph: &Graph, node: NodeId) -> ConnectorId {
    match &graph.node(node).expect("node exists").kind {
        NodeKind::Knot { connector } => *connector,
        other => panic!("expected a knot, got {:?}", other),
    }
}

/// Screen position of a connector anchor
pub fn connector_on_screen(editor: &Editor, connector: ConnectorId) -> Point {
    let anchor = editor
        .graph()
        .connector_anchor(connector)
        .expect("connector exists");
    editor.viewport().content_to_screen(anchor)
}

/// Screen position of a node's centre, well clear of its connectors
pub fn node_center_on_screen(editor: &Editor, node: NodeId) -> Point {
    let node = editor.graph().node(node).expect("node exists");
    let center = node.position + vector(node.size.width / 2.0, node.size.height / 2.0);
    editor.viewport().content_to_screen(center)
}

// ============================================================================
// Input helpers
// ============================================================================

pub fn none() -> Modifiers {
    Modifiers::empty()
}

fn send(editor: &mut Editor, mut event: InputEvent) -> InputEvent {
    editor.dispatch(&mut event).expect("dispatch succeeds");
    event
}

pub fn press(editor: &mut Editor, button: MouseButton, at: Point, modifiers: Modifiers) -> InputEvent {
    send(editor, InputEvent::button_down(button, at, modifiers))
}

pub fn release(
    editor: &mut Editor,
    button: MouseButton,
    at: Point,
    modifiers: Modifiers,
) -> InputEvent {
    send(editor, InputEvent::button_up(button, at, modifiers))
}

pub fn move_to(editor: &mut Editor, at: Point) -> InputEvent {
    send(editor, InputEvent::pointer_move(at, none()))
}

pub fn scroll(editor: &mut Editor, delta: f64, at: Point, modifiers: Modifiers) -> InputEvent {
    send(editor, InputEvent::wheel(delta, at, modifiers))
}

pub fn key(editor: &mut Editor, key: Key, modifiers: Modifiers) -> InputEvent {
    send(editor, InputEvent::key_down(key, modifiers))
}

/// Press, move and release the primary button
pub fn left_drag(editor: &mut Editor, from: Point, to: Point, modifiers: Modifiers) {
    press(editor, MouseButton::Primary, from, modifiers);
    move_to(editor, to);
    release(editor, MouseButton::Primary, to, modifiers);
}

/// Press and release the primary button in place
pub fn click(editor: &mut Editor, at: Point, modifiers: Modifiers) {
    press(editor, MouseButton::Primary, at, modifiers);
    release(editor, MouseButton::Primary, at, modifiers);
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

pub fn selected(editor: &Editor) -> Vec<NodeId> {
    editor.graph().selected_nodes().iter().copied().collect()
}
