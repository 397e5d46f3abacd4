//! Snapshot tests for the change log a render host drains.

use crate::helpers::{
    TestGraphBuilder, click, connector_on_screen, input_of, key, move_to, node_center_on_screen,
    none, output_of, press, release,
};
use graphboard::{Graph, Key, MouseButton, point};

#[test]
fn test_node_removal_cascade_snapshot() {
    let mut graph = Graph::new();
    let a = graph.add_flow_node("A", point(0.0, 0.0), &["in"], &["out"]);
    let b = graph.add_flow_node("B", point(300.0, 0.0), &["in"], &["out"]);
    let c = graph.add_flow_node("C", point(600.0, 0.0), &["in"], &["out"]);
    graph
        .add_connection(output_of(&graph, a), input_of(&graph, b))
        .unwrap();
    graph
        .add_connection(output_of(&graph, b), input_of(&graph, c))
        .unwrap();
    graph.take_changes();

    graph.remove_node(b);
    let changes = graph.take_changes();

    insta::assert_json_snapshot!("node_removal_cascade", changes);
}

#[test]
fn test_delete_selection_changes_snapshot() {
    let (mut editor, nodes) = TestGraphBuilder::new()
        .with_flow_node("A", (0.0, 0.0))
        .with_flow_node("B", (300.0, 0.0))
        .build();

    let center = node_center_on_screen(&editor, nodes[0]);
    click(&mut editor, center, none());
    key(&mut editor, Key::Delete, none());
    let changes = editor.graph_mut().take_changes();

    insta::assert_json_snapshot!("delete_selection_changes", changes);
}

#[test]
fn test_connection_workflow_snapshot() {
    let (mut editor, nodes) = TestGraphBuilder::new()
        .with_flow_node("A", (0.0, 0.0))
        .with_flow_node("B", (300.0, 0.0))
        .build();
    let from = connector_on_screen(&editor, output_of(editor.graph(), nodes[0]));
    let to = connector_on_screen(&editor, input_of(editor.graph(), nodes[1]));

    press(&mut editor, MouseButton::Primary, from, none());
    move_to(&mut editor, to);
    release(&mut editor, MouseButton::Primary, to, none());
    let changes = editor.graph_mut().take_changes();

    insta::assert_json_snapshot!("connection_workflow", changes);
}
