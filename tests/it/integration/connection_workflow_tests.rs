//! Connection Workflow Integration Tests
//!
//! Dragging a pending connection out of a connector and dropping it on
//! connectors, nodes and empty canvas.

use crate::helpers::{
    TestGraphBuilder, connector_on_screen, input_of, key, knot_connector, move_to,
    node_center_on_screen, none, output_of, press, release,
};
use graphboard::{HitTarget, Key, MouseButton, StateKind, point};

fn two_nodes() -> TestGraphBuilder {
    TestGraphBuilder::new()
        .with_flow_node("A", (0.0, 0.0))
        .with_flow_node("B", (300.0, 0.0))
}

#[test]
fn test_drag_output_to_input_connects() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);
    let inp = input_of(editor.graph(), nodes[1]);

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    assert_eq!(editor.state(), Some(StateKind::Connecting));
    assert!(editor.is_connecting());
    assert_eq!(editor.graph().pending().source(), Some(out));

    let drop = connector_on_screen(&editor, inp);
    move_to(&mut editor, drop);
    assert_eq!(editor.graph().pending().target, HitTarget::Connector(inp));
    assert_eq!(editor.graph().pending().target_position, drop);

    release(&mut editor, MouseButton::Primary, drop, none());

    assert!(editor.graph().are_connected(out, inp));
    let connection = editor.graph().connections().next().unwrap();
    assert_eq!((connection.output, connection.input), (out, inp));
    assert!(!editor.graph().pending().is_active());
    assert!(!editor.is_connecting());
    assert_eq!(editor.depth(), 0);
}

#[test]
fn test_drag_input_to_output_orients_connection() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);
    let inp = input_of(editor.graph(), nodes[1]);

    let start = connector_on_screen(&editor, inp);

    press(&mut editor, MouseButton::Primary, start, none());
    let drop = connector_on_screen(&editor, out);
    move_to(&mut editor, drop);
    release(&mut editor, MouseButton::Primary, drop, none());

    let connection = editor.graph().connections().next().unwrap();
    assert_eq!(connection.output, out);
    assert_eq!(connection.input, inp);
}

#[test]
fn test_drop_on_node_picks_compatible_connector() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);
    let inp = input_of(editor.graph(), nodes[1]);

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    let drop = node_center_on_screen(&editor, nodes[1]);
    move_to(&mut editor, drop);
    assert_eq!(editor.graph().pending().target, HitTarget::Node(nodes[1]));
    release(&mut editor, MouseButton::Primary, drop, none());

    assert!(editor.graph().are_connected(out, inp));
}

#[test]
fn test_drop_on_canvas_discards_pending() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    move_to(&mut editor, point(700.0, 700.0));
    release(&mut editor, MouseButton::Primary, point(700.0, 700.0), none());

    assert_eq!(editor.graph().connection_count(), 0);
    assert!(!editor.graph().pending().is_active());
    assert_eq!(editor.depth(), 0);
}

#[test]
fn test_rejected_connection_leaves_graph_unchanged() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);
    let own_input = input_of(editor.graph(), nodes[0]);

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    let drop = connector_on_screen(&editor, own_input);
    move_to(&mut editor, drop);
    release(&mut editor, MouseButton::Primary, drop, none());

    assert_eq!(editor.graph().connection_count(), 0);
    assert!(!editor.graph().pending().is_active());
    assert!(!editor.is_connecting());
}

#[test]
fn test_duplicate_connection_rejected() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);
    let inp = input_of(editor.graph(), nodes[1]);
    editor.graph_mut().add_connection(out, inp).unwrap();

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    let drop = connector_on_screen(&editor, inp);
    move_to(&mut editor, drop);
    release(&mut editor, MouseButton::Primary, drop, none());

    assert_eq!(editor.graph().connection_count(), 1);
}

#[test]
fn test_read_only_blocks_connection() {
    let (mut editor, nodes) = two_nodes().read_only().build();
    let out = output_of(editor.graph(), nodes[0]);
    let inp = input_of(editor.graph(), nodes[1]);

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    let drop = connector_on_screen(&editor, inp);
    move_to(&mut editor, drop);
    release(&mut editor, MouseButton::Primary, drop, none());

    assert_eq!(editor.graph().connection_count(), 0);
    assert!(!editor.graph().pending().is_active());
}

#[test]
fn test_route_through_knot() {
    let (mut editor, nodes) = two_nodes().with_knot((200.0, 200.0)).build();
    let out = output_of(editor.graph(), nodes[0]);
    let inp = input_of(editor.graph(), nodes[1]);
    let knot = knot_connector(editor.graph(), nodes[2]);

    for (from, to) in [(out, knot), (knot, inp)] {
        let start = connector_on_screen(&editor, from);
        press(&mut editor, MouseButton::Primary, start, none());
        let drop = connector_on_screen(&editor, to);
        move_to(&mut editor, drop);
        release(&mut editor, MouseButton::Primary, drop, none());
    }

    assert_eq!(editor.graph().connection_count(), 2);
    assert!(editor.graph().are_connected(out, knot));
    assert!(editor.graph().are_connected(knot, inp));
    assert_eq!(editor.graph().connections_of(knot).len(), 2);
}

#[test]
fn test_escape_cancels_pending_connection() {
    let (mut editor, nodes) = two_nodes().build();
    let out = output_of(editor.graph(), nodes[0]);

    let start = connector_on_screen(&editor, out);

    press(&mut editor, MouseButton::Primary, start, none());
    move_to(&mut editor, point(250.0, 150.0));
    key(&mut editor, Key::Escape, none());

    assert!(!editor.graph().pending().is_active());
    assert!(!editor.is_connecting());
    assert_eq!(editor.depth(), 0);
}
