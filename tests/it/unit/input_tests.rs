//! Unit tests for dispatching single and composite input events.

use crate::helpers::{empty_editor, none, press, release};
use graphboard::{
    EditorAction, Gesture, InputEvent, Key, Modifiers, MouseButton, StateKind, point,
};

#[test]
fn test_composite_routes_on_its_pointer_sub_event() {
    let mut editor = empty_editor();
    let mut bundle = InputEvent::composite(vec![
        InputEvent::key_down(Key::Space, none()),
        InputEvent::button_down(MouseButton::Secondary, point(40.0, 30.0), none()),
    ])
    .unwrap();

    assert!(bundle.is_composite());
    editor.dispatch(&mut bundle).unwrap();

    assert_eq!(editor.state(), Some(StateKind::Panning));
    assert_eq!(editor.pointer_position(), point(40.0, 30.0));
    assert!(bundle.is_handled());
    assert!(bundle.bundle().unwrap().iter().all(InputEvent::is_handled));
}

#[test]
fn test_key_only_composite_routes_as_key_down() {
    let mut editor = empty_editor();
    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());
    assert_eq!(editor.depth(), 1);

    let mut bundle = InputEvent::composite(vec![
        InputEvent::key_down(Key::Tab, none()),
        InputEvent::key_down(Key::Escape, none()),
    ])
    .unwrap();
    editor.dispatch(&mut bundle).unwrap();

    assert_eq!(editor.depth(), 0);
    assert!(!editor.is_panning());
}

#[test]
fn test_cross_device_chord_binding() {
    let mut editor = empty_editor();
    editor.bindings_mut().set(
        EditorAction::Pan,
        Gesture::all(vec![
            Gesture::mouse(MouseButton::Primary, Modifiers::empty()),
            Gesture::key(Key::Space, Modifiers::empty()),
        ]),
    );

    // Without the key the press is an ordinary selection
    press(&mut editor, MouseButton::Primary, point(0.0, 0.0), none());
    assert_eq!(editor.state(), Some(StateKind::Selecting));
    release(&mut editor, MouseButton::Primary, point(0.0, 0.0), none());
    assert_eq!(editor.depth(), 0);

    let mut chord = InputEvent::composite(vec![
        InputEvent::button_down(MouseButton::Primary, point(0.0, 0.0), none()),
        InputEvent::key_down(Key::Space, none()),
    ])
    .unwrap();
    editor.dispatch(&mut chord).unwrap();

    assert_eq!(editor.state(), Some(StateKind::Panning));
}

#[test]
fn test_key_up_is_ignored() {
    let mut editor = empty_editor();
    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());

    let mut up = InputEvent::key_up(Key::Escape, none());
    editor.dispatch(&mut up).unwrap();

    assert_eq!(editor.state(), Some(StateKind::Panning));
    assert!(!up.is_handled());
}

#[test]
fn test_key_events_keep_last_pointer_position() {
    let mut editor = empty_editor();
    press(&mut editor, MouseButton::Secondary, point(12.0, 34.0), none());

    let mut key = InputEvent::key_down(Key::Char('x'), none());
    editor.dispatch(&mut key).unwrap();

    assert_eq!(editor.pointer_position(), point(12.0, 34.0));
}
