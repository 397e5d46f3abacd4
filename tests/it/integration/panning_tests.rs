//! Panning Integration Tests
//!
//! Right-drag panning, wheel panning and zooming, driven through
//! `Editor::dispatch`.

use crate::helpers::{
    TestGraphBuilder, assert_close, empty_editor, move_to, none, press, release, scroll, selected,
};
use graphboard::constants::{MAX_ZOOM, MIN_ZOOM};
use graphboard::{Modifiers, MouseButton, StateKind, point};

#[test]
fn test_right_drag_pans_by_delta_over_zoom() {
    let (mut editor, _) = TestGraphBuilder::new().with_zoom(2.0).build();

    press(&mut editor, MouseButton::Secondary, point(100.0, 100.0), none());
    assert_eq!(editor.state(), Some(StateKind::Panning));
    assert!(editor.is_panning());

    move_to(&mut editor, point(140.0, 130.0));
    assert_close(editor.viewport().location.x, -20.0);
    assert_close(editor.viewport().location.y, -15.0);

    // Moves compose additively
    move_to(&mut editor, point(150.0, 150.0));
    assert_close(editor.viewport().location.x, -25.0);
    assert_close(editor.viewport().location.y, -25.0);

    release(&mut editor, MouseButton::Secondary, point(150.0, 150.0), none());
    assert_eq!(editor.depth(), 0);
    assert!(!editor.is_panning());
}

#[test]
fn test_right_drag_past_threshold_suppresses_context_menu() {
    let mut editor = empty_editor();

    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());
    move_to(&mut editor, point(30.0, 40.0));
    let up = release(&mut editor, MouseButton::Secondary, point(30.0, 40.0), none());

    assert!(up.is_handled());
}

#[test]
fn test_short_right_click_keeps_context_menu() {
    let mut editor = empty_editor();

    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());
    move_to(&mut editor, point(5.0, 5.0));
    let up = release(&mut editor, MouseButton::Secondary, point(5.0, 5.0), none());

    assert!(!up.is_handled());
    assert_eq!(editor.depth(), 0);
}

#[test]
fn test_travel_exactly_at_threshold_is_not_handled() {
    let mut editor = empty_editor();

    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());
    move_to(&mut editor, point(12.0, 0.0));
    let up = release(&mut editor, MouseButton::Secondary, point(12.0, 0.0), none());

    assert!(!up.is_handled());
}

#[test]
fn test_wheel_pans_vertically_in_one_dispatch() {
    let mut editor = empty_editor();

    let tick = scroll(&mut editor, 120.0, point(50.0, 50.0), none());

    assert_close(editor.viewport().location.y, -60.0);
    assert_close(editor.viewport().location.x, 0.0);
    assert_eq!(editor.depth(), 0);
    assert!(!editor.is_panning());
    assert!(tick.is_handled());
}

#[test]
fn test_shift_wheel_pans_horizontally() {
    let (mut editor, _) = TestGraphBuilder::new().with_zoom(2.0).build();

    scroll(&mut editor, 120.0, point(50.0, 50.0), Modifiers::SHIFT);

    assert_close(editor.viewport().location.x, -30.0);
    assert_close(editor.viewport().location.y, 0.0);
    assert_eq!(editor.depth(), 0);
}

#[test]
fn test_wheel_with_extra_modifiers_still_pans() {
    let mut editor = empty_editor();

    // Wheel chords only require their modifiers to be held
    scroll(&mut editor, -120.0, point(0.0, 0.0), Modifiers::ALT);

    assert_close(editor.viewport().location.y, 60.0);
}

#[test]
fn test_ctrl_wheel_zooms_without_panning() {
    let mut editor = empty_editor();

    scroll(&mut editor, 120.0, point(0.0, 0.0), Modifiers::CONTROL);

    assert_close(editor.viewport().zoom, 1.1);
    assert_close(editor.viewport().location.y, 0.0);
}

#[test]
fn test_ctrl_shift_wheel_prefers_zoom() {
    let mut editor = empty_editor();

    scroll(
        &mut editor,
        120.0,
        point(0.0, 0.0),
        Modifiers::CONTROL | Modifiers::SHIFT,
    );

    assert!(editor.viewport().zoom > 1.0);
    assert_close(editor.viewport().location.x, 0.0);
}

#[test]
fn test_zoom_keeps_point_under_pointer() {
    let mut editor = empty_editor();
    let pointer = point(200.0, 100.0);
    let before = editor.viewport().screen_to_content(pointer);

    scroll(&mut editor, 240.0, pointer, Modifiers::CONTROL);

    let after = editor.viewport().screen_to_content(pointer);
    assert_close(after.x, before.x);
    assert_close(after.y, before.y);
}

#[test]
fn test_zoom_is_clamped() {
    let mut editor = empty_editor();

    for _ in 0..100 {
        scroll(&mut editor, 120.0, point(0.0, 0.0), Modifiers::CONTROL);
    }
    assert_close(editor.viewport().zoom, MAX_ZOOM);

    for _ in 0..200 {
        scroll(&mut editor, -120.0, point(0.0, 0.0), Modifiers::CONTROL);
    }
    assert_close(editor.viewport().zoom, MIN_ZOOM);
}

#[test]
fn test_disabled_panning_ignores_drag_and_wheel() {
    let (mut editor, _) = TestGraphBuilder::new().panning_disabled().build();

    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());
    assert_eq!(editor.depth(), 0);
    move_to(&mut editor, point(100.0, 100.0));
    scroll(&mut editor, 120.0, point(0.0, 0.0), none());

    assert_eq!(editor.viewport().location, point(0.0, 0.0));
}

#[test]
fn test_pan_during_selection_stacks_above_it() {
    let mut editor = empty_editor();

    press(&mut editor, MouseButton::Primary, point(10.0, 10.0), none());
    press(&mut editor, MouseButton::Secondary, point(20.0, 20.0), none());
    assert_eq!(editor.states(), vec![StateKind::Selecting, StateKind::Panning]);
    assert!(editor.is_selecting() && editor.is_panning());

    release(&mut editor, MouseButton::Secondary, point(20.0, 20.0), none());
    assert_eq!(editor.states(), vec![StateKind::Selecting]);
    assert!(editor.is_selecting());
    assert!(!editor.is_panning());
}

#[test]
fn test_releasing_select_while_panning_resumes_panning() {
    let (mut editor, nodes) = TestGraphBuilder::new()
        .with_flow_node("A", (100.0, 100.0))
        .build();

    press(&mut editor, MouseButton::Primary, point(50.0, 50.0), none());
    press(&mut editor, MouseButton::Secondary, point(60.0, 60.0), none());
    release(&mut editor, MouseButton::Primary, point(120.0, 120.0), none());

    // Selection cancelled, panning restarted from the release point
    assert_eq!(editor.states(), vec![StateKind::Panning]);
    assert!(editor.is_panning());
    assert!(!editor.is_selecting());
    assert_eq!(editor.selection_rect(), None);
    assert!(!selected(&editor).contains(&nodes[0]));

    move_to(&mut editor, point(130.0, 120.0));
    assert_close(editor.viewport().location.x, -10.0);
    assert_close(editor.viewport().location.y, 0.0);

    release(&mut editor, MouseButton::Secondary, point(130.0, 120.0), none());
    assert_eq!(editor.depth(), 0);
}

#[test]
fn test_release_with_extra_modifier_ends_pan() {
    let mut editor = empty_editor();

    press(&mut editor, MouseButton::Secondary, point(0.0, 0.0), none());
    move_to(&mut editor, point(50.0, 0.0));
    release(&mut editor, MouseButton::Secondary, point(50.0, 0.0), Modifiers::CONTROL);

    assert_eq!(editor.depth(), 0);
    assert!(!editor.is_panning());

    // Button-less moves no longer drag the viewport
    move_to(&mut editor, point(150.0, 0.0));
    assert_close(editor.viewport().location.x, -50.0);
}

#[test]
fn test_non_finite_wheel_delta_is_ignored() {
    let mut editor = empty_editor();

    for delta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let zoom = scroll(&mut editor, delta, point(10.0, 10.0), Modifiers::CONTROL);
        let pan = scroll(&mut editor, delta, point(10.0, 10.0), none());
        assert!(!zoom.is_handled());
        assert!(!pan.is_handled());
    }

    assert_eq!(editor.viewport().zoom, 1.0);
    assert_eq!(editor.viewport().location, point(0.0, 0.0));
    assert_eq!(editor.depth(), 0);
}
