//! Viewport panning states.
//!
//! [`PanningState`] follows the pointer while the pan chord is held. The two
//! wheel states shift the viewport once and pop themselves from `enter`.

use super::context::EditorContext;
use super::state::{EditorState, StateHandler, StateKind};
use crate::geometry::Point;
use crate::gestures::EditorAction;
use crate::input::{InputEvent, MouseButton};
use tracing::debug;

// ============================================================================
// Drag panning
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct PanningState {
    /// Pointer position when panning started (screen space)
    initial: Point,
    previous: Point,
    current: Point,
}

impl PanningState {
    /// Screen-space distance travelled since panning started, squared
    pub fn travelled_squared(&self) -> f64 {
        (self.current - self.initial).length_squared()
    }
}

impl StateHandler for PanningState {
    fn enter(&mut self, cx: &mut EditorContext, _from: Option<StateKind>) {
        let pointer = cx.pointer_position();
        self.initial = pointer;
        self.previous = pointer;
        self.current = pointer;
        cx.set_panning(true);
    }

    fn exit(&mut self, cx: &mut EditorContext) {
        cx.set_panning(false);
    }

    fn on_pointer_move(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        self.current = event.position().unwrap_or_else(|| cx.pointer_position());
        let delta = self.current - self.previous;
        cx.viewport.location -= delta / cx.viewport.zoom;
        self.previous = self.current;
    }

    fn on_button_up(&mut self, cx: &mut EditorContext, event: &mut InputEvent) {
        if cx.matches(EditorAction::Pan, event) {
            // A right-drag that moved far enough must not open a context menu
            if event.changed_button() == Some(MouseButton::Secondary) {
                let threshold = cx.right_click_pan_threshold;
                if self.travelled_squared() > threshold * threshold {
                    event.set_handled(true);
                }
            }
            cx.pop_state();
        } else if cx.matches(EditorAction::Select, event) && cx.is_selecting() {
            // Releasing the selection chord mid-pan cancels the selection
            // underneath and keeps panning.
            cx.pop_state();
            if cx.state_below() == Some(StateKind::Selecting) && !cx.disable_panning {
                debug!("selection released while panning, resuming pan");
                cx.pop_state();
                cx.push_state(EditorState::panning());
            }
        }
    }
}

// ============================================================================
// Wheel panning
// ============================================================================

/// One-shot vertical shift by a wheel delta
#[derive(Debug, Clone)]
pub struct VerticalPanningState {
    delta: f64,
}

impl VerticalPanningState {
    pub fn new(wheel_delta: f64) -> Self {
        Self { delta: wheel_delta }
    }
}

impl StateHandler for VerticalPanningState {
    fn enter(&mut self, cx: &mut EditorContext, _from: Option<StateKind>) {
        cx.set_panning(true);
        cx.viewport.location.y += cx.wheel_pan_speed * -self.delta / cx.viewport.zoom;
        cx.pop_state();
    }

    fn exit(&mut self, cx: &mut EditorContext) {
        cx.set_panning(false);
    }
}

/// One-shot horizontal shift by a wheel delta
#[derive(Debug, Clone)]
pub struct HorizontalPanningState {
    delta: f64,
}

impl HorizontalPanningState {
    pub fn new(wheel_delta: f64) -> Self {
        Self { delta: wheel_delta }
    }
}

impl StateHandler for HorizontalPanningState {
    fn enter(&mut self, cx: &mut EditorContext, _from: Option<StateKind>) {
        cx.set_panning(true);
        cx.viewport.location.x += cx.wheel_pan_speed * -self.delta / cx.viewport.zoom;
        cx.pop_state();
    }

    fn exit(&mut self, cx: &mut EditorContext) {
        cx.set_panning(false);
    }
}
