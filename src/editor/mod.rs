//! Interaction state machine.
//!
//! The [`Editor`] owns a stack of [`EditorState`]s and routes every input
//! event either to the active state or, for button presses, wheel ticks and
//! keys, to its own routing logic which decides what to push.
//!
//! ## Modules
//!
//! - `context` - Everything hooks can touch, plus the transition queue
//! - `stack` - Push/pop discipline
//! - `state` - State enum, kinds and the `StateHandler` hook trait
//! - `panning` - Drag and wheel panning
//! - `selecting` - Rubber-band selection
//! - `dragging` - Moving selected nodes
//! - `connecting` - Pending connection preview and commit

mod connecting;
mod context;
mod dragging;
mod panning;
mod selecting;
mod stack;
mod state;

pub use connecting::ConnectingState;
pub use context::EditorContext;
pub use dragging::DraggingState;
pub use panning::{HorizontalPanningState, PanningState, VerticalPanningState};
pub use selecting::SelectingState;
pub use stack::StateStack;
pub use state::{EditorState, StateHandler, StateKind};

use crate::constants::{WHEEL_NOTCH, ZOOM_STEP};
use crate::error::EditorResult;
use crate::geometry::{Point, Rect};
use crate::gestures::{EditorAction, GestureBindings};
use crate::graph::{Graph, GraphCommand, HitTarget, NodeId, SelectionMode};
use crate::input::{InputEvent, InputKind, Viewport};
use crate::profile_scope;
use crate::settings::{EditorSettings, SharedSettings};
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use context::Transition;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What the editor does with an event, decided from its routing event
#[derive(Debug, Clone, Copy, PartialEq)]
enum Route {
    PointerMove,
    ButtonDown,
    ButtonUp,
    Wheel(f64),
    KeyDown,
    Ignore,
}

impl Route {
    fn of(event: &InputEvent) -> Self {
        match &event.routing_event().kind {
            InputKind::PointerMove { .. } => Route::PointerMove,
            InputKind::ButtonDown { .. } => Route::ButtonDown,
            InputKind::ButtonUp { .. } => Route::ButtonUp,
            InputKind::Wheel { delta, .. } => Route::Wheel(*delta),
            InputKind::KeyDown { .. } => Route::KeyDown,
            InputKind::KeyUp { .. } | InputKind::Composite(_) => Route::Ignore,
        }
    }
}

#[derive(Debug)]
pub struct Editor {
    stack: StateStack,
    cx: EditorContext,
    settings: SharedSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_graph(Graph::new())
    }

    /// Wrap an existing graph. The graph's read-only flag is rebound to the
    /// editor's settings.
    pub fn with_graph(graph: Graph) -> Self {
        Self::with_settings(graph, SharedSettings::default())
    }

    pub fn with_settings(mut graph: Graph, settings: SharedSettings) -> Self {
        graph.set_settings(Arc::new(settings.clone()));
        let mut cx = EditorContext::new(graph);
        cx.apply_settings(&settings.read());
        Self {
            stack: StateStack::new(),
            cx,
            settings,
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Route one input event. Events are processed to completion, including
    /// every transition they cause, before this returns.
    pub fn dispatch(&mut self, event: &mut InputEvent) -> EditorResult<()> {
        profile_scope!("editor_dispatch");

        if let Some(position) = event.position() {
            self.cx.set_pointer(position);
        }
        let target = self.cx.graph.hit_test(self.cx.content_pointer());
        self.cx.set_target(target);

        match Route::of(event) {
            Route::PointerMove => {
                #[cfg(feature = "profiling")]
                tracing::trace!(pointer = ?self.cx.pointer_position(), "pointer move");
                self.run_top(|state, cx| state.on_pointer_move(cx, event));
            }
            Route::ButtonUp => self.run_top(|state, cx| state.on_button_up(cx, event)),
            Route::ButtonDown => self.on_button_down(event),
            Route::Wheel(delta) => self.on_wheel(delta, event),
            Route::KeyDown => self.on_key_down(event),
            Route::Ignore => {}
        }

        self.apply_transitions()
    }

    /// Run a hook on the active state, if any
    fn run_top(&mut self, hook: impl FnOnce(&mut EditorState, &mut EditorContext)) {
        self.cx.set_state_below(self.stack.below_top());
        if let Some(top) = self.stack.top_mut() {
            hook(top, &mut self.cx);
        }
    }

    fn apply_transitions(&mut self) -> EditorResult<()> {
        while let Some(transition) = self.cx.next_transition() {
            match transition {
                Transition::Push(state) => {
                    let from = self.stack.top_kind();
                    debug!(state = ?state.kind(), ?from, "push state");
                    self.stack.push(state);
                    self.run_top(|state, cx| state.enter(cx, from));
                }
                Transition::Pop => {
                    self.run_top(|state, cx| state.exit(cx));
                    match self.stack.pop() {
                        Ok(state) => debug!(state = ?state.kind(), "pop state"),
                        Err(e) => {
                            error!("{}", e);
                            self.cx.discard_transitions();
                            return Err(e);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Push a state from outside any hook
    pub fn push_state(&mut self, state: EditorState) -> EditorResult<()> {
        self.cx.push_state(state);
        self.apply_transitions()
    }

    /// Pop the active state from outside any hook
    pub fn pop_state(&mut self) -> EditorResult<()> {
        self.cx.pop_state();
        self.apply_transitions()
    }

    // ========================================================================
    // Routing
    // ========================================================================

    fn on_button_down(&mut self, event: &mut InputEvent) {
        let cx = &mut self.cx;
        let pushed = match self.stack.top_kind() {
            None => match cx.target() {
                HitTarget::Connector(id) if cx.matches(EditorAction::Connect, event) => {
                    cx.push_state(EditorState::connecting(id));
                    true
                }
                HitTarget::Node(id) if cx.matches(EditorAction::Drag, event) => {
                    Self::press_node(cx, id, event)
                }
                _ if cx.matches(EditorAction::Pan, event) => {
                    if !cx.disable_panning {
                        cx.push_state(EditorState::panning());
                    }
                    !cx.disable_panning
                }
                _ if cx.matches(EditorAction::Select, event) => {
                    let mode = Self::selection_mode(cx, event);
                    cx.push_state(EditorState::selecting(mode));
                    true
                }
                _ => false,
            },
            Some(StateKind::Selecting)
                if !cx.disable_panning && cx.matches(EditorAction::Pan, event) =>
            {
                cx.push_state(EditorState::panning());
                true
            }
            Some(_) => false,
        };

        if pushed {
            event.set_handled(true);
        }
    }

    /// Apply a press on `node` to the selection, then start dragging it if it
    /// ends up selected.
    fn press_node(cx: &mut EditorContext, node: NodeId, event: &InputEvent) -> bool {
        let mode = Self::selection_mode(cx, event);
        let selected = cx.graph.is_selected(node);
        match (mode, selected) {
            (SelectionMode::Replace, false) => cx.graph.select_only(node),
            (SelectionMode::Append, false) | (SelectionMode::Invert, false) => {
                cx.graph.select(node);
            }
            (SelectionMode::Invert, true) | (SelectionMode::Remove, true) => {
                cx.graph.deselect(node);
            }
            _ => {}
        }

        if cx.graph.is_selected(node) {
            cx.push_state(EditorState::dragging());
        }
        true
    }

    /// Mode implied by whichever select sub-gesture matched
    fn selection_mode(cx: &EditorContext, event: &InputEvent) -> SelectionMode {
        if cx.matches(EditorAction::SelectAppend, event) {
            SelectionMode::Append
        } else if cx.matches(EditorAction::SelectInvert, event) {
            SelectionMode::Invert
        } else if cx.matches(EditorAction::SelectRemove, event) {
            SelectionMode::Remove
        } else {
            SelectionMode::Replace
        }
    }

    fn on_wheel(&mut self, delta: f64, event: &mut InputEvent) {
        if !delta.is_finite() {
            warn!(delta, "ignoring non-finite wheel delta");
            return;
        }
        let cx = &mut self.cx;

        // Zoom first: wheel chords match by containment, so ctrl+wheel would
        // otherwise also satisfy the plain-wheel pan.
        if cx.matches(EditorAction::Zoom, event) {
            let zoom = cx.viewport.zoom * ZOOM_STEP.powf(delta / WHEEL_NOTCH);
            let pointer = cx.pointer_position();
            cx.viewport.zoom_at(zoom, pointer);
            event.set_handled(true);
            return;
        }

        if !self.stack.is_empty() || cx.disable_panning {
            return;
        }
        if cx.matches(EditorAction::PanHorizontal, event) {
            cx.push_state(EditorState::horizontal_panning(delta));
            event.set_handled(true);
        } else if cx.matches(EditorAction::PanVertical, event) {
            cx.push_state(EditorState::vertical_panning(delta));
            event.set_handled(true);
        }
    }

    fn on_key_down(&mut self, event: &mut InputEvent) {
        let cx = &mut self.cx;

        if cx.matches(EditorAction::Cancel, event) {
            if !self.stack.is_empty() {
                debug!(state = ?self.stack.top_kind(), "cancelling active state");
                cx.pop_state();
                event.set_handled(true);
            }
            return;
        }

        let command = if cx.matches(EditorAction::DeleteSelection, event) {
            GraphCommand::DeleteSelection
        } else if cx.matches(EditorAction::CommentSelection, event) {
            GraphCommand::CommentSelection
        } else {
            return;
        };

        let outcome = cx.graph.execute(command);
        if !outcome.is_disabled() {
            event.set_handled(true);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn graph(&self) -> &Graph {
        &self.cx.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.cx.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.cx.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.cx.viewport
    }

    /// Zoom around a screen position, clamped to the zoom limits
    pub fn zoom_at(&mut self, zoom: f64, screen_pos: Point) -> bool {
        self.cx.viewport.zoom_at(zoom, screen_pos)
    }

    pub fn bindings(&self) -> &GestureBindings {
        &self.cx.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut GestureBindings {
        &mut self.cx.bindings
    }

    pub fn context(&self) -> &EditorContext {
        &self.cx
    }

    pub fn state(&self) -> Option<StateKind> {
        self.stack.top_kind()
    }

    /// Kinds from bottom to top
    pub fn states(&self) -> Vec<StateKind> {
        self.stack.kinds()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn is_panning(&self) -> bool {
        self.cx.is_panning()
    }

    pub fn is_selecting(&self) -> bool {
        self.cx.is_selecting()
    }

    pub fn is_dragging(&self) -> bool {
        self.cx.is_dragging()
    }

    pub fn is_connecting(&self) -> bool {
        self.cx.is_connecting()
    }

    /// Content-space rectangle of an active box selection
    pub fn selection_rect(&self) -> Option<Rect> {
        self.cx.selection_rect()
    }

    pub fn pointer_position(&self) -> Point {
        self.cx.pointer_position()
    }

    pub fn is_read_only(&self) -> bool {
        self.cx.graph.is_read_only()
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    /// Adopt `settings`. Gesture bindings are replaced in place, so
    /// `GestureRef`s keep resolving to the current binding.
    pub fn apply_settings(&mut self, settings: &EditorSettings) {
        *self.settings.write() = settings.clone();
        self.cx.apply_settings(settings);
        debug!(
            read_only = settings.read_only,
            disable_panning = settings.disable_panning,
            "settings applied"
        );
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.settings.set_read_only(read_only);
    }

    pub fn set_disable_panning(&mut self, disable: bool) {
        self.settings.write().disable_panning = disable;
        self.cx.disable_panning = disable;
    }

    /// Reload settings if the watched file changed. Returns whether new
    /// settings were applied.
    pub fn check_settings_reload(&mut self, watcher: &mut SettingsWatcher) -> bool {
        let Some(event) = watcher.poll() else {
            return false;
        };

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                info!("Settings file changed, reloading...");
                match EditorSettings::load_from(watcher.path()) {
                    Ok(settings) => {
                        self.apply_settings(&settings);
                        true
                    }
                    Err(e) => {
                        warn!("Failed to reload settings: {}", e);
                        false
                    }
                }
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted");
                false
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
                false
            }
        }
    }
}
