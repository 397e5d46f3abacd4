//! Raw input events delivered by the host toolkit.
//!
//! Every event carries the device it came from, a timestamp, a snapshot of the
//! modifier keys held at the time, and a `handled` flag the host reads back to
//! suppress its own default behavior (context menus, scrolling).
//!
//! A `Composite` event bundles several raw events that arrived in the same
//! dispatch tick and represent one logical action.

use crate::error::{EditorError, EditorResult};
use crate::geometry::Point;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keys held while an event was produced.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const SUPER   = 0b1000;
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Left button
    Primary,
    /// Right button, the context-menu button on most platforms
    Secondary,
    /// Wheel button
    Middle,
    Back,
    Forward,
}

/// Keys the editor cares about. Anything else arrives as `Char` or `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Delete,
    Backspace,
    Enter,
    Space,
    Tab,
    Left,
    Right,
    Up,
    Down,
    /// A printable character, lowercase
    Char(char),
    /// Host-specific key code
    Other(u32),
}

/// Identifies the physical device an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DeviceId(pub u32);

impl DeviceId {
    pub const MOUSE: DeviceId = DeviceId(0);
    pub const KEYBOARD: DeviceId = DeviceId(1);
}

/// What happened
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    PointerMove { position: Point },
    ButtonDown { button: MouseButton, position: Point },
    ButtonUp { button: MouseButton, position: Point },
    /// Positive delta scrolls up / away from the user
    Wheel { delta: f64, position: Point },
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Simultaneous events considered one dispatch unit
    Composite(Vec<InputEvent>),
}

/// A single input event, or a bundle of simultaneous ones.
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    pub device: DeviceId,
    pub timestamp: u64,
    pub modifiers: Modifiers,
    pub kind: InputKind,
    handled: bool,
}

impl InputEvent {
    pub fn new(device: DeviceId, timestamp: u64, modifiers: Modifiers, kind: InputKind) -> Self {
        Self {
            device,
            timestamp,
            modifiers,
            kind,
            handled: false,
        }
    }

    pub fn pointer_move(position: Point, modifiers: Modifiers) -> Self {
        Self::new(DeviceId::MOUSE, 0, modifiers, InputKind::PointerMove { position })
    }

    pub fn button_down(button: MouseButton, position: Point, modifiers: Modifiers) -> Self {
        Self::new(
            DeviceId::MOUSE,
            0,
            modifiers,
            InputKind::ButtonDown { button, position },
        )
    }

    pub fn button_up(button: MouseButton, position: Point, modifiers: Modifiers) -> Self {
        Self::new(
            DeviceId::MOUSE,
            0,
            modifiers,
            InputKind::ButtonUp { button, position },
        )
    }

    pub fn wheel(delta: f64, position: Point, modifiers: Modifiers) -> Self {
        Self::new(
            DeviceId::MOUSE,
            0,
            modifiers,
            InputKind::Wheel { delta, position },
        )
    }

    pub fn key_down(key: Key, modifiers: Modifiers) -> Self {
        Self::new(DeviceId::KEYBOARD, 0, modifiers, InputKind::KeyDown { key })
    }

    pub fn key_up(key: Key, modifiers: Modifiers) -> Self {
        Self::new(DeviceId::KEYBOARD, 0, modifiers, InputKind::KeyUp { key })
    }

    /// Bundle simultaneous events. Device, timestamp and modifiers are taken
    /// from the first event.
    pub fn composite(events: Vec<InputEvent>) -> EditorResult<Self> {
        let first = events.first().ok_or(EditorError::EmptyComposite)?;
        Ok(Self::new(
            first.device,
            first.timestamp,
            first.modifiers,
            InputKind::Composite(events),
        ))
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, InputKind::Composite(_))
    }

    /// Sub-events of a composite, or `None` for a single event
    pub fn bundle(&self) -> Option<&[InputEvent]> {
        match &self.kind {
            InputKind::Composite(events) => Some(events),
            _ => None,
        }
    }

    /// The event the editor routes on.
    ///
    /// For a single event that is the event itself. For a composite it is the
    /// first pointer or wheel sub-event, falling back to the first sub-event.
    pub fn routing_event(&self) -> &InputEvent {
        match &self.kind {
            InputKind::Composite(events) => events
                .iter()
                .map(InputEvent::routing_event)
                .find(|e| e.position().is_some())
                .or_else(|| events.first())
                .unwrap_or(self),
            _ => self,
        }
    }

    /// Pointer position, if this is a pointer or wheel event
    pub fn position(&self) -> Option<Point> {
        match &self.kind {
            InputKind::PointerMove { position }
            | InputKind::ButtonDown { position, .. }
            | InputKind::ButtonUp { position, .. }
            | InputKind::Wheel { position, .. } => Some(*position),
            InputKind::Composite(_) => {
                let routed = self.routing_event();
                if std::ptr::eq(routed, self) {
                    None
                } else {
                    routed.position()
                }
            }
            InputKind::KeyDown { .. } | InputKind::KeyUp { .. } => None,
        }
    }

    /// Button that changed, for button events
    pub fn changed_button(&self) -> Option<MouseButton> {
        match &self.routing_event().kind {
            InputKind::ButtonDown { button, .. } | InputKind::ButtonUp { button, .. } => {
                Some(*button)
            }
            _ => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        match &self.kind {
            InputKind::Composite(events) => self.handled || events.iter().any(|e| e.is_handled()),
            _ => self.handled,
        }
    }

    /// Mark handled. On a composite every sub-event is marked too.
    pub fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
        if let InputKind::Composite(events) = &mut self.kind {
            for e in events {
                e.set_handled(handled);
            }
        }
    }
}
