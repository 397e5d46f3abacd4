//! Boolean combinations of gestures.

use super::gesture::{Gesture, GestureContext};
use crate::input::InputEvent;
use serde::{Deserialize, Serialize};

/// Strategy used by [`MultiGesture`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// At least one gesture must match
    Any,
    /// All gestures must match
    All,
}

/// Combines multiple gestures.
///
/// Children are evaluated in order and evaluation stops at the first decisive
/// result. An empty combination never matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiGesture {
    pub strategy: MatchStrategy,
    pub gestures: Vec<Gesture>,
}

impl MultiGesture {
    pub fn new(strategy: MatchStrategy, gestures: Vec<Gesture>) -> Self {
        Self { strategy, gestures }
    }

    pub fn matches(&self, cx: &GestureContext<'_>, event: &InputEvent) -> bool {
        if self.gestures.is_empty() {
            return false;
        }

        match self.strategy {
            MatchStrategy::Any => self.gestures.iter().any(|g| g.matches(cx, event)),
            MatchStrategy::All => self.gestures.iter().all(|g| g.matches(cx, event)),
        }
    }
}
