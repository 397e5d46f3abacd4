//! Editor-wide constants.
//!
//! Centralizes thresholds and tuning values used by the interaction states
//! and the graph view-model.

// ============================================================================
// Panning
// ============================================================================

/// Distance (screen pixels) the pointer must travel during a right-button pan
/// before the release is marked handled, suppressing the context menu.
pub const RIGHT_CLICK_PAN_THRESHOLD: f64 = 12.0;

/// Multiplier applied to the wheel delta by the one-shot wheel panning states
pub const WHEEL_PAN_SPEED: f64 = 0.5;

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Wheel delta corresponding to one notch on most mice
pub const WHEEL_NOTCH: f64 = 120.0;

/// Zoom factor applied per wheel notch
pub const ZOOM_STEP: f64 = 1.1;

// ============================================================================
// Hit Testing
// ============================================================================

/// Radius (content units) around a connector anchor that counts as a hit
pub const CONNECTOR_HIT_RADIUS: f64 = 8.0;

/// Default size of a newly created flow node
pub const DEFAULT_NODE_SIZE: (f64, f64) = (160.0, 90.0);

/// Default size of a knot node
pub const KNOT_SIZE: (f64, f64) = (16.0, 16.0);

/// Vertical spacing between connector anchors on a flow node
pub const CONNECTOR_SPACING: f64 = 24.0;

/// Vertical offset of the first connector anchor below the node header
pub const CONNECTOR_HEADER_OFFSET: f64 = 36.0;

// ============================================================================
// Comments
// ============================================================================

/// Padding added around the selection bounds when wrapping it in a comment
pub const COMMENT_PADDING: f64 = 30.0;

/// Title given to comments created from the selection
pub const DEFAULT_COMMENT_TITLE: &str = "New comment";

// ============================================================================
// Gestures
// ============================================================================

/// Maximum nesting depth when resolving gesture references.
/// Deeper (or cyclic) bindings resolve to "no match".
pub const MAX_GESTURE_DEPTH: u8 = 16;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "graphboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
