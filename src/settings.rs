//! Editor settings.
//!
//! Settings live in a JSON file under the platform config directory. Every
//! field has a default, so partial files load fine and unknown keys are
//! ignored.
//!
//! The graph only needs to know whether the editor is read-only; it sees the
//! settings through [`SettingsProvider`] so hosts can plug in their own
//! source of truth.

use crate::constants::{RIGHT_CLICK_PAN_THRESHOLD, WHEEL_PAN_SPEED};
use crate::error::{EditorError, EditorResult};
use crate::gestures::GestureBindings;
use crate::settings_watcher::default_settings_path;
use anyhow::Context;
use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read access to the settings the graph view-model depends on
pub trait SettingsProvider: Send + Sync {
    fn is_read_only(&self) -> bool;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Blocks every mutating command
    pub read_only: bool,
    /// Suppresses drag and wheel panning
    pub disable_panning: bool,
    /// Screen pixels a right-drag must cover before its release is swallowed
    pub right_click_pan_threshold: f64,
    pub wheel_pan_speed: f64,
    pub gestures: GestureBindings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            read_only: false,
            disable_panning: false,
            right_click_pan_threshold: RIGHT_CLICK_PAN_THRESHOLD,
            wheel_pan_speed: WHEEL_PAN_SPEED,
            gestures: GestureBindings::default(),
        }
    }
}

static GLOBAL_SETTINGS: Lazy<RwLock<EditorSettings>> =
    Lazy::new(|| RwLock::new(EditorSettings::default()));

impl EditorSettings {
    /// Process-wide settings instance
    pub fn global() -> &'static RwLock<EditorSettings> {
        &GLOBAL_SETTINGS
    }

    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> EditorResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(EditorError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the platform config directory
    pub fn load_default() -> anyhow::Result<Self> {
        let path = default_settings_path().context("no config directory on this platform")?;
        Self::load_from(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> EditorResult<()> {
        let io_err = |source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_json()?).map_err(io_err)
    }
}

impl SettingsProvider for EditorSettings {
    fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// Settings shared between an editor and its graph
#[derive(Debug, Clone, Default)]
pub struct SharedSettings(Arc<RwLock<EditorSettings>>);

impl SharedSettings {
    pub fn new(settings: EditorSettings) -> Self {
        Self(Arc::new(RwLock::new(settings)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, EditorSettings> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, EditorSettings> {
        self.0.write()
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.0.write().read_only = read_only;
    }

    pub fn snapshot(&self) -> EditorSettings {
        self.0.read().clone()
    }
}

impl SettingsProvider for SharedSettings {
    fn is_read_only(&self) -> bool {
        self.0.read().read_only
    }
}

/// Provider backed by [`EditorSettings::global`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSettings;

impl SettingsProvider for GlobalSettings {
    fn is_read_only(&self) -> bool {
        EditorSettings::global().read().read_only
    }
}
