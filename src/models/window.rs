//! Window manager types and the persisted desktop snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a desktop window (e.g. `terminal`, `pdf`).
///
/// Kept as an opaque string: the set of windows belongs to the host, not to
/// the filesystem or the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a viewer window should display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerPayload {
    /// Window title (the path the user typed)
    pub title: String,
    /// Asset path of the file to show
    pub content_ref: String,
}

/// Live state of one desktop window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowState {
    pub id: WindowId,
    pub title: String,
    pub is_open: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    /// Last payload handed to this window (viewers only)
    pub payload: Option<ViewerPayload>,
}

// =============================================================================
// Persisted Snapshot
// =============================================================================

/// Small settings bag persisted alongside window state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub matrix_active: bool,
}

/// Persisted form of one window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub is_open: bool,
    #[serde(default)]
    pub is_maximized: bool,
    pub z_index: u32,
}

/// Everything the desktop saves between visits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub windows: Vec<WindowSnapshot>,
    #[serde(default)]
    pub settings: Settings,
}
