//! Side-effect port between the dispatcher and the desktop.
//!
//! The dispatcher never touches windows directly. It asks a [`WindowHost`]
//! to open or close a window or to flip a screen effect, and the host
//! decides what that means on screen.

use std::collections::HashMap;

use crate::models::{ViewerPayload, WindowId};

/// Requests the dispatcher can make of the desktop.
pub trait WindowHost {
    /// Open (and focus) a window, optionally handing it something to show.
    fn open_window(&mut self, id: &WindowId, payload: Option<ViewerPayload>);

    /// Close a window.
    fn close_window(&mut self, id: &WindowId);

    /// Open the window if closed, close it if open.
    fn toggle_window(&mut self, id: &WindowId);

    /// Flip a named screen effect and return its new state.
    fn toggle_effect(&mut self, name: &str) -> bool;
}

/// A request as seen by [`RecordingHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostRequest {
    OpenWindow {
        id: WindowId,
        payload: Option<ViewerPayload>,
    },
    CloseWindow(WindowId),
    ToggleWindow(WindowId),
    ToggleEffect { name: String, active: bool },
}

/// Host that only records what it was asked to do.
///
/// Effects are tracked so `toggle_effect` answers consistently.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    pub requests: Vec<HostRequest>,
    effects: HashMap<String, bool>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded requests, leaving the list empty.
    pub fn drain(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn effect_active(&self, name: &str) -> bool {
        self.effects.get(name).copied().unwrap_or(false)
    }
}

impl WindowHost for RecordingHost {
    fn open_window(&mut self, id: &WindowId, payload: Option<ViewerPayload>) {
        self.requests.push(HostRequest::OpenWindow {
            id: id.clone(),
            payload,
        });
    }

    fn close_window(&mut self, id: &WindowId) {
        self.requests.push(HostRequest::CloseWindow(id.clone()));
    }

    fn toggle_window(&mut self, id: &WindowId) {
        self.requests.push(HostRequest::ToggleWindow(id.clone()));
    }

    fn toggle_effect(&mut self, name: &str) -> bool {
        let active = self.effects.entry(name.to_string()).or_insert(false);
        *active = !*active;
        let active = *active;
        self.requests.push(HostRequest::ToggleEffect {
            name: name.to_string(),
            active,
        });
        active
    }
}
