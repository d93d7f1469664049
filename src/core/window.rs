//! Desktop window manager.
//!
//! Holds the open/maximized/z-order state of every known window plus the
//! screen effects. It is the production [`WindowHost`]: the dispatcher's
//! requests land here, and the UI renders from it.

use std::collections::BTreeMap;

use crate::config::{BASE_WINDOW_Z_INDEX, INITIAL_Z_INDEX, MATRIX_EFFECT, WINDOWS};
use crate::core::host::WindowHost;
use crate::models::{
    SessionSnapshot, Settings, ViewerPayload, WindowId, WindowSnapshot, WindowState,
};

/// State of all desktop windows and effects.
///
/// Every focus-bringing operation takes the next value of `z_counter`, so
/// the most recently focused window always has the highest z-index.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowManager {
    windows: Vec<WindowState>,
    z_counter: u32,
    effects: BTreeMap<String, bool>,
    sound_enabled: bool,
}

impl WindowManager {
    /// Registry of the built-in windows, all closed.
    pub fn new() -> Self {
        let windows = WINDOWS
            .iter()
            .map(|(id, title)| WindowState {
                id: WindowId::new(*id),
                title: title.to_string(),
                is_open: false,
                is_maximized: false,
                z_index: BASE_WINDOW_Z_INDEX,
                payload: None,
            })
            .collect();

        Self {
            windows,
            z_counter: INITIAL_Z_INDEX,
            effects: BTreeMap::new(),
            sound_enabled: true,
        }
    }

    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    /// Windows currently open, in registry order.
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowState> {
        self.windows.iter().filter(|w| w.is_open)
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.id == id)
    }

    fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowState> {
        let found = self.windows.iter_mut().find(|w| &w.id == id);
        if found.is_none() {
            log::warn!("ignoring request for unknown window '{}'", id);
        }
        found
    }

    pub fn is_open(&self, id: &WindowId) -> bool {
        self.get(id).is_some_and(|w| w.is_open)
    }

    /// The open window with the highest z-index.
    pub fn focused(&self) -> Option<&WindowState> {
        self.open_windows().max_by_key(|w| w.z_index)
    }

    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }

    /// Raise a window above every other one.
    pub fn bring_to_front(&mut self, id: &WindowId) {
        let next = self.z_counter + 1;
        if let Some(window) = self.get_mut(id) {
            window.z_index = next;
            self.z_counter = next;
        }
    }

    pub fn toggle_maximize(&mut self, id: &WindowId) {
        if let Some(window) = self.get_mut(id) {
            window.is_maximized = !window.is_maximized;
        }
    }

    pub fn effect_active(&self, name: &str) -> bool {
        self.effects.get(name).copied().unwrap_or(false)
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn settings(&self) -> Settings {
        Settings {
            sound_enabled: self.sound_enabled,
            matrix_active: self.effect_active(MATRIX_EFFECT),
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Everything worth keeping between visits.
    ///
    /// Viewer payloads are not saved; a restored viewer opens empty.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            windows: self
                .windows
                .iter()
                .map(|w| WindowSnapshot {
                    id: w.id.clone(),
                    is_open: w.is_open,
                    is_maximized: w.is_maximized,
                    z_index: w.z_index,
                })
                .collect(),
            settings: self.settings(),
        }
    }

    /// Apply a saved snapshot on top of the current registry.
    ///
    /// Windows the registry does not know are skipped. The stacking counter
    /// never moves backwards.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) {
        for saved in &snapshot.windows {
            match self.windows.iter_mut().find(|w| w.id == saved.id) {
                Some(window) => {
                    window.is_open = saved.is_open;
                    window.is_maximized = saved.is_maximized;
                    window.z_index = saved.z_index;
                    self.z_counter = self.z_counter.max(saved.z_index);
                }
                None => log::warn!("dropping saved state of unknown window '{}'", saved.id),
            }
        }
        self.sound_enabled = snapshot.settings.sound_enabled;
        self.effects
            .insert(MATRIX_EFFECT.to_string(), snapshot.settings.matrix_active);
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowHost for WindowManager {
    fn open_window(&mut self, id: &WindowId, payload: Option<ViewerPayload>) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.is_open = true;
        if payload.is_some() {
            window.payload = payload;
        }
        self.bring_to_front(id);
    }

    fn close_window(&mut self, id: &WindowId) {
        if let Some(window) = self.get_mut(id) {
            window.is_open = false;
        }
    }

    fn toggle_window(&mut self, id: &WindowId) {
        if self.is_open(id) {
            self.close_window(id);
        } else {
            self.open_window(id, None);
        }
    }

    fn toggle_effect(&mut self, name: &str) -> bool {
        let active = self.effects.entry(name.to_string()).or_insert(false);
        *active = !*active;
        log::debug!("effect '{}' -> {}", name, *active);
        *active
    }
}
