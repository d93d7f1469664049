//! Root application module.
//!
//! Contains the main App component and the AppContext that ties the
//! terminal session, the window manager and persistence together.

use leptos::prelude::*;

use crate::components::Desktop;
use crate::core::persistence::{self, LocalStoragePort};
use crate::core::{
    AutocompleteResult, Command, PathArg, Shell, VirtualFs, WindowHost, WindowManager,
    execute_command,
};
use crate::models::{ListEntry, Location, WindowId};
use crate::utils::sound;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; fetch it with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal session (location, output, input history).
    pub shell: RwSignal<Shell>,
    /// Desktop windows and screen effects.
    pub windows: RwSignal<WindowManager>,
}

impl AppContext {
    /// Build the context from the built-in tree and any saved desktop state.
    ///
    /// A broken built-in manifest leaves the terminal with an empty tree
    /// instead of failing to start.
    pub fn new() -> Self {
        let fs = VirtualFs::builtin().unwrap_or_else(|e| {
            log::warn!("built-in filesystem failed to load, starting empty: {}", e);
            VirtualFs::empty()
        });

        let mut windows = WindowManager::new();
        if let Some(snapshot) = persistence::load_or_default(&LocalStoragePort::new()) {
            windows.restore(&snapshot);
        }

        Self {
            shell: RwSignal::new(Shell::new(fs)),
            windows: RwSignal::new(windows),
        }
    }

    /// Submit a line to the terminal, applying window requests directly to
    /// the window manager.
    pub fn submit(&self, input: &str) {
        let windows = self.windows;
        self.shell.update(|shell| {
            windows.update(|wm| shell.execute(input, wm));
        });
    }

    /// Prompt for the current location, e.g. `root@gelo:~/documents`.
    pub fn prompt(&self) -> String {
        self.shell.with(Shell::prompt)
    }

    pub fn complete(&self, input: &str) -> AutocompleteResult {
        self.shell.with(|shell| shell.complete(input))
    }

    /// Step through input history. `direction < 0` is older.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let mut entry = None;
        self.shell.update(|shell| {
            entry = if direction < 0 {
                shell.history_previous()
            } else {
                shell.history_next()
            };
        });
        entry
    }

    pub fn open_window(&self, id: &WindowId) {
        self.windows.update(|wm| wm.open_window(id, None));
    }

    pub fn close_window(&self, id: &WindowId) {
        self.windows.update(|wm| wm.close_window(id));
    }

    pub fn focus_window(&self, id: &WindowId) {
        self.windows.update(|wm| wm.bring_to_front(id));
    }

    pub fn toggle_maximize(&self, id: &WindowId) {
        self.windows.update(|wm| wm.toggle_maximize(id));
    }

    /// Flip a screen effect from a desktop control.
    pub fn toggle_effect(&self, name: &str) {
        self.windows.update(|wm| {
            wm.toggle_effect(name);
        });
    }

    pub fn effect_active(&self, name: &str) -> bool {
        self.windows.with(|wm| wm.effect_active(name))
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.windows.update(|wm| wm.set_sound_enabled(enabled));
    }

    /// Click feedback for desktop controls, if sound is on.
    pub fn click(&self) {
        if self.windows.with_untracked(WindowManager::sound_enabled) {
            sound::play_click();
        }
    }

    /// Key feedback for the terminal, if sound is on.
    pub fn keypress(&self) {
        if self.windows.with_untracked(WindowManager::sound_enabled) {
            sound::play_key();
        }
    }

    /// Entries of a directory, for the desktop and the file explorer.
    pub fn list_dir(&self, location: &Location) -> Vec<ListEntry> {
        self.shell
            .with(|shell| shell.fs().list_dir(location))
            .unwrap_or_default()
    }

    /// Open an absolute path the way `open` does, without touching the
    /// terminal log.
    pub fn open_path(&self, path: &str) {
        let windows = self.windows;
        self.shell.with_untracked(|shell| {
            windows.update(|wm| {
                let cmd = Command::Open(Some(PathArg::new(path)));
                let result = execute_command(cmd, shell.fs(), &Location::root(), wm);
                for line in &result.output {
                    log::debug!("open {}: {}", path, line.plain_text());
                }
            });
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Save the desktop snapshot whenever window state changes.
fn setup_persistence_effect(windows: RwSignal<WindowManager>) {
    let port = LocalStoragePort::new();
    Effect::new(move || {
        let snapshot = windows.with(WindowManager::snapshot);
        persistence::save_logged(&port, &snapshot);
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Persists window state on every change
/// - Renders the Desktop
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    setup_persistence_effect(ctx.windows);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #050505;
                    color: #e0e0e0;
                    font-family: 'Fira Code', monospace;
                ">
                    <h1 style="color: #ff5f56; margin-bottom: 1rem;">
                        "Kernel panic"
                    </h1>
                    <p style="color: #a0a0a0; margin-bottom: 2rem;">
                        "GelOS hit an unexpected error. Reload to reboot."
                    </p>
                    <ul style="color: #ff5f56; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #00ff41;
                            color: #050505;
                            border: none;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-family: 'Fira Code', monospace;
                        "
                    >
                        "Reboot"
                    </button>
                </div>
            }
        >
            <Desktop />
        </ErrorBoundary>
    }
}
