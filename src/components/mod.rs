//! UI components built with Leptos.
//!
//! - [`Desktop`] - Boot screen, desktop icons, windows and taskbar
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`terminal`] - Terminal emulator interface

pub mod desktop;
pub mod icons;
pub mod terminal;

pub use desktop::Desktop;
