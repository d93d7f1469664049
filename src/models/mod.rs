//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`Directory`], [`File`], [`FileKind`], [`Action`] - Virtual tree representation
//! - [`Manifest`], [`ManifestEntry`] - Serialized tree loaded at startup
//! - [`Location`] - Segment path of a node, always rooted at `"root"`
//! - [`OutputLine`], [`OutputLog`] - Terminal output types
//! - [`WindowId`], [`WindowState`], [`SessionSnapshot`] - Desktop window state

mod location;
mod node;
mod terminal;
mod window;

pub use location::{Location, ROOT_SEGMENT};
pub use node::{Action, Directory, File, FileKind, Manifest, ManifestEntry, Node};
pub use terminal::{EntryStyle, ListEntry, OutputLine, OutputLineData, OutputLog};
pub use window::{
    SessionSnapshot, Settings, ViewerPayload, WindowId, WindowSnapshot, WindowState,
};
