//! Core business logic for the desktop terminal.
//!
//! This module provides:
//! - [`VirtualFs`] tree store and path resolver
//! - [`Command`] parsing and [`execute_command`] dispatch
//! - [`Shell`] session state (location, output log, input history)
//! - [`autocomplete`] and [`CommandHistory`] for the line editor
//! - [`WindowHost`] port and the [`WindowManager`] behind it
//! - [`PersistencePort`] adapters for the desktop snapshot

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
mod history;
pub mod host;
pub mod parser;
pub mod persistence;
mod shell;
mod window;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use commands::{Command, CommandResult, PathArg, execute_command};
pub use filesystem::{Resolved, VirtualFs, entry_style};
pub use history::CommandHistory;
pub use host::{HostRequest, RecordingHost, WindowHost};
pub use parser::parse_line;
pub use persistence::{LocalStoragePort, MemoryPort, PersistencePort};
pub use shell::Shell;
pub use window::WindowManager;
