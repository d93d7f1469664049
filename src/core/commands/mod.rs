//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against the tree and the host
//!
//! # Architecture
//!
//! A line is split by [`parse_line`](crate::core::parser::parse_line), turned
//! into a `Command` here, then executed via `execute_command`. Documentation
//! commands are looked up first and never reach the filesystem.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use crate::config::{DOC_PAGES, doc_page};

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `open bar.pdf`).
///
/// The path is stored as typed (not validated) since validation happens
/// during execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    /// Create a new path argument from a string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Static documentation block (`help`, `whoami`, ...). Ignores arguments.
    Doc(&'static str),
    /// List the current directory.
    Ls,
    /// Change directory; `None` goes back to the root.
    Cd(Option<PathArg>),
    /// Open a file or launch a shortcut.
    Open(Option<PathArg>),
    Clear,
    /// Close the terminal window.
    Exit,
    /// Toggle the matrix screen effect.
    Matrix,
    Unknown(String),
}

impl Command {
    /// Structural verbs, i.e. everything that is not a documentation key.
    pub fn names() -> &'static [&'static str] {
        &["cd", "clear", "exit", "ls", "matrix", "open"]
    }

    /// Every verb offered by first-token completion: documentation keys
    /// first, then structural verbs, without duplicates.
    pub fn completion_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = DOC_PAGES.iter().map(|(name, _)| *name).collect();
        for name in Self::names() {
            if !names.contains(name) {
                names.push(name);
            }
        }
        names
    }

    /// Parse command from verb and optional argument.
    ///
    /// The verb is matched case-insensitively.
    pub fn parse(verb: &str, argument: Option<&str>) -> Self {
        let verb = verb.to_lowercase();

        if let Some(body) = doc_page(&verb) {
            return Self::Doc(body);
        }

        match verb.as_str() {
            "ls" => Self::Ls,
            "cd" => Self::Cd(argument.map(PathArg::new)),
            "open" => Self::Open(argument.map(PathArg::new)),
            "clear" => Self::Clear,
            "exit" => Self::Exit,
            "matrix" => Self::Matrix,
            _ => Self::Unknown(verb),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
