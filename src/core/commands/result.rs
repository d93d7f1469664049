//! Command execution result type.

use crate::core::error::ShellError;
use crate::models::{Location, OutputLine};

/// Result of executing a command.
///
/// Commands produce output and may ask the shell to change directory or to
/// wipe the log. The shell applies these; commands never mutate it directly.
#[derive(Clone, Debug, Default)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// New current location (only `cd` sets this)
    pub navigate_to: Option<Location>,
    /// Empty the output log before appending `output`
    pub clear_output: bool,
}

impl CommandResult {
    /// Create a result with just output, no navigation.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result with a single output line.
    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// Create a result that changes the current location.
    pub fn navigate(location: Location) -> Self {
        Self {
            navigate_to: Some(location),
            ..Self::default()
        }
    }

    /// Create a result that clears the output log.
    pub fn clear() -> Self {
        Self {
            clear_output: true,
            ..Self::default()
        }
    }

    /// Create an empty result (no output, no navigation).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Report a command failure as a single styled line.
    pub fn error(err: ShellError) -> Self {
        let line = if err.is_usage() {
            OutputLine::warning(err.to_string())
        } else {
            OutputLine::error(err.to_string())
        };
        Self::line(line)
    }
}
