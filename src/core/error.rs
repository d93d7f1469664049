//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ResolveError`] - Path resolution against the virtual tree
//! - [`ShellError`] - Everything a command can report back to the terminal
//! - [`ManifestError`] - Building the tree from its JSON manifest
//! - [`PersistenceError`] - Saving and loading the desktop snapshot

use thiserror::Error;

/// Path resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Some segment of the path does not exist. Carries the expression as
    /// typed, not the normalized path.
    #[error("{expression}: No such file or directory")]
    NotFound { expression: String },
}

/// Command failures, rendered verbatim as an error line.
///
/// None of these escape the shell; each becomes one log entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{command}: {path}: No such file or directory")]
    NotFound { command: String, path: String },

    #[error("{command}: {path}: Not a directory")]
    NotADirectory { command: String, path: String },

    #[error("{command}: {path}: Is a directory")]
    IsADirectory { command: String, path: String },

    #[error("Cannot open file type: {0}")]
    UnsupportedFileKind(String),

    #[error("Command not found: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl ShellError {
    /// Attach the command name to a resolver failure.
    pub fn from_resolve(command: &str, err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound { expression } => Self::NotFound {
                command: command.to_string(),
                path: expression,
            },
        }
    }

    /// Usage errors are hints rather than failures and render as warnings.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Invalid tree manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid entry name '{name}' in {parent}")]
    InvalidName { parent: String, name: String },

    #[error("duplicate entry '{name}' in {parent}")]
    DuplicateName { parent: String, name: String },

    #[error("{path}: '{kind}' entry is missing field '{field}'")]
    MissingField {
        path: String,
        kind: String,
        field: &'static str,
    },

    #[error("{path}: invalid action '{action}'")]
    InvalidAction { path: String, action: String },
}

/// Desktop snapshot storage failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("localStorage not available")]
    StorageUnavailable,

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write to localStorage")]
    WriteFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_message_keeps_expression() {
        let err = ResolveError::NotFound {
            expression: "../nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "../nowhere: No such file or directory");
    }

    #[test]
    fn test_shell_error_messages() {
        let err = ShellError::from_resolve(
            "cd",
            ResolveError::NotFound {
                expression: "nowhere".to_string(),
            },
        );
        assert_eq!(err.to_string(), "cd: nowhere: No such file or directory");

        let err = ShellError::IsADirectory {
            command: "open".to_string(),
            path: "documents".to_string(),
        };
        assert_eq!(err.to_string(), "open: documents: Is a directory");

        assert_eq!(
            ShellError::UnknownCommand("sudo".to_string()).to_string(),
            "Command not found: sudo"
        );
        assert_eq!(
            ShellError::Usage("open [filename]").to_string(),
            "usage: open [filename]"
        );
        assert!(ShellError::Usage("open [filename]").is_usage());
    }
}
