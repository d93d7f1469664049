//! Tab autocomplete for command names and paths.
//!
//! Completion works on the last whitespace-separated token of the buffer:
//! - First token: documentation keys and structural verbs
//! - Later tokens: children of the directory named by the token's prefix up
//!   to its last `/` (or of the current directory when there is no `/`)
//!
//! Only a unique match changes the buffer. There is no common-prefix
//! completion and no cycling through candidates.

use crate::core::{Command, VirtualFs};
use crate::models::Location;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Exactly one match - the whole buffer with the token completed.
    Single(String),
    /// Several matches - the buffer stays as it is.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Path Parsing
// ============================================================================

/// A path token split at its last `/`.
struct ParsedPath<'a> {
    /// Directory prefix including the slash (e.g. "documents/" or "").
    dir_part: &'a str,
    /// Name being completed.
    name_part: &'a str,
}

impl<'a> ParsedPath<'a> {
    fn parse(token: &'a str) -> Self {
        match token.rfind('/') {
            Some(idx) => Self {
                dir_part: &token[..=idx],
                name_part: &token[idx + 1..],
            },
            None => Self {
                dir_part: "",
                name_part: token,
            },
        }
    }

    /// Child names of the directory this token points into.
    fn directory_names(&self, current: &Location, fs: &VirtualFs) -> Vec<String> {
        let search_dir = if self.dir_part.is_empty() {
            fs.get(current)
        } else {
            fs.resolve(current, self.dir_part).ok().map(|resolved| resolved.node)
        };

        search_dir
            .and_then(|node| node.as_directory())
            .map(|dir| dir.names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
///
/// Matching is a case-sensitive prefix test.
pub fn autocomplete(input: &str, current: &Location, fs: &VirtualFs) -> AutocompleteResult {
    // Everything up to and including the last whitespace stays verbatim.
    let head = input.trim_end_matches(|c: char| !c.is_whitespace());
    let token = &input[head.len()..];
    if token.is_empty() {
        return AutocompleteResult::None;
    }

    let is_first_token = head.trim().is_empty();
    let (prefix, matches) = if is_first_token {
        ("", complete_command(token))
    } else {
        let parsed = ParsedPath::parse(token);
        let matches = parsed
            .directory_names(current, fs)
            .into_iter()
            .filter(|name| name.starts_with(parsed.name_part))
            .collect();
        (parsed.dir_part, matches)
    };

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{}{}{}", head, prefix, matches[0])),
        _ => AutocompleteResult::Multiple(matches),
    }
}

// ============================================================================
// Command Completion
// ============================================================================

/// Command names starting with `partial`.
fn complete_command(partial: &str) -> Vec<String> {
    Command::completion_names()
        .into_iter()
        .filter(|cmd| cmd.starts_with(partial))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
