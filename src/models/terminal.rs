//! Terminal-related data types for output rendering.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::format::strip_markup;

/// Styling for `ls` entries, one per node type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStyle {
    /// Directories (blue, bold, `/` suffix)
    Directory,
    /// Desktop shortcuts (green, `*` suffix)
    Shortcut,
    /// Executables (green)
    Executable,
    /// PDF documents (red)
    Pdf,
    /// Pictures (purple)
    Image,
    /// Anything else (plain)
    File,
}

impl EntryStyle {
    /// Marker appended to the entry name.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Directory => "/",
            Self::Shortcut => "*",
            _ => "",
        }
    }
}

/// One entry of an `ls` listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub style: EntryStyle,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, style: EntryStyle) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    /// Name with its type marker, as shown in the terminal.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.name, self.style.marker())
    }
}

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echo of an entered command with its prompt
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Progress chatter such as "Opening ..." (gray)
    Muted(String),
    /// Error message (red)
    Error(String),
    /// Usage hint (yellow)
    Warning(String),
    /// Status message (green)
    Success(String),
    /// Pre-formatted markup from a documentation command
    Rich(String),
    /// Directory listing, entries in display order
    Listing(Vec<ListEntry>),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn muted(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Muted(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn warning(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Warning(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn rich(markup: impl Into<String>) -> Self {
        Self::new(OutputLineData::Rich(markup.into()))
    }

    pub fn listing(entries: Vec<ListEntry>) -> Self {
        Self::new(OutputLineData::Listing(entries))
    }

    /// Whether the host should render this line as markup.
    pub fn is_rich(&self) -> bool {
        matches!(self.data, OutputLineData::Rich(_))
    }

    /// Style tag used by hosts that do not match on the variant.
    pub fn style_tag(&self) -> &'static str {
        match self.data {
            OutputLineData::Command { .. } => "command",
            OutputLineData::Text(_) => "text",
            OutputLineData::Muted(_) => "muted",
            OutputLineData::Error(_) => "error",
            OutputLineData::Warning(_) => "warning",
            OutputLineData::Success(_) => "success",
            OutputLineData::Rich(_) => "rich",
            OutputLineData::Listing(_) => "listing",
        }
    }

    /// Text form of the line, with markup stripped.
    pub fn plain_text(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => format!("{}$ {}", prompt, input),
            OutputLineData::Text(s)
            | OutputLineData::Muted(s)
            | OutputLineData::Error(s)
            | OutputLineData::Warning(s)
            | OutputLineData::Success(s) => s.clone(),
            OutputLineData::Rich(markup) => strip_markup(markup),
            OutputLineData::Listing(entries) => entries
                .iter()
                .map(ListEntry::display_name)
                .collect::<Vec<_>>()
                .join("  "),
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

// =============================================================================
// Output Log
// =============================================================================

/// Bounded, append-only terminal log.
///
/// Once `capacity` lines are stored, each push drops the oldest line.
#[derive(Clone, Debug)]
pub struct OutputLog {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl OutputLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.back()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OutputLine> {
        self.lines.iter()
    }

    pub fn to_vec(&self) -> Vec<OutputLine> {
        self.lines.iter().cloned().collect()
    }
}
