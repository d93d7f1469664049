use std::fmt;

use serde::{Deserialize, Serialize};

use super::WindowId;

// =============================================================================
// Tree Nodes
// =============================================================================

/// Kind of a file node, which decides how `open` treats it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Document shown in the PDF viewer window.
    Pdf,
    /// Picture shown in the image viewer window.
    Img,
    /// Inline text printed straight into the terminal.
    Text,
    /// Any other manifest type; kept so `open` can name it in its error.
    Other(String),
}

impl FileKind {
    /// Map a manifest `type` string to a file kind.
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "pdf" => Self::Pdf,
            "img" => Self::Img,
            "text" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf => "pdf",
            Self::Img => "img",
            Self::Text => "text",
            Self::Other(kind) => kind,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deferred action carried by an executable node.
///
/// Nodes only hold this tag; the dispatcher turns it into a call on the
/// window host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenWindow(WindowId),
    ToggleWindow(WindowId),
    ToggleEffect(String),
}

impl Action {
    /// Parse the manifest form `open:<id>`, `toggle:<id>` or `effect:<name>`.
    pub fn parse(spec: &str) -> Option<Self> {
        let (verb, target) = spec.split_once(':')?;
        if target.is_empty() {
            return None;
        }
        match verb {
            "open" => Some(Self::OpenWindow(WindowId::new(target))),
            "toggle" => Some(Self::ToggleWindow(WindowId::new(target))),
            "effect" => Some(Self::ToggleEffect(target.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenWindow(id) => write!(f, "open:{}", id),
            Self::ToggleWindow(id) => write!(f, "toggle:{}", id),
            Self::ToggleEffect(name) => write!(f, "effect:{}", name),
        }
    }
}

/// A file node: its kind plus a content reference.
///
/// For `pdf`/`img` the content is an asset path; for `text` it is the
/// inline body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    pub kind: FileKind,
    pub content: String,
}

/// A directory node. Members live only in `children`, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    children: Vec<(String, Node)>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child. Returns the node back if the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Result<(), Node> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(node);
        }
        self.children.push((name, node));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Iterate children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Represents an entry in the virtual filesystem
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
    /// Desktop shortcut that launches a window.
    Shortcut(WindowId),
    /// Executable carrying a deferred action.
    Executable(Action),
}

impl Node {
    pub fn file(kind: FileKind, content: impl Into<String>) -> Self {
        Self::File(File {
            kind,
            content: content.into(),
        })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    /// Short type label, matching the manifest `type` field.
    pub fn kind_label(&self) -> &str {
        match self {
            Self::Directory(_) => "directory",
            Self::File(file) => file.kind.as_str(),
            Self::Shortcut(_) => "shortcut",
            Self::Executable(_) => "exec",
        }
    }
}

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure from fs.json
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Children of the root directory, in listing order
    pub root: Vec<ManifestEntry>,
}

/// One node in the manifest tree.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// Name of the node inside its parent directory
    pub name: String,
    /// Node type: `directory`, `shortcut`, `exec`, `pdf`, `img`, `text`
    #[serde(rename = "type")]
    pub kind: String,
    /// Directory members
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ManifestEntry>,
    /// Asset path for `pdf`/`img` files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Inline body for `text` files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Window launched by a `shortcut`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<String>,
    /// Deferred action of an `exec` (e.g. `toggle:terminal`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}
