use crate::config::FILESYSTEM_MANIFEST;
use crate::core::error::{ManifestError, ResolveError};
use crate::models::{
    Action, Directory, EntryStyle, FileKind, ListEntry, Location, Manifest, ManifestEntry, Node,
    ROOT_SEGMENT, WindowId,
};

/// A successful resolution: the node and its normalized location.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<'a> {
    pub node: &'a Node,
    pub location: Location,
}

/// Read-only virtual filesystem.
///
/// Built once from a manifest and never mutated afterwards; commands only
/// ever read it.
///
/// # Path Convention
///
/// - Locations are segment lists starting with `"root"`
/// - Expressions starting with `/` are absolute, anything else is relative
/// - `.` and empty segments are ignored, `..` pops (clamped at the root)
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: Node,
}

impl VirtualFs {
    /// Create filesystem from manifest.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        let root = build_directory(ROOT_SEGMENT, &manifest.root)?;
        Ok(Self {
            root: Node::Directory(root),
        })
    }

    /// Parse a JSON manifest and build the tree from it.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(&manifest)
    }

    /// The tree compiled into the binary.
    pub fn builtin() -> Result<Self, ManifestError> {
        Self::from_json(FILESYSTEM_MANIFEST)
    }

    /// Create empty filesystem (fallback when the manifest fails to load).
    pub fn empty() -> Self {
        Self {
            root: Node::Directory(Directory::new()),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a path expression relative to `current`.
    ///
    /// Normalizes first, then walks the tree. The error carries the
    /// expression as typed.
    pub fn resolve(&self, current: &Location, expression: &str) -> Result<Resolved<'_>, ResolveError> {
        let location = Self::normalize(current, expression);
        match self.get(&location) {
            Some(node) => Ok(Resolved { node, location }),
            None => Err(ResolveError::NotFound {
                expression: expression.to_string(),
            }),
        }
    }

    /// Apply a path expression to a location without touching the tree.
    ///
    /// `..` at the root is ignored rather than reported, so `../../x` from
    /// the root is the same as `x`.
    pub fn normalize(current: &Location, expression: &str) -> Location {
        let mut stack = if expression.starts_with('/') {
            Location::root()
        } else {
            current.clone()
        };

        for segment in expression.split('/').filter(|s| !s.is_empty() && *s != ".") {
            if segment == ".." {
                stack.pop();
            } else {
                stack.push(segment);
            }
        }

        stack
    }

    /// Get the node at a location, walking directory children only.
    pub fn get(&self, location: &Location) -> Option<&Node> {
        let mut current = &self.root;

        for segment in location.below_root() {
            current = current.as_directory()?.get(segment)?;
        }

        Some(current)
    }

    /// List directory contents in insertion order.
    ///
    /// Returns `None` if the location is missing or not a directory.
    pub fn list_dir(&self, location: &Location) -> Option<Vec<ListEntry>> {
        let dir = self.get(location)?.as_directory()?;
        Some(
            dir.iter()
                .map(|(name, node)| ListEntry::new(name, entry_style(node)))
                .collect(),
        )
    }

    /// Check if a location is a directory.
    pub fn is_directory(&self, location: &Location) -> bool {
        self.get(location).is_some_and(Node::is_directory)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

/// Listing style for a node.
pub fn entry_style(node: &Node) -> EntryStyle {
    match node {
        Node::Directory(_) => EntryStyle::Directory,
        Node::Shortcut(_) => EntryStyle::Shortcut,
        Node::Executable(_) => EntryStyle::Executable,
        Node::File(file) => match file.kind {
            FileKind::Pdf => EntryStyle::Pdf,
            FileKind::Img => EntryStyle::Image,
            FileKind::Text | FileKind::Other(_) => EntryStyle::File,
        },
    }
}

// =============================================================================
// Manifest Conversion
// =============================================================================

fn build_directory(path: &str, entries: &[ManifestEntry]) -> Result<Directory, ManifestError> {
    let mut dir = Directory::new();

    for entry in entries {
        if !is_valid_name(&entry.name) {
            return Err(ManifestError::InvalidName {
                parent: path.to_string(),
                name: entry.name.clone(),
            });
        }

        let child_path = format!("{}/{}", path, entry.name);
        let node = build_node(&child_path, entry)?;

        dir.insert(entry.name.clone(), node)
            .map_err(|_| ManifestError::DuplicateName {
                parent: path.to_string(),
                name: entry.name.clone(),
            })?;
    }

    Ok(dir)
}

fn build_node(path: &str, entry: &ManifestEntry) -> Result<Node, ManifestError> {
    let require = |value: &Option<String>, field: &'static str| {
        value.clone().ok_or_else(|| ManifestError::MissingField {
            path: path.to_string(),
            kind: entry.kind.clone(),
            field,
        })
    };

    let node = match entry.kind.as_str() {
        "directory" | "dir" => Node::Directory(build_directory(path, &entry.children)?),
        "shortcut" => Node::Shortcut(WindowId::new(require(&entry.window, "window")?)),
        "exec" | "executable" => {
            let spec = require(&entry.action, "action")?;
            let action = Action::parse(&spec).ok_or_else(|| ManifestError::InvalidAction {
                path: path.to_string(),
                action: spec.clone(),
            })?;
            Node::Executable(action)
        }
        "text" => Node::file(FileKind::Text, require(&entry.content, "content")?),
        kind => {
            let kind = FileKind::from_type(kind);
            let content = match kind {
                FileKind::Pdf | FileKind::Img => require(&entry.path, "path")?,
                _ => entry
                    .path
                    .clone()
                    .or_else(|| entry.content.clone())
                    .unwrap_or_default(),
            };
            Node::file(kind, content)
        }
    };

    Ok(node)
}

/// Names that could not be addressed by a path, or would shadow the root.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !matches!(name, "." | ".." | ROOT_SEGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::from_json(
            r#"{
                "root": [
                    {"name": "about.txt", "type": "text", "content": "hello"},
                    {"name": "desktop", "type": "directory", "children": [
                        {"name": "terminal.lnk", "type": "shortcut", "window": "terminal"},
                        {"name": "files.exe", "type": "exec", "action": "toggle:files"}
                    ]},
                    {"name": "documents", "type": "directory", "children": [
                        {"name": "c.pdf", "type": "pdf", "path": "certs/c.pdf"},
                        {"name": "a.pdf", "type": "pdf", "path": "certs/a.pdf"},
                        {"name": "b.pdf", "type": "pdf", "path": "certs/b.pdf"},
                        {"name": "old", "type": "directory", "children": []}
                    ]},
                    {"name": "pictures", "type": "directory", "children": [
                        {"name": "one.jpg", "type": "img", "path": "pics/one.jpg"}
                    ]}
                ]
            }"#,
        )
        .expect("test manifest should load")
    }

    fn loc(segments: &[&str]) -> Location {
        Location::from_segments(segments.iter().copied())
    }

    #[test]
    fn test_builtin_manifest_loads() {
        let fs = VirtualFs::builtin().expect("built-in manifest should be valid");
        let docs = fs.list_dir(&loc(&["documents"])).unwrap();
        assert_eq!(docs.len(), 4);
        assert!(docs.iter().all(|e| e.style == EntryStyle::Pdf));
        assert_eq!(fs.list_dir(&loc(&["pictures"])).unwrap().len(), 18);
        assert!(fs.get(&loc(&["about.txt"])).is_some());
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::empty();
        assert!(fs.is_directory(&Location::root()));
        assert_eq!(fs.list_dir(&Location::root()), Some(vec![]));
    }

    #[test]
    fn test_resolve_dot_is_identity() {
        let fs = create_test_fs();
        let here = loc(&["documents"]);
        let resolved = fs.resolve(&here, ".").unwrap();
        assert_eq!(resolved.location, here);
        assert_eq!(Some(resolved.node), fs.get(&here));
    }

    #[test]
    fn test_resolve_parent_of_root_clamps() {
        let fs = create_test_fs();
        let resolved = fs.resolve(&Location::root(), "..").unwrap();
        assert_eq!(resolved.location, Location::root());
        assert!(std::ptr::eq(resolved.node, fs.root()));

        let resolved = fs.resolve(&Location::root(), "../../../documents").unwrap();
        assert_eq!(resolved.location, loc(&["documents"]));
    }

    #[test]
    fn test_resolve_absolute_ignores_current() {
        let fs = create_test_fs();
        for start in [Location::root(), loc(&["documents"]), loc(&["documents", "old"])] {
            let resolved = fs.resolve(&start, "/pictures").unwrap();
            assert_eq!(resolved.location, loc(&["pictures"]));
            assert!(resolved.node.is_directory());
        }
    }

    #[test]
    fn test_resolve_relative_and_nested() {
        let fs = create_test_fs();
        let resolved = fs.resolve(&loc(&["documents"]), "../pictures/one.jpg").unwrap();
        assert_eq!(resolved.location, loc(&["pictures", "one.jpg"]));
        assert_eq!(resolved.node, &Node::file(FileKind::Img, "pics/one.jpg"));

        let resolved = fs.resolve(&Location::root(), "./documents//old/").unwrap();
        assert_eq!(resolved.location, loc(&["documents", "old"]));
    }

    #[test]
    fn test_resolve_missing_reports_original_expression() {
        let fs = create_test_fs();
        let err = fs.resolve(&Location::root(), "./documents/../nowhere").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                expression: "./documents/../nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let fs = create_test_fs();
        assert!(fs.resolve(&Location::root(), "about.txt/x").is_err());
        assert!(fs.resolve(&Location::root(), "desktop/terminal.lnk/x").is_err());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let fs = create_test_fs();
        let here = loc(&["desktop"]);
        assert_eq!(fs.resolve(&here, "../documents"), fs.resolve(&here, "../documents"));
        assert_eq!(fs.resolve(&here, "missing"), fs.resolve(&here, "missing"));
    }

    #[test]
    fn test_normalize_without_tree() {
        let here = loc(&["a", "b", "c"]);
        assert_eq!(VirtualFs::normalize(&here, "../../d"), loc(&["a", "d"]));
        assert_eq!(VirtualFs::normalize(&here, "/"), Location::root());
        assert_eq!(VirtualFs::normalize(&here, ""), here);
        assert_eq!(VirtualFs::normalize(&Location::root(), "/../.."), Location::root());
    }

    #[test]
    fn test_list_dir_preserves_manifest_order() {
        let fs = create_test_fs();
        let names: Vec<_> = fs
            .list_dir(&loc(&["documents"]))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["c.pdf", "a.pdf", "b.pdf", "old"]);
    }

    #[test]
    fn test_list_dir_styles() {
        let fs = create_test_fs();
        let entries = fs.list_dir(&Location::root()).unwrap();
        let styles: Vec<_> = entries.iter().map(|e| e.style).collect();
        assert_eq!(
            styles,
            vec![
                EntryStyle::File,
                EntryStyle::Directory,
                EntryStyle::Directory,
                EntryStyle::Directory
            ]
        );

        let desktop = fs.list_dir(&loc(&["desktop"])).unwrap();
        assert_eq!(desktop[0].style, EntryStyle::Shortcut);
        assert_eq!(desktop[1].style, EntryStyle::Executable);
    }

    #[test]
    fn test_list_dir_on_file() {
        let fs = create_test_fs();
        assert!(fs.list_dir(&loc(&["about.txt"])).is_none());
        assert!(fs.list_dir(&loc(&["missing"])).is_none());
    }

    #[test]
    fn test_manifest_rejects_duplicates() {
        let err = VirtualFs::from_json(
            r#"{"root": [
                {"name": "a", "type": "text", "content": ""},
                {"name": "a", "type": "text", "content": ""}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateName { ref name, .. } if name == "a"));
    }

    #[test]
    fn test_manifest_rejects_reserved_names() {
        for name in ["root", "..", ".", "", "a/b"] {
            let json = format!(
                r#"{{"root": [{{"name": "{}", "type": "directory"}}]}}"#,
                name
            );
            let err = VirtualFs::from_json(&json).unwrap_err();
            assert!(matches!(err, ManifestError::InvalidName { .. }), "{name}");
        }
    }

    #[test]
    fn test_manifest_missing_fields() {
        let err = VirtualFs::from_json(r#"{"root": [{"name": "x.pdf", "type": "pdf"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ManifestError::MissingField { field: "path", .. }));

        let err = VirtualFs::from_json(r#"{"root": [{"name": "t", "type": "shortcut"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ManifestError::MissingField { field: "window", .. }));

        let err = VirtualFs::from_json(
            r#"{"root": [{"name": "t", "type": "exec", "action": "launch"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::InvalidAction { .. }));
    }

    #[test]
    fn test_manifest_unknown_kind_becomes_other_file() {
        let fs = VirtualFs::from_json(
            r#"{"root": [{"name": "song.mp3", "type": "audio", "path": "a/song.mp3"}]}"#,
        )
        .unwrap();
        assert_eq!(
            fs.get(&loc(&["song.mp3"])),
            Some(&Node::file(FileKind::Other("audio".to_string()), "a/song.mp3"))
        );
    }

    #[test]
    fn test_manifest_invalid_json() {
        assert!(matches!(
            VirtualFs::from_json("{not json"),
            Err(ManifestError::Parse(_))
        ));
    }
}
