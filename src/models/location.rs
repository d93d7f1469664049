//! Locations in the virtual tree.

use std::fmt;

/// Sentinel segment that every location starts with.
pub const ROOT_SEGMENT: &str = "root";

/// An ordered list of segment names identifying a node.
///
/// The first segment is always [`ROOT_SEGMENT`] and never appears again, so
/// a location is never empty and `..` can never pop past the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location(Vec<String>);

impl Location {
    /// The root location `["root"]`.
    pub fn root() -> Self {
        Self(vec![ROOT_SEGMENT.to_string()])
    }

    /// Build a location from the segments below the root.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut location = Self::root();
        for segment in segments {
            location.push(segment);
        }
        location
    }

    /// All segments, starting with `"root"`.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segments below the root.
    pub fn below_root(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Drop the last segment. The root itself cannot be popped.
    pub fn pop(&mut self) -> Option<String> {
        if self.is_root() {
            None
        } else {
            self.0.pop()
        }
    }

    /// Prompt form: `~` at the root, `~/a/b` below it.
    pub fn display(&self) -> String {
        if self.is_root() {
            "~".to_string()
        } else {
            format!("~/{}", self.below_root().join("/"))
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let root = Location::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.segments(), &["root".to_string()]);
        assert_eq!(root.display(), "~");
    }

    #[test]
    fn test_display_nested() {
        let loc = Location::from_segments(["documents", "old"]);
        assert_eq!(loc.display(), "~/documents/old");
        assert_eq!(loc.to_string(), "~/documents/old");
        assert_eq!(loc.depth(), 2);
    }

    #[test]
    fn test_pop_clamps_at_root() {
        let mut loc = Location::from_segments(["pictures"]);
        assert_eq!(loc.pop(), Some("pictures".to_string()));
        assert_eq!(loc.pop(), None);
        assert_eq!(loc, Location::root());
    }
}
