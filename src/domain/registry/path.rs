//! Segment-based upstream paths

use std::fmt;

/// Path relative to a registry base URL, kept as raw segments.
///
/// Segments are only percent-encoded when the client renders the final URL,
/// so an identifier containing `/` or `?` stays a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpstreamPath {
    segments: Vec<String>,
}

impl UpstreamPath {
    /// Parse a static resource root such as `/registered_models`
    pub fn new(root: &str) -> Self {
        Self {
            segments: root
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Append one raw segment
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for UpstreamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }

        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ignores_redundant_separators() {
        assert_eq!(UpstreamPath::new("/registered_models/").to_string(), "/registered_models");
        assert_eq!(UpstreamPath::new("registered_models").to_string(), "/registered_models");
        assert_eq!(UpstreamPath::new("//a//b").segments(), &["a", "b"]);
    }

    #[test]
    fn test_join_adds_exactly_one_separator() {
        let path = UpstreamPath::new("/registered_models").join("1").join("versions");
        assert_eq!(path.to_string(), "/registered_models/1/versions");
    }

    #[test]
    fn test_join_keeps_slashes_inside_segment() {
        let path = UpstreamPath::new("/model_versions").join("a/b");

        assert_eq!(path.segments().len(), 2);
        assert_eq!(path.segments()[1], "a/b");
    }

    #[test]
    fn test_empty_path_displays_root() {
        assert_eq!(UpstreamPath::new("").to_string(), "/");
    }
}
