//! Domain entities: pure data types with no I/O

use std::fmt;
use std::path::PathBuf;

/// Default marker opening the replaceable region.
pub const DEFAULT_START_MARKER: &str = "<!-- tree-start -->";

/// Default marker closing the replaceable region.
pub const DEFAULT_END_MARKER: &str = "<!-- tree-end -->";

/// Description used when no rule matches or the file cannot be read.
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "Documentation file";

/// Fence line opening and closing the rendered block.
pub const FENCE: &str = "```";

/// Literal tokens delimiting the replaceable region of a target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }
}

/// A markdown file found in the references directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name relative to the references directory
    pub name: String,
    /// Full path of the file
    pub path: PathBuf,
}

/// Which rule produced a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionSource {
    Blockquote,
    Heading,
    /// No rule matched
    Fallback,
    /// The file could not be read
    Unreadable,
}

/// Description derived for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    pub source: DescriptionSource,
}

impl Description {
    pub fn is_fallback(&self) -> bool {
        matches!(
            self.source,
            DescriptionSource::Fallback | DescriptionSource::Unreadable
        )
    }
}

/// A file name together with its description, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedEntry {
    pub name: String,
    pub description: String,
}

impl DescribedEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Fenced listing of the references directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeBlock {
    lines: Vec<String>,
}

impl TreeBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for TreeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
