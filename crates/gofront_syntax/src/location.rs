//! Source locations: an interned path plus a line number.
//!
//! Paths are interned once per parse so that every token, node and diagnostic can carry a location by cloning a
//! pointer. Two [`SourcePath`]s compare equal only if they came from the same interner slot.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Path used for sources that carry no path of their own.
pub const ANONYMOUS_PATH: &str = "<input>";

/// An interned source path.
///
/// ## Notes
/// - Equality and hashing are by pointer identity, not by string contents.
#[derive(Clone)]
pub struct SourcePath(Arc<str>);

impl SourcePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for SourcePath {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SourcePath {}

impl std::hash::Hash for SourcePath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0).cast::<u8>(), state);
    }
}

impl fmt::Debug for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplicating store for source paths.
///
/// A caller that parses many files shares one interner so that equal paths yield identical [`SourcePath`]s.
#[derive(Debug, Default)]
pub struct PathInterner {
    paths: HashSet<Arc<str>>,
}

impl PathInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `path`, returning the shared handle.
    pub fn intern(&mut self, path: &str) -> SourcePath {
        if let Some(existing) = self.paths.get(path) {
            return SourcePath(Arc::clone(existing));
        }
        let arc: Arc<str> = Arc::from(path);
        self.paths.insert(Arc::clone(&arc));
        SourcePath(arc)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// A position in source: interned path and 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: SourcePath,
    pub line: u32,
}

impl Location {
    pub fn new(path: SourcePath, line: u32) -> Self {
        Self { path, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// A node with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub node: T,
    pub loc: Location,
}

impl<T> Located<T> {
    pub fn new(node: T, loc: Location) -> Self {
        Self { node, loc }
    }
}
