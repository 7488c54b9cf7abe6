//! File lists: the growable accumulator used during traversal, the finished
//! [`FileList`] handed to callers, and [`merge`].

pub mod growable;
pub mod merge;

use std::path::{Path, PathBuf};

use crate::config::MAX_LIST_SIZE;
use crate::sort::{sort_paths, SortMethod};

pub use growable::GrowableList;
pub use merge::merge;

/// A finished, trimmed list of paths.
///
/// Produced by [`crate::create`]. The list owns every path; dropping it (or
/// calling [`FileList::destroy`]) releases them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
    truncated: bool,
    max_len: usize,
}

impl FileList {
    pub(crate) fn new(paths: Vec<PathBuf>, truncated: bool, max_len: usize) -> Self {
        Self {
            paths,
            truncated,
            max_len,
        }
    }

    /// Wraps existing paths in a complete list with the default ceiling.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        let max_len = MAX_LIST_SIZE.max(paths.len());
        Self::new(paths, false, max_len)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// `true` when traversal stopped at the capacity ceiling and at least one
    /// matching entry is missing.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Ceiling on the number of entries this list may grow to.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }

    /// Re-sorts the list in place.
    pub fn sort(&mut self, method: SortMethod) {
        sort_paths(&mut self.paths, method);
    }

    /// Drops every path past the first `len` and marks the list truncated if
    /// anything was dropped.
    pub fn truncate(&mut self, len: usize) {
        if len < self.paths.len() {
            self.paths.truncate(len);
            self.paths.shrink_to_fit();
            self.truncated = true;
        }
    }

    /// Releases every path and the backing storage. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.paths = Vec::new();
        self.truncated = false;
    }

    pub(crate) fn paths_mut(&mut self) -> &mut Vec<PathBuf> {
        &mut self.paths
    }

    pub(crate) fn set_truncated(&mut self, truncated: bool) {
        self.truncated = truncated;
    }
}

impl Default for FileList {
    fn default() -> Self {
        Self::from_paths(Vec::new())
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl IntoIterator for FileList {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
