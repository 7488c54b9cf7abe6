//! Hierarchical path ordering.
//!
//! Every sort method compares the directory part of two paths first and the
//! basenames only when the directories tie, so entries are grouped by the
//! directory that holds them at every level.
//!
//! | Method                 | Base comparator              |
//! |------------------------|------------------------------|
//! | [`SortMethod::Default`] | [`compare_default`]         |
//! | [`SortMethod::Natural`] | [`compare_natural`]         |
//! | [`SortMethod::Collate`] | [`compare_collate`] (`strcoll`) |
//! | [`SortMethod::Ascii`]   | [`compare_ascii`]           |

pub mod collate;
pub mod compare;

use std::cmp::Ordering;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub use collate::{compare_collate, use_environment_locale};
pub use compare::{compare_ascii, compare_default, compare_natural};

/// Directory separator used for splitting and joining paths.
pub const DIR_SEPARATOR: u8 = b'/';

/// How a finished list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    /// Keep directory-read order.
    None,
    /// Raw bytes, semi-case-insensitive: lowercase first, shorter first.
    #[default]
    Default,
    /// Like `Default`, with digit runs compared by numeric value.
    Natural,
    /// `strcoll` under the current `LC_COLLATE` locale.
    Collate,
    /// Raw byte order (`strcmp`).
    Ascii,
}

impl SortMethod {
    /// The comparator for this method, or `None` for [`SortMethod::None`].
    pub fn comparator(self) -> Option<Comparator> {
        match self {
            SortMethod::None => None,
            SortMethod::Default => Some(Comparator::Default),
            SortMethod::Natural => Some(Comparator::Natural),
            SortMethod::Collate => Some(Comparator::Collate),
            SortMethod::Ascii => Some(Comparator::Ascii),
        }
    }
}

/// One of the four base string orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Default,
    Natural,
    Collate,
    Ascii,
}

impl Comparator {
    /// Compares two whole strings.
    #[inline]
    pub fn compare(self, a: &[u8], b: &[u8]) -> Ordering {
        match self {
            Comparator::Default => compare_default(a, b),
            Comparator::Natural => compare_natural(a, b),
            Comparator::Collate => compare_collate(a, b),
            Comparator::Ascii => compare_ascii(a, b),
        }
    }

    /// Compares two paths directory-first, basename second.
    pub fn compare_paths(self, p1: &[u8], p2: &[u8]) -> Ordering {
        let (dir1, base1) = split_path(p1);
        let (dir2, base2) = split_path(p2);
        match self.compare(dir1, dir2) {
            Ordering::Equal => self.compare(base1, base2),
            ord => ord,
        }
    }
}

/// Splits a path at its last separator into (directory, basename).
///
/// The separator itself belongs to neither part. A path without a separator
/// has an empty directory part.
pub fn split_path(path: &[u8]) -> (&[u8], &[u8]) {
    match path.iter().rposition(|&c| c == DIR_SEPARATOR) {
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => (&[], path),
    }
}

/// Sorts `paths` in place with the comparator selected by `method`.
///
/// The sort is stable, so re-sorting an already sorted list with the same
/// method leaves it unchanged.
pub fn sort_paths(paths: &mut [PathBuf], method: SortMethod) {
    if let Some(cmp) = method.comparator() {
        paths.sort_by(|a, b| cmp.compare_paths(path_bytes(a), path_bytes(b)));
    }
}

#[inline]
pub(crate) fn path_bytes(path: &Path) -> &[u8] {
    path.as_os_str().as_bytes()
}
