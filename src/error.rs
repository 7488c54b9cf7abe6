//! Error taxonomy for list building and merging.
//!
//! Per-entry attribute failures and permission-denied directories never show
//! up here: the traversal engine absorbs them. Everything in
//! [`FileListError`] is surfaced once, without retry.

use std::fmt;
use std::path::PathBuf;

use nix::errno::Errno;

/// Errors returned by [`crate::create`] and [`crate::merge`].
#[derive(Debug)]
pub enum FileListError {
    /// A growth operation could not obtain memory.
    Allocation,
    /// The list reached its configured maximum entry count.
    ///
    /// `create` never returns this as an `Err`; it hands back a truncated
    /// [`crate::FileList`] instead. `merge` returns it with both lists
    /// untouched.
    CapacityExceeded { max: usize },
    /// The start directory was empty.
    InvalidDirectory,
    /// The start directory's attributes could not be read.
    StartDirectory { path: PathBuf, errno: Errno },
    /// A directory could not be opened for a reason other than permission
    /// denial.
    OpenDirectory { path: PathBuf, errno: Errno },
    /// The name pattern failed to compile.
    Pattern(regex::Error),
    /// The combined size of two lists does not fit in `usize`.
    SizeOverflow,
    /// A non-zero size hint disagrees with the list it describes.
    SizeHint { hint: usize, actual: usize },
}

impl FileListError {
    /// Returns `true` for the single graceful-degradation signal.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, FileListError::CapacityExceeded { .. })
    }

    /// The closest `errno` value, for callers bridging to C conventions.
    pub fn errno(&self) -> Errno {
        match self {
            FileListError::Allocation => Errno::ENOMEM,
            FileListError::CapacityExceeded { .. } => Errno::E2BIG,
            FileListError::InvalidDirectory => Errno::EINVAL,
            FileListError::StartDirectory { errno, .. } => *errno,
            FileListError::OpenDirectory { errno, .. } => *errno,
            FileListError::Pattern(_) => Errno::EINVAL,
            FileListError::SizeOverflow => Errno::ERANGE,
            FileListError::SizeHint { .. } => Errno::EINVAL,
        }
    }
}

impl fmt::Display for FileListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileListError::Allocation => f.write_str("out of memory while growing file list"),
            FileListError::CapacityExceeded { max } => {
                write!(f, "file list capacity exhausted ({max} entries)")
            }
            FileListError::InvalidDirectory => f.write_str("start directory is empty"),
            FileListError::StartDirectory { path, errno } => {
                write!(f, "cannot stat \"{}\": {}", path.display(), errno.desc())
            }
            FileListError::OpenDirectory { path, errno } => {
                write!(f, "cannot open directory \"{}\": {}", path.display(), errno.desc())
            }
            FileListError::Pattern(e) => write!(f, "invalid name pattern: {e}"),
            FileListError::SizeOverflow => f.write_str("combined list size overflows"),
            FileListError::SizeHint { hint, actual } => {
                write!(f, "size hint {hint} does not match list size {actual}")
            }
        }
    }
}

impl std::error::Error for FileListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileListError::Pattern(e) => Some(e),
            FileListError::StartDirectory { errno, .. }
            | FileListError::OpenDirectory { errno, .. } => Some(errno),
            _ => None,
        }
    }
}

impl From<regex::Error> for FileListError {
    fn from(e: regex::Error) -> Self {
        FileListError::Pattern(e)
    }
}

impl From<std::collections::TryReserveError> for FileListError {
    fn from(_: std::collections::TryReserveError) -> Self {
        FileListError::Allocation
    }
}

pub type Result<T> = std::result::Result<T, FileListError>;
