//! Recursive directory traversal.
//!
//! Each visited directory goes through Open → (per entry) Classify → Filter
//! → Recurse → Collect → Close. State shared across recursion levels lives
//! in a [`Walker`], passed by `&mut self` down the call chain.
//!
//! Error policy:
//! - a directory that cannot be opened because of a permission denial
//!   contributes nothing; any other open failure aborts the traversal;
//! - a failed attribute query skips just that entry;
//! - list append failures (allocation, capacity) abort the traversal and are
//!   returned to the caller, which decides whether the partial list is kept.

pub mod entry_type;
pub mod loop_guard;
pub mod pattern;

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use nix::dir::Dir;
use nix::errno::Errno;
use nix::fcntl::OFlag;
use nix::sys::stat::Mode;

use crate::builder::{Depth, Flags};
use crate::debug_printf;
use crate::error::{FileListError, Result};
use crate::list::GrowableList;
use crate::sort::DIR_SEPARATOR;

pub use entry_type::{Attributes, EntryType, TypeFilter, TypeMask};
pub use loop_guard::{FileId, LoopGuard};
pub use pattern::NamePattern;

/// Traversal context: the accumulator plus everything the filters need.
pub struct Walker<'a> {
    pub list: &'a mut GrowableList<PathBuf>,
    pub guard: LoopGuard,
    pub filter: TypeFilter,
    pub pattern: Option<&'a NamePattern>,
    pub flags: Flags,
}

impl Walker<'_> {
    /// Scans `directory`, recursing while `depth` allows.
    pub fn walk(&mut self, directory: &Path, depth: Depth) -> Result<()> {
        let mut dir = match Dir::open(
            directory,
            OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC,
            Mode::empty(),
        ) {
            Ok(dir) => dir,
            Err(errno) => {
                debug_printf!(
                    "opendir(): errno {} ({}): \"{}\"\n",
                    errno as i32,
                    errno.desc(),
                    directory.display()
                );
                if errno == Errno::EACCES {
                    return Ok(());
                }
                return Err(FileListError::OpenDirectory {
                    path: directory.to_path_buf(),
                    errno,
                });
            }
        };

        // `dir` is closed when it drops, on every return path below.
        for entry in dir.iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(errno) => {
                    debug_printf!(
                        "readdir(): errno {} ({}): \"{}\"\n",
                        errno as i32,
                        errno.desc(),
                        directory.display()
                    );
                    break;
                }
            };

            let name = entry.file_name().to_bytes();
            if name == b"." || name == b".." {
                continue;
            }
            let name = OsStr::from_bytes(name);

            #[cfg(not(no_d_type))]
            let hint = EntryType::from_hint(entry.file_type());
            #[cfg(no_d_type)]
            let hint: Option<EntryType> = None;

            self.visit(directory, name, hint, depth)?;
        }

        Ok(())
    }

    /// Handles one directory entry.
    fn visit(
        &mut self,
        directory: &Path,
        name: &OsStr,
        hint: Option<EntryType>,
        depth: Depth,
    ) -> Result<()> {
        let follow = self.flags.contains(Flags::FOLLOW_LINKS);

        // Built at most once, and only when something needs it.
        let mut path: Option<PathBuf> = None;

        // Classify. Directories are always queried: their identity feeds the
        // loop guard.
        let needs_query = match hint {
            None | Some(EntryType::Unknown) | Some(EntryType::Directory) => true,
            Some(EntryType::Symlink) => follow,
            Some(_) => false,
        };
        let (entry_type, attrs) = if needs_query {
            let full = join_path(directory, name)?;
            let attrs = match Attributes::query(&full, follow) {
                Ok(attrs) => attrs,
                Err(errno) => {
                    debug_printf!(
                        "stat(): errno {} ({}): \"{}\"\n",
                        errno as i32,
                        errno.desc(),
                        full.display()
                    );
                    return Ok(());
                }
            };
            path = Some(full);
            (attrs.entry_type, Some(attrs))
        } else {
            (hint.unwrap_or(EntryType::Unknown), None)
        };

        // Recurse.
        if let (EntryType::Directory, Some(attrs), Some(next)) =
            (entry_type, attrs, depth.descend())
        {
            let full = match path.take() {
                Some(p) => p,
                None => join_path(directory, name)?,
            };

            // A loop directory is neither descended into nor listed.
            if self.guard.contains(attrs.id) {
                debug_printf!("Directory loop detected: \"{}\"\n", full.display());
                return Ok(());
            }

            if self.flags.contains(Flags::XDEV) && self.guard.root().dev != attrs.id.dev {
                debug_printf!("Ignoring other file system: \"{}\"\n", full.display());
            } else {
                self.guard.push(attrs.id)?;
                let result = self.walk(&full, next);
                self.guard.pop();
                result?;
            }
            path = Some(full);
        }

        // Filter and collect.
        if !self.filter.includes(entry_type) {
            return Ok(());
        }
        if let Some(pattern) = self.pattern {
            if !pattern.matches(name.as_bytes()) {
                return Ok(());
            }
        }

        let mut full = match path {
            Some(p) => p,
            None => join_path(directory, name)?,
        };
        if entry_type == EntryType::Directory && self.flags.contains(Flags::DIR_SEP) {
            let mut s = full.into_os_string();
            s.try_reserve_exact(1)?;
            s.push(OsStr::from_bytes(&[DIR_SEPARATOR]));
            full = PathBuf::from(s);
        }

        self.list.append(full)
    }
}

/// Joins `dir` and `name` with exactly one separator between them.
pub fn join_path(dir: &Path, name: &OsStr) -> Result<PathBuf> {
    let dir = dir.as_os_str().as_bytes();
    let needs_sep = dir.last() != Some(&DIR_SEPARATOR);
    let len = dir.len() + usize::from(needs_sep) + name.len();

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.extend_from_slice(dir);
    if needs_sep {
        buf.push(DIR_SEPARATOR);
    }
    buf.extend_from_slice(name.as_bytes());
    Ok(PathBuf::from(OsString::from_vec(buf)))
}

/// Collapses runs of separators and strips trailing ones. `/` stays `/`.
///
/// Returns `None` for an empty path.
pub fn clean_dir(directory: &Path) -> Option<PathBuf> {
    let bytes = directory.as_os_str().as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut clean: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut prev_sep = false;
    for &c in bytes {
        let is_sep = c == DIR_SEPARATOR;
        if !(is_sep && prev_sep) {
            clean.push(c);
        }
        prev_sep = is_sep;
    }
    while clean.len() > 1 && clean.last() == Some(&DIR_SEPARATOR) {
        clean.pop();
    }
    Some(PathBuf::from(OsString::from_vec(clean)))
}
