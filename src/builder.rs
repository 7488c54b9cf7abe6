//! List builder: options and the [`create`] entry point.
//!
//! ```no_run
//! use file_list::{create, ListOptions, SortMethod, TypeMask};
//!
//! let options = ListOptions::new()
//!     .types(TypeMask::REG)
//!     .pattern("\\.rs$")
//!     .sort(SortMethod::Natural);
//! let list = create("src", &options)?;
//! for path in &list {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), file_list::FileListError>(())
//! ```

use std::ops::{BitOr, BitOrAssign};
use std::path::Path;

use crate::config::GrowthPolicy;
use crate::error::{FileListError, Result};
use crate::list::{FileList, GrowableList};
use crate::sort::{sort_paths, SortMethod};
use crate::walk::{clean_dir, Attributes, LoopGuard, NamePattern, TypeFilter, TypeMask, Walker};

/// Behaviour flags, combinable with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Follow symbolic links.
    pub const FOLLOW_LINKS: Flags = Flags(1);
    /// Append a directory separator to directory entries.
    pub const DIR_SEP: Flags = Flags(2);
    /// Case-sensitive pattern matching.
    pub const REGEX_CASE: Flags = Flags(4);
    /// Basic instead of extended pattern dialect.
    pub const REGEX_BASIC: Flags = Flags(8);
    /// Do not descend into directories on other file systems.
    pub const XDEV: Flags = Flags(16);

    pub const fn from_bits(bits: u32) -> Self {
        Flags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// Maximum recursion depth below the start directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unlimited,
    /// `Limited(0)` lists the start directory's entries without recursing.
    Limited(u32),
}

impl Depth {
    /// `-1` (or any negative value) is unlimited.
    pub fn from_raw(depth: i32) -> Self {
        u32::try_from(depth).map_or(Depth::Unlimited, Depth::Limited)
    }

    /// Depth for the next level down, or `None` if recursion stops here.
    pub fn descend(self) -> Option<Depth> {
        match self {
            Depth::Unlimited => Some(Depth::Unlimited),
            Depth::Limited(0) => None,
            Depth::Limited(n) => Some(Depth::Limited(n - 1)),
        }
    }
}

/// Everything [`create`] needs besides the start directory.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub types: TypeMask,
    pub pattern: Option<String>,
    pub depth: Depth,
    pub flags: Flags,
    pub sort: SortMethod,
    pub policy: GrowthPolicy,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types(mut self, types: TypeMask) -> Self {
        self.types = types;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn sort(mut self, sort: SortMethod) -> Self {
        self.sort = sort;
        self
    }

    pub fn max_entries(mut self, max: usize) -> Self {
        self.policy = GrowthPolicy::with_max_len(max);
        self
    }

    pub fn policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Builds a sorted list of the entries below `dir`.
///
/// Returns the finished list on success. If the list hit its ceiling the
/// result is still `Ok`, trimmed and sorted as usual, with
/// [`FileList::is_truncated`] set. Every other failure discards the partial
/// list.
pub fn create(dir: impl AsRef<Path>, options: &ListOptions) -> Result<FileList> {
    let dir = dir.as_ref();

    let filter = TypeFilter::new(options.types);

    let pattern = match &options.pattern {
        Some(p) => Some(NamePattern::new(
            p,
            options.flags.contains(Flags::REGEX_CASE),
            options.flags.contains(Flags::REGEX_BASIC),
        )?),
        None => None,
    };

    let start_dir = clean_dir(dir).ok_or(FileListError::InvalidDirectory)?;

    let root = Attributes::query(dir, true).map_err(|errno| FileListError::StartDirectory {
        path: dir.to_path_buf(),
        errno,
    })?;
    let guard = LoopGuard::new(root.id)?;

    let mut list = GrowableList::with_policy(options.policy)?;
    let mut walker = Walker {
        list: &mut list,
        guard,
        filter,
        pattern: pattern.as_ref(),
        flags: options.flags,
    };

    let truncated = match walker.walk(&start_dir, options.depth) {
        Ok(()) => false,
        Err(FileListError::CapacityExceeded { .. }) => true,
        Err(e) => return Err(e),
    };

    let max_len = list.policy().max_len;
    let mut paths = list.trim_and_terminate();
    sort_paths(&mut paths, options.sort);
    Ok(FileList::new(paths, truncated, max_len))
}

/// Raw-integer form of [`create`]: `type_mask` of 0 selects all types, a
/// negative `depth` is unlimited, `flags` combines the [`Flags`] bits.
pub fn create_raw(
    type_mask: u32,
    pattern: Option<&str>,
    dir: impl AsRef<Path>,
    depth: i32,
    flags: u32,
    sort: SortMethod,
) -> Result<FileList> {
    let options = ListOptions {
        types: TypeMask::from_bits(type_mask),
        pattern: pattern.map(str::to_owned),
        depth: Depth::from_raw(depth),
        flags: Flags::from_bits(flags),
        sort,
        policy: GrowthPolicy::default(),
    };
    create(dir, &options)
}
