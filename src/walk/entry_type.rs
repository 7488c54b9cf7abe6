//! Entry type tags, the caller-facing type mask, and the per-call filter
//! table built from it.

use std::ops::{BitOr, BitOrAssign};
use std::path::Path;

use nix::dir::Type;
use nix::sys::stat::{lstat, stat, FileStat, SFlag};

use crate::walk::loop_guard::FileId;

/// Kind of a directory entry. The discriminant indexes the filter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Unknown = 0,
    Fifo = 1,
    CharDevice = 2,
    Directory = 3,
    BlockDevice = 4,
    Regular = 5,
    Symlink = 6,
    Socket = 7,
}

const N_TYPES: usize = 8;

impl EntryType {
    /// Type from a directory-read hint; `None` (no hint) maps to `None`.
    pub fn from_hint(hint: Option<Type>) -> Option<Self> {
        hint.map(|t| match t {
            Type::Fifo => EntryType::Fifo,
            Type::CharacterDevice => EntryType::CharDevice,
            Type::Directory => EntryType::Directory,
            Type::BlockDevice => EntryType::BlockDevice,
            Type::File => EntryType::Regular,
            Type::Symlink => EntryType::Symlink,
            Type::Socket => EntryType::Socket,
        })
    }

    /// Type from the `st_mode` of an attribute query.
    pub fn from_mode(mode: u32) -> Self {
        const TABLE: [(SFlag, EntryType); 7] = [
            (SFlag::S_IFIFO, EntryType::Fifo),
            (SFlag::S_IFCHR, EntryType::CharDevice),
            (SFlag::S_IFDIR, EntryType::Directory),
            (SFlag::S_IFBLK, EntryType::BlockDevice),
            (SFlag::S_IFREG, EntryType::Regular),
            (SFlag::S_IFLNK, EntryType::Symlink),
            (SFlag::S_IFSOCK, EntryType::Socket),
        ];
        let fmt = mode & SFlag::S_IFMT.bits() as u32;
        TABLE
            .iter()
            .find(|(flag, _)| flag.bits() as u32 == fmt)
            .map_or(EntryType::Unknown, |&(_, t)| t)
    }

    fn mask_bit(self) -> TypeMask {
        match self {
            EntryType::Unknown => TypeMask::UNKNOWN,
            EntryType::Fifo => TypeMask::FIFO,
            EntryType::CharDevice => TypeMask::CHR,
            EntryType::Directory => TypeMask::DIR,
            EntryType::BlockDevice => TypeMask::BLK,
            EntryType::Regular => TypeMask::REG,
            EntryType::Symlink => TypeMask::LNK,
            EntryType::Socket => TypeMask::SOCK,
        }
    }
}

/// Bitwise-combinable selection of entry types. The empty mask selects all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeMask(u32);

impl TypeMask {
    pub const ALL: TypeMask = TypeMask(0);
    pub const UNKNOWN: TypeMask = TypeMask(1);
    pub const FIFO: TypeMask = TypeMask(2);
    pub const CHR: TypeMask = TypeMask(4);
    pub const DIR: TypeMask = TypeMask(8);
    pub const BLK: TypeMask = TypeMask(16);
    pub const REG: TypeMask = TypeMask(32);
    pub const LNK: TypeMask = TypeMask(64);
    pub const SOCK: TypeMask = TypeMask(128);

    pub const fn from_bits(bits: u32) -> Self {
        TypeMask(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: TypeMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for TypeMask {
    type Output = TypeMask;

    fn bitor(self, rhs: TypeMask) -> TypeMask {
        TypeMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for TypeMask {
    fn bitor_assign(&mut self, rhs: TypeMask) {
        self.0 |= rhs.0;
    }
}

/// Include/exclude table indexed by [`EntryType`], built once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeFilter([bool; N_TYPES]);

impl TypeFilter {
    pub fn new(mask: TypeMask) -> Self {
        if mask.bits() == 0 {
            return TypeFilter([true; N_TYPES]);
        }
        let mut table = [false; N_TYPES];
        for t in [
            EntryType::Unknown,
            EntryType::Fifo,
            EntryType::CharDevice,
            EntryType::Directory,
            EntryType::BlockDevice,
            EntryType::Regular,
            EntryType::Symlink,
            EntryType::Socket,
        ] {
            table[t as usize] = mask.contains(t.mask_bit());
        }
        TypeFilter(table)
    }

    #[inline]
    pub fn includes(&self, t: EntryType) -> bool {
        self.0[t as usize]
    }
}

/// The subset of an attribute query the traversal engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub id: FileId,
    pub entry_type: EntryType,
}

impl Attributes {
    /// Queries `path`, following a final symlink only if `follow` is set.
    pub fn query(path: &Path, follow: bool) -> nix::Result<Self> {
        let st = if follow { stat(path)? } else { lstat(path)? };
        Ok(Self::from_stat(&st))
    }

    fn from_stat(st: &FileStat) -> Self {
        Self {
            id: FileId::new(st.st_dev as u64, st.st_ino as u64),
            entry_type: EntryType::from_mode(st.st_mode as u32),
        }
    }
}
