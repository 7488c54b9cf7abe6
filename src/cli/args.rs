//! Command-line argument definition for `flist`.
//!
//! Bad or unrecognised options are reported by clap, which exits with status
//! 2 after printing usage.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::builder::{Depth, Flags, ListOptions};
use crate::config::GrowthPolicy;
use crate::sort::SortMethod;
use crate::walk::TypeMask;

/// Sort method names accepted by `--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    None,
    Default,
    Natural,
    Collate,
    Ascii,
}

impl From<SortArg> for SortMethod {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortMethod::None,
            SortArg::Default => SortMethod::Default,
            SortArg::Natural => SortMethod::Natural,
            SortArg::Collate => SortMethod::Collate,
            SortArg::Ascii => SortMethod::Ascii,
        }
    }
}

/// Entry type letters accepted by `--type`, as in `find -type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    #[value(name = "u", alias = "unknown")]
    Unknown,
    #[value(name = "p", alias = "fifo")]
    Fifo,
    #[value(name = "c", alias = "char")]
    Char,
    #[value(name = "d", alias = "dir")]
    Dir,
    #[value(name = "b", alias = "block")]
    Block,
    #[value(name = "f", alias = "file")]
    File,
    #[value(name = "l", alias = "link")]
    Link,
    #[value(name = "s", alias = "socket")]
    Socket,
}

impl From<TypeArg> for TypeMask {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Unknown => TypeMask::UNKNOWN,
            TypeArg::Fifo => TypeMask::FIFO,
            TypeArg::Char => TypeMask::CHR,
            TypeArg::Dir => TypeMask::DIR,
            TypeArg::Block => TypeMask::BLK,
            TypeArg::File => TypeMask::REG,
            TypeArg::Link => TypeMask::LNK,
            TypeArg::Socket => TypeMask::SOCK,
        }
    }
}

/// List the entries below one or more directories, hierarchically sorted.
#[derive(Debug, Parser)]
#[command(name = "flist", version)]
pub struct Args {
    /// Directories to list; several directories are merged into one list.
    #[arg(required = true, value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Entry types to include (comma-separated or repeated); default: all.
    #[arg(short = 't', long = "type", value_enum, value_delimiter = ',')]
    pub types: Vec<TypeArg>,

    /// Regular expression the entry name must match.
    #[arg(short = 'e', long = "regex", value_name = "PATTERN")]
    pub regex: Option<String>,

    /// Maximum recursion depth; 0 = none, -1 = unlimited.
    #[arg(short = 'd', long, default_value_t = -1, allow_negative_numbers = true)]
    pub depth: i32,

    /// Follow symbolic links.
    #[arg(short = 'L', long)]
    pub follow: bool,

    /// Append a directory separator to directories.
    #[arg(short = 'F', long = "dir-sep")]
    pub dir_sep: bool,

    /// Case-sensitive pattern matching.
    #[arg(short = 'I', long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Use basic instead of extended regular expressions.
    #[arg(short = 'G', long = "basic-regex")]
    pub basic_regex: bool,

    /// Stay on the start directory's file system.
    #[arg(short = 'x', long)]
    pub xdev: bool,

    /// Sort method.
    #[arg(short = 's', long, value_enum, default_value_t = SortArg::Default)]
    pub sort: SortArg,

    /// Maximum number of entries (default: $FILE_LIST_MAX or 1048576).
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Separate output paths with NUL instead of newline.
    #[arg(short = '0', long)]
    pub null: bool,

    /// Increase verbosity (repeatable).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable).
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Parse an explicit argument list (argv[0] included); callable from tests.
    pub fn parse_from_slice(argv: &[&str]) -> Result<Self, clap::Error> {
        Self::try_parse_from(argv)
    }

    pub fn flags(&self) -> Flags {
        let mut flags = Flags::NONE;
        for (set, flag) in [
            (self.follow, Flags::FOLLOW_LINKS),
            (self.dir_sep, Flags::DIR_SEP),
            (self.case_sensitive, Flags::REGEX_CASE),
            (self.basic_regex, Flags::REGEX_BASIC),
            (self.xdev, Flags::XDEV),
        ] {
            if set {
                flags |= flag;
            }
        }
        flags
    }

    pub fn type_mask(&self) -> TypeMask {
        self.types
            .iter()
            .fold(TypeMask::ALL, |mask, &t| mask | TypeMask::from(t))
    }

    /// Display level after `-v` / `-q`, starting from the default of 2.
    pub fn display_level(&self) -> u32 {
        (2 + u32::from(self.verbose)).saturating_sub(u32::from(self.quiet))
    }

    /// Options for one directory, with `max_default` used when `--max` is
    /// absent.
    pub fn options(&self, max_default: usize) -> ListOptions {
        ListOptions {
            types: self.type_mask(),
            pattern: self.regex.clone(),
            depth: Depth::from_raw(self.depth),
            flags: self.flags(),
            sort: self.sort.into(),
            policy: GrowthPolicy::with_max_len(self.max.unwrap_or(max_default)),
        }
    }
}
