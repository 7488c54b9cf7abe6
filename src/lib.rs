// file-list — hierarchically sorted file lists

//! Builds flat, sorted lists of filesystem paths by walking a directory tree.
//!
//! Entries are filtered by type ([`TypeMask`]) and by a name pattern, and the
//! result is ordered directory-first with one of the [`SortMethod`]s. See
//! [`create`] for the entry point and [`merge`] for combining lists.

pub mod config;
pub mod display;
pub mod error;
pub mod list;
pub mod sort;
pub mod walk;
pub mod builder;
pub mod cli;

pub const FILE_LIST_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use builder::{create, create_raw, Depth, Flags, ListOptions};
pub use config::GrowthPolicy;
pub use error::{FileListError, Result};
pub use list::{merge, FileList};
pub use sort::SortMethod;
pub use walk::TypeMask;
