//! Command-line interface for the `flist` binary.
//!
//! | Submodule | Responsibility |
//! |-----------|----------------|
//! | [`args`]  | `Args`: clap definition of every option, and its conversion into [`crate::ListOptions`]. |
//! | [`env`]   | Defaults read from environment variables (`FILE_LIST_MAX`). |
//!
//! Typical call sequence: `Args::parse` → `Args::options` → [`crate::create`]
//! per directory → [`crate::merge`].

pub mod args;
pub mod env;
