//! Binary entry point for the `flist` command-line tool.
//!
//! # Control flow
//!
//! 1. [`Args::parse`] processes all flags.
//! 2. Each directory is listed with [`create`]; several directories are
//!    listed unsorted, combined with [`merge`], and the combined list is
//!    sorted once. The entry ceiling applies to the combined list, so
//!    entries past it are dropped and the list is marked truncated.
//! 3. Paths are written to stdout, one per line (or NUL-separated with `-0`).
//!
//! Exit status: 0 on success (including a truncated list, which is reported
//! on stderr), 1 on error.

use std::io::{self, BufWriter, Write};
use std::os::unix::ffi::OsStrExt;

use anyhow::Context;
use clap::Parser;

use file_list::cli::args::Args;
use file_list::cli::env::init_max_entries;
use file_list::display::set_display_level;
use file_list::sort::use_environment_locale;
use file_list::{create, merge, FileList, SortMethod};

fn build(args: &Args) -> anyhow::Result<FileList> {
    let mut options = args.options(init_max_entries());
    let sort = options.sort;

    if sort == SortMethod::Collate && !use_environment_locale() {
        file_list::displaylevel!(2, "warning: cannot set collation locale from environment\n");
    }

    if args.dirs.len() > 1 {
        options.sort = SortMethod::None;
    }

    let mut combined: Option<FileList> = None;
    for dir in &args.dirs {
        let mut list = create(dir, &options)
            .with_context(|| format!("cannot list \"{}\"", dir.display()))?;
        file_list::displaylevel!(3, "{}: {} entries\n", dir.display(), list.len());
        match combined.as_mut() {
            None => combined = Some(list),
            Some(total) => {
                // Keep what fits under the combined ceiling; the rest is
                // reported as truncation.
                list.truncate(total.max_len().saturating_sub(total.len()));
                merge(total, 0, &mut list, 0, SortMethod::None)
                    .with_context(|| format!("cannot merge \"{}\"", dir.display()))?;
            }
        }
    }

    let mut total = combined.unwrap_or_default();
    if args.dirs.len() > 1 {
        total.sort(sort);
    }
    Ok(total)
}

fn write_list(list: &FileList, null: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let terminator = if null { b'\0' } else { b'\n' };
    for path in list {
        out.write_all(path.as_os_str().as_bytes())?;
        out.write_all(&[terminator])?;
    }
    out.flush()
}

fn run(args: &Args) -> anyhow::Result<()> {
    let list = build(args)?;
    if list.is_truncated() {
        file_list::displaylevel!(
            1,
            "warning: file list truncated at {} entries\n",
            list.max_len()
        );
    }
    match write_list(&list, args.null) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("cannot write file list"),
    }
}

fn main() {
    let args = Args::parse();
    set_display_level(args.display_level());

    if let Err(e) = run(&args) {
        file_list::displaylevel!(1, "flist: {:#}\n", e);
        std::process::exit(1);
    }
}
