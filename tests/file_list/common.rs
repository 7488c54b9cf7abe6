// Shared fixtures for the file_list integration tests.

use std::fs;
use std::path::Path;

use file_list::FileList;
use tempfile::TempDir;

/// Paths of `list` relative to `root`, in list order.
pub fn rel(list: &FileList, root: &Path) -> Vec<String> {
    list.iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap_or_else(|_| panic!("{} is not under {}", p.display(), root.display()))
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

/// Same as [`rel`], sorted, for order-independent comparisons.
pub fn rel_sorted(list: &FileList, root: &Path) -> Vec<String> {
    let mut v = rel(list, root);
    v.sort();
    v
}

pub fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

/// Three-level fixture:
///
/// ```text
/// <root>/
///   a.txt
///   b.log
///   sub/
///     c.txt
///     deeper/
///       d.txt
/// ```
pub fn make_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("sub/deeper")).unwrap();
    touch(&root.join("a.txt"));
    touch(&root.join("b.log"));
    touch(&root.join("sub/c.txt"));
    touch(&root.join("sub/deeper/d.txt"));
    dir
}
