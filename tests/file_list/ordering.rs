// Sort methods applied to real traversal results.

use std::fs;

use file_list::{create, Depth, Flags, ListOptions, SortMethod};
use tempfile::TempDir;

use crate::common::{make_tree, rel, touch};

fn numbered_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["file10", "file2", "file1", "File3"] {
        touch(&dir.path().join(name));
    }
    dir
}

fn names(method: SortMethod) -> Vec<String> {
    let dir = numbered_tree();
    let list = create(dir.path(), &ListOptions::new().sort(method)).unwrap();
    rel(&list, dir.path())
}

#[test]
fn default_order_is_case_insensitive() {
    assert_eq!(
        names(SortMethod::Default),
        ["file1", "file10", "file2", "File3"]
    );
}

#[test]
fn natural_order_compares_numbers() {
    assert_eq!(
        names(SortMethod::Natural),
        ["file1", "file2", "File3", "file10"]
    );
}

#[test]
fn ascii_order_is_bytewise() {
    assert_eq!(
        names(SortMethod::Ascii),
        ["File3", "file1", "file10", "file2"]
    );
}

/// Every entry of a directory comes before the contents of its
/// subdirectories.
#[test]
fn default_order_is_hierarchical() {
    let dir = make_tree();
    let list = create(dir.path(), &ListOptions::new()).unwrap();
    assert_eq!(
        rel(&list, dir.path()),
        ["a.txt", "b.log", "sub", "sub/c.txt", "sub/deeper", "sub/deeper/d.txt"]
    );
}

#[test]
fn hierarchy_beats_name_order() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("a")).unwrap();
    touch(&root.join("a/z"));
    touch(&root.join("b"));

    let list = create(root, &ListOptions::new()).unwrap();
    assert_eq!(rel(&list, root), ["a", "b", "a/z"]);
}

#[test]
fn dir_sep_entry_leads_its_contents() {
    let dir = make_tree();
    let list = create(
        dir.path(),
        &ListOptions::new()
            .flags(Flags::DIR_SEP)
            .depth(Depth::Limited(1)),
    )
    .unwrap();
    let root = dir.path().to_string_lossy().into_owned();
    let got: Vec<String> = list
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let expect: Vec<String> = ["a.txt", "b.log", "sub/", "sub/c.txt", "sub/deeper/"]
        .iter()
        .map(|name| format!("{root}/{name}"))
        .collect();
    assert_eq!(got, expect);
}

#[test]
fn resorting_is_idempotent() {
    let dir = make_tree();
    for method in [
        SortMethod::Default,
        SortMethod::Natural,
        SortMethod::Ascii,
        SortMethod::Collate,
    ] {
        let list = create(dir.path(), &ListOptions::new().sort(method)).unwrap();
        let mut again = list.clone();
        again.sort(method);
        assert_eq!(list, again, "{method:?}");
    }
}

#[test]
fn unsorted_list_has_same_entries() {
    let dir = make_tree();
    let unsorted = create(dir.path(), &ListOptions::new().sort(SortMethod::None)).unwrap();
    let mut sorted = unsorted.clone();
    sorted.sort(SortMethod::Default);
    let expect = create(dir.path(), &ListOptions::new()).unwrap();
    assert_eq!(sorted, expect);
}
