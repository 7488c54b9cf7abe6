// Merging lists built from separate trees.

use file_list::{create, merge, FileList, FileListError, ListOptions, SortMethod};
use tempfile::TempDir;

use crate::common::touch;

fn tree(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        touch(&dir.path().join(name));
    }
    dir
}

fn basenames(list: &FileList) -> Vec<String> {
    list.iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn unsorted_merge_concatenates() {
    let a = tree(&["x", "y"]);
    let b = tree(&["z"]);
    let mut la = create(a.path(), &ListOptions::new()).unwrap();
    let mut lb = create(b.path(), &ListOptions::new()).unwrap();
    let expect: Vec<_> = la.iter().chain(lb.iter()).cloned().collect();

    let n = merge(&mut la, 0, &mut lb, 0, SortMethod::None).unwrap();
    assert_eq!(n, 3);
    assert_eq!(la.as_slice(), expect.as_slice());
    assert!(lb.is_empty());
}

#[test]
fn merge_with_explicit_sizes() {
    let a = tree(&["one"]);
    let b = tree(&["two", "three"]);
    let mut la = create(a.path(), &ListOptions::new()).unwrap();
    let mut lb = create(b.path(), &ListOptions::new()).unwrap();
    assert_eq!(merge(&mut la, 1, &mut lb, 2, SortMethod::None).unwrap(), 3);
}

/// Two lists built from the same directory sort into adjacent pairs.
#[test]
fn sorted_merge_of_same_directory() {
    let dir = tree(&["b", "a", "c"]);
    let mut l1 = create(dir.path(), &ListOptions::new()).unwrap();
    let mut l2 = create(dir.path(), &ListOptions::new()).unwrap();
    merge(&mut l1, 0, &mut l2, 0, SortMethod::Default).unwrap();
    assert_eq!(basenames(&l1), ["a", "a", "b", "b", "c", "c"]);
}

#[test]
fn wrong_size_hint_leaves_lists_alone() {
    let a = tree(&["x"]);
    let b = tree(&["y"]);
    let mut la = create(a.path(), &ListOptions::new()).unwrap();
    let mut lb = create(b.path(), &ListOptions::new()).unwrap();
    let (before_a, before_b) = (la.clone(), lb.clone());

    let err = merge(&mut la, 5, &mut lb, 0, SortMethod::None).unwrap_err();
    assert!(matches!(err, FileListError::SizeHint { hint: 5, actual: 1 }));
    assert_eq!(la, before_a);
    assert_eq!(lb, before_b);
}

#[test]
fn merge_beyond_ceiling_fails() {
    let a = tree(&["p", "q"]);
    let b = tree(&["r", "s"]);
    let mut la = create(a.path(), &ListOptions::new().max_entries(3)).unwrap();
    let mut lb = create(b.path(), &ListOptions::new()).unwrap();
    let err = merge(&mut la, 0, &mut lb, 0, SortMethod::None).unwrap_err();
    assert!(err.is_capacity_exceeded());
    assert_eq!(la.len(), 2);
    assert_eq!(lb.len(), 2);
}

#[test]
fn merge_carries_truncation() {
    let a = tree(&["x"]);
    let b = tree(&["y1", "y2", "y3"]);
    let mut la = create(a.path(), &ListOptions::new()).unwrap();
    let mut lb = create(b.path(), &ListOptions::new().max_entries(1)).unwrap();
    assert!(lb.is_truncated());
    merge(&mut la, 0, &mut lb, 0, SortMethod::None).unwrap();
    assert!(la.is_truncated());
    assert_eq!(la.len(), 2);
}

/// Truncating the source to the destination's free room makes the merge fit.
#[test]
fn truncated_source_fits_ceiling() {
    let a = tree(&["p", "q"]);
    let b = tree(&["r", "s"]);
    let mut la = create(a.path(), &ListOptions::new().max_entries(3)).unwrap();
    let mut lb = create(b.path(), &ListOptions::new()).unwrap();

    lb.truncate(la.max_len() - la.len());
    assert!(lb.is_truncated());
    assert_eq!(merge(&mut la, 0, &mut lb, 0, SortMethod::None).unwrap(), 3);
    assert!(la.is_truncated());
}
