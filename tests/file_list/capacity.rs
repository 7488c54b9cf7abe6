// Entry ceiling: truncation keeps the first entries found and still yields a
// usable, sorted list.

use std::collections::HashSet;

use file_list::{create, GrowthPolicy, ListOptions, SortMethod};
use tempfile::TempDir;

use crate::common::{rel, touch};

fn flat_tree(n: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..n {
        touch(&dir.path().join(format!("f{i:03}")));
    }
    dir
}

#[test]
fn ceiling_truncates_list() {
    let dir = flat_tree(15);
    let list = create(dir.path(), &ListOptions::new().max_entries(10)).unwrap();
    assert_eq!(list.len(), 10);
    assert!(list.is_truncated());
    assert_eq!(list.max_len(), 10);

    // Whatever was kept is distinct and really exists.
    let names: HashSet<_> = rel(&list, dir.path()).into_iter().collect();
    assert_eq!(names.len(), 10);
    assert!(list.iter().all(|p| p.exists()));
}

#[test]
fn truncated_list_is_still_sorted() {
    let dir = flat_tree(12);
    let opts = ListOptions::new()
        .max_entries(5)
        .sort(SortMethod::Ascii);
    let list = create(dir.path(), &opts).unwrap();
    assert!(list.is_truncated());
    let names = rel(&list, dir.path());
    let mut expect = names.clone();
    expect.sort();
    assert_eq!(names, expect);
}

#[test]
fn exact_fit_is_not_truncated() {
    let dir = flat_tree(8);
    let list = create(dir.path(), &ListOptions::new().max_entries(8)).unwrap();
    assert_eq!(list.len(), 8);
    assert!(!list.is_truncated());
}

#[test]
fn growth_past_initial_capacity() {
    let dir = flat_tree(40);
    let policy = GrowthPolicy {
        initial_capacity: 2,
        growth_factor: 2,
        max_len: 1000,
    };
    let list = create(dir.path(), &ListOptions::new().policy(policy)).unwrap();
    assert_eq!(list.len(), 40);
    assert!(!list.is_truncated());
}

#[test]
fn zero_ceiling_gives_empty_truncated_list() {
    let dir = flat_tree(3);
    let list = create(dir.path(), &ListOptions::new().max_entries(0)).unwrap();
    assert!(list.is_empty());
    assert!(list.is_truncated());
}

#[test]
fn empty_directory_with_zero_ceiling_is_complete() {
    let dir = TempDir::new().unwrap();
    let list = create(dir.path(), &ListOptions::new().max_entries(0)).unwrap();
    assert!(list.is_empty());
    assert!(!list.is_truncated());
}
