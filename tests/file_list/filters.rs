// Type mask and name pattern filters.

use file_list::{create, FileListError, Flags, ListOptions, TypeMask};
use nix::sys::stat::Mode;

use crate::common::{make_tree, rel_sorted, touch};

#[test]
fn regular_files_only_still_descends() {
    let dir = make_tree();
    let list = create(dir.path(), &ListOptions::new().types(TypeMask::REG)).unwrap();
    assert_eq!(
        rel_sorted(&list, dir.path()),
        ["a.txt", "b.log", "sub/c.txt", "sub/deeper/d.txt"]
    );
}

#[test]
fn directories_only() {
    let dir = make_tree();
    let list = create(dir.path(), &ListOptions::new().types(TypeMask::DIR)).unwrap();
    assert_eq!(rel_sorted(&list, dir.path()), ["sub", "sub/deeper"]);
}

#[test]
fn fifo_type_is_recognised() {
    let dir = make_tree();
    nix::unistd::mkfifo(dir.path().join("pipe").as_path(), Mode::S_IRUSR | Mode::S_IWUSR).unwrap();

    let fifos = create(dir.path(), &ListOptions::new().types(TypeMask::FIFO)).unwrap();
    assert_eq!(rel_sorted(&fifos, dir.path()), ["pipe"]);

    let regular = create(dir.path(), &ListOptions::new().types(TypeMask::REG)).unwrap();
    assert!(!rel_sorted(&regular, dir.path()).contains(&"pipe".to_owned()));
}

/// The pattern is matched against the entry name, not the full path, and it
/// never prevents descending into a directory.
#[test]
fn pattern_applies_to_basename_only() {
    let dir = make_tree();
    let list = create(dir.path(), &ListOptions::new().pattern("\\.txt$")).unwrap();
    assert_eq!(
        rel_sorted(&list, dir.path()),
        ["a.txt", "sub/c.txt", "sub/deeper/d.txt"]
    );

    // "sub" occurs in the full paths of nested files but only one name matches.
    let list = create(dir.path(), &ListOptions::new().pattern("^sub$")).unwrap();
    assert_eq!(rel_sorted(&list, dir.path()), ["sub"]);
}

#[test]
fn pattern_is_case_insensitive_by_default() {
    let dir = make_tree();
    touch(&dir.path().join("UPPER.TXT"));

    let list = create(dir.path(), &ListOptions::new().pattern("upper")).unwrap();
    assert_eq!(rel_sorted(&list, dir.path()), ["UPPER.TXT"]);

    let list = create(
        dir.path(),
        &ListOptions::new().pattern("upper").flags(Flags::REGEX_CASE),
    )
    .unwrap();
    assert!(list.is_empty());
}

#[test]
fn basic_dialect_treats_plus_literally() {
    let dir = make_tree();
    touch(&dir.path().join("c++.txt"));
    touch(&dir.path().join("cc.txt"));

    let list = create(
        dir.path(),
        &ListOptions::new()
            .pattern("^c++")
            .flags(Flags::REGEX_BASIC | Flags::REGEX_CASE),
    )
    .unwrap();
    assert_eq!(rel_sorted(&list, dir.path()), ["c++.txt"]);
}

#[test]
fn type_and_pattern_combine() {
    let dir = make_tree();
    let list = create(
        dir.path(),
        &ListOptions::new().types(TypeMask::DIR).pattern("e"),
    )
    .unwrap();
    assert_eq!(rel_sorted(&list, dir.path()), ["sub/deeper"]);
}

#[test]
fn invalid_pattern_is_fatal() {
    let dir = make_tree();
    let err = create(dir.path(), &ListOptions::new().pattern("[unclosed")).unwrap_err();
    assert!(matches!(err, FileListError::Pattern(_)));
}
