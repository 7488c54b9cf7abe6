// Symbolic links: loop safety, link following, dangling links and the
// same-device policy.

use std::fs;
use std::os::unix::fs::symlink;

use file_list::{create, Flags, ListOptions, TypeMask};
use tempfile::TempDir;

use crate::common::{make_tree, rel_sorted, touch};

/// `<root>/a/up -> <root>`: following links must terminate and must not list
/// the cyclic subtree a second time.
#[test]
fn link_to_ancestor_does_not_loop() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("a")).unwrap();
    touch(&root.join("a/file"));
    symlink(root, root.join("a/up")).unwrap();

    let list = create(root, &ListOptions::new().flags(Flags::FOLLOW_LINKS)).unwrap();
    assert_eq!(rel_sorted(&list, root), ["a", "a/file"]);
}

#[test]
fn link_to_intermediate_ancestor_does_not_loop() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a/b")).unwrap();
    touch(&root.join("a/b/f"));
    symlink(root.join("a"), root.join("a/b/back")).unwrap();

    let list = create(root, &ListOptions::new().flags(Flags::FOLLOW_LINKS)).unwrap();
    assert_eq!(rel_sorted(&list, root), ["a", "a/b", "a/b/f"]);
}

#[test]
fn cyclic_link_is_listed_but_not_followed_by_default() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("a")).unwrap();
    symlink(root, root.join("a/up")).unwrap();

    let list = create(root, &ListOptions::new()).unwrap();
    assert_eq!(rel_sorted(&list, root), ["a", "a/up"]);

    let links = create(root, &ListOptions::new().types(TypeMask::LNK)).unwrap();
    assert_eq!(rel_sorted(&links, root), ["a/up"]);
}

/// A link to a sibling directory is not a cycle: with link following its
/// contents appear under both names.
#[test]
fn link_to_sibling_is_followed() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("real")).unwrap();
    touch(&root.join("real/x"));
    symlink(root.join("real"), root.join("alias")).unwrap();

    let followed = create(root, &ListOptions::new().flags(Flags::FOLLOW_LINKS)).unwrap();
    assert_eq!(
        rel_sorted(&followed, root),
        ["alias", "alias/x", "real", "real/x"]
    );

    let plain = create(root, &ListOptions::new()).unwrap();
    assert_eq!(rel_sorted(&plain, root), ["alias", "real", "real/x"]);
}

/// Following a dangling link fails the attribute query; only that entry is
/// skipped.
#[test]
fn dangling_link_is_skipped_when_following() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("ok"));
    symlink(root.join("missing"), root.join("dangling")).unwrap();

    let followed = create(root, &ListOptions::new().flags(Flags::FOLLOW_LINKS)).unwrap();
    assert_eq!(rel_sorted(&followed, root), ["ok"]);

    let plain = create(root, &ListOptions::new()).unwrap();
    assert_eq!(rel_sorted(&plain, root), ["dangling", "ok"]);
}

#[test]
fn followed_link_takes_target_type() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(&root.join("target"));
    symlink(root.join("target"), root.join("link")).unwrap();

    let opts = ListOptions::new().types(TypeMask::REG);
    assert_eq!(rel_sorted(&create(root, &opts).unwrap(), root), ["target"]);

    let opts = opts.flags(Flags::FOLLOW_LINKS);
    assert_eq!(
        rel_sorted(&create(root, &opts).unwrap(), root),
        ["link", "target"]
    );
}

/// On a single device the same-device policy changes nothing; the foreign
/// device case is covered next to the traversal engine.
#[test]
fn xdev_is_transparent_on_one_device() {
    let dir = make_tree();
    let all = create(dir.path(), &ListOptions::new()).unwrap();
    let local = create(dir.path(), &ListOptions::new().flags(Flags::XDEV)).unwrap();
    assert_eq!(all, local);
}
