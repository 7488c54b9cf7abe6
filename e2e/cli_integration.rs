// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `flist` binary as a black-box tool using std::process::Command.
// Covers listing, type and pattern filters, depth, NUL output, multiple
// directories, truncation and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `flist` binary produced by Cargo.
fn flist_bin() -> PathBuf {
    // CARGO_BIN_EXE_flist is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_flist") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("flist");
    p
}

fn flist(args: &[&str]) -> Output {
    Command::new(flist_bin())
        .args(args)
        .env_remove("FILE_LIST_MAX")
        .output()
        .expect("failed to run flist")
}

/// `<root>/{b.txt, a.log, sub/{c.txt}}`
fn make_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    for name in ["b.txt", "a.log", "sub/c.txt"] {
        fs::write(root.join(name), b"x").unwrap();
    }
    dir
}

fn root_str(dir: &TempDir) -> &str {
    dir.path().to_str().unwrap()
}

/// stdout split into lines, with `root/` stripped from each.
fn lines_under(out: &Output, root: &Path) -> Vec<String> {
    let prefix = format!("{}/", root.display());
    String::from_utf8(out.stdout.clone())
        .unwrap()
        .lines()
        .map(|l| {
            l.strip_prefix(&prefix)
                .unwrap_or_else(|| panic!("{l} is not under {prefix}"))
                .to_owned()
        })
        .collect()
}

// ── 1. Plain listing ─────────────────────────────────────────────────────────

#[test]
fn test_cli_lists_sorted_tree() {
    let dir = make_tree();
    let out = flist(&[root_str(&dir)]);
    assert!(out.status.success(), "flist should exit 0");
    assert_eq!(
        lines_under(&out, dir.path()),
        ["a.log", "b.txt", "sub", "sub/c.txt"]
    );
}

// ── 2. --version ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let out = flist(&["--version"]);
    assert!(out.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "version output should contain the package version, got: {stdout}"
    );
}

// ── 3. Filters ───────────────────────────────────────────────────────────────

#[test]
fn test_cli_type_filter() {
    let dir = make_tree();
    let out = flist(&["-t", "f", root_str(&dir)]);
    assert!(out.status.success());
    assert_eq!(
        lines_under(&out, dir.path()),
        ["a.log", "b.txt", "sub/c.txt"]
    );

    let out = flist(&["--type", "d", root_str(&dir)]);
    assert_eq!(lines_under(&out, dir.path()), ["sub"]);
}

#[test]
fn test_cli_regex_filter() {
    let dir = make_tree();
    let out = flist(&["-e", r"\.TXT$", root_str(&dir)]);
    assert!(out.status.success());
    assert_eq!(lines_under(&out, dir.path()), ["b.txt", "sub/c.txt"]);

    // -I makes the match case-sensitive.
    let out = flist(&["-I", "-e", r"\.TXT$", root_str(&dir)]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_bad_regex_fails() {
    let dir = make_tree();
    let out = flist(&["-e", "(", root_str(&dir)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("flist:"));
}

// ── 4. Depth and output format ───────────────────────────────────────────────

#[test]
fn test_cli_depth_zero() {
    let dir = make_tree();
    let out = flist(&["-d", "0", root_str(&dir)]);
    assert_eq!(lines_under(&out, dir.path()), ["a.log", "b.txt", "sub"]);
}

#[test]
fn test_cli_null_separated() {
    let dir = make_tree();
    let out = flist(&["-0", "-d", "0", "-t", "f", root_str(&dir)]);
    assert!(out.status.success());
    let expect = format!("{0}/a.log\0{0}/b.txt\0", root_str(&dir));
    assert_eq!(out.stdout, expect.as_bytes());
}

#[test]
fn test_cli_dir_sep() {
    let dir = make_tree();
    let out = flist(&["-F", "-t", "d", root_str(&dir)]);
    assert_eq!(lines_under(&out, dir.path()), ["sub/"]);
}

// ── 5. Several directories ───────────────────────────────────────────────────

#[test]
fn test_cli_multiple_dirs_sorted_once() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    fs::write(a.path().join("x"), b"").unwrap();
    fs::write(b.path().join("y"), b"").unwrap();

    let out = flist(&["-s", "ascii", root_str(&a), root_str(&b)]);
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let got: Vec<&str> = text.lines().collect();

    let mut expect = vec![
        format!("{}/x", root_str(&a)),
        format!("{}/y", root_str(&b)),
    ];
    expect.sort();
    assert_eq!(got, expect);
}

// ── 6. Truncation ────────────────────────────────────────────────────────────

#[test]
fn test_cli_max_truncates_with_warning() {
    let dir = make_tree();
    let out = flist(&["--max", "2", root_str(&dir)]);
    assert!(out.status.success(), "a truncated list still exits 0");
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 2);
    assert!(String::from_utf8_lossy(&out.stderr).contains("truncated"));
}

#[test]
fn test_cli_env_max() {
    let dir = make_tree();
    let out = Command::new(flist_bin())
        .arg(root_str(&dir))
        .env("FILE_LIST_MAX", "1")
        .output()
        .expect("failed to run flist");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 1);
}

#[test]
fn test_cli_quiet_hides_warning() {
    let dir = make_tree();
    let out = flist(&["-q", "-q", "--max", "1", root_str(&dir)]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}

#[test]
fn test_cli_max_applies_across_dirs() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    for dir in [&a, &b] {
        fs::write(dir.path().join("one"), b"").unwrap();
        fs::write(dir.path().join("two"), b"").unwrap();
    }

    let out = flist(&["--max", "3", root_str(&a), root_str(&b)]);
    assert!(out.status.success(), "a truncated merge still exits 0");
    let text = String::from_utf8(out.stdout).unwrap();
    let got: Vec<&str> = text.lines().collect();
    assert_eq!(got.len(), 3);
    // Everything from the first directory is kept.
    for name in ["one", "two"] {
        let path = format!("{}/{name}", root_str(&a));
        assert!(got.contains(&path.as_str()), "{path} missing from {got:?}");
    }
    assert!(String::from_utf8_lossy(&out.stderr).contains("truncated"));

    // The first list already fills the ceiling.
    let out = flist(&["--max", "1", root_str(&a), root_str(&b)]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 1);
    assert!(String::from_utf8_lossy(&out.stderr).contains("truncated"));
}

// ── 7. Errors ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_dir_exit_code() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let out = flist(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_no_args_is_usage_error() {
    let out = flist(&[]);
    assert_eq!(out.status.code(), Some(2));
}
