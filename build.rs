// build.rs — Platform detection for the directory-read type hint.
//
// Emits `cargo:rustc-cfg=no_d_type` on targets whose `struct dirent` has no
// `d_type` member. On those targets every directory entry has its type
// resolved through an attribute query instead of the cheap readdir hint.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let no_d_type_targets = ["solaris", "illumos", "haiku", "aix", "nto"];
    if no_d_type_targets.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=no_d_type");
    }
}
