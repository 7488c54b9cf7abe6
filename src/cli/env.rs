//! Environment-based defaults for the CLI.

use crate::config::MAX_LIST_SIZE;
use crate::displaylevel;

/// Environment variable overriding the default entry ceiling.
pub const FILE_LIST_MAX_ENV: &str = "FILE_LIST_MAX";

/// Reads the entry ceiling from `FILE_LIST_MAX`, falling back to
/// [`MAX_LIST_SIZE`].
pub fn init_max_entries() -> usize {
    init_max_entries_from(std::env::var(FILE_LIST_MAX_ENV).ok().as_deref())
}

/// Testable core of [`init_max_entries`].
///
/// Values that are not a decimal number are ignored with a warning; values
/// above [`MAX_LIST_SIZE`] are clamped to it.
pub fn init_max_entries_from(env_val: Option<&str>) -> usize {
    let Some(raw) = env_val else {
        return MAX_LIST_SIZE;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) => n.min(MAX_LIST_SIZE),
        Err(_) => {
            displaylevel!(
                2,
                "Ignore environment variable setting {}={}: not a valid unsigned value \n",
                FILE_LIST_MAX_ENV,
                raw
            );
            MAX_LIST_SIZE
        }
    }
}
