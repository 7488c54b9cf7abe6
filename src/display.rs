// display.rs — Display level and diagnostic output.
//
// Diagnostics go to stderr and are filtered by a process-wide display level:
//
//   0 = no output; 1 = errors only; 2 = normal; 3 = verbose; 4 = debug
//
// The traversal engine reports skipped directories and entries at level 4.

use std::sync::atomic::{AtomicU32, Ordering};

/// Prefix for every traversal diagnostic.
pub const DEBUG_PREFIX: &str = "FILE_LIST: ";

/// Level at which traversal diagnostics are printed.
pub const DEBUG_LEVEL: u32 = 4;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Traversal diagnostic: printed at [`DEBUG_LEVEL`] with the `FILE_LIST: `
/// prefix.
#[macro_export]
macro_rules! debug_printf {
    ($($arg:tt)*) => {
        if $crate::display::display_level() >= $crate::display::DEBUG_LEVEL {
            eprint!("{}", $crate::display::DEBUG_PREFIX);
            eprint!($($arg)*);
        }
    };
}
