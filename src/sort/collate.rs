//! Locale-collated comparison through the C library's `strcoll`.
//!
//! The result depends on the process's `LC_COLLATE` category. Callers must
//! establish the locale (e.g. with [`use_environment_locale`]) before sorting
//! with [`crate::SortMethod::Collate`]; until then the C library runs in the
//! "C" locale, where `strcoll` orders like `strcmp`.

use std::cmp::Ordering;
use std::ffi::CString;

/// Compares two byte strings with `strcoll`.
///
/// Strings containing an interior NUL cannot be passed to the C library and
/// fall back to raw byte order.
pub fn compare_collate(s1: &[u8], s2: &[u8]) -> Ordering {
    match (CString::new(s1), CString::new(s2)) {
        (Ok(c1), Ok(c2)) => {
            // SAFETY: both pointers are valid NUL-terminated strings that
            // outlive the call.
            let r = unsafe { libc::strcoll(c1.as_ptr(), c2.as_ptr()) };
            r.cmp(&0)
        }
        _ => s1.cmp(s2),
    }
}

/// Sets `LC_COLLATE` from the environment (`LC_ALL`, `LC_COLLATE`, `LANG`).
///
/// Returns `false` if the C library rejected the environment's locale.
/// This mutates process-global state; call it once, before any thread sorts.
pub fn use_environment_locale() -> bool {
    // SAFETY: the locale argument is a valid NUL-terminated empty string.
    let ret = unsafe { libc::setlocale(libc::LC_COLLATE, c"".as_ptr()) };
    !ret.is_null()
}
