//! Byte-string comparators.
//!
//! All comparators walk both strings left to right. Reading past the end of
//! a string yields a NUL byte, so a strict prefix always sorts first.

use std::cmp::Ordering;

#[inline]
fn at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

/// Per-character rule shared by [`compare_default`] and [`compare_natural`].
///
/// Returns `Some` on a true mismatch. On a pure case mismatch the first such
/// position records the tie-break (lowercase first) in `tie`.
#[inline]
fn compare_chars(a: u8, b: u8, tie: &mut Ordering) -> Option<Ordering> {
    if a == b {
        return None;
    }
    let (la, lb) = (a.to_ascii_lowercase(), b.to_ascii_lowercase());
    if la == lb {
        if *tie == Ordering::Equal {
            // Reversed byte order: 'a' (0x61) before 'A' (0x41).
            *tie = b.cmp(&a);
        }
        None
    } else {
        Some(la.cmp(&lb))
    }
}

/// Case-insensitive alphabetical order; names that differ only in case put
/// the lowercase variant first, and shorter strings sort first.
pub fn compare_default(s1: &[u8], s2: &[u8]) -> Ordering {
    let mut tie = Ordering::Equal;
    let mut i = 0;
    loop {
        if let Some(ord) = compare_chars(at(s1, i), at(s2, i), &mut tie) {
            return ord;
        }
        i += 1;
        if at(s1, i) == 0 || at(s2, i) == 0 {
            break;
        }
    }

    let (a, b) = (at(s1, i), at(s2, i));
    if a == b {
        tie
    } else {
        a.cmp(&b)
    }
}

/// [`compare_default`] with runs of decimal digits compared as numbers.
///
/// Leading zeros are ignored for the magnitude; among equal numbers the run
/// with more leading zeros sorts first ("007" < "07" < "7").
pub fn compare_natural(s1: &[u8], s2: &[u8]) -> Ordering {
    let mut tie = Ordering::Equal;
    // The two cursors diverge once digit runs of different lengths are
    // consumed.
    let (mut i, mut j) = (0, 0);
    loop {
        let (a, b) = (at(s1, i), at(s2, j));
        if a.is_ascii_digit() && b.is_ascii_digit() {
            let (z1, z2) = (i, j);

            // Advance to the last digit of each run.
            while at(s1, i + 1).is_ascii_digit() {
                i += 1;
            }
            while at(s2, j + 1).is_ascii_digit() {
                j += 1;
            }

            let mut p1 = z1;
            while at(s1, p1) == b'0' && p1 < i {
                p1 += 1;
            }
            let mut p2 = z2;
            while at(s2, p2) == b'0' && p2 < j {
                p2 += 1;
            }

            // Fewer significant digits means a smaller number.
            let (len1, len2) = (i - p1, j - p2);
            if len1 != len2 {
                return len1.cmp(&len2);
            }
            let ord = s1[p1..=i].cmp(&s2[p2..=j]);
            if ord != Ordering::Equal {
                return ord;
            }

            // Same number; more zeros goes first.
            let (run1, run2) = (i - z1, j - z2);
            if run1 != run2 {
                return run2.cmp(&run1);
            }
        } else if let Some(ord) = compare_chars(a, b, &mut tie) {
            return ord;
        }

        i += 1;
        j += 1;
        if at(s1, i) == 0 || at(s2, j) == 0 {
            break;
        }
    }

    let (a, b) = (at(s1, i), at(s2, j));
    if a == b {
        tie
    } else {
        a.cmp(&b)
    }
}

/// Raw byte order. Locale-independent and the fastest method.
#[inline]
pub fn compare_ascii(s1: &[u8], s2: &[u8]) -> Ordering {
    s1.cmp(s2)
}
