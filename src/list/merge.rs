//! Appending one finished list onto another.

use crate::error::{FileListError, Result};
use crate::list::FileList;
use crate::sort::SortMethod;

/// A size hint of 0 means "count it"; any other value must match the list.
fn resolve_size(hint: usize, list: &FileList) -> Result<usize> {
    let actual = list.len();
    if hint == 0 || hint == actual {
        Ok(actual)
    } else {
        Err(FileListError::SizeHint { hint, actual })
    }
}

/// Moves every path of `source` to the end of `destination`, then sorts the
/// combined list with `method`.
///
/// On success `source` is left empty with its storage released, and the
/// combined length is returned. On failure neither list is modified.
///
/// The combined length may not exceed the destination's ceiling
/// ([`FileList::max_len`]); exceeding it returns
/// [`FileListError::CapacityExceeded`].
pub fn merge(
    destination: &mut FileList,
    n_dest: usize,
    source: &mut FileList,
    n_source: usize,
    method: SortMethod,
) -> Result<usize> {
    let n_dest = resolve_size(n_dest, destination)?;
    let n_source = resolve_size(n_source, source)?;

    // One extra slot must remain addressable for the terminator.
    let n = n_dest
        .checked_add(n_source)
        .filter(|n| n.checked_add(1).is_some())
        .ok_or(FileListError::SizeOverflow)?;
    if n > destination.max_len() {
        return Err(FileListError::CapacityExceeded {
            max: destination.max_len(),
        });
    }

    destination.paths_mut().try_reserve_exact(n_source)?;

    // Nothing below can fail.
    destination.paths_mut().append(source.paths_mut());
    let truncated = destination.is_truncated() || source.is_truncated();
    destination.set_truncated(truncated);
    source.destroy();

    destination.sort(method);
    Ok(n)
}
