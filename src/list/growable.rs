//! Amortized-doubling list with a hard element ceiling.

use crate::config::GrowthPolicy;
use crate::debug_printf;
use crate::error::{FileListError, Result};

/// Owned, contiguous sequence that grows by the rules of a [`GrowthPolicy`].
///
/// Invariant: `len() <= capacity() <= policy.max_len`. Storage is reserved
/// explicitly so that an allocation failure surfaces as
/// [`FileListError::Allocation`] instead of aborting.
#[derive(Debug)]
pub struct GrowableList<T> {
    items: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> GrowableList<T> {
    /// Creates an empty list with the policy's initial capacity reserved.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        let capacity = policy.first_capacity();
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self {
            items,
            capacity,
            policy,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity granted by the growth policy so far.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `item`, growing the storage if the list is full.
    ///
    /// When the list already holds `max_len` elements the item is dropped and
    /// [`FileListError::CapacityExceeded`] is returned; the list itself is
    /// unchanged and stays usable.
    pub fn append(&mut self, item: T) -> Result<()> {
        if self.items.len() == self.capacity {
            let Some(new_capacity) = self.policy.next_capacity(self.capacity) else {
                return Err(FileListError::CapacityExceeded {
                    max: self.policy.max_len,
                });
            };
            debug_printf!("Resizing file list array: max. {} elements\n", new_capacity);
            self.items
                .try_reserve_exact(new_capacity - self.items.len())?;
            self.capacity = new_capacity;
        }
        self.items.push(item);
        Ok(())
    }

    /// Shrinks the storage to the exact element count and hands it out.
    ///
    /// The returned vector's length is the terminator: no slot past it is
    /// ever live.
    pub fn trim_and_terminate(mut self) -> Vec<T> {
        self.items.shrink_to_fit();
        self.items
    }

    /// Releases every element and the backing storage.
    ///
    /// Calling it again on the emptied list does nothing.
    pub fn destroy(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }
}
