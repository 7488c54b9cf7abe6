// config.rs — Compile-time limits and the list growth policy.
//
// The list starts at INITIAL_LIST_SIZE slots and doubles until it reaches
// MAX_LIST_SIZE. Both values can be changed arbitrarily; callers that need a
// different ceiling for a single call pass their own `GrowthPolicy`.

/// Number of slots allocated for a fresh list.
pub const INITIAL_LIST_SIZE: usize = 512;

/// Hard ceiling on the number of entries a list may hold.
///
/// One slot is reserved for the terminator, so the ceiling can never be
/// `usize::MAX`.
pub const MAX_LIST_SIZE: usize = if 1_048_576 > usize::MAX - 1 {
    usize::MAX - 1
} else {
    1_048_576
};

/// Multiplier applied to the capacity each time the list runs full.
pub const GROWTH_FACTOR: usize = 2;

/// Initial number of ancestor slots in the loop guard.
pub const LOOP_GUARD_INITIAL_SIZE: usize = 512;

/// Two-tier growth policy: soft doubling up to a hard maximum.
///
/// The policy is independent of the element type; it only decides how many
/// slots the backing storage should have next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Slots reserved when the list is created (clamped to `max_len`).
    pub initial_capacity: usize,
    /// Capacity multiplier on growth; values below 2 are treated as 2.
    pub growth_factor: usize,
    /// Maximum number of live elements.
    pub max_len: usize,
}

impl GrowthPolicy {
    /// Policy with the default initial size and growth factor, but a custom
    /// ceiling.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.min(MAX_LIST_SIZE),
            ..Self::default()
        }
    }

    /// Capacity to allocate up front.
    pub fn first_capacity(&self) -> usize {
        self.initial_capacity.min(self.max_len)
    }

    /// Next capacity after `current` runs full, or `None` when `current` has
    /// already reached the ceiling.
    ///
    /// A multiplication overflow saturates before the clamp, and the result
    /// always grows by at least one slot.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        if current >= self.max_len {
            return None;
        }
        let grown = current
            .saturating_mul(self.growth_factor.max(2))
            .max(current + 1);
        Some(grown.min(self.max_len))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_LIST_SIZE,
            growth_factor: GROWTH_FACTOR,
            max_len: MAX_LIST_SIZE,
        }
    }
}
