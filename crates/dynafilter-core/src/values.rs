//! Per-field value-slot allocation and placeholder formatting.

use std::collections::HashMap;

/// Monotonic per-field counters for value slots.
///
/// Each slot represents one bound operand. An entire `$in`/`$nin` list
/// consumes exactly one slot; its elements are addressed through
/// [`ValueAllocator::array_placeholder`] with the shared slot index.
#[derive(Debug, Default)]
pub struct ValueAllocator {
    counters: HashMap<String, usize>,
}

impl ValueAllocator {
    /// Create an allocator with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next free slot index for `field`, starting at 0. Indices
    /// are strictly increasing in allocation order, with no gaps or reuse.
    pub fn next_index(&mut self, field: &str) -> usize {
        let counter = self.counters.entry(field.to_owned()).or_insert(0);
        let index = *counter;
        *counter += 1;
        index
    }

    /// The scalar placeholder for one slot.
    #[must_use]
    pub fn placeholder(field: &str, index: usize) -> String {
        format!(":{field}_{index}")
    }

    /// The per-element placeholder for array-valued operators.
    #[must_use]
    pub fn array_placeholder(field: &str, index: usize, element: usize) -> String {
        format!(":{field}_{index}_{element}")
    }
}
