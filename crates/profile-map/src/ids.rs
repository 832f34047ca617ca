//! Sequential row ID allocation.

use profile_model::ROOT_ID;

/// Hands out dense, strictly increasing row IDs.
///
/// One allocator lives for exactly one compiled output. It is passed by
/// `&mut` through the compilers, never stored globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Allocator whose first ID is `start`. The root ID is never handed
    /// out, so anything at or below it starts right after the root.
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: start.max(ROOT_ID + 1),
        }
    }

    /// Allocator whose first ID is the one right after the root.
    pub fn after_root() -> Self {
        Self::starting_at(ROOT_ID + 1)
    }

    /// Take the next ID.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The ID the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::after_root()
    }
}
