//! Entity identity system using per-type monotonic counters
//!
//! IDs are handed out from a process-wide counter per entity type, starting
//! at 1. Deleting an entity never returns its ID to the pool, and IDs cannot
//! be set from user input; the only way an ID moves between entities is the
//! update-in-place convention in [`crate::core::Inventory`].

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_PART_ID: AtomicU32 = AtomicU32::new(1);
static NEXT_PRODUCT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier for a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartId(u32);

impl PartId {
    /// Claim the next available part ID
    pub fn next() -> Self {
        PartId(NEXT_PART_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u32);

impl ProductId {
    /// Claim the next available product ID
    pub fn next() -> Self {
        ProductId(NEXT_PRODUCT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
