//! # List Anchors
//!
//! The three reserved bookkeeping slots of one list instance. Making the
//! anchors an explicit per-instance value (rather than process-wide
//! constants) lets several independent lists share one store, as long as
//! their anchor slots do not collide.

use flatledger_store::SlotAddr;
use serde::{Deserialize, Serialize};

/// Reserved bookkeeping slots of a single list.
///
/// A deployment must keep these three slots, every element address, and
/// every element's two link slots mutually disjoint. That discipline is the
/// caller's responsibility; the list does not police it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAnchors {
    /// Slot holding the element count.
    pub size: SlotAddr,
    /// Slot holding the earliest still-linked element's address.
    pub tail: SlotAddr,
    /// Slot holding the most recently inserted element's address.
    pub head: SlotAddr,
}

impl ListAnchors {
    /// Creates an anchor configuration from three reserved slots.
    #[must_use]
    pub const fn new(size: SlotAddr, tail: SlotAddr, head: SlotAddr) -> Self {
        Self { size, tail, head }
    }
}

impl Default for ListAnchors {
    /// The original reserved slots: size at `0x11`, tail at `0x12`, head at
    /// `0x13`.
    fn default() -> Self {
        Self {
            size: SlotAddr::from_low(0x11),
            tail: SlotAddr::from_low(0x12),
            head: SlotAddr::from_low(0x13),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
