//! # Slot-Backed Linked List
//!
//! The list proper. New elements are always linked at the head; removal
//! works from any position via a four-way case analysis on the element's
//! neighbour links. The store is only ever touched at the three anchor
//! slots and at the link slots of the elements involved, so payload words
//! are never read or written here.

use crate::anchors::ListAnchors;
use crate::error::ListError;
use flatledger_store::{SlotAddr, SlotStore, Word};
use primitive_types::U256;
use tracing::trace;

/// A doubly linked list kept in the slots of a flat store.
///
/// The list owns a store handle; callers that need to write element payloads
/// between operations go through [`store_mut`](Self::store_mut). Blanket
/// `SlotStore` impls on `&mut S` make it easy to construct a short-lived
/// list view over a borrowed store.
///
/// Element addresses must be non-zero: the zero address is the null link
/// sentinel.
#[derive(Debug)]
pub struct SlotList<S: SlotStore> {
    store: S,
    anchors: ListAnchors,
}

impl<S: SlotStore> SlotList<S> {
    /// Creates a list view over `store` with the given anchor slots.
    ///
    /// The anchors are trusted as-is: binding to slots that already hold a
    /// well-formed list resumes that list, and binding to untouched slots
    /// starts an empty one.
    pub fn new(store: S, anchors: ListAnchors) -> Self {
        Self { store, anchors }
    }

    /// Creates a list view using the default anchor slots.
    pub fn with_default_anchors(store: S) -> Self {
        Self::new(store, ListAnchors::default())
    }

    /// The anchor configuration of this list.
    #[must_use]
    pub fn anchors(&self) -> ListAnchors {
        self.anchors
    }

    /// Shared access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Exclusive access to the underlying store, e.g. for writing an
    /// element's payload before linking it.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the list view and returns the store handle.
    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Number of linked elements.
    #[must_use]
    pub fn size(&self) -> Word {
        self.store.get(self.anchors.size)
    }

    /// Returns true if no element is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size().is_zero()
    }

    /// Address of the most recently inserted element, or zero if empty.
    #[must_use]
    pub fn head(&self) -> SlotAddr {
        SlotAddr::from(self.store.get(self.anchors.head))
    }

    /// Address of the earliest still-linked element, or zero if empty.
    #[must_use]
    pub fn tail(&self) -> SlotAddr {
        SlotAddr::from(self.store.get(self.anchors.tail))
    }

    /// The element linked before `element` (towards the tail), or zero.
    #[must_use]
    pub fn prev(&self, element: SlotAddr) -> SlotAddr {
        SlotAddr::from(self.store.get(element.prev_link()))
    }

    /// The element linked after `element` (towards the head), or zero.
    #[must_use]
    pub fn next(&self, element: SlotAddr) -> SlotAddr {
        SlotAddr::from(self.store.get(element.next_link()))
    }

    /// Returns true if `element` is currently linked.
    ///
    /// O(1): a linked element either is the head or has at least one
    /// non-zero neighbour link. The zero address is never a member.
    #[must_use]
    pub fn contains(&self, element: SlotAddr) -> bool {
        if element.is_zero() {
            return false;
        }
        self.head() == element
            || !self.prev(element).is_zero()
            || !self.next(element).is_zero()
    }

    /// Iterates element addresses from head to tail.
    ///
    /// The walk follows prev-links and is bounded by `size()`, so it
    /// terminates even over a store whose chain has been corrupted out from
    /// under the list.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            list: self,
            cursor: self.head(),
            remaining: self.size(),
        }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Links `element` as the new head.
    ///
    /// The element's payload must already be in place; linking only writes
    /// the anchor slots and the neighbour links involved.
    ///
    /// # Errors
    ///
    /// Returns `NullElement` for the zero address and `AlreadyLinked` if
    /// `element` is currently a member.
    pub fn insert(&mut self, element: SlotAddr) -> Result<(), ListError> {
        if element.is_zero() {
            return Err(ListError::NullElement);
        }
        if self.contains(element) {
            return Err(ListError::AlreadyLinked(element));
        }

        let head = self.head();
        let size = self.size();

        if size.is_zero() {
            // First element doubles as the tail.
            self.store.set(self.anchors.tail, element.to_word());
        } else {
            // Link the old head forward and the new element backward.
            self.store.set(head.next_link(), element.to_word());
            self.store.set(element.prev_link(), head.to_word());
        }

        self.store.set(self.anchors.head, element.to_word());
        let new_size = size.overflowing_add(U256::one()).0;
        self.store.set(self.anchors.size, new_size);

        trace!(element = %element, size = %new_size, "linked element at head");
        Ok(())
    }

    /// Unlinks `element` from wherever it sits.
    ///
    /// The element's own link slots are cleared; its payload is left intact
    /// and its address may be relinked later once the caller has reset the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns `NotLinked` if `element` is not currently a member. This is a
    /// deliberate hardening over the raw slot layout, where removing a
    /// non-member would silently underflow the size slot.
    pub fn remove(&mut self, element: SlotAddr) -> Result<(), ListError> {
        if !self.contains(element) {
            return Err(ListError::NotLinked(element));
        }

        let prev = self.prev(element);
        let next = self.next(element);

        match (next.is_zero(), prev.is_zero()) {
            // Interior element: bridge the two neighbours.
            (false, false) => {
                self.store.set(next.prev_link(), prev.to_word());
                self.store.set(prev.next_link(), next.to_word());
            }
            // Tail element: promote its successor to tail.
            (false, true) => {
                self.store.set(next.prev_link(), Word::zero());
                self.store.set(self.anchors.tail, next.to_word());
            }
            // Head element: promote its predecessor to head.
            (true, false) => {
                self.store.set(prev.next_link(), Word::zero());
                self.store.set(self.anchors.head, prev.to_word());
            }
            // Sole element: the list collapses to empty.
            (true, true) => {
                self.store.set(self.anchors.head, Word::zero());
                self.store.set(self.anchors.tail, Word::zero());
            }
        }

        self.store.set(element.next_link(), Word::zero());
        self.store.set(element.prev_link(), Word::zero());
        // contains() guarantees a member, so size is non-zero here; the
        // saturation only matters if the store was corrupted externally.
        let new_size = self.size().saturating_sub(U256::one());
        self.store.set(self.anchors.size, new_size);

        trace!(element = %element, size = %new_size, "unlinked element");
        Ok(())
    }
}

/// Head-to-tail iterator over element addresses.
#[derive(Debug)]
pub struct Iter<'a, S: SlotStore> {
    list: &'a SlotList<S>,
    cursor: SlotAddr,
    remaining: Word,
}

impl<S: SlotStore> Iterator for Iter<'_, S> {
    type Item = SlotAddr;

    fn next(&mut self) -> Option<SlotAddr> {
        if self.cursor.is_zero() || self.remaining.is_zero() {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.list.prev(current);
        self.remaining = self.remaining.saturating_sub(U256::one());
        Some(current)
    }
}

// =============================================================================
// TESTS
// =============================================================================
