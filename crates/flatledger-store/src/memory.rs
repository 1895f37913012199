//! # In-Memory Store
//!
//! `HashMap`-backed implementation of [`SlotStore`] for tests and
//! single-process deployments. Only non-zero words are materialized: writing
//! the zero word deletes the entry, so a store that has been fully cleared
//! is indistinguishable from a fresh one.

use crate::slot::{SlotAddr, Word};
use crate::store::SlotStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// In-memory slot store.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemorySlotStore {
    /// Occupied (non-zero) slots.
    slots: HashMap<SlotAddr, Word>,
}

impl InMemorySlotStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied (non-zero) slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no slot holds a non-zero word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the occupied slots in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotAddr, Word)> + '_ {
        self.slots.iter().map(|(addr, word)| (*addr, *word))
    }
}

impl SlotStore for InMemorySlotStore {
    fn get(&self, slot: SlotAddr) -> Word {
        self.slots.get(&slot).copied().unwrap_or_default()
    }

    fn set(&mut self, slot: SlotAddr, value: Word) {
        if value.is_zero() {
            self.slots.remove(&slot);
        } else {
            self.slots.insert(slot, value);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
