//! # Store Access Trait
//!
//! The access contract for a flat word-addressed store. Reads and writes are
//! total: a never-written slot reads as the zero word and a write always
//! succeeds. Durability and serialization of concurrent callers are the
//! implementation's concern; from a caller's perspective every operation is
//! atomic.

use crate::slot::{SlotAddr, Word};

/// Synchronous access to a flat `SlotAddr -> Word` store.
///
/// Implementations must be total: `get` on an absent slot returns
/// [`Word::zero`], `set` overwrites unconditionally, and neither operation
/// can fail.
pub trait SlotStore {
    /// Reads the word at `slot`, or the zero word if never written.
    fn get(&self, slot: SlotAddr) -> Word;

    /// Writes `value` to `slot`, overwriting any previous word.
    fn set(&mut self, slot: SlotAddr, value: Word);
}

impl<S: SlotStore + ?Sized> SlotStore for &mut S {
    fn get(&self, slot: SlotAddr) -> Word {
        (**self).get(slot)
    }

    fn set(&mut self, slot: SlotAddr, value: Word) {
        (**self).set(slot, value);
    }
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn get(&self, slot: SlotAddr) -> Word {
        (**self).get(slot)
    }

    fn set(&mut self, slot: SlotAddr, value: Word) {
        (**self).set(slot, value);
    }
}
