//! # Slot Value Objects
//!
//! Immutable primitives for addressing the flat store. A slot address and a
//! stored word are both 256 bits wide; an address read out of a slot can be
//! used as an address again, which is exactly how intrusive structures keep
//! their links in storage.

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for 256-bit arithmetic
pub use primitive_types::U256;

/// A raw 256-bit word held in a single slot.
pub type Word = U256;

// =============================================================================
// SLOT ADDRESS (256 bits)
// =============================================================================

/// A 256-bit address of a single slot in the flat store.
///
/// The zero address doubles as the null link: intrusive structures store
/// `SlotAddr::ZERO` to mean "no neighbour", so real elements must live at
/// non-zero addresses.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotAddr(pub U256);

impl SlotAddr {
    /// The zero address (null link sentinel).
    pub const ZERO: Self = Self(U256::zero());

    /// Creates a slot address from a 256-bit word.
    #[must_use]
    pub const fn new(word: U256) -> Self {
        Self(word)
    }

    /// Creates a slot address from a small integer.
    #[must_use]
    pub fn from_low(value: u64) -> Self {
        Self(U256::from(value))
    }

    /// Returns the address as a raw word, e.g. for storing it in a slot.
    #[must_use]
    pub const fn to_word(self) -> Word {
        self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The slot holding this element's previous-element link.
    ///
    /// Fixed layout: the link lives at `addr - 1`. Arithmetic wraps modulo
    /// 2^256, matching the word width of the store.
    #[must_use]
    pub fn prev_link(self) -> Self {
        Self(self.0.overflowing_sub(U256::one()).0)
    }

    /// The slot holding this element's next-element link.
    ///
    /// Fixed layout: the link lives at `addr - 2`.
    #[must_use]
    pub fn next_link(self) -> Self {
        Self(self.0.overflowing_sub(U256::from(2u64)).0)
    }
}

impl fmt::Debug for SlotAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotAddr(0x{:x})", self.0)
    }
}

impl fmt::Display for SlotAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl From<U256> for SlotAddr {
    fn from(word: U256) -> Self {
        Self(word)
    }
}

impl From<SlotAddr> for U256 {
    fn from(addr: SlotAddr) -> Self {
        addr.0
    }
}

impl From<u64> for SlotAddr {
    fn from(value: u64) -> Self {
        Self::from_low(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
