//! # Error Types
//!
//! Misuse of the list surfaces as an explicit error instead of the silent
//! chain corruption and size underflow the slot layout would otherwise
//! permit.

use flatledger_store::SlotAddr;
use thiserror::Error;

/// Errors from list mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The zero address is the null link sentinel and cannot be an element.
    #[error("the zero address cannot be linked")]
    NullElement,

    /// Attempted to insert an element that is already linked.
    #[error("element {0} is already linked")]
    AlreadyLinked(SlotAddr),

    /// Attempted to remove an element that is not a member of the list.
    #[error("element {0} is not linked")]
    NotLinked(SlotAddr),
}

// =============================================================================
// TESTS
// =============================================================================
