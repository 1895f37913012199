//! # Flatledger List
//!
//! An intrusive doubly linked list whose nodes live at caller-chosen
//! addresses of a flat [`SlotStore`](flatledger_store::SlotStore). The list
//! itself occupies three reserved bookkeeping slots (size, tail, head); each
//! element keeps its neighbour links in the two slots directly below its own
//! address and its payload at the address itself and upward.
//!
//! ## Slot layout
//!
//! ```text
//! anchors.size   number of linked elements
//! anchors.tail   earliest still-linked element (0 = empty)
//! anchors.head   most recently inserted element (0 = empty)
//!
//! e - 1          previous-element link of element e (0 = none)
//! e - 2          next-element link of element e (0 = none)
//! e, e + 1, ...  payload, opaque to the list
//! ```
//!
//! The caller owns address allocation: payload must be written before
//! linking, and nothing here checks that element addresses stay clear of the
//! anchors or of each other's link slots.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod anchors;
pub mod error;
pub mod list;

pub use anchors::ListAnchors;
pub use error::ListError;
pub use list::{Iter, SlotList};
