//! # Flatledger Store
//!
//! A flat, persistent, word-addressed store: a mapping from a 256-bit slot
//! address to a 256-bit word. Reading a slot that was never written returns
//! the zero word; writing overwrites unconditionally. All operations are
//! synchronous and total — there is no failure channel.
//!
//! The crate provides the [`SlotStore`] access trait, the [`SlotAddr`] and
//! [`Word`] value objects, and an in-memory implementation for tests and
//! single-process deployments.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod memory;
pub mod slot;
pub mod store;

pub use memory::InMemorySlotStore;
pub use slot::{SlotAddr, Word};
pub use store::SlotStore;
