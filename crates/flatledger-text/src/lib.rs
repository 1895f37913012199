//! # Flatledger Text
//!
//! Validation of fixed-width, zero-padded labels: 32-byte buffers whose
//! logical content is left-aligned alphanumeric text and whose remainder is
//! zero-filled. The classifier accepts either plain ASCII alphanumerics or
//! an extended set including the Latin-1 letter ranges.
//!
//! Everything here is a pure predicate; rejection is a `false`, never an
//! error.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod label;

pub use classify::{is_alphanumeric, is_blank, is_extended_alphanumeric};
pub use label::{pad_label, Charset, LabelError, LabelRules, LABEL_CAPACITY};
