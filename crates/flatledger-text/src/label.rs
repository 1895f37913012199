//! # Label Validation
//!
//! A label is a 32-byte buffer: left-aligned content, zero-filled
//! remainder. [`LabelRules`] is a pure predicate over such a buffer given a
//! minimum and maximum logical length and a classification mode. The rules
//! enforce that padding, once started, runs unbroken to the end of the
//! buffer — no holes of blanks followed by more content.

use crate::classify::{is_alphanumeric, is_blank, is_extended_alphanumeric};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed capacity of a label buffer in bytes.
pub const LABEL_CAPACITY: usize = 32;

// =============================================================================
// CHARSET
// =============================================================================

/// Which byte classifier content bytes are checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    /// ASCII digits and letters only.
    Ascii,
    /// ASCII plus the Latin-1 supplement letters.
    Latin1,
}

impl Charset {
    /// Returns true if `byte` is acceptable content under this charset.
    #[must_use]
    pub const fn accepts(self, byte: u8) -> bool {
        match self {
            Self::Ascii => is_alphanumeric(byte),
            Self::Latin1 => is_extended_alphanumeric(byte),
        }
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Errors from constructing label rules.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    /// The maximum length does not fit in a label buffer.
    #[error("maximum length {max_len} exceeds label capacity {LABEL_CAPACITY}")]
    CapacityExceeded {
        /// The rejected maximum length.
        max_len: usize,
    },

    /// The minimum length exceeds the maximum length.
    #[error("minimum length {min_len} exceeds maximum length {max_len}")]
    InvertedBounds {
        /// The rejected minimum length.
        min_len: usize,
        /// The maximum length it was checked against.
        max_len: usize,
    },
}

/// Validation rules for one class of label.
///
/// Construction checks the bounds once, so validation itself is an
/// infallible single pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRules {
    min_len: usize,
    max_len: usize,
    charset: Charset,
}

impl LabelRules {
    /// Creates rules requiring between `min_len` and `max_len` content
    /// bytes under `charset`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if `max_len > LABEL_CAPACITY` and
    /// `InvertedBounds` if `min_len > max_len`.
    pub const fn new(
        min_len: usize,
        max_len: usize,
        charset: Charset,
    ) -> Result<Self, LabelError> {
        if max_len > LABEL_CAPACITY {
            return Err(LabelError::CapacityExceeded { max_len });
        }
        if min_len > max_len {
            return Err(LabelError::InvertedBounds { min_len, max_len });
        }
        Ok(Self {
            min_len,
            max_len,
            charset,
        })
    }

    /// The minimum number of content bytes.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// The maximum number of content bytes.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// The classification mode.
    #[must_use]
    pub const fn charset(&self) -> Charset {
        self.charset
    }

    /// Validates a label buffer against these rules.
    ///
    /// Single pass over the buffer, three phases:
    ///
    /// 1. bytes `[0, min_len)` must satisfy the charset;
    /// 2. bytes `[min_len, max_len)` must satisfy the charset or be blank,
    ///    and after the first blank every byte up to `max_len` must also be
    ///    blank;
    /// 3. bytes `[max_len, LABEL_CAPACITY)` must all be blank.
    #[must_use]
    pub fn is_valid(&self, buffer: &[u8; LABEL_CAPACITY]) -> bool {
        for &byte in &buffer[..self.min_len] {
            if !self.charset.accepts(byte) {
                return false;
            }
        }

        let mut padding = false;
        for &byte in &buffer[self.min_len..self.max_len] {
            if padding {
                if !is_blank(byte) {
                    return false;
                }
            } else if is_blank(byte) {
                padding = true;
            } else if !self.charset.accepts(byte) {
                return false;
            }
        }

        for &byte in &buffer[self.max_len..] {
            if !is_blank(byte) {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Right-pads `content` with zero bytes to [`LABEL_CAPACITY`].
///
/// Returns `None` if the content does not fit. Padding alone does not make
/// a buffer valid — run the result through [`LabelRules::is_valid`].
#[must_use]
pub fn pad_label(content: &[u8]) -> Option<[u8; LABEL_CAPACITY]> {
    if content.len() > LABEL_CAPACITY {
        return None;
    }
    let mut buffer = [0u8; LABEL_CAPACITY];
    buffer[..content.len()].copy_from_slice(content);
    Some(buffer)
}

// =============================================================================
// TESTS
// =============================================================================
