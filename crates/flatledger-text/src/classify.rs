//! # Byte Classifiers
//!
//! Pure, total predicates over single bytes. The extended set adds the
//! Latin-1 supplement letters while deliberately skipping 0xD7 and 0xF7,
//! the multiplication and division signs wedged into those ranges.

/// Returns true for ASCII digits and letters: `0-9`, `A-Z`, `a-z`.
#[must_use]
pub const fn is_alphanumeric(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

/// Returns true for [`is_alphanumeric`] bytes plus the Latin-1 letters
/// `0xC0-0xD6`, `0xD8-0xF6` and `0xF8-0xFF`.
#[must_use]
pub const fn is_extended_alphanumeric(byte: u8) -> bool {
    is_alphanumeric(byte) || matches!(byte, 0xC0..=0xD6 | 0xD8..=0xF6 | 0xF8..=0xFF)
}

/// Returns true for the zero byte, the padding value of fixed-width labels.
#[must_use]
pub const fn is_blank(byte: u8) -> bool {
    byte == 0
}

// =============================================================================
// TESTS
// =============================================================================
