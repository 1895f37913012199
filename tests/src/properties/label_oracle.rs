//! The validator against an independent oracle: a valid label is an
//! accepted prefix of logical length `L` with `min <= L <= max` and nothing
//! but blanks from `L` to the end of the buffer.

use flatledger_text::{pad_label, Charset, LabelRules, LABEL_CAPACITY};
use proptest::prelude::*;

/// Direct restatement of the rules, structured differently from the
/// implementation's three-phase pass.
fn oracle(buffer: &[u8; LABEL_CAPACITY], min_len: usize, max_len: usize, charset: Charset) -> bool {
    let logical_len = buffer[..max_len]
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(max_len);

    logical_len >= min_len
        && buffer[..logical_len].iter().all(|&byte| charset.accepts(byte))
        && buffer[logical_len..].iter().all(|&byte| byte == 0)
}

/// Bytes weighted towards the interesting classes: blanks, ASCII content,
/// Latin-1 letters, the excluded signs, and plain junk.
fn label_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        3 => Just(0u8),
        4 => proptest::sample::select(vec![
            b'0', b'9', b'A', b'Z', b'a', b'z', b'm', b'5',
        ]),
        2 => proptest::sample::select(vec![
            0xC0u8, 0xD6, 0xD8, 0xF6, 0xF8, 0xFF,
        ]),
        1 => proptest::sample::select(vec![0xD7u8, 0xF7, b'$', b' ', b'-', 0xBF]),
        1 => any::<u8>(),
    ]
}

fn bounds() -> impl Strategy<Value = (usize, usize)> {
    (0..=LABEL_CAPACITY).prop_flat_map(|max_len| (0..=max_len).prop_map(move |min_len| (min_len, max_len)))
}

fn charset() -> impl Strategy<Value = Charset> {
    prop_oneof![Just(Charset::Ascii), Just(Charset::Latin1)]
}

proptest! {
    #[test]
    fn validator_agrees_with_oracle(
        bytes in proptest::collection::vec(label_byte(), LABEL_CAPACITY),
        (min_len, max_len) in bounds(),
        charset in charset(),
    ) {
        let mut buffer = [0u8; LABEL_CAPACITY];
        buffer.copy_from_slice(&bytes);

        let rules = LabelRules::new(min_len, max_len, charset).unwrap();
        prop_assert_eq!(
            rules.is_valid(&buffer),
            oracle(&buffer, min_len, max_len, charset),
            "disagreement for {:?} min={} max={} charset={:?}",
            buffer, min_len, max_len, charset
        );
    }

    #[test]
    fn well_formed_labels_always_validate(
        content in proptest::collection::vec(
            proptest::sample::select(b"abcXYZ0189".to_vec()),
            1..=LABEL_CAPACITY,
        ),
    ) {
        let buffer = pad_label(&content).unwrap();
        let rules = LabelRules::new(content.len(), LABEL_CAPACITY, Charset::Ascii).unwrap();
        prop_assert!(rules.is_valid(&buffer));

        // Loosening the minimum must never flip acceptance.
        let relaxed = LabelRules::new(0, LABEL_CAPACITY, Charset::Ascii).unwrap();
        prop_assert!(relaxed.is_valid(&buffer));
    }
}
