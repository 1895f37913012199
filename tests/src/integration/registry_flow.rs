//! A miniature name registry built from the primitives: each entry is a
//! validated 32-byte label stored as the payload word of a linked element.

use flatledger_list::{ListAnchors, ListError, SlotList};
use flatledger_store::{InMemorySlotStore, SlotAddr, SlotStore, Word};
use flatledger_text::{pad_label, Charset, LabelRules, LABEL_CAPACITY};
use primitive_types::U256;

/// Entry addresses spaced four slots apart: two link slots below the
/// address, one payload word at it, one spare.
fn entry_addr(index: u64) -> SlotAddr {
    SlotAddr::from_low(0x1000 + index * 4)
}

fn label_word(buffer: &[u8; LABEL_CAPACITY]) -> Word {
    U256::from_big_endian(buffer)
}

/// Registers `name` at `slot`: validate, write payload, link.
fn register(
    list: &mut SlotList<InMemorySlotStore>,
    rules: &LabelRules,
    slot: SlotAddr,
    name: &str,
) -> Result<(), ListError> {
    let buffer = pad_label(name.as_bytes()).expect("name fits a label");
    assert!(rules.is_valid(&buffer), "glue must pre-validate {name:?}");
    list.store_mut().set(slot, label_word(&buffer));
    list.insert(slot)
}

#[test]
fn test_register_validate_link_deregister() {
    super::init_tracing();

    let rules = LabelRules::new(3, 16, Charset::Ascii).unwrap();
    let mut list = SlotList::with_default_anchors(InMemorySlotStore::new());

    register(&mut list, &rules, entry_addr(0), "alice").unwrap();
    register(&mut list, &rules, entry_addr(1), "bob42").unwrap();
    register(&mut list, &rules, entry_addr(2), "carol").unwrap();

    assert_eq!(list.size(), Word::from(3));
    assert_eq!(list.head(), entry_addr(2));
    assert_eq!(list.tail(), entry_addr(0));

    // Payloads are readable through the same store the list lives in.
    let expected = label_word(&pad_label(b"bob42").unwrap());
    assert_eq!(list.store().get(entry_addr(1)), expected);

    // Deregistering unlinks but keeps the payload word in place.
    list.remove(entry_addr(1)).unwrap();
    assert_eq!(list.size(), Word::from(2));
    assert!(!list.contains(entry_addr(1)));
    assert_eq!(list.store().get(entry_addr(1)), expected);

    let walk: Vec<SlotAddr> = list.iter().collect();
    assert_eq!(walk, vec![entry_addr(2), entry_addr(0)]);
}

#[test]
fn test_invalid_names_never_reach_the_list() {
    let rules = LabelRules::new(3, 16, Charset::Ascii).unwrap();

    for name in ["ab", "has space", "ca$h", "waaaaaaaaaaaaaaaaytoolong"] {
        let rejected = match pad_label(name.as_bytes()) {
            Some(buffer) => !rules.is_valid(&buffer),
            None => true,
        };
        assert!(rejected, "{name:?} should be rejected before linking");
    }
}

#[test]
fn test_registry_survives_store_snapshot() {
    let rules = LabelRules::new(3, 16, Charset::Latin1).unwrap();
    let mut list = SlotList::with_default_anchors(InMemorySlotStore::new());

    register(&mut list, &rules, entry_addr(0), "alice").unwrap();
    register(&mut list, &rules, entry_addr(1), "bob42").unwrap();

    // Snapshot the raw store and resume the list on the copy.
    let snapshot = list.store().clone();
    let resumed = SlotList::with_default_anchors(snapshot);

    assert_eq!(resumed.size(), Word::from(2));
    assert_eq!(resumed.head(), entry_addr(1));
    assert_eq!(resumed.tail(), entry_addr(0));
    assert!(resumed.contains(entry_addr(0)));
}

#[test]
fn test_two_registries_in_one_store() {
    let rules = LabelRules::new(1, 8, Charset::Ascii).unwrap();
    let mut store = InMemorySlotStore::new();
    let admins = ListAnchors::new(
        SlotAddr::from_low(0x21),
        SlotAddr::from_low(0x22),
        SlotAddr::from_low(0x23),
    );

    {
        let mut users = SlotList::with_default_anchors(&mut store);
        register_borrowed(&mut users, &rules, entry_addr(0), "alice");
        register_borrowed(&mut users, &rules, entry_addr(1), "bob");
    }
    {
        let mut list = SlotList::new(&mut store, admins);
        register_borrowed(&mut list, &rules, entry_addr(10), "root");
    }

    let users = SlotList::with_default_anchors(&mut store);
    assert_eq!(users.size(), Word::from(2));
    let admin_list = SlotList::new(users.into_store(), admins);
    assert_eq!(admin_list.size(), Word::from(1));
    assert_eq!(admin_list.head(), entry_addr(10));
}

fn register_borrowed(
    list: &mut SlotList<&mut InMemorySlotStore>,
    rules: &LabelRules,
    slot: SlotAddr,
    name: &str,
) {
    let buffer = pad_label(name.as_bytes()).unwrap();
    assert!(rules.is_valid(&buffer));
    list.store_mut().set(slot, label_word(&buffer));
    list.insert(slot).unwrap();
}
