use jspath_core::{AnyBounds, RegexFlags};

use super::test_utils::{Assembler, add_buffer, chain_buffer};
use super::*;

fn payload(bytes: &[u8]) -> &[u8] {
    &bytes[HEADER_SIZE..]
}

#[test]
fn decode_accessor_chain() {
    let bytes = chain_buffer();
    let root = Cursor::decode(payload(&bytes), 0).unwrap();

    let mut types = Vec::new();
    let mut positions = Vec::new();
    let mut item = Some(root);
    while let Some(c) = item {
        types.push(c.item_type());
        positions.push(c.position());
        item = c.next_item();
    }

    assert_eq!(
        types,
        [
            ItemType::Root,
            ItemType::Key,
            ItemType::AnyArray,
            ItemType::Type
        ]
    );
    assert_eq!(positions, [0, 8, 22, 28]);
}

#[test]
fn key_text_and_offsets() {
    let bytes = chain_buffer();
    let root = Cursor::decode(payload(&bytes), 0).unwrap();
    let key = root.next_item().unwrap();

    assert_eq!(root.next_offset(), 8);
    assert_eq!(key.text(), "a");
    assert_eq!(key.text_bytes(), b"a");
    assert_eq!(key.next_offset(), 14);
    assert!(!key.next_item().unwrap().next_item().unwrap().has_next());
}

#[test]
fn binary_operands() {
    let bytes = add_buffer();
    let add = Cursor::decode(payload(&bytes), 0).unwrap();

    assert_eq!(add.item_type(), ItemType::Add);
    assert_eq!(add.content(), Content::Binary { left: 16, right: 30 });
    assert_eq!(add.left().text(), "a");
    assert_eq!(add.right().numeric_text(), "1");
    assert!(!add.has_next());
}

#[test]
fn child_slots_of_binary() {
    let bytes = add_buffer();
    let add = Cursor::decode(payload(&bytes), 0).unwrap();
    let slots = add.child_slots();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].role, SlotRole::Left);
    assert_eq!(slots[0].offset, 16);
    assert!(slots[1].required);
    assert_eq!(add.follow(slots[1]).unwrap().item_type(), ItemType::Numeric);
}

#[test]
fn index_array_with_open_range() {
    // [1, 2 to 3]
    let mut a = Assembler::new();
    let idx = a.item(ItemType::IndexArray);
    a.u32(2);
    let slots: Vec<usize> = (0..4).map(|_| a.u32(0)).collect();
    let numeric = |a: &mut Assembler, text: &str| {
        let pos = a.item(ItemType::Numeric);
        a.u32(text.len() as u32);
        a.raw(text.as_bytes());
        pos
    };
    let one = numeric(&mut a, "1");
    let two = numeric(&mut a, "2");
    let three = numeric(&mut a, "3");
    a.patch(slots[0], (one - idx) as u32);
    a.patch(slots[2], (two - idx) as u32);
    a.patch(slots[3], (three - idx) as u32);

    let cursor = Cursor::decode(a.payload(), idx).unwrap();
    assert_eq!(cursor.element_count(), 2);

    let first = cursor.subscript(0);
    assert_eq!(first.from.numeric_text(), "1");
    assert!(first.to.is_none());

    let second = cursor.subscript(1);
    assert_eq!(second.from.numeric_text(), "2");
    assert_eq!(second.to.unwrap().numeric_text(), "3");

    let roles: Vec<String> = cursor
        .child_slots()
        .iter()
        .map(|s| s.role.to_string())
        .collect();
    assert_eq!(roles, ["from0", "to0", "from1", "to1"]);
}

#[test]
fn like_regex_payload() {
    let mut a = Assembler::new();
    let item = a.item(ItemType::LikeRegex);
    a.u32((RegexFlags::ICASE | RegexFlags::MLINE).bits());
    let expr = a.u32(0);
    a.text("^ab");
    let current = a.item(ItemType::Current);
    a.patch(expr, (current - item) as u32);

    let cursor = Cursor::decode(a.payload(), 0).unwrap();
    assert_eq!(cursor.regex_pattern(), "^ab");
    assert_eq!(cursor.regex_flags().letters(), "im");
    assert_eq!(cursor.regex_expr().item_type(), ItemType::Current);
}

#[test]
fn any_bounds_payload() {
    let mut a = Assembler::new();
    a.item(ItemType::Any);
    a.u32(2);
    a.u32(AnyBounds::LAST);

    let cursor = Cursor::decode(a.payload(), 0).unwrap();
    assert_eq!(
        cursor.any_bounds(),
        AnyBounds {
            first: 2,
            last: AnyBounds::LAST
        }
    );
}

#[test]
fn datetime_without_template() {
    let mut a = Assembler::new();
    a.item(ItemType::Datetime);
    a.u32(0);

    let cursor = Cursor::decode(a.payload(), 0).unwrap();
    assert!(cursor.arg().is_none());
}

#[test]
fn unknown_tag_is_reported() {
    let err = Cursor::decode(&[0xEE, 0, 0, 0, 0, 0, 0, 0], 0).unwrap_err();
    assert_eq!(err.to_string(), "unrecognized item type 238 at 0");
}

#[test]
fn truncated_payload_is_reported() {
    let mut a = Assembler::new();
    a.item(ItemType::Key);
    a.u32(10);
    a.raw(b"abc");

    let err = Cursor::decode(a.payload(), 0).unwrap_err();
    assert_eq!(err.to_string(), "corrupt buffer at 12: truncated string");
}

#[test]
fn missing_terminator_is_reported() {
    let mut a = Assembler::new();
    a.item(ItemType::String);
    a.u32(1);
    a.raw(b"xy");

    let err = Cursor::decode(a.payload(), 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "corrupt buffer at 13: missing string terminator"
    );
}

#[test]
fn invalid_bool_is_reported() {
    let mut a = Assembler::new();
    a.item(ItemType::Bool);
    a.raw(&[7]);

    let err = Cursor::decode(a.payload(), 0).unwrap_err();
    assert!(err.is_corruption());
    assert_eq!(err.to_string(), "corrupt buffer at 8: invalid bool value");
}

#[test]
#[should_panic(expected = "Root item is not a binary operator")]
fn wrong_accessor_panics() {
    let bytes = chain_buffer();
    let root = Cursor::decode(payload(&bytes), 0).unwrap();
    root.left();
}
