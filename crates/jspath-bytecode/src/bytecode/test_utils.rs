//! Hand-assembled buffers for format tests.

use super::{HEADER_SIZE, Header, ItemType, align_to_item};

/// Payload builder that writes raw layout without any checks.
#[derive(Default)]
pub struct Assembler {
    bytes: Vec<u8>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pos(&self) -> usize {
        self.bytes.len()
    }

    /// Tag byte, padding, and a zeroed next slot. Returns the item position.
    pub fn item(&mut self, item_type: ItemType) -> usize {
        let pos = self.pos();
        self.bytes.push(item_type as u8);
        self.bytes.resize(align_to_item(self.bytes.len()), 0);
        self.u32(0);
        pos
    }

    /// Returns the position the value was written at.
    pub fn u32(&mut self, v: u32) -> usize {
        let at = self.pos();
        self.bytes.extend_from_slice(&v.to_le_bytes());
        at
    }

    pub fn raw(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn text(&mut self, s: &str) {
        self.u32(s.len() as u32);
        self.raw(s.as_bytes());
        self.bytes.push(0);
    }

    pub fn patch(&mut self, at: usize, v: u32) {
        self.bytes[at..at + 4].copy_from_slice(&v.to_le_bytes());
    }

    /// Point the next slot of the item at `item` to `target`.
    pub fn link_next(&mut self, item: usize, target: usize) {
        self.patch(align_to_item(item + 1), (target - item) as u32);
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes
    }

    pub fn finish(self, header: Header) -> Vec<u8> {
        let mut out = header.to_bytes().to_vec();
        debug_assert_eq!(out.len(), HEADER_SIZE);
        out.extend(self.bytes);
        out
    }
}

/// `$.a[*].type()` in lax mode.
pub fn chain_buffer() -> Vec<u8> {
    let mut a = Assembler::new();
    let root = a.item(ItemType::Root);
    let key = a.item(ItemType::Key);
    a.text("a");
    let any = a.item(ItemType::AnyArray);
    let ty = a.item(ItemType::Type);
    a.link_next(root, key);
    a.link_next(key, any);
    a.link_next(any, ty);
    a.finish(Header::default())
}

/// `$.a + 1` as a bare binary item: key on the left, numeric on the right.
pub fn add_buffer() -> Vec<u8> {
    let mut a = Assembler::new();
    let add = a.item(ItemType::Add);
    let left = a.u32(0);
    let right = a.u32(0);
    let key = a.item(ItemType::Key);
    a.text("a");
    let num = a.item(ItemType::Numeric);
    a.u32(1);
    a.raw(b"1");
    a.patch(left, (key - add) as u32);
    a.patch(right, (num - add) as u32);
    a.finish(Header::default())
}
