//! Append-only output buffer with aligned offset slots.
//!
//! The header is reserved up front and filled in by [`ItemWriter::finish`].
//! Positions handed out and accepted here are relative to the payload start,
//! which is also what cursors use.

use jspath_bytecode::{HEADER_SIZE, Header, ITEM_ALIGN, OFFSET_SIZE, align_to_item};

/// Largest buffer whose offsets still fit a signed 32-bit slot.
pub const MAX_LEN: usize = i32::MAX as usize;

/// A reserved, not yet patched offset slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot(usize);

impl Slot {
    pub fn position(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct ItemWriter {
    bytes: Vec<u8>,
}

impl Default for ItemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemWriter {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; HEADER_SIZE],
        }
    }

    /// Payload-relative position of the next byte.
    pub fn position(&self) -> usize {
        self.bytes.len() - HEADER_SIZE
    }

    /// Total size, header included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position() == 0
    }

    /// Pad with zeros up to the next item alignment boundary.
    pub fn align(&mut self) {
        self.bytes.resize(align_to_item(self.bytes.len()), 0);
    }

    /// Write a zero offset slot to patch later.
    pub fn reserve_offset(&mut self) -> Slot {
        debug_assert!(self.bytes.len().is_multiple_of(ITEM_ALIGN), "unaligned slot");
        let slot = Slot(self.position());
        self.bytes.extend_from_slice(&[0; OFFSET_SIZE]);
        slot
    }

    /// Store `child - node` into `slot`. Both are payload positions and the
    /// child always follows its owner.
    pub fn patch_offset(&mut self, slot: Slot, child: usize, node: usize) {
        assert!(child > node, "child {child} does not follow owner {node}");
        let offset = child - node;
        assert!(offset <= MAX_LEN, "offset {offset} exceeds slot range");
        let at = HEADER_SIZE + slot.0;
        self.bytes[at..at + OFFSET_SIZE].copy_from_slice(&(offset as u32).to_le_bytes());
    }

    pub fn push_u8(&mut self, v: u8) {
        self.bytes.push(v);
    }

    pub fn push_u32(&mut self, v: u32) {
        debug_assert!(self.bytes.len().is_multiple_of(ITEM_ALIGN), "unaligned u32");
        self.bytes.extend_from_slice(&v.to_le_bytes());
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Length-prefixed, NUL-terminated text.
    pub fn push_text(&mut self, text: &str) {
        self.push_u32(text.len() as u32);
        self.push_bytes(text.as_bytes());
        self.push_u8(0);
    }

    /// Fill in the header and return the complete buffer.
    pub fn finish(mut self, header: Header) -> Vec<u8> {
        self.bytes[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
        self.bytes
    }
}
