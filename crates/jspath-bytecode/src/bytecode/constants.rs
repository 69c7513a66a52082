//! Format constants.

/// Current format version, stored in the first header byte.
pub const VERSION: u8 = 1;

/// Size of the fixed header preceding the item payload.
pub const HEADER_SIZE: usize = 4;

/// Alignment of every offset slot and 4-byte scalar.
pub const ITEM_ALIGN: usize = 4;

/// Size of one relative offset slot.
pub const OFFSET_SIZE: usize = 4;

/// Round `n` up to the next item alignment boundary.
#[inline]
pub fn align_to_item(n: usize) -> usize {
    n.next_multiple_of(ITEM_ALIGN)
}

const _: () = assert!(HEADER_SIZE % ITEM_ALIGN == 0);
