//! Encoded jsonpath layout.
//!
//! A buffer is a fixed [`Header`] followed by the items of one expression
//! tree in pre-order. Every item starts with a one-byte [`ItemType`] tag,
//! padding to [`ITEM_ALIGN`], and a 4-byte offset to the next item of its
//! accessor chain. Child references are offsets relative to the start of the
//! referring item; 0 means absent.

mod aligned_vec;
mod constants;
mod cursor;
mod dump;
mod error;
mod header;
mod item_type;
mod path;
mod verify;

pub use aligned_vec::{ALIGN, AlignedVec};
pub use constants::{HEADER_SIZE, ITEM_ALIGN, OFFSET_SIZE, VERSION, align_to_item};
pub use cursor::{ChildSlot, Content, Cursor, SlotRole, Subscript};
pub use dump::dump;
pub use error::FormatError;
pub use header::{Header, flags};
pub use item_type::{ItemType, Shape};
pub use path::{EncodedPath, open_root};
pub use verify::{Scope, verify};

#[cfg(test)]
mod aligned_vec_tests;
#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod item_type_tests;
#[cfg(test)]
mod test_utils;
