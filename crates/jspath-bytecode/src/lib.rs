#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Binary format of encoded jsonpath expressions.
//!
//! This crate contains:
//! - Format definitions (constants, [`Header`], [`ItemType`])
//! - Lazy decoding through [`Cursor`]
//! - Verification of untrusted buffers
//! - A human-readable [`dump`]

pub mod bytecode;

pub use bytecode::{
    ALIGN, AlignedVec, ChildSlot, Content, Cursor, EncodedPath, FormatError, HEADER_SIZE, Header,
    ITEM_ALIGN, ItemType, OFFSET_SIZE, Scope, Shape, SlotRole, Subscript, VERSION, align_to_item,
    dump, flags, open_root, verify,
};
