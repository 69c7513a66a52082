//! jsonpath encoder.
//!
//! Flattens a [`ParsedPath`](jspath_core::ParsedPath) tree into the binary
//! layout defined by `jspath-bytecode`:
//! - `emit::writer` - aligned append buffer with offset slot patching
//! - `emit::emitter` - pre-order flattening and context checks
//! - `emit::regex` - `like_regex` pattern validation

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;

pub use emit::{EmitError, ItemWriter, Slot, emit, emit_with_limits};
