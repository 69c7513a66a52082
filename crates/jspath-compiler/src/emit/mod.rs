//! Encoding of parsed expressions.

mod emitter;
mod error;
mod regex;
mod writer;

#[cfg(test)]
mod regex_tests;

pub use emitter::{emit, emit_with_limits};
pub use error::EmitError;
pub use writer::{ItemWriter, Slot};
