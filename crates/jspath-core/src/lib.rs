#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the jspath crates.
//!
//! - [`ast`]: the path expression tree produced by a parser and consumed by
//!   the encoder.
//! - [`limits`]: recursion depth and cancellation checks for tree walks.
//! - [`Colors`]: ANSI palette for human-readable dumps.

pub mod ast;
mod colors;
mod escape;
pub mod limits;

pub use ast::{
    AnyBounds, BinaryOp, Expr, ExprKind, Method, Numeric, ObjectField, ParsedPath, RegexFlags,
    Subscript, UnaryOp,
};
pub use colors::Colors;
pub use escape::escape_json;
pub use limits::{CancelToken, DEFAULT_RECURSION_LIMIT, Descent, LimitError, Limits};
