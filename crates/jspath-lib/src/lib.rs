//! jspath: binary jsonpath expressions.
//!
//! A [`JsonPath`] is built from a parsed expression tree, stored as a
//! compact relocatable buffer, and read back lazily without deserializing.
//!
//! # Example
//!
//! ```
//! use jspath_core::{Expr, Method, ParsedPath};
//! use jspath_lib::{Bindings, JsonPath};
//!
//! let parsed = ParsedPath::lax(
//!     Expr::root()
//!         .then(Expr::key("a"))
//!         .then(Expr::any_array())
//!         .then(Expr::method(Method::Type)),
//! );
//!
//! let path = JsonPath::encode(&parsed).expect("valid path");
//! assert_eq!(path.to_string(), r#"$."a"[*].type()"#);
//! assert!(!path.is_mutable(&Bindings::new()));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bindings;
pub mod datetime;
mod jsonpath;
pub mod mutability;
pub mod printer;
pub mod wire;

pub use bindings::{Bindings, VarType};
pub use jsonpath::JsonPath;
pub use mutability::{DatetimeStatus, is_mutable, is_mutable_with_limits};
pub use printer::{print, print_item, print_with_limits};

use jspath_bytecode::FormatError;
use jspath_compiler::EmitError;
use jspath_core::LimitError;

/// Errors from encoding, loading or unframing a path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression cannot be encoded (disallowed construct, bad regex,
    /// resource limit).
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// An untrusted buffer failed verification.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Printing or classification hit the recursion limit or was cancelled.
    #[error(transparent)]
    Limit(#[from] LimitError),

    #[error("unsupported wire version {0}")]
    WireVersion(u8),

    #[error("wire message too short: {0} bytes")]
    WireTooShort(usize),

    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

/// Result type for path operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod mutability_tests;
