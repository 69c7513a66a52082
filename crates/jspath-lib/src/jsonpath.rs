use std::fmt;
use std::path::Path;

use jspath_bytecode::{Cursor, EncodedPath};
use jspath_compiler::{emit, emit_with_limits};
use jspath_core::{Limits, ParsedPath};

use crate::Result;
use crate::bindings::Bindings;
use crate::mutability;
use crate::printer;

/// An encoded jsonpath expression.
///
/// The value owns one verified buffer. Everything else (printing,
/// classification, evaluator access through [`root`](Self::root)) reads that
/// buffer in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonPath {
    encoded: EncodedPath,
}

impl JsonPath {
    /// Encode a parsed expression.
    pub fn encode(parsed: &ParsedPath) -> Result<Self> {
        Ok(Self {
            encoded: emit(parsed)?,
        })
    }

    pub fn encode_with_limits(parsed: &ParsedPath, limits: &Limits) -> Result<Self> {
        Ok(Self {
            encoded: emit_with_limits(parsed, limits)?,
        })
    }

    /// Load an untrusted buffer, verifying it first.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            encoded: EncodedPath::from_bytes(bytes)?,
        })
    }

    pub fn from_bytes_with_limits(bytes: &[u8], limits: &Limits) -> Result<Self> {
        Ok(Self {
            encoded: EncodedPath::from_bytes_with_limits(bytes, limits)?,
        })
    }

    /// Read and verify an encoded file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            encoded: EncodedPath::from_path(path)?,
        })
    }

    pub fn from_encoded(encoded: EncodedPath) -> Self {
        Self { encoded }
    }

    pub fn encoded(&self) -> &EncodedPath {
        &self.encoded
    }

    /// Complete buffer, header included.
    pub fn as_bytes(&self) -> &[u8] {
        self.encoded.bytes()
    }

    pub fn root(&self) -> Cursor<'_> {
        self.encoded.root()
    }

    pub fn is_lax(&self) -> bool {
        self.encoded.is_lax()
    }

    pub fn has_extensions(&self) -> bool {
        self.encoded.has_extensions()
    }

    /// Canonical text, same as `to_string()`.
    pub fn to_text(&self) -> String {
        printer::print(&self.encoded)
    }

    pub fn to_text_with_limits(&self, limits: &Limits) -> Result<String> {
        Ok(printer::print_with_limits(&self.encoded, limits)?)
    }

    /// Whether results may depend on the session time zone, given the types
    /// of the variables passed alongside the path.
    pub fn is_mutable(&self, bindings: &Bindings) -> bool {
        mutability::is_mutable(self.root(), bindings, self.is_lax())
    }

    pub fn is_mutable_with_limits(&self, bindings: &Bindings, limits: &Limits) -> Result<bool> {
        Ok(mutability::is_mutable_with_limits(
            self.root(),
            bindings,
            self.is_lax(),
            limits,
        )?)
    }

    /// CRC32 of the encoded buffer. Equal paths have equal fingerprints.
    pub fn fingerprint(&self) -> u32 {
        crc32fast::hash(self.as_bytes())
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<EncodedPath> for JsonPath {
    fn from(encoded: EncodedPath) -> Self {
        Self::from_encoded(encoded)
    }
}
