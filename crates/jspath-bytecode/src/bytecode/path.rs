//! Owned encoded path.
//!
//! [`EncodedPath`] holds a complete buffer (header plus items) in aligned
//! storage and hands out cursors into it.

use std::path::Path;

use jspath_core::Limits;

use super::aligned_vec::AlignedVec;
use super::cursor::Cursor;
use super::error::FormatError;
use super::header::Header;
use super::verify::verify;
use super::HEADER_SIZE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPath {
    storage: AlignedVec,
    header: Header,
}

impl EncodedPath {
    /// Load and verify an untrusted buffer with default limits.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        Self::from_bytes_with_limits(bytes, &Limits::default())
    }

    pub fn from_bytes_with_limits(bytes: &[u8], limits: &Limits) -> Result<Self, FormatError> {
        let header = read_header(bytes)?;
        if let Err(e) = verify(&bytes[HEADER_SIZE..], header.has_extensions(), limits) {
            tracing::debug!(error = %e, len = bytes.len(), "rejected jsonpath buffer");
            return Err(e);
        }
        Ok(Self {
            storage: AlignedVec::copy_from_slice(bytes),
            header,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Wrap a buffer the encoder just produced, skipping verification in
    /// release builds.
    pub fn from_trusted(bytes: &[u8]) -> Self {
        let header = Header::from_bytes(bytes);
        debug_assert!(header.validate_version(), "encoder wrote a bad version");
        debug_assert!(
            verify(
                &bytes[HEADER_SIZE..],
                header.has_extensions(),
                &Limits::unbounded()
            )
            .is_ok(),
            "encoder produced an invalid buffer"
        );
        Self {
            storage: AlignedVec::copy_from_slice(bytes),
            header,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn is_lax(&self) -> bool {
        self.header.is_lax()
    }

    pub fn has_extensions(&self) -> bool {
        self.header.has_extensions()
    }

    /// Complete buffer, header included.
    pub fn bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Item bytes after the header. Cursor positions are relative to this.
    pub fn payload(&self) -> &[u8] {
        &self.storage[HEADER_SIZE..]
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// First item of the expression.
    pub fn root(&self) -> Cursor<'_> {
        Cursor::at(self.payload(), 0)
    }
}

fn read_header(bytes: &[u8]) -> Result<Header, FormatError> {
    if bytes.len() < HEADER_SIZE {
        return Err(FormatError::TooShort(bytes.len()));
    }
    let header = Header::from_bytes(bytes);
    if !header.validate_version() {
        return Err(FormatError::UnsupportedVersion(header.version));
    }
    Ok(header)
}

/// Check the version of `bytes` and decode its root item.
///
/// Only the root is bounds-checked; run [`verify`] first on untrusted input.
pub fn open_root(bytes: &[u8]) -> Result<Cursor<'_>, FormatError> {
    read_header(bytes)?;
    Cursor::decode(&bytes[HEADER_SIZE..], 0)
}
