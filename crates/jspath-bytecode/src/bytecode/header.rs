//! Buffer header (4 bytes).
//!
//! Layout:
//! - 0: format version
//! - 1: mode flags (see [`flags`])
//! - 2-3: reserved, zero

use super::{HEADER_SIZE, VERSION};

/// Header bit flags.
pub mod flags {
    /// Strict mode. Clear means lax, which is the default.
    pub const STRICT: u8 = 0x01;
    /// Extended constructors were enabled when encoding.
    pub const EXTENSIONS: u8 = 0x02;
}

/// First [`HEADER_SIZE`] bytes of an encoded path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(4))]
pub struct Header {
    pub version: u8,
    pub flags: u8,
    pub _reserved: u16,
}

const _: () = assert!(std::mem::size_of::<Header>() == HEADER_SIZE);

impl Default for Header {
    fn default() -> Self {
        Self {
            version: VERSION,
            flags: 0,
            _reserved: 0,
        }
    }
}

impl Header {
    pub fn new(lax: bool, extensions: bool) -> Self {
        let mut header = Self::default();
        header.set_lax(lax);
        header.set_extensions(extensions);
        header
    }

    /// Decode the header from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= HEADER_SIZE, "header too short");

        Self {
            version: bytes[0],
            flags: bytes[1],
            _reserved: u16::from_le_bytes([bytes[2], bytes[3]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let [r0, r1] = self._reserved.to_le_bytes();
        [self.version, self.flags, r0, r1]
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }

    pub fn is_lax(&self) -> bool {
        self.flags & flags::STRICT == 0
    }

    pub fn set_lax(&mut self, lax: bool) {
        if lax {
            self.flags &= !flags::STRICT;
        } else {
            self.flags |= flags::STRICT;
        }
    }

    pub fn has_extensions(&self) -> bool {
        self.flags & flags::EXTENSIONS != 0
    }

    pub fn set_extensions(&mut self, enabled: bool) {
        if enabled {
            self.flags |= flags::EXTENSIONS;
        } else {
            self.flags &= !flags::EXTENSIONS;
        }
    }
}
