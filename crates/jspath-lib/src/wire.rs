//! Framing for paths crossing a process boundary.
//!
//! A message is `[wire version: u8][crc32 of the buffer: u32 LE][buffer]`.
//! The receiver rejects any other wire version before looking at the
//! buffer, checks the checksum, then verifies the buffer itself.

use jspath_core::Limits;

use crate::{Error, JsonPath, Result};

pub const WIRE_VERSION: u8 = 1;

/// Version byte plus checksum.
pub const FRAME_HEADER_SIZE: usize = 5;

pub fn send(path: &JsonPath) -> Vec<u8> {
    let buffer = path.as_bytes();
    let mut out = Vec::with_capacity(FRAME_HEADER_SIZE + buffer.len());
    out.push(WIRE_VERSION);
    out.extend_from_slice(&path.fingerprint().to_le_bytes());
    out.extend_from_slice(buffer);
    tracing::debug!(len = out.len(), "framed jsonpath");
    out
}

pub fn recv(message: &[u8]) -> Result<JsonPath> {
    recv_with_limits(message, &Limits::default())
}

pub fn recv_with_limits(message: &[u8], limits: &Limits) -> Result<JsonPath> {
    let (&version, rest) = message.split_first().ok_or(Error::WireTooShort(0))?;
    if version != WIRE_VERSION {
        return Err(Error::WireVersion(version));
    }
    if message.len() < FRAME_HEADER_SIZE {
        return Err(Error::WireTooShort(message.len()));
    }
    let (checksum, buffer) = rest.split_at(4);
    let expected = u32::from_le_bytes([checksum[0], checksum[1], checksum[2], checksum[3]]);
    let actual = crc32fast::hash(buffer);
    if expected != actual {
        tracing::debug!(expected, actual, "jsonpath checksum mismatch");
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    JsonPath::from_bytes_with_limits(buffer, limits)
}
