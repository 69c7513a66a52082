use jspath_core::LimitError;

use super::{HEADER_SIZE, VERSION};

/// Errors from opening or verifying an encoded path.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("buffer too small: {0} bytes (minimum {HEADER_SIZE})")]
    TooShort(usize),

    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u8),

    #[error("unrecognized item type {tag} at {position}")]
    UnknownItemType { position: usize, tag: u8 },

    #[error("corrupt buffer at {position}: {reason}")]
    CorruptFormat {
        position: usize,
        reason: &'static str,
    },

    #[error(transparent)]
    Limit(#[from] LimitError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn corrupt(position: usize, reason: &'static str) -> Self {
        Self::CorruptFormat { position, reason }
    }

    /// True when the bytes themselves are malformed, as opposed to a limit or
    /// I/O failure.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::TooShort(_)
                | Self::UnsupportedVersion(_)
                | Self::UnknownItemType { .. }
                | Self::CorruptFormat { .. }
        )
    }
}
