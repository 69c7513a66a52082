//! 16-byte aligned storage for encoded paths.
//!
//! Offset slots and scalars inside a buffer sit on 4-byte boundaries relative
//! to the buffer start. That only helps if the buffer itself is aligned, and
//! `Vec<u8>` guarantees nothing beyond 1.

use std::ops::Deref;

/// Alignment of the storage start.
pub const ALIGN: usize = 16;

#[repr(C, align(16))]
#[derive(Clone, Copy)]
struct Block([u8; ALIGN]);

/// Immutable byte storage starting at an [`ALIGN`] boundary.
///
/// Backed by `Vec<Block>`; the element alignment of the Vec is what places
/// the first byte on the boundary.
#[derive(Clone)]
pub struct AlignedVec {
    blocks: Vec<Block>,
    len: usize,
}

impl AlignedVec {
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        let mut blocks = vec![Block([0; ALIGN]); bytes.len().div_ceil(ALIGN)];
        for (block, chunk) in blocks.iter_mut().zip(bytes.chunks(ALIGN)) {
            block.0[..chunk.len()].copy_from_slice(chunk);
        }

        Self {
            blocks,
            len: bytes.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        assert!(
            self.len <= self.blocks.len() * ALIGN,
            "AlignedVec length {} exceeds capacity {}",
            self.len,
            self.blocks.len() * ALIGN
        );
        // SAFETY: Block is repr(C) around a byte array, so the Vec buffer is
        // blocks.len() * ALIGN initialized bytes and len never exceeds that.
        unsafe { std::slice::from_raw_parts(self.blocks.as_ptr().cast::<u8>(), self.len) }
    }
}

impl Deref for AlignedVec {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for AlignedVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for AlignedVec {}

impl std::fmt::Debug for AlignedVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedVec")
            .field("len", &self.len)
            .field(
                "aligned",
                &(self.blocks.as_ptr() as usize).is_multiple_of(ALIGN),
            )
            .finish()
    }
}
