//! Verification of untrusted buffers.
//!
//! Buffers produced by the encoder are trusted. Anything read from disk or
//! the wire goes through [`verify`] once; after that, cursor accessors may
//! assume every offset lands on a well-formed item.
//!
//! Checks:
//! - every tag is known and every payload fits in the buffer
//! - every offset is strictly positive and in bounds, so links only point
//!   forward and the walk terminates
//! - every item is referenced at most once, so the items form a tree
//! - mandatory operands are present
//! - text is valid UTF-8 and numerics are not empty
//! - `@` only appears inside a filter and `last` only inside a subscript
//! - constructors only appear when the header enables extensions

use jspath_core::{Descent, Limits};

use super::cursor::{Content, Cursor, SlotRole};
use super::error::FormatError;
use super::item_type::ItemType;

/// Lexical context an item sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scope {
    /// Number of enclosing filters; `@` needs at least one.
    pub filters: u32,
    /// Inside an array subscript, where `last` is allowed.
    pub subscript: bool,
}

impl Scope {
    pub const ROOT: Self = Self {
        filters: 0,
        subscript: false,
    };

    pub fn in_filter(self) -> Self {
        Self {
            filters: self.filters + 1,
            ..self
        }
    }

    pub fn in_subscript(self) -> Self {
        Self {
            subscript: true,
            ..self
        }
    }

    /// Scope of the operand behind `role` of an item of type `owner`.
    pub fn operand(self, owner: ItemType, role: SlotRole) -> Self {
        match (owner, role) {
            (ItemType::Filter, SlotRole::Arg) => self.in_filter(),
            (ItemType::IndexArray, SlotRole::From(_) | SlotRole::To(_)) => self.in_subscript(),
            _ => self,
        }
    }
}

/// Verify the item tree of `payload` (the bytes after the header).
/// `extensions` is the header's extensions flag.
pub fn verify(payload: &[u8], extensions: bool, limits: &Limits) -> Result<(), FormatError> {
    let mut verifier = Verifier {
        base: payload,
        seen: vec![false; payload.len()],
        extensions,
        descent: limits.descent(),
        items: 0,
    };
    verifier.verify_chain(0, Scope::ROOT)?;
    tracing::trace!(items = verifier.items, len = payload.len(), "verified jsonpath");
    Ok(())
}

struct Verifier<'a, 'l> {
    base: &'a [u8],
    seen: Vec<bool>,
    extensions: bool,
    descent: Descent<'l>,
    items: usize,
}

impl<'a> Verifier<'a, '_> {
    fn verify_chain(&mut self, start: usize, scope: Scope) -> Result<(), FormatError> {
        self.descent.enter()?;

        let mut pos = start;
        loop {
            let item = self.visit(pos)?;
            self.check_context(pos, item.item_type(), scope)?;
            for slot in item.child_slots() {
                if slot.offset == 0 {
                    if slot.required {
                        return Err(FormatError::corrupt(pos, "missing required operand"));
                    }
                    continue;
                }
                let child = self.target(pos, slot.offset)?;
                self.verify_chain(child, scope.operand(item.item_type(), slot.role))?;
            }
            match item.next_offset() {
                0 => break,
                offset => pos = self.target(pos, offset)?,
            }
        }

        self.descent.leave();
        Ok(())
    }

    fn visit(&mut self, pos: usize) -> Result<Cursor<'a>, FormatError> {
        let Some(seen) = self.seen.get_mut(pos) else {
            return Err(FormatError::corrupt(pos, "item out of bounds"));
        };
        if std::mem::replace(seen, true) {
            return Err(FormatError::corrupt(pos, "item referenced twice"));
        }
        self.items += 1;

        let item = Cursor::decode(self.base, pos)?;
        match item.content() {
            Content::Text(bytes) => check_utf8(pos, bytes, "string is not valid UTF-8")?,
            Content::Numeric(bytes) => {
                if bytes.is_empty() {
                    return Err(FormatError::corrupt(pos, "empty numeric literal"));
                }
                check_utf8(pos, bytes, "numeric is not valid UTF-8")?;
            }
            Content::LikeRegex { pattern, .. } => {
                check_utf8(pos, pattern, "regex pattern is not valid UTF-8")?;
            }
            _ => {}
        }
        Ok(item)
    }

    fn check_context(&self, pos: usize, ty: ItemType, scope: Scope) -> Result<(), FormatError> {
        let reason = match ty {
            ItemType::Current if scope.filters == 0 => "@ outside a filter",
            ItemType::Last if !scope.subscript => "last outside an array subscript",
            _ if ty.is_extension() && !self.extensions => "constructor without extensions",
            _ => return Ok(()),
        };
        Err(FormatError::corrupt(pos, reason))
    }

    /// Resolve an offset relative to the item at `pos`.
    fn target(&self, pos: usize, offset: u32) -> Result<usize, FormatError> {
        if offset > i32::MAX as u32 {
            return Err(FormatError::corrupt(pos, "negative offset"));
        }
        pos.checked_add(offset as usize)
            .filter(|&target| target < self.base.len())
            .ok_or(FormatError::corrupt(pos, "offset out of bounds"))
    }
}

fn check_utf8(pos: usize, bytes: &[u8], reason: &'static str) -> Result<(), FormatError> {
    std::str::from_utf8(bytes)
        .map(|_| ())
        .map_err(|_| FormatError::corrupt(pos, reason))
}
