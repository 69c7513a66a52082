//! Lazy item decoding.
//!
//! A [`Cursor`] decodes one item: its tag, its next-offset, and the fixed
//! part of its payload. Operands are decoded only when asked for, by adding
//! their relative offset to the item's own position.
//!
//! Accessors assume a verified buffer. Asking a cursor for something its
//! item type does not have, or following a dangling offset, panics.

use std::fmt;

use jspath_core::{AnyBounds, RegexFlags};

use super::constants::{OFFSET_SIZE, align_to_item};
use super::error::FormatError;
use super::item_type::{ItemType, Shape};

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let b = bytes.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Bounds-checked sequential reader over an item's payload.
struct Reader<'a> {
    base: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn u8(&mut self, what: &'static str) -> Result<u8, FormatError> {
        let v = *self
            .base
            .get(self.pos)
            .ok_or(FormatError::corrupt(self.pos, what))?;
        self.pos += 1;
        Ok(v)
    }

    fn u32(&mut self, what: &'static str) -> Result<u32, FormatError> {
        let v = read_u32_le(self.base, self.pos).ok_or(FormatError::corrupt(self.pos, what))?;
        self.pos += 4;
        Ok(v)
    }

    fn bytes(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], FormatError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.base.len())
            .ok_or(FormatError::corrupt(self.pos, what))?;
        let bytes = &self.base[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// `u32` length, bytes, NUL.
    fn text(&mut self, what: &'static str) -> Result<&'a [u8], FormatError> {
        let len = self.u32(what)? as usize;
        let bytes = self.bytes(len, what)?;
        match self.u8(what)? {
            0 => Ok(bytes),
            _ => Err(FormatError::corrupt(self.pos - 1, "missing string terminator")),
        }
    }

    fn slots(&mut self, per_entry: usize) -> Result<(u32, &'a [u8]), FormatError> {
        let count = self.u32("truncated element count")?;
        let size = (count as usize)
            .checked_mul(per_entry * OFFSET_SIZE)
            .ok_or(FormatError::corrupt(self.pos, "element count overflow"))?;
        let slots = self.bytes(size, "truncated offset slots")?;
        Ok((count, slots))
    }
}

/// Typed payload of one decoded item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content<'a> {
    None,
    /// String literal, key or variable name, without the terminator.
    Text(&'a [u8]),
    /// Canonical decimal text.
    Numeric(&'a [u8]),
    Bool(bool),
    Binary {
        left: u32,
        right: u32,
    },
    /// Zero when the argument is absent.
    Unary {
        arg: u32,
    },
    LikeRegex {
        flags: RegexFlags,
        expr: u32,
        pattern: &'a [u8],
    },
    Any(AnyBounds),
    /// Offset slots of an index array, sequence or object.
    Slots {
        count: u32,
        slots: &'a [u8],
    },
}

/// Which operand an offset slot refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    Left,
    Right,
    Arg,
    Expr,
    From(u32),
    To(u32),
    Element(u32),
    Key(u32),
    Value(u32),
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Arg => f.write_str("arg"),
            Self::Expr => f.write_str("expr"),
            Self::From(i) => write!(f, "from{i}"),
            Self::To(i) => write!(f, "to{i}"),
            Self::Element(i) => write!(f, "elem{i}"),
            Self::Key(i) => write!(f, "key{i}"),
            Self::Value(i) => write!(f, "value{i}"),
        }
    }
}

/// One operand reference of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildSlot {
    pub role: SlotRole,
    /// Relative to the owning item; 0 means absent.
    pub offset: u32,
    pub required: bool,
}

/// One subscript of an index array.
#[derive(Clone, Copy, Debug)]
pub struct Subscript<'a> {
    pub from: Cursor<'a>,
    /// Present for `from to to` ranges.
    pub to: Option<Cursor<'a>>,
}

/// Read-only view of one encoded item.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    base: &'a [u8],
    pos: usize,
    item_type: ItemType,
    next: u32,
    content: Content<'a>,
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("item_type", &self.item_type)
            .field("next", &self.next)
            .field("content", &self.content)
            .finish()
    }
}

impl<'a> Cursor<'a> {
    /// Decode the item at `pos` of the payload `base`, checking bounds.
    pub fn decode(base: &'a [u8], pos: usize) -> Result<Self, FormatError> {
        let mut r = Reader { base, pos };
        let tag = r.u8("item out of bounds")?;
        let item_type = ItemType::from_u8(tag).ok_or(FormatError::UnknownItemType {
            position: pos,
            tag,
        })?;
        r.pos = align_to_item(r.pos);
        let next = r.u32("truncated next offset")?;

        let content = match item_type.shape() {
            Shape::Leaf => Content::None,
            Shape::Text => Content::Text(r.text("truncated string")?),
            Shape::Numeric => {
                let len = r.u32("truncated numeric")? as usize;
                Content::Numeric(r.bytes(len, "truncated numeric")?)
            }
            Shape::Bool => match r.u8("truncated bool")? {
                0 => Content::Bool(false),
                1 => Content::Bool(true),
                _ => return Err(FormatError::corrupt(r.pos - 1, "invalid bool value")),
            },
            Shape::Binary => Content::Binary {
                left: r.u32("truncated operand offset")?,
                right: r.u32("truncated operand offset")?,
            },
            Shape::Unary => Content::Unary {
                arg: r.u32("truncated operand offset")?,
            },
            Shape::LikeRegex => Content::LikeRegex {
                flags: RegexFlags::from_bits(r.u32("truncated regex flags")?),
                expr: r.u32("truncated operand offset")?,
                pattern: r.text("truncated regex pattern")?,
            },
            Shape::Any => Content::Any(AnyBounds {
                first: r.u32("truncated level bounds")?,
                last: r.u32("truncated level bounds")?,
            }),
            Shape::IndexArray | Shape::Object => {
                let (count, slots) = r.slots(2)?;
                Content::Slots { count, slots }
            }
            Shape::Sequence => {
                let (count, slots) = r.slots(1)?;
                Content::Slots { count, slots }
            }
        };

        Ok(Self {
            base,
            pos,
            item_type,
            next,
            content,
        })
    }

    /// Decode an item of a verified buffer.
    pub(crate) fn at(base: &'a [u8], pos: usize) -> Self {
        match Self::decode(base, pos) {
            Ok(cursor) => cursor,
            Err(e) => panic!("corrupt jsonpath buffer: {e}"),
        }
    }

    fn child(&self, offset: u32, role: SlotRole) -> Cursor<'a> {
        assert!(offset != 0, "{:?} item has no {role} operand", self.item_type);
        Self::at(self.base, self.pos + offset as usize)
    }

    fn optional_child(&self, offset: u32) -> Option<Cursor<'a>> {
        (offset != 0).then(|| Self::at(self.base, self.pos + offset as usize))
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Position of the item's tag byte within the payload.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn content(&self) -> Content<'a> {
        self.content
    }

    pub fn has_next(&self) -> bool {
        self.next != 0
    }

    pub fn next_offset(&self) -> u32 {
        self.next
    }

    /// Following item of the accessor chain.
    pub fn next_item(&self) -> Option<Cursor<'a>> {
        self.optional_child(self.next)
    }

    /// Argument of a unary item. `None` only for `.datetime()` without a
    /// template and the empty array constructor `[]`.
    pub fn arg(&self) -> Option<Cursor<'a>> {
        match self.content {
            Content::Unary { arg } => self.optional_child(arg),
            _ => panic!("{:?} item has no argument", self.item_type),
        }
    }

    pub fn left(&self) -> Cursor<'a> {
        match self.content {
            Content::Binary { left, .. } => self.child(left, SlotRole::Left),
            _ => panic!("{:?} item is not a binary operator", self.item_type),
        }
    }

    pub fn right(&self) -> Cursor<'a> {
        match self.content {
            Content::Binary { right, .. } => self.child(right, SlotRole::Right),
            _ => panic!("{:?} item is not a binary operator", self.item_type),
        }
    }

    pub fn bool_value(&self) -> bool {
        match self.content {
            Content::Bool(v) => v,
            _ => panic!("{:?} item is not a bool", self.item_type),
        }
    }

    pub fn numeric_text(&self) -> &'a str {
        match self.content {
            Content::Numeric(bytes) => {
                std::str::from_utf8(bytes).expect("invalid UTF-8 in numeric literal")
            }
            _ => panic!("{:?} item is not a numeric", self.item_type),
        }
    }

    /// Raw bytes of a string literal, key or variable name.
    pub fn text_bytes(&self) -> &'a [u8] {
        match self.content {
            Content::Text(bytes) => bytes,
            _ => panic!("{:?} item has no text", self.item_type),
        }
    }

    pub fn text(&self) -> &'a str {
        std::str::from_utf8(self.text_bytes()).expect("invalid UTF-8 in jsonpath string")
    }

    /// Operand matched by `like_regex`.
    pub fn regex_expr(&self) -> Cursor<'a> {
        match self.content {
            Content::LikeRegex { expr, .. } => self.child(expr, SlotRole::Expr),
            _ => panic!("{:?} item is not like_regex", self.item_type),
        }
    }

    pub fn regex_pattern(&self) -> &'a str {
        match self.content {
            Content::LikeRegex { pattern, .. } => {
                std::str::from_utf8(pattern).expect("invalid UTF-8 in regex pattern")
            }
            _ => panic!("{:?} item is not like_regex", self.item_type),
        }
    }

    pub fn regex_flags(&self) -> RegexFlags {
        match self.content {
            Content::LikeRegex { flags, .. } => flags,
            _ => panic!("{:?} item is not like_regex", self.item_type),
        }
    }

    pub fn any_bounds(&self) -> AnyBounds {
        match self.content {
            Content::Any(bounds) => bounds,
            _ => panic!("{:?} item has no level bounds", self.item_type),
        }
    }

    /// Number of subscripts, sequence elements or object fields.
    pub fn element_count(&self) -> usize {
        match self.content {
            Content::Slots { count, .. } => count as usize,
            _ => panic!("{:?} item has no elements", self.item_type),
        }
    }

    fn slot(&self, index: usize) -> u32 {
        let Content::Slots { slots, .. } = self.content else {
            panic!("{:?} item has no elements", self.item_type);
        };
        read_u32_le(slots, index * OFFSET_SIZE)
            .unwrap_or_else(|| panic!("slot {index} out of range for {:?}", self.item_type))
    }

    pub fn subscript(&self, index: usize) -> Subscript<'a> {
        assert_eq!(self.item_type, ItemType::IndexArray, "not an index array");
        assert!(index < self.element_count(), "subscript {index} out of range");
        let i = index as u32;
        Subscript {
            from: self.child(self.slot(2 * index), SlotRole::From(i)),
            to: self.optional_child(self.slot(2 * index + 1)),
        }
    }

    pub fn sequence_element(&self, index: usize) -> Cursor<'a> {
        assert_eq!(self.item_type, ItemType::Sequence, "not a sequence");
        assert!(index < self.element_count(), "element {index} out of range");
        self.child(self.slot(index), SlotRole::Element(index as u32))
    }

    /// Key and value of an object constructor field.
    pub fn object_field(&self, index: usize) -> (Cursor<'a>, Cursor<'a>) {
        assert_eq!(self.item_type, ItemType::Object, "not an object");
        assert!(index < self.element_count(), "field {index} out of range");
        let i = index as u32;
        (
            self.child(self.slot(2 * index), SlotRole::Key(i)),
            self.child(self.slot(2 * index + 1), SlotRole::Value(i)),
        )
    }

    /// Every operand slot of this item in encoding order, excluding `next`.
    pub fn child_slots(&self) -> Vec<ChildSlot> {
        let slot = |role, offset, required| ChildSlot {
            role,
            offset,
            required,
        };
        match self.content {
            Content::Binary { left, right } => vec![
                slot(SlotRole::Left, left, true),
                slot(SlotRole::Right, right, true),
            ],
            Content::Unary { arg } => {
                vec![slot(SlotRole::Arg, arg, self.item_type.requires_arg())]
            }
            Content::LikeRegex { expr, .. } => vec![slot(SlotRole::Expr, expr, true)],
            Content::Slots { count, .. } => {
                let mut out = Vec::new();
                for i in 0..count {
                    let idx = i as usize;
                    match self.item_type {
                        ItemType::IndexArray => {
                            out.push(slot(SlotRole::From(i), self.slot(2 * idx), true));
                            out.push(slot(SlotRole::To(i), self.slot(2 * idx + 1), false));
                        }
                        ItemType::Object => {
                            out.push(slot(SlotRole::Key(i), self.slot(2 * idx), true));
                            out.push(slot(SlotRole::Value(i), self.slot(2 * idx + 1), true));
                        }
                        _ => out.push(slot(SlotRole::Element(i), self.slot(idx), true)),
                    }
                }
                out
            }
            _ => Vec::new(),
        }
    }

    /// Cursor for the operand behind `slot`, if present.
    pub fn follow(&self, slot: ChildSlot) -> Option<Cursor<'a>> {
        self.optional_child(slot.offset)
    }
}
