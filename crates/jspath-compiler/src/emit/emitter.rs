//! Pre-order flattening of an expression tree.
//!
//! Every item is written as: tag, padding, next slot, fixed payload, then
//! its operands (each a full chain), and only after that the next item of
//! its own chain. Operand slots are reserved before the operands are written
//! and patched once their position is known.
//!
//! Chains are walked iteratively. Only operands recurse, and each operand
//! level passes through the [`Descent`] guard.

use jspath_bytecode::{EncodedPath, Header, ItemType, Scope};
use jspath_core::{Descent, Expr, ExprKind, Limits, ParsedPath, UnaryOp};

use super::EmitError;
use super::regex::check_pattern;
use super::writer::{ItemWriter, MAX_LEN, Slot};

/// Encode `path` with default limits.
pub fn emit(path: &ParsedPath) -> Result<EncodedPath, EmitError> {
    emit_with_limits(path, &Limits::default())
}

pub fn emit_with_limits(path: &ParsedPath, limits: &Limits) -> Result<EncodedPath, EmitError> {
    let mut emitter = Emitter {
        writer: ItemWriter::new(),
        extensions: path.ext,
        descent: limits.descent(),
    };
    emitter.flatten(&path.expr, Scope::ROOT)?;

    let bytes = emitter.writer.finish(Header::new(path.lax, path.ext));
    tracing::debug!(
        len = bytes.len(),
        lax = path.lax,
        ext = path.ext,
        "encoded jsonpath"
    );
    Ok(EncodedPath::from_trusted(&bytes))
}

struct Emitter<'l> {
    writer: ItemWriter,
    extensions: bool,
    descent: Descent<'l>,
}

impl Emitter<'_> {
    /// Write a whole accessor chain. Returns the position of its first item.
    fn flatten(&mut self, expr: &Expr, scope: Scope) -> Result<usize, EmitError> {
        self.descent.enter()?;

        let (first, mut pending) = self.emit_item(expr, scope)?;
        let mut owner = first;
        let mut item = expr;
        while let Some(next) = item.next.as_deref() {
            let (pos, slot) = self.emit_item(next, scope)?;
            self.writer.patch_offset(pending, pos, owner);
            owner = pos;
            pending = slot;
            item = next;
        }

        self.descent.leave();
        Ok(first)
    }

    /// Write one item and its operands. Returns the item position and its
    /// still unpatched next slot.
    fn emit_item(&mut self, expr: &Expr, scope: Scope) -> Result<(usize, Slot), EmitError> {
        self.check_context(&expr.kind, scope)?;
        self.ensure_room(0)?;

        let pos = self.writer.position();
        self.writer.push_u8(ItemType::from(&expr.kind) as u8);
        self.writer.align();
        let next = self.writer.reserve_offset();

        match &expr.kind {
            ExprKind::Null
            | ExprKind::Root
            | ExprKind::Current
            | ExprKind::Last
            | ExprKind::AnyArray
            | ExprKind::AnyKey
            | ExprKind::Method(_) => {}
            ExprKind::String(text) | ExprKind::Key(text) | ExprKind::Variable(text) => {
                self.ensure_room(text.len())?;
                self.writer.push_text(text);
            }
            ExprKind::Numeric(n) => {
                if n.as_bytes().is_empty() {
                    return Err(EmitError::EmptyNumeric);
                }
                self.ensure_room(n.as_bytes().len())?;
                self.writer.push_u32(n.as_bytes().len() as u32);
                self.writer.push_bytes(n.as_bytes());
            }
            ExprKind::Bool(v) => self.writer.push_u8(u8::from(*v)),
            ExprKind::Binary { left, right, .. } => {
                let left_slot = self.writer.reserve_offset();
                let right_slot = self.writer.reserve_offset();
                self.operand(left, left_slot, pos, scope)?;
                self.operand(right, right_slot, pos, scope)?;
            }
            ExprKind::Unary { op, arg } => {
                let inner = if matches!(op, UnaryOp::Filter) {
                    scope.in_filter()
                } else {
                    scope
                };
                let slot = self.writer.reserve_offset();
                self.operand(arg, slot, pos, inner)?;
            }
            ExprKind::Datetime(arg) | ExprKind::Array(arg) => {
                let slot = self.writer.reserve_offset();
                if let Some(arg) = arg {
                    self.operand(arg, slot, pos, scope)?;
                }
            }
            ExprKind::LikeRegex {
                expr,
                pattern,
                flags,
            } => {
                check_pattern(pattern, *flags)?;
                self.ensure_room(pattern.len())?;
                self.writer.push_u32(flags.bits());
                let slot = self.writer.reserve_offset();
                self.writer.push_text(pattern);
                self.operand(expr, slot, pos, scope)?;
            }
            ExprKind::Any(bounds) => {
                self.writer.push_u32(bounds.first);
                self.writer.push_u32(bounds.last);
            }
            ExprKind::IndexArray(subscripts) => {
                let slots = self.reserve_slots(subscripts.len(), 2)?;
                let inner = scope.in_subscript();
                for (sub, pair) in subscripts.iter().zip(slots.chunks_exact(2)) {
                    self.operand(&sub.from, pair[0], pos, inner)?;
                    if let Some(to) = &sub.to {
                        self.operand(to, pair[1], pos, inner)?;
                    }
                }
            }
            ExprKind::Sequence(elements) => {
                let slots = self.reserve_slots(elements.len(), 1)?;
                for (element, slot) in elements.iter().zip(slots) {
                    self.operand(element, slot, pos, scope)?;
                }
            }
            ExprKind::Object(fields) => {
                let slots = self.reserve_slots(fields.len(), 2)?;
                for (field, pair) in fields.iter().zip(slots.chunks_exact(2)) {
                    self.operand(&field.key, pair[0], pos, scope)?;
                    self.operand(&field.value, pair[1], pos, scope)?;
                }
            }
        }

        Ok((pos, next))
    }

    fn operand(
        &mut self,
        expr: &Expr,
        slot: Slot,
        owner: usize,
        scope: Scope,
    ) -> Result<(), EmitError> {
        let child = self.flatten(expr, scope)?;
        self.writer.patch_offset(slot, child, owner);
        Ok(())
    }

    /// Element count followed by `count * per_entry` zeroed slots.
    fn reserve_slots(&mut self, count: usize, per_entry: usize) -> Result<Vec<Slot>, EmitError> {
        self.ensure_room(count.saturating_mul(per_entry * 4))?;
        self.writer.push_u32(count as u32);
        Ok((0..count * per_entry)
            .map(|_| self.writer.reserve_offset())
            .collect())
    }

    fn check_context(&self, kind: &ExprKind, scope: Scope) -> Result<(), EmitError> {
        let ty = ItemType::from(kind);
        match kind {
            ExprKind::Current if scope.filters == 0 => Err(EmitError::CurrentOutsideFilter),
            ExprKind::Last if !scope.subscript => Err(EmitError::LastOutsideSubscript),
            _ if ty.is_extension() && !self.extensions => {
                Err(EmitError::ExtensionsDisabled(ty.name()))
            }
            _ => Ok(()),
        }
    }

    /// Fail before the buffer outgrows what a signed 32-bit offset can reach.
    fn ensure_room(&self, extra: usize) -> Result<(), EmitError> {
        let len = self.writer.len().saturating_add(extra);
        if len > MAX_LEN {
            return Err(EmitError::TooLarge(len));
        }
        Ok(())
    }
}
