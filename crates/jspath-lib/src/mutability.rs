//! Static immutability check.
//!
//! A path is mutable when evaluating it twice against the same document may
//! give different answers. The only source of that here is the session time
//! zone: comparing a zoned date/time value with a non-zoned one converts
//! through the current zone, and so does comparing a value whose zone status
//! is not known until run time.
//!
//! The walk tracks a [`DatetimeStatus`] for the value produced by each
//! accessor chain, and the status of `@` inside the innermost filter.

use jspath_bytecode::{Cursor, ItemType};
use jspath_core::{Descent, LimitError, Limits};

use crate::bindings::{Bindings, VarType};
use crate::datetime::template_is_zoned;

/// What is statically known about a value being a date/time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatetimeStatus {
    NonDateTime,
    /// Produced by `.datetime()` without a template; the kind is decided by
    /// the input at run time.
    UnknownDateTime,
    DateTimeZoned,
    DateTimeNonZoned,
}

impl DatetimeStatus {
    pub fn is_datetime(self) -> bool {
        self != Self::NonDateTime
    }

    /// Whether comparing values of these two kinds depends on the time zone.
    pub fn comparison_is_mutable(self, other: Self) -> bool {
        self.is_datetime()
            && other.is_datetime()
            && (self == Self::UnknownDateTime || other == Self::UnknownDateTime || self != other)
    }
}

impl From<VarType> for DatetimeStatus {
    fn from(ty: VarType) -> Self {
        match ty {
            VarType::Date | VarType::Time | VarType::Timestamp => Self::DateTimeNonZoned,
            VarType::TimeTz | VarType::TimestampTz => Self::DateTimeZoned,
            VarType::Other => Self::NonDateTime,
        }
    }
}

/// Whether the expression starting at `root` is mutable.
///
/// `lax` is the mode of the whole path: in strict mode array wildcards do
/// not unwrap, so they never pass a date/time value through.
pub fn is_mutable(root: Cursor<'_>, bindings: &Bindings, lax: bool) -> bool {
    is_mutable_with_limits(root, bindings, lax, &Limits::unbounded())
        .unwrap_or_else(|e| unreachable!("unbounded classification failed: {e}"))
}

/// Like [`is_mutable`], failing once `limits` is exceeded or cancelled.
pub fn is_mutable_with_limits(
    root: Cursor<'_>,
    bindings: &Bindings,
    lax: bool,
    limits: &Limits,
) -> Result<bool, LimitError> {
    let mut walker = Walker {
        bindings,
        lax,
        descent: limits.descent(),
        current: DatetimeStatus::NonDateTime,
        mutable: false,
    };
    walker.chain(root)?;
    tracing::trace!(mutable = walker.mutable, lax, "classified jsonpath");
    Ok(walker.mutable)
}

struct Walker<'b, 'l> {
    bindings: &'b Bindings,
    lax: bool,
    descent: Descent<'l>,
    /// Status of `@` in the innermost enclosing filter.
    current: DatetimeStatus,
    /// Latched; stops the walk once set.
    mutable: bool,
}

type Step = Result<DatetimeStatus, LimitError>;

impl Walker<'_, '_> {
    /// Walk an accessor chain. Returns the status of the value it produces.
    fn chain(&mut self, first: Cursor<'_>) -> Step {
        self.descent.enter()?;
        let mut status = DatetimeStatus::NonDateTime;
        let mut item = Some(first);
        while let Some(cur) = item {
            if self.mutable {
                break;
            }
            status = self.item(cur, status)?;
            item = cur.next_item();
        }
        self.descent.leave();
        Ok(status)
    }

    /// Status after applying `item` to a value of status `status`.
    fn item(&mut self, item: Cursor<'_>, status: DatetimeStatus) -> Step {
        use DatetimeStatus::*;
        use ItemType::*;

        let next = match item.item_type() {
            Root => status,
            Current => self.current,
            Filter => {
                let saved = self.current;
                self.current = status;
                self.walk_arg(item)?;
                self.current = saved;
                status
            }
            Variable => self
                .bindings
                .get(item.text())
                .map_or(status, DatetimeStatus::from),
            Equal | NotEqual | Less | Greater | LessOrEqual | GreaterOrEqual => {
                let left = self.chain(item.left())?;
                let right = self.chain(item.right())?;
                if left.comparison_is_mutable(right) {
                    tracing::trace!(
                        position = item.position(),
                        ?left,
                        ?right,
                        "time zone dependent comparison"
                    );
                    self.mutable = true;
                }
                status
            }
            Not | IsUnknown | Exists | Plus | Minus => {
                self.walk_arg(item)?;
                status
            }
            And | Or | Add | Sub | Mul | Div | Mod | StartsWith => {
                self.chain(item.left())?;
                self.chain(item.right())?;
                status
            }
            IndexArray => {
                for i in 0..item.element_count() {
                    let sub = item.subscript(i);
                    if let Some(to) = sub.to {
                        self.chain(to)?;
                    }
                    self.chain(sub.from)?;
                }
                self.array_step(status)
            }
            AnyArray => self.array_step(status),
            Any => {
                if item.any_bounds().first > 0 {
                    NonDateTime
                } else {
                    status
                }
            }
            Datetime => match item.arg() {
                Some(template) if template.item_type() == ItemType::String => {
                    if template_is_zoned(template.text()) {
                        DateTimeZoned
                    } else {
                        DateTimeNonZoned
                    }
                }
                // Non-string templates fail at run time.
                Some(_) => NonDateTime,
                None => UnknownDateTime,
            },
            LikeRegex => {
                self.chain(item.regex_expr())?;
                status
            }
            Sequence | Array | Object => {
                for slot in item.child_slots() {
                    if let Some(operand) = item.follow(slot) {
                        self.chain(operand)?;
                    }
                }
                NonDateTime
            }
            Null | String | Numeric | Bool | Key | AnyKey | Last | Type | Size | Abs | Floor
            | Ceiling | Double | KeyValue => NonDateTime,
        };
        Ok(next)
    }

    fn walk_arg(&mut self, item: Cursor<'_>) -> Result<(), LimitError> {
        if let Some(arg) = item.arg() {
            self.chain(arg)?;
        }
        Ok(())
    }

    /// Lax mode unwraps arrays, so the element keeps the status of the value.
    fn array_step(&self, status: DatetimeStatus) -> DatetimeStatus {
        if self.lax {
            status
        } else {
            DatetimeStatus::NonDateTime
        }
    }
}
