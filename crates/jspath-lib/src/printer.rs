//! Canonical text rendering.
//!
//! Output is the jsonpath surface syntax with a fixed normal form: keys and
//! strings are always double-quoted, binary operators are wrapped in
//! parentheses whenever their own context asks for it, and an operand is
//! parenthesized when its priority is lower than or equal to its parent's.
//! Equal priorities are parenthesized on both sides, so `1 + 2 + 3` prints
//! as `((1 + 2) + 3)`.

use jspath_bytecode::{Cursor, EncodedPath, ItemType};
use jspath_core::{AnyBounds, Descent, LimitError, Limits, escape_json};

/// Render a whole path, including the `pg` and `strict` modifiers.
pub fn print(path: &EncodedPath) -> String {
    infallible(print_with_limits(path, &Limits::unbounded()))
}

/// Like [`print`], failing once `limits` is exceeded or cancelled.
pub fn print_with_limits(path: &EncodedPath, limits: &Limits) -> Result<String, LimitError> {
    let mut printer = Printer::new(limits);
    if path.has_extensions() {
        printer.out.push_str("pg ");
    }
    if !path.is_lax() {
        printer.out.push_str("strict ");
    }
    printer.top_level(path.root())?;
    Ok(printer.out)
}

/// Render the expression starting at `item` as if it were a whole path body.
pub fn print_item(item: Cursor<'_>) -> String {
    let limits = Limits::unbounded();
    let mut printer = Printer::new(&limits);
    infallible(printer.top_level(item).map(|()| printer.out))
}

/// Unbounded walks without a cancel token have nothing to fail on.
fn infallible(result: Result<String, LimitError>) -> String {
    result.unwrap_or_else(|e| unreachable!("unbounded print failed: {e}"))
}

/// Binding strength, loosest first.
fn priority(t: ItemType) -> i8 {
    use ItemType::*;
    match t {
        Sequence => -1,
        Or => 0,
        And => 1,
        Equal | NotEqual | Less | Greater | LessOrEqual | GreaterOrEqual | StartsWith => 2,
        Add | Sub => 3,
        Mul | Div | Mod => 4,
        Plus | Minus => 5,
        _ => 6,
    }
}

struct Printer<'l> {
    out: String,
    descent: Descent<'l>,
}

impl<'l> Printer<'l> {
    fn new(limits: &'l Limits) -> Self {
        Self {
            out: String::new(),
            descent: limits.descent(),
        }
    }

    fn top_level(&mut self, root: Cursor<'_>) -> Result<(), LimitError> {
        self.chain(root, false, root.item_type() != ItemType::Sequence)
    }

    /// Print `first` and every item chained after it. Chained items are
    /// printed in key context, so `.` prefixes keys and wildcards.
    fn chain(
        &mut self,
        first: Cursor<'_>,
        in_key: bool,
        brackets: bool,
    ) -> Result<(), LimitError> {
        self.descent.enter()?;
        self.item(first, in_key, brackets)?;
        let mut item = first;
        while let Some(next) = item.next_item() {
            self.item(next, true, true)?;
            item = next;
        }
        self.descent.leave();
        Ok(())
    }

    fn operand(&mut self, child: Cursor<'_>, parent: ItemType) -> Result<(), LimitError> {
        let brackets = priority(child.item_type()) <= priority(parent);
        self.chain(child, false, brackets)
    }

    fn item(
        &mut self,
        item: Cursor<'_>,
        in_key: bool,
        brackets: bool,
    ) -> Result<(), LimitError> {
        use ItemType::*;
        let t = item.item_type();
        match t {
            Null => self.out.push_str("null"),
            Key => {
                if in_key {
                    self.out.push('.');
                }
                escape_json(&mut self.out, item.text());
            }
            String => escape_json(&mut self.out, item.text()),
            Variable => {
                self.out.push('$');
                escape_json(&mut self.out, item.text());
            }
            Numeric => {
                if item.has_next() {
                    self.out.push('(');
                }
                self.out.push_str(item.numeric_text());
                if item.has_next() {
                    self.out.push(')');
                }
            }
            Bool => self
                .out
                .push_str(if item.bool_value() { "true" } else { "false" }),
            And | Or | Equal | NotEqual | Less | Greater | LessOrEqual | GreaterOrEqual | Add
            | Sub | Mul | Div | Mod | StartsWith => {
                self.open(brackets);
                self.operand(item.left(), t)?;
                self.out.push(' ');
                self.out.push_str(operator(t));
                self.out.push(' ');
                self.operand(item.right(), t)?;
                self.close(brackets);
            }
            LikeRegex => {
                self.open(brackets);
                self.operand(item.regex_expr(), t)?;
                self.out.push_str(" like_regex ");
                escape_json(&mut self.out, item.regex_pattern());
                let flags = item.regex_flags();
                if !flags.is_empty() {
                    self.out.push_str(" flag \"");
                    self.out.push_str(&flags.letters());
                    self.out.push('"');
                }
                self.close(brackets);
            }
            Plus | Minus => {
                self.open(brackets);
                self.out.push_str(operator(t));
                self.operand(required_arg(item), t)?;
                self.close(brackets);
            }
            Filter => self.wrapped("?(", required_arg(item), ")")?,
            Not => self.wrapped("!(", required_arg(item), ")")?,
            IsUnknown => self.wrapped("(", required_arg(item), ") is unknown")?,
            Exists => self.wrapped("exists (", required_arg(item), ")")?,
            Current => self.out.push('@'),
            Root => self.out.push('$'),
            Last => self.out.push_str("last"),
            AnyArray => self.out.push_str("[*]"),
            AnyKey => {
                if in_key {
                    self.out.push('.');
                }
                self.out.push('*');
            }
            IndexArray => {
                self.out.push('[');
                for i in 0..item.element_count() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    let sub = item.subscript(i);
                    self.chain(sub.from, false, sub.from.item_type() == Sequence)?;
                    if let Some(to) = sub.to {
                        self.out.push_str(" to ");
                        self.chain(to, false, to.item_type() == Sequence)?;
                    }
                }
                self.out.push(']');
            }
            Any => {
                if in_key {
                    self.out.push('.');
                }
                self.any_levels(item.any_bounds());
            }
            Type | Size | Abs | Floor | Ceiling | Double | KeyValue => {
                self.out.push('.');
                self.out.push_str(operator(t));
                self.out.push_str("()");
            }
            Datetime => {
                self.out.push_str(".datetime(");
                if let Some(template) = item.arg() {
                    self.chain(template, false, false)?;
                }
                self.out.push(')');
            }
            Sequence => {
                let parens = brackets || item.has_next();
                self.open(parens);
                for i in 0..item.element_count() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    let element = item.sequence_element(i);
                    self.chain(element, false, element.item_type() == Sequence)?;
                }
                self.close(parens);
            }
            Array => {
                self.out.push('[');
                if let Some(element) = item.arg() {
                    self.chain(element, false, false)?;
                }
                self.out.push(']');
            }
            Object => {
                self.out.push('{');
                for i in 0..item.element_count() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    let (key, value) = item.object_field(i);
                    self.chain(key, false, false)?;
                    self.out.push_str(": ");
                    self.chain(value, false, value.item_type() == Sequence)?;
                }
                self.out.push('}');
            }
        }
        Ok(())
    }

    fn any_levels(&mut self, bounds: AnyBounds) {
        const LAST: u32 = AnyBounds::LAST;
        let text = match (bounds.first, bounds.last) {
            _ if bounds.is_unbounded() => "**".to_string(),
            (LAST, LAST) => "**{last}".to_string(),
            (first, last) if first == last => format!("**{{{first}}}"),
            (LAST, last) => format!("**{{last to {last}}}"),
            (first, LAST) => format!("**{{{first} to last}}"),
            (first, last) => format!("**{{{first} to {last}}}"),
        };
        self.out.push_str(&text);
    }

    fn wrapped(
        &mut self,
        prefix: &str,
        arg: Cursor<'_>,
        suffix: &str,
    ) -> Result<(), LimitError> {
        self.out.push_str(prefix);
        self.chain(arg, false, false)?;
        self.out.push_str(suffix);
        Ok(())
    }

    fn open(&mut self, brackets: bool) {
        if brackets {
            self.out.push('(');
        }
    }

    fn close(&mut self, brackets: bool) {
        if brackets {
            self.out.push(')');
        }
    }
}

fn operator(t: ItemType) -> &'static str {
    t.operation_name()
        .unwrap_or_else(|| panic!("{t:?} has no operator text"))
}

fn required_arg(item: Cursor<'_>) -> Cursor<'_> {
    item.arg()
        .unwrap_or_else(|| panic!("{:?} item without argument", item.item_type()))
}
