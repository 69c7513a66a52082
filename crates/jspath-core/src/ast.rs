//! Path expression tree handed over by the parser.
//!
//! The encoder only reads this tree. Every [`Expr`] may carry a `next` link
//! continuing its accessor chain: `$.a[*]` is `$` then `.a` then `[*]`.
//!
//! The serde representation is the interchange format the CLI reads:
//!
//! ```json
//! { "lax": true, "expr": { "kind": "root", "next": { "kind": { "key": "a" } } } }
//! ```

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Result of parsing one path expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedPath {
    pub expr: Expr,
    /// Lax mode unless the text started with `strict`.
    #[serde(default = "default_lax")]
    pub lax: bool,
    /// Extended constructors (sequences, array and object literals) allowed.
    #[serde(default)]
    pub ext: bool,
}

fn default_lax() -> bool {
    true
}

impl ParsedPath {
    pub fn lax(expr: Expr) -> Self {
        Self {
            expr,
            lax: true,
            ext: false,
        }
    }

    pub fn strict(expr: Expr) -> Self {
        Self {
            expr,
            lax: false,
            ext: false,
        }
    }

    pub fn with_extensions(mut self) -> Self {
        self.ext = true;
        self
    }
}

/// One item of a path expression plus the rest of its accessor chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<Expr>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprKind {
    Null,
    String(String),
    Numeric(Numeric),
    Bool(bool),
    Variable(String),
    Key(String),
    /// `$`
    Root,
    /// `@`, only meaningful inside a filter.
    Current,
    /// `last`, only meaningful inside an array subscript.
    Last,
    /// `[*]`
    AnyArray,
    /// `.*`
    AnyKey,
    /// `.**{first to last}`
    Any(AnyBounds),
    /// `[a, b to c]`
    IndexArray(Vec<Subscript>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        arg: Box<Expr>,
    },
    LikeRegex {
        expr: Box<Expr>,
        pattern: String,
        #[serde(default)]
        flags: RegexFlags,
    },
    Method(Method),
    /// `.datetime()` with an optional template argument.
    Datetime(Option<Box<Expr>>),
    Sequence(Vec<Expr>),
    Array(Option<Box<Expr>>),
    Object(Vec<ObjectField>),
}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Self { kind, next: None }
    }
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        kind.into()
    }

    /// Append `next` at the end of this expression's accessor chain.
    pub fn then(mut self, next: impl Into<Expr>) -> Self {
        self.push_tail(next.into());
        self
    }

    fn push_tail(&mut self, next: Expr) {
        match &mut self.next {
            Some(tail) => tail.push_tail(next),
            None => self.next = Some(Box::new(next)),
        }
    }

    /// Number of items in the accessor chain starting here.
    pub fn chain_len(&self) -> usize {
        let mut len = 1;
        let mut item = self;
        while let Some(next) = &item.next {
            len += 1;
            item = next;
        }
        len
    }

    pub fn null() -> Self {
        ExprKind::Null.into()
    }

    pub fn root() -> Self {
        ExprKind::Root.into()
    }

    pub fn current() -> Self {
        ExprKind::Current.into()
    }

    pub fn last() -> Self {
        ExprKind::Last.into()
    }

    pub fn any_array() -> Self {
        ExprKind::AnyArray.into()
    }

    pub fn any_key() -> Self {
        ExprKind::AnyKey.into()
    }

    pub fn any(first: u32, last: u32) -> Self {
        ExprKind::Any(AnyBounds { first, last }).into()
    }

    pub fn key(name: impl Into<String>) -> Self {
        ExprKind::Key(name.into()).into()
    }

    pub fn string(text: impl Into<String>) -> Self {
        ExprKind::String(text.into()).into()
    }

    pub fn var(name: impl Into<String>) -> Self {
        ExprKind::Variable(name.into()).into()
    }

    pub fn numeric(text: impl Into<String>) -> Self {
        ExprKind::Numeric(Numeric::new(text)).into()
    }

    pub fn bool(value: bool) -> Self {
        ExprKind::Bool(value).into()
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into()
    }

    pub fn unary(op: UnaryOp, arg: Expr) -> Self {
        ExprKind::Unary {
            op,
            arg: Box::new(arg),
        }
        .into()
    }

    pub fn filter(predicate: Expr) -> Self {
        Self::unary(UnaryOp::Filter, predicate)
    }

    pub fn like_regex(expr: Expr, pattern: impl Into<String>, flags: RegexFlags) -> Self {
        ExprKind::LikeRegex {
            expr: Box::new(expr),
            pattern: pattern.into(),
            flags,
        }
        .into()
    }

    pub fn method(method: Method) -> Self {
        ExprKind::Method(method).into()
    }

    pub fn datetime(template: Option<Expr>) -> Self {
        ExprKind::Datetime(template.map(Box::new)).into()
    }

    pub fn index(subscripts: Vec<Subscript>) -> Self {
        ExprKind::IndexArray(subscripts).into()
    }

    pub fn sequence(elements: Vec<Expr>) -> Self {
        ExprKind::Sequence(elements).into()
    }

    pub fn array(element: Option<Expr>) -> Self {
        ExprKind::Array(element.map(Box::new)).into()
    }

    pub fn object(fields: Vec<(Expr, Expr)>) -> Self {
        ExprKind::Object(
            fields
                .into_iter()
                .map(|(key, value)| ObjectField { key, value })
                .collect(),
        )
        .into()
    }
}

/// Decimal number kept in canonical text form.
///
/// Arbitrary precision is the evaluator's business; the encoding stores the
/// digits verbatim so printing reproduces them exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numeric(String);

impl Numeric {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<i64> for Numeric {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Level bounds of `.**{first to last}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnyBounds {
    pub first: u32,
    pub last: u32,
}

impl AnyBounds {
    /// Sentinel for the `last` keyword in either bound.
    pub const LAST: u32 = u32::MAX;

    /// Bare `.**`: every level.
    pub const fn unbounded() -> Self {
        Self {
            first: 0,
            last: Self::LAST,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.first == 0 && self.last == Self::LAST
    }
}

/// One subscript of an index array: a single index or a `from to to` range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscript {
    pub from: Expr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Expr>,
}

impl Subscript {
    pub fn index(at: Expr) -> Self {
        Self { from: at, to: None }
    }

    pub fn range(from: Expr, to: Expr) -> Self {
        Self { from, to: Some(to) }
    }
}

/// Key/value pair of an object constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub key: Expr,
    pub value: Expr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    StartsWith,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Not,
    IsUnknown,
    Exists,
    Plus,
    Minus,
    Filter,
}

/// Item methods without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Type,
    Size,
    Abs,
    Floor,
    Ceiling,
    Double,
    KeyValue,
}

/// `like_regex` flag set.
///
/// Bit values are part of the binary format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegexFlags(u32);

impl RegexFlags {
    pub const NONE: Self = Self(0);
    /// `i`
    pub const ICASE: Self = Self(0x01);
    /// `s`
    pub const DOTALL: Self = Self(0x02);
    /// `m`
    pub const MLINE: Self = Self(0x04);
    /// `x`
    pub const WSPACE: Self = Self(0x08);
    /// `q`: the pattern is a literal string.
    pub const QUOTE: Self = Self(0x10);

    const LETTERS: [(Self, char); 5] = [
        (Self::ICASE, 'i'),
        (Self::DOTALL, 's'),
        (Self::MLINE, 'm'),
        (Self::WSPACE, 'x'),
        (Self::QUOTE, 'q'),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parse a flag string such as `"is"`. Returns `None` on an unknown letter.
    pub fn from_letters(letters: &str) -> Option<Self> {
        letters.chars().try_fold(Self::NONE, |acc, c| {
            Self::LETTERS
                .iter()
                .find(|(_, l)| *l == c)
                .map(|(flag, _)| acc | *flag)
        })
    }

    /// Flag letters in canonical `ismxq` order.
    pub fn letters(self) -> String {
        Self::LETTERS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, l)| *l)
            .collect()
    }
}

impl BitOr for RegexFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod ast_tests;
