//! Item type tags.
//!
//! The numeric tag values are part of the binary format: never renumber.

use jspath_core::{BinaryOp, ExprKind, Method, UnaryOp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ItemType {
    Null = 0,
    String = 1,
    Numeric = 2,
    Bool = 3,
    And = 4,
    Or = 5,
    Not = 6,
    IsUnknown = 7,
    Equal = 8,
    NotEqual = 9,
    Less = 10,
    Greater = 11,
    LessOrEqual = 12,
    GreaterOrEqual = 13,
    Add = 14,
    Sub = 15,
    Mul = 16,
    Div = 17,
    Mod = 18,
    Plus = 19,
    Minus = 20,
    AnyArray = 21,
    AnyKey = 22,
    IndexArray = 23,
    Any = 24,
    Key = 25,
    Current = 26,
    Root = 27,
    Variable = 28,
    Filter = 29,
    Exists = 30,
    Type = 31,
    Size = 32,
    Abs = 33,
    Floor = 34,
    Ceiling = 35,
    Double = 36,
    Datetime = 37,
    KeyValue = 38,
    Last = 39,
    StartsWith = 40,
    LikeRegex = 41,
    Sequence = 42,
    Array = 43,
    Object = 44,
}

/// Payload layout following an item's next-offset slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// No payload.
    Leaf,
    /// `u32` length, bytes, NUL.
    Text,
    /// `u32` length, decimal text bytes.
    Numeric,
    /// One byte, 0 or 1.
    Bool,
    /// Left and right offset slots.
    Binary,
    /// One argument offset slot.
    Unary,
    /// `u32` flags, operand slot, `u32` length, pattern bytes, NUL.
    LikeRegex,
    /// `u32` count, then from/to slot pairs.
    IndexArray,
    /// `u32` first, `u32` last.
    Any,
    /// `u32` count, then one slot per element.
    Sequence,
    /// `u32` count, then key/value slot pairs.
    Object,
}

impl ItemType {
    pub(crate) const ALL: [Self; 45] = [
        Self::Null,
        Self::String,
        Self::Numeric,
        Self::Bool,
        Self::And,
        Self::Or,
        Self::Not,
        Self::IsUnknown,
        Self::Equal,
        Self::NotEqual,
        Self::Less,
        Self::Greater,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Plus,
        Self::Minus,
        Self::AnyArray,
        Self::AnyKey,
        Self::IndexArray,
        Self::Any,
        Self::Key,
        Self::Current,
        Self::Root,
        Self::Variable,
        Self::Filter,
        Self::Exists,
        Self::Type,
        Self::Size,
        Self::Abs,
        Self::Floor,
        Self::Ceiling,
        Self::Double,
        Self::Datetime,
        Self::KeyValue,
        Self::Last,
        Self::StartsWith,
        Self::LikeRegex,
        Self::Sequence,
        Self::Array,
        Self::Object,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    pub fn shape(self) -> Shape {
        use ItemType::*;
        match self {
            Null | Current | Root | Last | AnyArray | AnyKey => Shape::Leaf,
            Type | Size | Abs | Floor | Ceiling | Double | KeyValue => Shape::Leaf,
            String | Key | Variable => Shape::Text,
            Numeric => Shape::Numeric,
            Bool => Shape::Bool,
            And | Or | Equal | NotEqual | Less | Greater | LessOrEqual | GreaterOrEqual | Add
            | Sub | Mul | Div | Mod | StartsWith => Shape::Binary,
            Not | IsUnknown | Exists | Plus | Minus | Filter | Datetime | Array => Shape::Unary,
            LikeRegex => Shape::LikeRegex,
            IndexArray => Shape::IndexArray,
            Any => Shape::Any,
            Sequence => Shape::Sequence,
            Object => Shape::Object,
        }
    }

    /// Unary items whose argument slot may not be zero.
    pub fn requires_arg(self) -> bool {
        matches!(
            self,
            Self::Not | Self::IsUnknown | Self::Exists | Self::Plus | Self::Minus | Self::Filter
        )
    }

    /// Constructors only accepted when extensions are enabled.
    pub fn is_extension(self) -> bool {
        matches!(self, Self::Sequence | Self::Array | Self::Object)
    }

    /// Lowercase identifier used in dumps.
    pub fn name(self) -> &'static str {
        use ItemType::*;
        match self {
            Null => "null",
            String => "string",
            Numeric => "numeric",
            Bool => "bool",
            And => "and",
            Or => "or",
            Not => "not",
            IsUnknown => "is_unknown",
            Equal => "equal",
            NotEqual => "not_equal",
            Less => "less",
            Greater => "greater",
            LessOrEqual => "less_or_equal",
            GreaterOrEqual => "greater_or_equal",
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Mod => "mod",
            Plus => "plus",
            Minus => "minus",
            AnyArray => "any_array",
            AnyKey => "any_key",
            IndexArray => "index_array",
            Any => "any",
            Key => "key",
            Current => "current",
            Root => "root",
            Variable => "variable",
            Filter => "filter",
            Exists => "exists",
            Type => "type",
            Size => "size",
            Abs => "abs",
            Floor => "floor",
            Ceiling => "ceiling",
            Double => "double",
            Datetime => "datetime",
            KeyValue => "keyvalue",
            Last => "last",
            StartsWith => "starts_with",
            LikeRegex => "like_regex",
            Sequence => "sequence",
            Array => "array",
            Object => "object",
        }
    }

    /// Surface spelling of operators and methods, as they appear in path
    /// text. `None` for items that are not operations.
    pub fn operation_name(self) -> Option<&'static str> {
        use ItemType::*;
        let name = match self {
            And => "&&",
            Or => "||",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessOrEqual => "<=",
            GreaterOrEqual => ">=",
            Plus | Add => "+",
            Minus | Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            StartsWith => "starts with",
            LikeRegex => "like_regex",
            Type => "type",
            Size => "size",
            KeyValue => "keyvalue",
            Double => "double",
            Abs => "abs",
            Floor => "floor",
            Ceiling => "ceiling",
            Datetime => "datetime",
            _ => return None,
        };
        Some(name)
    }
}

impl From<BinaryOp> for ItemType {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::And => Self::And,
            BinaryOp::Or => Self::Or,
            BinaryOp::Equal => Self::Equal,
            BinaryOp::NotEqual => Self::NotEqual,
            BinaryOp::Less => Self::Less,
            BinaryOp::Greater => Self::Greater,
            BinaryOp::LessOrEqual => Self::LessOrEqual,
            BinaryOp::GreaterOrEqual => Self::GreaterOrEqual,
            BinaryOp::Add => Self::Add,
            BinaryOp::Sub => Self::Sub,
            BinaryOp::Mul => Self::Mul,
            BinaryOp::Div => Self::Div,
            BinaryOp::Mod => Self::Mod,
            BinaryOp::StartsWith => Self::StartsWith,
        }
    }
}

impl From<UnaryOp> for ItemType {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Not => Self::Not,
            UnaryOp::IsUnknown => Self::IsUnknown,
            UnaryOp::Exists => Self::Exists,
            UnaryOp::Plus => Self::Plus,
            UnaryOp::Minus => Self::Minus,
            UnaryOp::Filter => Self::Filter,
        }
    }
}

impl From<Method> for ItemType {
    fn from(method: Method) -> Self {
        match method {
            Method::Type => Self::Type,
            Method::Size => Self::Size,
            Method::Abs => Self::Abs,
            Method::Floor => Self::Floor,
            Method::Ceiling => Self::Ceiling,
            Method::Double => Self::Double,
            Method::KeyValue => Self::KeyValue,
        }
    }
}

impl From<&ExprKind> for ItemType {
    fn from(kind: &ExprKind) -> Self {
        match kind {
            ExprKind::Null => Self::Null,
            ExprKind::String(_) => Self::String,
            ExprKind::Numeric(_) => Self::Numeric,
            ExprKind::Bool(_) => Self::Bool,
            ExprKind::Variable(_) => Self::Variable,
            ExprKind::Key(_) => Self::Key,
            ExprKind::Root => Self::Root,
            ExprKind::Current => Self::Current,
            ExprKind::Last => Self::Last,
            ExprKind::AnyArray => Self::AnyArray,
            ExprKind::AnyKey => Self::AnyKey,
            ExprKind::Any(_) => Self::Any,
            ExprKind::IndexArray(_) => Self::IndexArray,
            ExprKind::Binary { op, .. } => (*op).into(),
            ExprKind::Unary { op, .. } => (*op).into(),
            ExprKind::LikeRegex { .. } => Self::LikeRegex,
            ExprKind::Method(method) => (*method).into(),
            ExprKind::Datetime(_) => Self::Datetime,
            ExprKind::Sequence(_) => Self::Sequence,
            ExprKind::Array(_) => Self::Array,
            ExprKind::Object(_) => Self::Object,
        }
    }
}
