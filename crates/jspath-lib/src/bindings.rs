//! Types of the variables a path refers to as `$name`.
//!
//! The classifier only cares whether a variable holds a date/time value and
//! whether that value carries a time zone.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// SQL type class of a bound variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Date,
    Time,
    TimeTz,
    Timestamp,
    TimestampTz,
    /// Any type that is not a date/time type.
    Other,
}

impl VarType {
    /// Classify a SQL type name. Unrecognized names are [`VarType::Other`].
    pub fn from_sql_name(name: &str) -> Self {
        let words: Vec<&str> = name.split_whitespace().collect();
        match words.join(" ").to_ascii_lowercase().as_str() {
            "date" => Self::Date,
            "time" | "time without time zone" => Self::Time,
            "timetz" | "time with time zone" => Self::TimeTz,
            "timestamp" | "timestamp without time zone" => Self::Timestamp,
            "timestamptz" | "timestamp with time zone" => Self::TimestampTz,
            _ => Self::Other,
        }
    }

    pub fn is_datetime(self) -> bool {
        self != Self::Other
    }

    pub fn is_zoned(self) -> bool {
        matches!(self, Self::TimeTz | Self::TimestampTz)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::TimeTz => "timetz",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamptz",
            Self::Other => "other",
        }
    }
}

impl FromStr for VarType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_sql_name(s))
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variable name to type, in declaration order.
///
/// When a name is declared more than once the first declaration wins, the
/// way a lookup scanning the declaration list would resolve it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    vars: IndexMap<String, VarType>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn bind(mut self, name: impl Into<String>, ty: VarType) -> Self {
        self.insert(name, ty);
        self
    }

    /// Declare `name`. Returns `false` if it was already declared; the
    /// earlier type is kept.
    pub fn insert(&mut self, name: impl Into<String>, ty: VarType) -> bool {
        match self.vars.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(ty);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<VarType> {
        self.vars.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VarType)> {
        self.vars.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}

impl<S: Into<String>> FromIterator<(S, VarType)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, VarType)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (name, ty) in iter {
            bindings.insert(name, ty);
        }
        bindings
    }
}
