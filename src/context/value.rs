//! Values that can sit in a context slot
use core::fmt;
use std::collections::HashMap;

use arbitrary::Arbitrary;

/// The closed set of shapes a slot can hold.
///
/// The original trick this replaces assigned to *any* global by string name;
/// with closed record shapes we instead enumerate the value kinds up front.
/// `Table` covers both keyed collections and attribute-bearing objects, since
/// without reflection those are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Arbitrary)]
pub enum Value {
    #[default]
    Unit,
    Number(i64),
    Bool(bool),
    Text(String),
    Table(HashMap<Box<str>, Value>),
}

impl Value {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&HashMap<Box<str>, Value>> {
        match self {
            Self::Table(entries) => Some(entries),
            _ => None,
        }
    }

    /// Truthiness for condition coercion: unit is false, everything else is
    /// true unless empty or zero.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Unit => false,
            Self::Number(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
            Self::Table(entries) => !entries.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Table(entries) => {
                write!(f, "(")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "({key} . {value})")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use assert2::check;

    #[test]
    fn truthiness_mirrors_emptiness() {
        check!(!Value::Unit.truthy());
        check!(!Value::Number(0).truthy());
        check!(Value::Number(-3).truthy());
        check!(!Value::Text(String::new()).truthy());
        check!(Value::from("x").truthy());
        check!(!Value::Table(Default::default()).truthy());
    }

    #[test]
    fn display_is_scheme_flavored() {
        check!(Value::Unit.to_string() == "()");
        check!(Value::from(true).to_string() == "#t");
        check!(Value::from(-7).to_string() == "-7");
        check!(Value::from("hello").to_string() == "hello");
    }
}
