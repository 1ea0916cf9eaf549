// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};

/// A link attribute value.
///
/// Attributes such as "type", "title" or "hreflang" carry either a scalar
/// (boolean, integer, float or text) or a list of strings. Nothing else is
/// representable; a nested mapping or a mixed list has no `Value` shape.
///
/// ## Examples
///
/// ```
/// use hallink::attribute::Value;
///
/// let value: Value = "application/hal+json".into();
///
/// assert_eq!(value.text(), Some("application/hal+json"));
/// assert!(value.is_scalar());
/// ```
///
/// ```
/// use hallink::attribute::Value;
///
/// let value: Value = vec!["en", "ca"].into();
///
/// assert!(value.is_list());
/// assert_eq!(value.to_string(), "en ca");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl Value {
    /// Returns the text when the value is textual.
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(&value),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        match self {
            Value::List(_) => true,
            _ => false,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_list()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(list: Vec<String>) -> Value {
        Value::List(list)
    }
}

impl From<Vec<&str>> for Value {
    fn from(list: Vec<&str>) -> Value {
        Value::List(list.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(list: &[&str]) -> Value {
        Value::List(list.iter().map(|s| s.to_string()).collect())
    }
}

/// Renders the plain text form. List elements are joined with a single
/// space, as RFC 8288 does for multi-valued "rel".
impl Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(formatter, "{}", b),
            Value::Integer(n) => write!(formatter, "{}", n),
            Value::Float(n) => write!(formatter, "{}", n),
            Value::Text(s) => write!(formatter, "{}", s),
            Value::List(list) => write!(formatter, "{}", list.join(" ")),
        }
    }
}
