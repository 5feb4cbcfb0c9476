// used for dates and timestamps carried in fields
use chrono::{NaiveDate, NaiveDateTime};

// used to print out readable forms of a value
use std::fmt;

/// A single field or property value.
///
/// Absence is *not* a value: record slots are `Option<Value>` and `None`
/// marks a field that was never set. `Value::Null` is an explicit null and
/// is encoded like any other value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// A value labelled by a tag, typically produced by a wrapping transform.
    Tagged(String, Box<Value>),
}

impl Value {
    pub fn tagged(tag: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Tagged(tag.into(), Box::new(value.into()))
    }
    pub fn data_type(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Date(_) => "Date",
            Value::DateTime(_) => "DateTime",
            Value::Tagged(..) => "Tagged",
        }
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
    /// Returns `(tag, inner)` for tagged values.
    pub fn as_tagged(&self) -> Option<(&str, &Value)> {
        match self {
            Value::Tagged(tag, inner) => Some((tag, inner)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Date(d) => write!(f, "'{}'", d),
            Value::DateTime(d) => write!(f, "'{}'", d),
            Value::Tagged(tag, inner) => write!(f, "({}, {})", tag, inner),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Integer(i) }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::Integer(i64::from(i)) }
}
impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Float(x) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}
impl<'a> From<&'a str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_owned()) }
}
impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self { Value::Date(d) }
}
impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self { Value::DateTime(d) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(Value::from("Netherlands").to_string(), "\"Netherlands\"");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::tagged("s", "EUR").to_string(), "(s, \"EUR\")");
        let d = NaiveDate::from_ymd_opt(2004, 6, 19).unwrap();
        assert_eq!(Value::from(d).to_string(), "'2004-06-19'");
    }

    #[test]
    fn accessors_only_match_their_variant() {
        let v = Value::from("NL");
        assert_eq!(v.as_str(), Some("NL"));
        assert_eq!(v.as_i64(), None);
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        let t = Value::tagged("s", 1);
        assert_eq!(t.as_tagged(), Some(("s", &Value::Integer(1))));
        assert_eq!(t.data_type(), "Tagged");
        assert!(Value::Null.is_null());
    }
}
