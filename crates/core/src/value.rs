//! Value types for docdex
//!
//! This module defines:
//! - Value: Unified scalar enum for all document field values
//! - FieldType: The schema-level type a field is declared with
//!
//! ## Type Rules
//!
//! - Four scalar types only: Null, Bool, Int, Str
//! - No implicit type coercions
//! - Different types are NEVER equal: `Int(1) != Str("1")`
//! - Different types are never ordered against each other; ordered
//!   comparisons are defined per-variant only

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Canonical docdex value type for document fields
///
/// Every field in a [`Document`](crate::Document) holds one of these
/// scalars. Queries compare them with strict type equality: a predicate
/// argument of a different variant than the stored value never matches.
///
/// [`Value::partial_cmp_same_type`] provides the ordering used by range
/// predicates and sorting. Cross-variant comparisons yield `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Null value (field present but unset)
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// UTF-8 string
    Str(String),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Str(_) => "Str",
        }
    }

    /// The schema field type this value satisfies, if any
    ///
    /// `Null` satisfies no field type.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(FieldType::Boolean),
            Value::Int(_) => Some(FieldType::Integer),
            Value::Str(_) => Some(FieldType::Text),
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a string value
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Get the string contents if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer contents if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the boolean contents if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Ordering between two values of the same variant
    ///
    /// Returns `None` for cross-variant pairs and for `Null` operands.
    /// `Bool` orders `false < true`, `Int` numerically, `Str`
    /// lexicographically by byte order.
    pub fn partial_cmp_same_type(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Schema-level type of a document field
///
/// Declared once per field in a [`Schema`](crate::Schema). Predicate
/// construction validates operator applicability against this type:
/// string operators require `Text`, range operators require `Integer`,
/// boolean literals require `Boolean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// UTF-8 string field
    Text,
    /// 64-bit signed integer field
    Integer,
    /// Boolean field
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Boolean => write!(f, "boolean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_names() {
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::Bool(true).type_name(), "Bool");
        assert_eq!(Value::Int(42).type_name(), "Int");
        assert_eq!(Value::Str("x".into()).type_name(), "Str");
    }

    #[test]
    fn test_cross_type_never_equal() {
        assert_ne!(Value::Int(1), Value::Str("1".into()));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Null, Value::Str("".into()));
    }

    #[test]
    fn test_field_type_mapping() {
        assert_eq!(Value::Null.field_type(), None);
        assert_eq!(Value::Bool(false).field_type(), Some(FieldType::Boolean));
        assert_eq!(Value::Int(0).field_type(), Some(FieldType::Integer));
        assert_eq!(Value::Str("".into()).field_type(), Some(FieldType::Text));
    }

    #[test]
    fn test_same_type_ordering() {
        assert_eq!(
            Value::Int(1).partial_cmp_same_type(&Value::Int(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Str("b".into()).partial_cmp_same_type(&Value::Str("a".into())),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Bool(false).partial_cmp_same_type(&Value::Bool(true)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_cross_type_ordering_undefined() {
        assert_eq!(
            Value::Int(1).partial_cmp_same_type(&Value::Str("1".into())),
            None
        );
        assert_eq!(Value::Null.partial_cmp_same_type(&Value::Null), None);
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from("hi"), Value::Str("hi".into()));
    }

    #[test]
    fn test_value_serde_roundtrip() {
        let v = Value::Str("message".into());
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
