//! Predicates: single field-operator-argument conditions
//!
//! This module defines:
//! - Operator: The predicate operator vocabulary
//! - Argument: Operator argument with enforced arity (none / one / set)
//! - Predicate: A validated field condition
//!
//! ## Validation
//!
//! Predicates are built against a [`Schema`]. Operator/field-type
//! mismatches (`like` on an integer field, `is-true` on a text field,
//! a range comparison on a boolean) are construction-time
//! [`Error::UnsupportedPredicate`] failures, never runtime surprises.
//! Arity is enforced by the constructor signatures themselves: set
//! operators take a `Vec<Value>`, boolean literals take no argument.

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::value::{FieldType, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Operator
// ============================================================================

/// Predicate operator vocabulary
///
/// `Before` and `After` are ordered-scalar aliases of `LessThan` and
/// `GreaterThan`; they evaluate identically and exist so a caller's
/// temporal intent survives into logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Field value strictly equals the argument
    Equals,
    /// Field value differs from the argument
    NotEquals,
    /// Numeric field < argument
    LessThan,
    /// Ordered-scalar alias of `LessThan`
    Before,
    /// Numeric field > argument
    GreaterThan,
    /// Ordered-scalar alias of `GreaterThan`
    After,
    /// Case-insensitive substring match
    Like,
    /// Field value has the given prefix
    StartingWith,
    /// Field value has the given suffix
    EndingWith,
    /// Field value contains the given substring
    Contains,
    /// Field value is a member of the argument set
    In,
    /// Field value is absent from the argument set
    NotIn,
    /// Boolean field is literally true
    IsTrue,
    /// Boolean field is literally false
    IsFalse,
}

impl Operator {
    /// Whether this operator compares against string contents
    pub fn is_string_operator(&self) -> bool {
        matches!(
            self,
            Operator::Like | Operator::StartingWith | Operator::EndingWith | Operator::Contains
        )
    }

    /// Whether this operator is an ordered comparison
    pub fn is_range_operator(&self) -> bool {
        matches!(
            self,
            Operator::LessThan | Operator::Before | Operator::GreaterThan | Operator::After
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not-equals",
            Operator::LessThan => "less-than",
            Operator::Before => "before",
            Operator::GreaterThan => "greater-than",
            Operator::After => "after",
            Operator::Like => "like",
            Operator::StartingWith => "starting-with",
            Operator::EndingWith => "ending-with",
            Operator::Contains => "contains",
            Operator::In => "in",
            Operator::NotIn => "not-in",
            Operator::IsTrue => "is-true",
            Operator::IsFalse => "is-false",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Argument
// ============================================================================

/// Operator argument with explicit arity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argument {
    /// No argument (`is-true` / `is-false`)
    None,
    /// A single scalar argument
    Scalar(Value),
    /// A set of scalar arguments (`in` / `not-in`)
    Set(Vec<Value>),
}

impl Argument {
    /// The scalar argument, if this is `Scalar`
    pub fn scalar(&self) -> Option<&Value> {
        match self {
            Argument::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// The argument set, if this is `Set`
    pub fn set(&self) -> Option<&[Value]> {
        match self {
            Argument::Set(vs) => Some(vs),
            _ => None,
        }
    }
}

// ============================================================================
// Predicate
// ============================================================================

/// A single validated field condition
///
/// Immutable once built. Construction validates the operator against the
/// schema's declared field type; evaluation is the index's concern.
///
/// # Examples
///
/// ```
/// use docdex_core::{FieldType, Predicate, Schema};
///
/// let schema = Schema::new()
///     .field("message", FieldType::Text)
///     .field("rate", FieldType::Integer);
///
/// let p = Predicate::like(&schema, "message", "fo").unwrap();
/// assert_eq!(p.field(), "message");
///
/// // `like` needs a text field: rejected at construction.
/// assert!(Predicate::like(&schema, "rate", "fo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    field: String,
    operator: Operator,
    argument: Argument,
}

impl Predicate {
    /// Field value strictly equals `value`
    pub fn equals(schema: &Schema, field: &str, value: impl Into<Value>) -> Result<Self> {
        Self::scalar(schema, field, Operator::Equals, value.into())
    }

    /// Field value differs from `value`
    ///
    /// A document that lacks the field does not satisfy this predicate;
    /// negation applies to the value, not to field presence.
    pub fn not_equals(schema: &Schema, field: &str, value: impl Into<Value>) -> Result<Self> {
        Self::scalar(schema, field, Operator::NotEquals, value.into())
    }

    /// Numeric field < `value`
    pub fn less_than(schema: &Schema, field: &str, value: i64) -> Result<Self> {
        Self::range(schema, field, Operator::LessThan, value)
    }

    /// Ordered-scalar alias of [`Predicate::less_than`]
    pub fn before(schema: &Schema, field: &str, value: i64) -> Result<Self> {
        Self::range(schema, field, Operator::Before, value)
    }

    /// Numeric field > `value`
    pub fn greater_than(schema: &Schema, field: &str, value: i64) -> Result<Self> {
        Self::range(schema, field, Operator::GreaterThan, value)
    }

    /// Ordered-scalar alias of [`Predicate::greater_than`]
    pub fn after(schema: &Schema, field: &str, value: i64) -> Result<Self> {
        Self::range(schema, field, Operator::After, value)
    }

    /// Case-insensitive substring match, no wildcard syntax
    pub fn like(schema: &Schema, field: &str, pattern: &str) -> Result<Self> {
        Self::string(schema, field, Operator::Like, pattern)
    }

    /// Field value has the given prefix
    pub fn starting_with(schema: &Schema, field: &str, prefix: &str) -> Result<Self> {
        Self::string(schema, field, Operator::StartingWith, prefix)
    }

    /// Field value has the given suffix
    pub fn ending_with(schema: &Schema, field: &str, suffix: &str) -> Result<Self> {
        Self::string(schema, field, Operator::EndingWith, suffix)
    }

    /// Field value contains the given substring (case-sensitive)
    pub fn containing(schema: &Schema, field: &str, substring: &str) -> Result<Self> {
        Self::string(schema, field, Operator::Contains, substring)
    }

    /// Field value is a member of `values`
    ///
    /// An empty set matches no document.
    pub fn in_set(schema: &Schema, field: &str, values: Vec<Value>) -> Result<Self> {
        Self::set(schema, field, Operator::In, values)
    }

    /// Field value is absent from `values`
    ///
    /// An empty set matches every document that carries the field.
    pub fn not_in(schema: &Schema, field: &str, values: Vec<Value>) -> Result<Self> {
        Self::set(schema, field, Operator::NotIn, values)
    }

    /// Boolean field is literally true
    pub fn is_true(schema: &Schema, field: &str) -> Result<Self> {
        Self::boolean_literal(schema, field, Operator::IsTrue)
    }

    /// Boolean field is literally false
    pub fn is_false(schema: &Schema, field: &str) -> Result<Self> {
        Self::boolean_literal(schema, field, Operator::IsFalse)
    }

    /// Field the predicate targets
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The predicate's operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The predicate's argument
    pub fn argument(&self) -> &Argument {
        &self.argument
    }

    // ========== construction helpers ==========

    fn resolve(schema: &Schema, field: &str) -> Result<FieldType> {
        schema.field_type(field).ok_or_else(|| Error::UnknownField {
            field: field.to_string(),
        })
    }

    fn unsupported(field: &str, operator: Operator, reason: impl Into<String>) -> Error {
        Error::UnsupportedPredicate {
            field: field.to_string(),
            operator,
            reason: reason.into(),
        }
    }

    fn scalar(schema: &Schema, field: &str, operator: Operator, value: Value) -> Result<Self> {
        let declared = Self::resolve(schema, field)?;
        match value.field_type() {
            Some(t) if t == declared => Ok(Self {
                field: field.to_string(),
                operator,
                argument: Argument::Scalar(value),
            }),
            Some(t) => Err(Self::unsupported(
                field,
                operator,
                format!("argument type {} does not match {} field", t, declared),
            )),
            None => Err(Self::unsupported(field, operator, "null argument")),
        }
    }

    fn range(schema: &Schema, field: &str, operator: Operator, value: i64) -> Result<Self> {
        let declared = Self::resolve(schema, field)?;
        if declared != FieldType::Integer {
            return Err(Self::unsupported(
                field,
                operator,
                format!("ordered comparison requires an integer field, got {}", declared),
            ));
        }
        Ok(Self {
            field: field.to_string(),
            operator,
            argument: Argument::Scalar(Value::Int(value)),
        })
    }

    fn string(schema: &Schema, field: &str, operator: Operator, pattern: &str) -> Result<Self> {
        let declared = Self::resolve(schema, field)?;
        if declared != FieldType::Text {
            return Err(Self::unsupported(
                field,
                operator,
                format!("string matching requires a text field, got {}", declared),
            ));
        }
        Ok(Self {
            field: field.to_string(),
            operator,
            argument: Argument::Scalar(Value::Str(pattern.to_string())),
        })
    }

    fn set(schema: &Schema, field: &str, operator: Operator, values: Vec<Value>) -> Result<Self> {
        let declared = Self::resolve(schema, field)?;
        for value in &values {
            match value.field_type() {
                Some(t) if t == declared => {}
                Some(t) => {
                    return Err(Self::unsupported(
                        field,
                        operator,
                        format!("set member type {} does not match {} field", t, declared),
                    ))
                }
                None => return Err(Self::unsupported(field, operator, "null set member")),
            }
        }
        Ok(Self {
            field: field.to_string(),
            operator,
            argument: Argument::Set(values),
        })
    }

    fn boolean_literal(schema: &Schema, field: &str, operator: Operator) -> Result<Self> {
        let declared = Self::resolve(schema, field)?;
        if declared != FieldType::Boolean {
            return Err(Self::unsupported(
                field,
                operator,
                format!("boolean literal requires a boolean field, got {}", declared),
            ));
        }
        Ok(Self {
            field: field.to_string(),
            operator,
            argument: Argument::None,
        })
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Argument::None => write!(f, "{} {}", self.field, self.operator),
            Argument::Scalar(v) => write!(f, "{} {} {}", self.field, self.operator, v),
            Argument::Set(vs) => write!(f, "{} {} [{} values]", self.field, self.operator, vs.len()),
        }
    }
}
