//! Predicate evaluation over documents
//!
//! Evaluation is the runtime half of the validation split: predicate
//! construction already rejected operator/type mismatches, so the only
//! error left here is a field the index's schema does not declare
//! (a descriptor built against a different schema).
//!
//! ## Match rules
//!
//! - A document that lacks the field satisfies no predicate, negated
//!   forms (`not-equals`, `not-in`) included.
//! - A stored `Value::Null` behaves like an absent field.
//! - A stored value whose variant does not fit the predicate (possible
//!   only for documents written outside the schema) fails the match.

use docdex_core::{
    Document, Error, Operator, Predicate, QueryDescriptor, Result, Schema, Value, ID_FIELD,
};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Check a single predicate against a document
///
/// # Errors
///
/// Returns [`Error::UnknownField`] if the index schema does not declare
/// the predicate's field.
pub(crate) fn document_matches(
    schema: &Schema,
    doc: &Document,
    predicate: &Predicate,
) -> Result<bool> {
    if !schema.contains(predicate.field()) {
        return Err(Error::UnknownField {
            field: predicate.field().to_string(),
        });
    }

    let value = match field_value(doc, predicate.field()) {
        Some(v) => v,
        None => return Ok(false),
    };
    let value = value.as_ref();

    let matched = match predicate.operator() {
        Operator::Equals => predicate.argument().scalar() == Some(value),
        Operator::NotEquals => {
            predicate.argument().scalar().is_some() && predicate.argument().scalar() != Some(value)
        }
        Operator::LessThan | Operator::Before => ordered(value, predicate, Ordering::Less),
        Operator::GreaterThan | Operator::After => ordered(value, predicate, Ordering::Greater),
        Operator::Like => string_match(value, predicate, |haystack, needle| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }),
        Operator::StartingWith => string_match(value, predicate, |h, n| h.starts_with(n)),
        Operator::EndingWith => string_match(value, predicate, |h, n| h.ends_with(n)),
        Operator::Contains => string_match(value, predicate, |h, n| h.contains(n)),
        Operator::In => predicate
            .argument()
            .set()
            .is_some_and(|set| set.contains(value)),
        Operator::NotIn => predicate
            .argument()
            .set()
            .is_some_and(|set| !set.contains(value)),
        Operator::IsTrue => value == &Value::Bool(true),
        Operator::IsFalse => value == &Value::Bool(false),
    };
    Ok(matched)
}

/// Check every predicate of a descriptor (AND-combined)
///
/// # Errors
///
/// Returns [`Error::UnknownField`] for the first unresolvable field.
pub(crate) fn document_matches_all(
    schema: &Schema,
    doc: &Document,
    query: &QueryDescriptor,
) -> Result<bool> {
    for predicate in query.predicates() {
        if !document_matches(schema, doc, predicate)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Validate every field a descriptor references against the schema
///
/// Run before evaluation so an unknown field fails the whole query even
/// when the collection is empty or an earlier predicate already filtered
/// everything out.
///
/// # Errors
///
/// Returns [`Error::UnknownField`] for the first unresolvable field,
/// sort field included.
pub(crate) fn validate_descriptor(schema: &Schema, query: &QueryDescriptor) -> Result<()> {
    for predicate in query.predicates() {
        if !schema.contains(predicate.field()) {
            return Err(Error::UnknownField {
                field: predicate.field().to_string(),
            });
        }
    }
    if let Some(sort) = query.sort() {
        if !schema.contains(&sort.field) {
            return Err(Error::UnknownField {
                field: sort.field.clone(),
            });
        }
    }
    Ok(())
}

/// Stable comparison of two documents by a sort field
///
/// Documents lacking the field (or holding `Null`) order last; pairs the
/// value model does not order (cross-variant) compare equal, so the
/// underlying stable sort keeps their id order.
pub(crate) fn compare_by_field(field: &str, a: &Document, b: &Document) -> Ordering {
    let ka = field_value(a, field);
    let kb = field_value(b, field);
    match (ka, kb) {
        (Some(x), Some(y)) => x
            .as_ref()
            .partial_cmp_same_type(y.as_ref())
            .unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Resolve a field's value for matching and sorting
///
/// Absent fields and stored `Null`s resolve to `None`. The `id`
/// pseudo-field resolves to the document id as text when the document
/// does not carry an explicit `id` field.
fn field_value<'a>(doc: &'a Document, field: &str) -> Option<Cow<'a, Value>> {
    match doc.get(field) {
        Some(v) if !v.is_null() => Some(Cow::Borrowed(v)),
        Some(_) => None,
        None if field == ID_FIELD => Some(Cow::Owned(Value::Str(doc.id.as_str().to_string()))),
        None => None,
    }
}

fn ordered(value: &Value, predicate: &Predicate, expected: Ordering) -> bool {
    predicate
        .argument()
        .scalar()
        .and_then(|arg| value.partial_cmp_same_type(arg))
        == Some(expected)
}

fn string_match(
    value: &Value,
    predicate: &Predicate,
    test: impl Fn(&str, &str) -> bool,
) -> bool {
    match (value.as_str(), predicate.argument().scalar().and_then(Value::as_str)) {
        (Some(haystack), Some(needle)) => test(haystack, needle),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdex_core::FieldType;

    fn schema() -> Schema {
        Schema::new()
            .field("type", FieldType::Text)
            .field("message", FieldType::Text)
            .field("rate", FieldType::Integer)
            .field("available", FieldType::Boolean)
    }

    fn doc() -> Document {
        Document::new("1")
            .field("type", "test")
            .field("message", "Foo")
            .field("rate", 10i64)
            .field("available", true)
    }

    #[test]
    fn test_equals_and_not_equals() {
        let s = schema();
        let d = doc();
        let eq = Predicate::equals(&s, "type", "test").unwrap();
        let ne = Predicate::not_equals(&s, "type", "test").unwrap();
        assert!(document_matches(&s, &d, &eq).unwrap());
        assert!(!document_matches(&s, &d, &ne).unwrap());

        let ne_other = Predicate::not_equals(&s, "type", "other").unwrap();
        assert!(document_matches(&s, &d, &ne_other).unwrap());
    }

    #[test]
    fn test_range_operators() {
        let s = schema();
        let d = doc();
        assert!(!document_matches(&s, &d, &Predicate::less_than(&s, "rate", 10).unwrap()).unwrap());
        assert!(document_matches(&s, &d, &Predicate::less_than(&s, "rate", 20).unwrap()).unwrap());
        assert!(document_matches(&s, &d, &Predicate::before(&s, "rate", 20).unwrap()).unwrap());
        assert!(document_matches(&s, &d, &Predicate::greater_than(&s, "rate", 5).unwrap()).unwrap());
        assert!(!document_matches(&s, &d, &Predicate::after(&s, "rate", 10).unwrap()).unwrap());
    }

    #[test]
    fn test_like_is_case_insensitive() {
        let s = schema();
        let d = doc(); // message = "Foo"
        assert!(document_matches(&s, &d, &Predicate::like(&s, "message", "fo").unwrap()).unwrap());
        assert!(document_matches(&s, &d, &Predicate::like(&s, "message", "FO").unwrap()).unwrap());
    }

    #[test]
    fn test_prefix_suffix_contains_are_case_sensitive() {
        let s = schema();
        let d = doc(); // message = "Foo"
        assert!(document_matches(&s, &d, &Predicate::starting_with(&s, "message", "Fo").unwrap())
            .unwrap());
        assert!(!document_matches(&s, &d, &Predicate::starting_with(&s, "message", "fo").unwrap())
            .unwrap());
        assert!(document_matches(&s, &d, &Predicate::ending_with(&s, "message", "oo").unwrap())
            .unwrap());
        assert!(document_matches(&s, &d, &Predicate::containing(&s, "message", "oo").unwrap())
            .unwrap());
        assert!(!document_matches(&s, &d, &Predicate::containing(&s, "message", "OO").unwrap())
            .unwrap());
    }

    #[test]
    fn test_set_membership() {
        let s = schema();
        let d = doc();
        let in_set =
            Predicate::in_set(&s, "type", vec![Value::from("test"), Value::from("x")]).unwrap();
        let not_in =
            Predicate::not_in(&s, "type", vec![Value::from("test"), Value::from("x")]).unwrap();
        assert!(document_matches(&s, &d, &in_set).unwrap());
        assert!(!document_matches(&s, &d, &not_in).unwrap());

        let empty_in = Predicate::in_set(&s, "type", vec![]).unwrap();
        let empty_not_in = Predicate::not_in(&s, "type", vec![]).unwrap();
        assert!(!document_matches(&s, &d, &empty_in).unwrap());
        assert!(document_matches(&s, &d, &empty_not_in).unwrap());
    }

    #[test]
    fn test_boolean_literals() {
        let s = schema();
        let d = doc();
        assert!(document_matches(&s, &d, &Predicate::is_true(&s, "available").unwrap()).unwrap());
        assert!(!document_matches(&s, &d, &Predicate::is_false(&s, "available").unwrap()).unwrap());
    }

    #[test]
    fn test_missing_field_satisfies_nothing() {
        let s = schema();
        let bare = Document::new("2"); // no fields at all
        assert!(!document_matches(&s, &bare, &Predicate::equals(&s, "type", "test").unwrap())
            .unwrap());
        assert!(!document_matches(&s, &bare, &Predicate::not_equals(&s, "type", "test").unwrap())
            .unwrap());
        assert!(
            !document_matches(&s, &bare, &Predicate::not_in(&s, "type", vec![]).unwrap()).unwrap()
        );
        assert!(!document_matches(&s, &bare, &Predicate::is_false(&s, "available").unwrap())
            .unwrap());
    }

    #[test]
    fn test_null_behaves_like_missing() {
        let s = schema();
        let d = Document::new("3").field("message", Value::Null);
        assert!(!document_matches(&s, &d, &Predicate::not_equals(&s, "message", "x").unwrap())
            .unwrap());
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        // Descriptor built against a wider schema than the index's.
        let wide = schema().field("color", FieldType::Text);
        let narrow = schema();
        let p = Predicate::equals(&wide, "color", "red").unwrap();
        assert!(matches!(
            document_matches(&narrow, &doc(), &p),
            Err(Error::UnknownField { .. })
        ));

        let q = QueryDescriptor::new().sort_by("color");
        assert!(matches!(
            validate_descriptor(&narrow, &q),
            Err(Error::UnknownField { .. })
        ));
    }

    #[test]
    fn test_and_combination() {
        let s = schema();
        let d = doc();
        let both = QueryDescriptor::new()
            .filter(Predicate::equals(&s, "type", "test").unwrap())
            .filter(Predicate::less_than(&s, "rate", 20).unwrap());
        let one_fails = QueryDescriptor::new()
            .filter(Predicate::equals(&s, "type", "test").unwrap())
            .filter(Predicate::less_than(&s, "rate", 10).unwrap());
        assert!(document_matches_all(&s, &d, &both).unwrap());
        assert!(!document_matches_all(&s, &d, &one_fails).unwrap());
        assert!(document_matches_all(&s, &d, &QueryDescriptor::match_all()).unwrap());
    }

    #[test]
    fn test_id_pseudo_field_matches_document_id() {
        let s = schema();
        let d = doc(); // id = "1"
        let eq = Predicate::equals(&s, "id", "1").unwrap();
        let in_set = Predicate::in_set(&s, "id", vec![Value::from("1"), Value::from("2")]).unwrap();
        let not_in = Predicate::not_in(&s, "id", vec![Value::from("2")]).unwrap();
        assert!(document_matches(&s, &d, &eq).unwrap());
        assert!(document_matches(&s, &d, &in_set).unwrap());
        assert!(document_matches(&s, &d, &not_in).unwrap());
        assert!(!document_matches(&s, &d, &Predicate::equals(&s, "id", "2").unwrap()).unwrap());
    }

    #[test]
    fn test_compare_by_field_missing_last() {
        let a = Document::new("a").field("rate", 5i64);
        let b = Document::new("b").field("rate", 3i64);
        let c = Document::new("c"); // no rate
        assert_eq!(compare_by_field("rate", &b, &a), Ordering::Less);
        assert_eq!(compare_by_field("rate", &a, &c), Ordering::Less);
        assert_eq!(compare_by_field("rate", &c, &a), Ordering::Greater);
        assert_eq!(compare_by_field("rate", &c, &c), Ordering::Equal);
    }
}
