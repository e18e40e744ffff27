//! Parser from raw JSON query documents to the typed AST.
//!
//! All structural validation lives here: combinator operands must be
//! non-empty arrays, `$in`/`$nin` operands must be non-empty arrays, `$not`
//! operands must be predicate objects, and every operator token must be
//! recognized. A document that parses compiles without further errors.
//!
//! Key iteration follows document order (`serde_json` is built with
//! `preserve_order`), which downstream value-slot allocation relies on.

use serde_json::{Map, Value};

use crate::document::{Clause, FieldValue, Predicate, QueryDocument};
use crate::error::FilterError;
use crate::operator::{Combinator, Operator};

/// Parse a query document from a JSON value.
///
/// # Errors
///
/// Returns `FilterError` if the value is not an object, is empty, or violates
/// any of the structural rules above.
pub fn parse_document(value: &Value) -> Result<QueryDocument, FilterError> {
    let Value::Object(map) = value else {
        return Err(FilterError::DocumentNotObject {
            found: type_name(value).to_owned(),
        });
    };
    if map.is_empty() {
        return Err(FilterError::EmptyDocument);
    }

    let mut clauses = Vec::with_capacity(map.len());
    for (key, operand) in map {
        if let Some(combinator) = Combinator::from_token(key) {
            clauses.push(parse_group(combinator, operand)?);
        } else {
            clauses.push(Clause::Field {
                name: key.clone(),
                value: parse_field_value(key, operand)?,
            });
        }
    }
    Ok(QueryDocument { clauses })
}

fn parse_group(combinator: Combinator, operand: &Value) -> Result<Clause, FilterError> {
    let Value::Array(items) = operand else {
        return Err(FilterError::CombinatorNotArray {
            combinator,
            found: type_name(operand).to_owned(),
        });
    };
    if items.is_empty() {
        return Err(FilterError::EmptyCombinator { combinator });
    }
    let branches = items
        .iter()
        .map(parse_document)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Clause::Group {
        combinator,
        branches,
    })
}

/// Decide once whether a field value is a predicate object or a literal.
fn parse_field_value(field: &str, value: &Value) -> Result<FieldValue, FilterError> {
    match value {
        Value::Object(map) if is_operator_map(map) => {
            Ok(FieldValue::Predicates(parse_predicates(field, map)?))
        }
        other => Ok(FieldValue::Literal(other.clone())),
    }
}

/// An object is a predicate object when it is non-empty and every key carries
/// the `$` operator sigil. Objects with plain keys (or no keys at all) are
/// literal data; unrecognized `$` tokens inside an operator map are reported
/// as unknown operators rather than silently bound as data.
fn is_operator_map(map: &Map<String, Value>) -> bool {
    !map.is_empty() && map.keys().all(|k| k.starts_with('$'))
}

fn parse_predicates(
    field: &str,
    map: &Map<String, Value>,
) -> Result<Vec<Predicate>, FilterError> {
    map.iter()
        .map(|(token, operand)| parse_predicate(field, token, operand))
        .collect()
}

fn parse_predicate(field: &str, token: &str, operand: &Value) -> Result<Predicate, FilterError> {
    let Some(op) = Operator::from_token(token) else {
        return Err(FilterError::UnknownOperator {
            token: token.to_owned(),
            field: field.to_owned(),
        });
    };

    match op {
        Operator::Compare(cmp) => Ok(Predicate::Compare {
            op: cmp,
            operand: operand.clone(),
        }),
        Operator::In => Ok(Predicate::In(parse_value_list(field, "$in", operand)?)),
        Operator::Nin => Ok(Predicate::NotIn(parse_value_list(field, "$nin", operand)?)),
        Operator::Exists => Ok(Predicate::Exists(is_truthy(operand))),
        Operator::Not => {
            let Value::Object(inner) = operand else {
                return Err(FilterError::NotOperandInvalid {
                    field: field.to_owned(),
                });
            };
            if !is_operator_map(inner) {
                return Err(FilterError::NotOperandInvalid {
                    field: field.to_owned(),
                });
            }
            Ok(Predicate::Not(parse_predicates(field, inner)?))
        }
    }
}

fn parse_value_list(
    field: &str,
    operator: &str,
    operand: &Value,
) -> Result<Vec<Value>, FilterError> {
    let Value::Array(items) = operand else {
        return Err(FilterError::OperandNotArray {
            operator: operator.to_owned(),
            field: field.to_owned(),
            found: type_name(operand).to_owned(),
        });
    };
    if items.is_empty() {
        return Err(FilterError::EmptyOperandList {
            operator: operator.to_owned(),
            field: field.to_owned(),
        });
    }
    Ok(items.clone())
}

/// JavaScript-style truthiness, matching how `$exists: 0` reads as "must not
/// exist" in the source query dialect.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
