//! Typed AST for query documents.
//!
//! The AST discriminates literal values from predicate objects once, at parse
//! time. A `FieldValue` is either `Literal` (compiled as an implicit equality
//! on the whole value) or `Predicates` (one term per operator token). Clause
//! and predicate order follow document key order, which value-slot allocation
//! depends on.

use serde_json::Value;

use crate::operator::{Combinator, Comparator};

/// A parsed query document: an ordered list of clauses.
#[derive(Debug, Clone)]
pub struct QueryDocument {
    /// The document's clauses in key order.
    pub clauses: Vec<Clause>,
}

/// One top-level entry of a query document.
#[derive(Debug, Clone)]
pub enum Clause {
    /// A field key bound to a literal or a predicate object.
    Field {
        /// The attribute name.
        name: String,
        /// The parsed field value.
        value: FieldValue,
    },
    /// A `$and`/`$or` key bound to an array of sub-documents.
    Group {
        /// Which combinator joins the branches.
        combinator: Combinator,
        /// The sub-documents, in array order.
        branches: Vec<QueryDocument>,
    },
}

/// The value bound to a field key.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Any value that is not a predicate object, bound whole as one equality.
    Literal(Value),
    /// An operator-keyed predicate object, one term per operator.
    Predicates(Vec<Predicate>),
}

/// A single comparator term on one field.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// An infix comparison against one operand value.
    Compare {
        /// The comparison operator.
        op: Comparator,
        /// The literal operand.
        operand: Value,
    },
    /// Membership in a list of values (`$in`).
    In(Vec<Value>),
    /// Negated membership in a list of values (`$nin`).
    NotIn(Vec<Value>),
    /// Attribute presence test (`$exists`), operand reduced to a bool.
    Exists(bool),
    /// Negation of an inner predicate object (`$not`).
    Not(Vec<Predicate>),
}
